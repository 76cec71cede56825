use actix_web::{patch, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::project::application::ports::incoming::ProjectChanges;
use crate::project::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update a project
#[utoipa::path(
    patch,
    path = "/api/admin/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    request_body = ProjectChanges,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Project updated", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No owned project with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ProjectChanges>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    info!(user_id = %admin.user_id, project_id = %id, "Update project");

    match data.content.project.update.execute(id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => ApiResponse::from_content_error(&e, "update project"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::application::ports::incoming::UpdateProjectUseCase;
    use crate::project::application::service::test_fixtures::sample_project;
    use crate::shared::{ContentError, ListInput, PatchField};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{signed_in_bearer, test_token_provider};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingUpdate {
        seen: Mutex<Option<ProjectChanges>>,
    }

    #[async_trait]
    impl UpdateProjectUseCase for RecordingUpdate {
        async fn execute(
            &self,
            _id: Uuid,
            changes: ProjectChanges,
        ) -> Result<Project, ContentError> {
            *self.seen.lock().unwrap() = Some(changes);
            Ok(sample_project(Uuid::new_v4(), &["Rust"]))
        }
    }

    #[actix_web::test]
    async fn test_patch_distinguishes_null_from_absent() {
        let update = Arc::new(RecordingUpdate::default());
        let state = TestAppStateBuilder::default()
            .project(|uc| uc.update = update.clone())
            .build();
        let bearer = signed_in_bearer(&state).await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(test_token_provider()))
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/projects/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer))
            .set_json(json!({ "demo": null, "tech": ["Rust"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let changes = update.seen.lock().unwrap().clone().unwrap();
        assert_eq!(changes.demo, PatchField::Null);
        assert!(changes.github.is_unset());
        assert_eq!(
            changes.tech,
            PatchField::Value(ListInput::List(vec!["Rust".to_string()]))
        );
    }
}

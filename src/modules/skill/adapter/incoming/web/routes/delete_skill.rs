use actix_web::{delete, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a skill
#[utoipa::path(
    delete,
    path = "/api/admin/skills/{id}",
    tag = "skills",
    params(("id" = Uuid, Path, description = "Skill id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Skill deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No owned skill with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/admin/skills/{id}")]
pub async fn delete_skill_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    info!(user_id = %admin.user_id, skill_id = %id, "Delete skill");

    match data.content.skill.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::from_content_error(&e, "delete skill"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ContentError;
    use crate::skill::application::ports::incoming::DeleteSkillUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{signed_in_bearer, test_token_provider};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockDelete(Result<(), ContentError>);

    #[async_trait]
    impl DeleteSkillUseCase for MockDelete {
        async fn execute(&self, _id: Uuid) -> Result<(), ContentError> {
            self.0.clone()
        }
    }

    #[actix_web::test]
    async fn test_delete_returns_no_content() {
        let state = TestAppStateBuilder::default()
            .skill(|uc| uc.delete = Arc::new(MockDelete(Ok(()))))
            .build();
        let bearer = signed_in_bearer(&state).await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_skill_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/skills/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}

use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::project::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List projects, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects", body = inline(SuccessResponse<Vec<Project>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn list_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.project.list.execute().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => ApiResponse::from_content_error(&e, "list projects"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::application::ports::incoming::ListProjectsUseCase;
    use crate::project::application::service::test_fixtures::sample_project;
    use crate::shared::ContentError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockList(Vec<Project>);

    #[async_trait]
    impl ListProjectsUseCase for MockList {
        async fn execute(&self) -> Result<Vec<Project>, ContentError> {
            Ok(self.0.clone())
        }
    }

    #[actix_web::test]
    async fn test_list_is_public() {
        let state = TestAppStateBuilder::default()
            .project(|uc| {
                uc.list = Arc::new(MockList(vec![sample_project(
                    Uuid::new_v4(),
                    &["Rust", "Postgres"],
                )]))
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(list_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["tech"], json!(["Rust", "Postgres"]));
        assert_eq!(body["data"][0]["demo"], Value::Null);
    }
}

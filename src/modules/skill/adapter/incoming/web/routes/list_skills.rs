use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::skill::domain::Skill;
use crate::AppState;

/// List skills, newest first
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    responses(
        (status = 200, description = "All skills", body = inline(SuccessResponse<Vec<Skill>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/skills")]
pub async fn list_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.skill.list.execute().await {
        Ok(skills) => ApiResponse::success(skills),
        Err(e) => ApiResponse::from_content_error(&e, "list skills"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ContentError;
    use crate::skill::application::ports::incoming::ListSkillsUseCase;
    use crate::skill::application::service::test_fixtures::sample_skill;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockList(Vec<Skill>);

    #[async_trait]
    impl ListSkillsUseCase for MockList {
        async fn execute(&self) -> Result<Vec<Skill>, ContentError> {
            Ok(self.0.clone())
        }
    }

    #[actix_web::test]
    async fn test_list_serializes_category_lowercase() {
        let state = TestAppStateBuilder::default()
            .skill(|uc| {
                uc.list = Arc::new(MockList(vec![sample_skill(Uuid::new_v4(), "Rust", 90)]))
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(list_skills_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["name"], "Rust");
        assert_eq!(body["data"][0]["level"], 90);
        assert_eq!(body["data"][0]["category"], "language");
    }
}

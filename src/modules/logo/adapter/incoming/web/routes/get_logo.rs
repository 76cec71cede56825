use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::logo::domain::LogoAsset;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the current site logo
#[utoipa::path(
    get,
    path = "/api/logo",
    tag = "logo",
    responses(
        (status = 200, description = "Logo with public URL, or null", body = inline(SuccessResponse<Option<LogoAsset>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/logo")]
pub async fn get_logo_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.logo.get.execute().await {
        Ok(logo) => ApiResponse::success(logo),
        Err(e) => ApiResponse::from_content_error(&e, "get logo"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::application::ports::incoming::GetLogoUseCase;
    use crate::logo::domain::{Logo, PublicUrlBase};
    use crate::shared::ContentError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use serde_json::Value;
    use std::sync::Arc;
    use uuid::Uuid;

    struct MockGet(Option<LogoAsset>);

    #[async_trait]
    impl GetLogoUseCase for MockGet {
        async fn execute(&self) -> Result<Option<LogoAsset>, ContentError> {
            Ok(self.0.clone())
        }
    }

    #[actix_web::test]
    async fn test_logo_includes_public_url() {
        let asset = PublicUrlBase::new("https://backend.example.com", "logos").asset(Logo {
            id: Uuid::new_v4(),
            file_name: "logo-5.png".to_string(),
            storage_path: "logo-5.png".to_string(),
            created_at: Utc::now(),
        });
        let state = TestAppStateBuilder::default()
            .logo(|uc| uc.get = Arc::new(MockGet(Some(asset))))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_logo_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/logo").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["file_name"], "logo-5.png");
        assert_eq!(
            body["data"]["public_url"],
            "https://backend.example.com/storage/v1/object/public/logos/logo-5.png"
        );
    }

    #[actix_web::test]
    async fn test_missing_logo_is_null() {
        let state = TestAppStateBuilder::default()
            .logo(|uc| uc.get = Arc::new(MockGet(None)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_logo_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/logo").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("data").is_none() || body["data"].is_null());
    }
}

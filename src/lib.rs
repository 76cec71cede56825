pub mod api;
pub mod config;
pub mod content_store;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{
    auth, contact, dashboard, education, experience, logo, profile, project, skill,
};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::auth_gateway_http::AuthGatewayHttp;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::{SignInUseCase, SignOutUseCase};
use crate::auth::application::{AuthUseCases, SessionManager};
use crate::config::AppConfig;
use crate::content_store::ContentStore;
use crate::logo::adapter::outgoing::object_storage_http::ObjectStorageHttp;
use crate::logo::domain::{LogoUploadPolicy, PublicUrlBase};
use crate::shared::api::json_config::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
pub mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub sessions: Arc<SessionManager>,
    pub content: ContentStore,
}

#[cfg(not(tarpaulin_include))]
pub async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::load()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let db_arc = Arc::new(conn);

    // Hosted auth and storage
    let http = reqwest::Client::new();
    let gateway = AuthGatewayHttp::new(http.clone(), config.backend.clone());
    let sessions = Arc::new(SessionManager::new(
        Arc::new(gateway),
        config.session_expiry_leeway,
    ));
    if let Some(refresh_token) = config.refresh_token.as_deref() {
        if sessions.resume(refresh_token).await.is_err() {
            warn!("Starting without an admin session");
        }
    }

    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider_arc: Arc<dyn TokenProvider> = Arc::new(jwt_service);

    let auth = AuthUseCases {
        sign_in: Arc::new(SignInUseCase::new(
            Arc::clone(&sessions),
            Arc::clone(&token_provider_arc),
        )),
        sign_out: Arc::new(SignOutUseCase::new(Arc::clone(&sessions))),
    };

    let storage = ObjectStorageHttp::new(http, config.backend.clone(), config.logo_bucket.clone());
    let urls = PublicUrlBase::new(config.backend.base_url.clone(), config.logo_bucket.clone());
    let content = ContentStore::postgres(Arc::clone(&db_arc), sessions.clone(), storage, urls);

    let state = AppState {
        auth,
        sessions,
        content,
    };

    let logo_limit = LogoUploadPolicy::default().max_file_size_bytes;
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(web::PayloadConfig::new(logo_limit))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Admin session
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::session_handler);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_profile_handler);
    // Experience
    cfg.service(crate::experience::adapter::incoming::web::routes::list_experiences_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::add_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::update_experience_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::delete_experience_handler);
    // Education
    cfg.service(crate::education::adapter::incoming::web::routes::list_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::add_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::update_education_handler);
    cfg.service(crate::education::adapter::incoming::web::routes::delete_education_handler);
    // Skills
    cfg.service(crate::skill::adapter::incoming::web::routes::list_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::add_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::list_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::add_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Contacts
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::list_contacts_handler);
    // Logo
    cfg.service(crate::logo::adapter::incoming::web::routes::get_logo_handler);
    cfg.service(crate::logo::adapter::incoming::web::routes::upload_logo_handler);
    // Docs
    cfg.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

pub mod auth_gateway_http;
pub mod jwt;

pub use auth_gateway_http::AuthGatewayHttp;

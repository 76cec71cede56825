pub mod auth_gateway;
pub mod token_provider;

pub use auth_gateway::{AuthGateway, AuthGatewayError};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};

use std::sync::Arc;

use crate::auth::application::use_cases::{ISignInUseCase, ISignOutUseCase};

#[derive(Clone)]
pub struct AuthUseCases {
    pub sign_in: Arc<dyn ISignInUseCase>,
    pub sign_out: Arc<dyn ISignOutUseCase>,
}

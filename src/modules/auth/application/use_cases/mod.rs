pub mod sign_in;
pub mod sign_out;

pub use sign_in::{ISignInUseCase, SignInError, SignInRequest, SignInResponse, SignInUseCase};
pub use sign_out::{ISignOutUseCase, SignOutError, SignOutUseCase};

use actix_web::{post, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::contact::application::ports::incoming::ContactForm;
use crate::contact::domain::Contact;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Send a message through the contact form
///
/// Open to anonymous visitors. Name needs 2+ characters, message 10+.
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "contacts",
    request_body = ContactForm,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<Contact>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/contacts")]
pub async fn submit_contact_handler(
    req: web::Json<ContactForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.content.contact.submit.execute(req.into_inner()).await {
        Ok(contact) => ApiResponse::created(contact),
        Err(e) => ApiResponse::from_content_error(&e, "submit contact"),
    }
}

mod list_contacts_service;
mod submit_contact_service;

pub use list_contacts_service::ListContactsService;
pub use submit_contact_service::SubmitContactService;

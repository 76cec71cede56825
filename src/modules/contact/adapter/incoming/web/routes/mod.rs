mod list_contacts;
mod submit_contact;

pub use list_contacts::*;
pub use submit_contact::*;

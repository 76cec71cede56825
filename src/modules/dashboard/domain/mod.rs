pub mod collection;
pub mod form;
pub mod notice;
pub mod tab;

pub use collection::{CollectionData, Item};
pub use form::{FormError, FormFields, FormPayload, FormType};
pub use notice::{Notice, NoticeKind};
pub use tab::{CacheKey, Tab};

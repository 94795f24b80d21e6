pub mod error;
pub mod form;
pub mod masks;

pub use error::CoreError;
pub use form::{FieldSpec, FormField, FormState, MaskKind};
pub use masks::{capitalize_first, format_phone, uppercase_letters};

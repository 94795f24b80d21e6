pub mod name;
pub mod phone;

pub use name::{capitalize_first, uppercase_letters};
pub use phone::format_phone;

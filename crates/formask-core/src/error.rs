use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("field label is required")]
    EmptyFieldLabel,
    #[error("unknown mask kind: {0}")]
    UnknownMaskKind(String),
    #[error("no field at index {0}")]
    FieldOutOfRange(usize),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideError {
    /// Submit was attempted with blank text.
    #[error("Please enter some text.")]
    EmptyInput,

    #[error("Could not copy the link to the clipboard: {reason}")]
    ClipboardWrite { reason: String },
}

impl SlideError {
    pub fn clipboard(reason: impl Into<String>) -> Self {
        SlideError::ClipboardWrite {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SlideError>;

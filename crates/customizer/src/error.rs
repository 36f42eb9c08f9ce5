// ---------------------------------------------------------------------------
// CustomizerError: user-facing failures of the upload and submit paths
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors surfaced to the user as transient toasts.
///
/// None of these mutate state: the uploader keeps its previous preview and
/// the form keeps every field so the user can correct and resubmit.
#[derive(Debug)]
pub enum CustomizerError {
    /// The selected or dropped file is not an `image/*` type.
    InvalidFileType { content_type: String },
    /// A required field was empty when the form was submitted.
    IncompleteSubmission,
    /// The file passed the type check but could not be read.
    UploadRead(std::io::Error),
}

impl fmt::Display for CustomizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomizerError::InvalidFileType { .. } => write!(f, "Please select an image file"),
            CustomizerError::IncompleteSubmission => {
                write!(f, "Please fill out all fields before submitting the form.")
            }
            CustomizerError::UploadRead(e) => write!(f, "Could not read the image: {e}"),
        }
    }
}

impl std::error::Error for CustomizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CustomizerError::UploadRead(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CustomizerError {
    fn from(e: std::io::Error) -> Self {
        CustomizerError::UploadRead(e)
    }
}

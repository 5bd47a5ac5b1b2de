//! Error types for the studio core.

use thiserror::Error;

/// Failures of the AI design suggestion pipeline. Every variant renders a message
/// suitable for showing to the visitor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuggestionError {
    #[error("Please describe the space you have in mind.")]
    EmptyPrompt,

    #[error("A design is already being generated. Please wait for it to finish.")]
    Busy,

    #[error("API Key is missing or invalid. Please check your .env file and restart the server.")]
    Configuration,

    #[error("Access Denied (403): Your API key might not have permission for this model or is restricted by region.")]
    AccessDenied,

    #[error("Invalid API Key (401): Please verify the key in your .env file.")]
    Auth,

    #[error("Model Not Found (404): The selected model is not available for your account.")]
    NotFound,

    /// Empty payload, schema mismatch, transport failure or timeout.
    #[error("The AI returned an unusable response: {0}")]
    MalformedResponse(String),

    /// Any other provider-reported failure; the message is passed through verbatim.
    #[error("{0}")]
    UnclassifiedProvider(String),
}

/// Result type alias for suggestion requests.
pub type SuggestionResult<T> = Result<T, SuggestionError>;

/// Failures of a durable storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("sled: {0}")]
    Sled(#[from] sled::Error),

    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// Failures reading or writing one named store record. Read-side variants are
/// recovered by falling back to defaults; write-side variants are logged.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("reading record {key}: {source}")]
    Read {
        key: &'static str,
        #[source]
        source: StorageError,
    },

    #[error("decoding record {key}: {source}")]
    Decode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("encoding record {key}: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("writing record {key}: {source}")]
    Write {
        key: &'static str,
        #[source]
        source: StorageError,
    },
}

/// Rejected lead-capture submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeadFormError {
    #[error("The {0} field is required.")]
    MissingField(&'static str),
    #[error("Unknown project type: {0}")]
    UnknownProjectType(String),
}

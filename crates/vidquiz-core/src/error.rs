use thiserror::Error;

#[derive(Error, Debug)]
pub enum VidquizError {
    #[error(
        "Invalid YouTube URL: {input}. Supported formats: youtube.com/watch?v=..., youtu.be/..., youtube.com/shorts/..."
    )]
    InvalidVideoUrl { input: String },

    #[error("Processing failed during {stage}: {message}")]
    ServiceError { stage: String, message: String },

    #[error("Service returned a malformed learning package: {reason}")]
    MalformedPackage { reason: String },

    #[error("Request to service failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VidquizError>;

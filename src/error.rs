use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("component source missing: {path}")]
    SourceMissing { path: String },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Markup parse error: {0}")]
    Markup(#[from] quick_xml::Error),

    #[error("Options parse error: {0}")]
    Options(#[from] serde_json::Error),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

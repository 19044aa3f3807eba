use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid match option {name}: {message}")]
    InvalidOption { name: &'static str, message: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("no-go checker not available")]
    Unavailable,
}

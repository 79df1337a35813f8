use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("invalid mapping: {0}")]
    Mapping(#[from] serde_json::Error),
}

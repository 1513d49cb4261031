use cipher::CipherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MacError {
    #[error("Load config failed: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error(transparent)]
    Cipher(#[from] CipherError),
}

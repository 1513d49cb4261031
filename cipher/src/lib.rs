mod error;
pub use error::CipherError;

pub mod mac;
pub use mac::{DSTU7564Mac, MAC};

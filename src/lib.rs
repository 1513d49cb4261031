//! DSTU 7564:2014 MAC mode. <br>
//!
//! 构造和流式接口见[`DSTU7564Mac`], 哈希引擎通过[`DSTU7564Engine`]接入, 运行时配置见[`MacConfig`].

pub mod config;
pub use config::MacConfig;

pub mod error;
pub use error::MacError;

pub use cipher::{CipherError, DSTU7564Mac, MAC};
pub use crypto_hash::{BlockDigest, DSTU7564Engine, DSTU7564Size, HashError};

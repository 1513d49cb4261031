//! 乌克兰国标DSTU 7564:2014哈希函数(Kupyna)的参数配置. <br>
//!
//! - 摘要位长度只能是256/384/512;
//! - 摘要位长度不超过256时内部状态为512位, 否则为1024位, 即引擎每次按64字节或128字节分块处理消息;
//!
//! 压缩函数本身不在这里实现, 具体实现通过[`DSTU7564Engine`]接入.

use crate::{BlockDigest, HashError};
use std::convert::TryFrom;
use std::fmt::Display;

#[repr(usize)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DSTU7564Size {
    Bits256 = 256,
    Bits384 = 384,
    Bits512 = 512,
}

impl DSTU7564Size {
    const BITS_IN_BYTE: usize = 8;

    /// 摘要位长度
    pub const fn bits(self) -> usize {
        self as usize
    }

    /// 摘要字节长度
    pub const fn digest_len(self) -> usize {
        self.bits() / Self::BITS_IN_BYTE
    }

    /// 内部状态的块字节长度
    pub const fn block_len(self) -> usize {
        match self {
            Self::Bits256 => 64,
            Self::Bits384 | Self::Bits512 => 128,
        }
    }

    /// 检查`engine`的块长度和摘要长度是否与该配置一致
    pub fn check_engine<D: BlockDigest + ?Sized>(self, engine: &D) -> Result<(), HashError> {
        if engine.block_len() != self.block_len() {
            return Err(HashError::MismatchingByteLen {
                target: self.block_len(),
                real: engine.block_len(),
            });
        }

        if engine.digest_len() != self.digest_len() {
            return Err(HashError::MismatchingByteLen {
                target: self.digest_len(),
                real: engine.digest_len(),
            });
        }

        Ok(())
    }
}

impl TryFrom<usize> for DSTU7564Size {
    type Error = HashError;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        match bits {
            256 => Ok(Self::Bits256),
            384 => Ok(Self::Bits384),
            512 => Ok(Self::Bits512),
            _ => Err(HashError::UnsupportedDigestBits(bits)),
        }
    }
}

impl Display for DSTU7564Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("DSTU7564-{}", self.bits()))
    }
}

/// DSTU 7564哈希引擎. 任何符合标准的置换实现都可以通过该trait接入.
pub trait DSTU7564Engine: BlockDigest {
    /// 按`size`配置构造引擎, 引擎自身是合法配置的最终裁定者
    fn with_size(size: DSTU7564Size) -> Result<Self, HashError>
    where
        Self: Sized;
}

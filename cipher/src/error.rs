use crypto_hash::HashError;
use std::{error::Error, fmt::Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CipherError {
    /// 不合法的密钥长度
    InvalidKeySize { target: usize, real: usize },

    /// 底层哈希引擎配置不合法
    InvalidHashConfig(HashError),

    /// 未使用密钥初始化
    NotInitialized(&'static str),

    /// 输入数据区间`[offset, offset + len)`超出了缓冲区长度`buf_len`
    InputOutOfBounds {
        offset: usize,
        len: usize,
        buf_len: usize,
    },

    /// 输出缓冲区不足`target`字节
    OutputBufTooShort { target: usize, real: usize },

    /// 消息认证码验证失败
    MacMismatch,
}

impl CipherError {
    /// 是否是配置错误(密钥参数或引擎配置不合法)
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeySize { .. } | Self::InvalidHashConfig(_)
        )
    }

    /// 是否是状态错误
    pub fn is_state(&self) -> bool {
        matches!(self, Self::NotInitialized(_))
    }

    /// 是否是长度错误
    pub fn is_length(&self) -> bool {
        matches!(
            self,
            Self::InputOutOfBounds { .. } | Self::OutputBufTooShort { .. }
        )
    }
}

impl Display for CipherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKeySize { target, real } => f.write_fmt(format_args!(
                "Invalid key size `{real}` exceed the maximum size `{target}`"
            )),
            Self::InvalidHashConfig(e) => f.write_fmt(format_args!("Invalid hash config: {e}")),
            Self::NotInitialized(name) => f.write_fmt(format_args!("{name} not initialised")),
            Self::InputOutOfBounds {
                offset,
                len,
                buf_len,
            } => f.write_fmt(format_args!(
                "Input buffer too short, range `{offset}+{len}` exceed buffer length `{buf_len}`"
            )),
            Self::OutputBufTooShort { target, real } => f.write_fmt(format_args!(
                "Output buffer too short, need `{target}` bytes but only `{real}` bytes available"
            )),
            Self::MacMismatch => f.write_str("MAC verification failed"),
        }
    }
}

impl Error for CipherError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidHashConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HashError> for CipherError {
    fn from(value: HashError) -> Self {
        Self::InvalidHashConfig(value)
    }
}

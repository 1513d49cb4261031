use std::{error::Error, fmt::Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HashError {
    /// 实际字节长度`real`和目标字节长度`target`不匹配
    MismatchingByteLen { target: usize, real: usize },

    /// 哈希算法不支持输出`bits`位长度的摘要
    UnsupportedDigestBits(usize),
}

impl Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashError::MismatchingByteLen { target, real } => f.write_fmt(format_args!(
                "real byte length `{real}` not match to target byte length `{target}`"
            )),
            HashError::UnsupportedDigestBits(bits) => {
                f.write_fmt(format_args!("unsupported digest bit length `{bits}`"))
            }
        }
    }
}

impl Error for HashError {}

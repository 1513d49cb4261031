//! Message Authentication Code <br>
//!
//! 以某个密钥生成指定长度的消息摘要, 用于验证消息的完整性和身份验证(拥有该密钥的身份者才能够生成该摘要)

use crate::CipherError;
use std::io::Write;
use subtle::ConstantTimeEq;

mod dstu7564;
pub use dstu7564::DSTU7564Mac;

/// 消息通过`Write` trait写入`self`后, 调用`self.mac()`生成消息认证码.
pub trait MAC: Write {
    /// 底层算法每次处理的块的字节长度
    fn block_size_x(&self) -> usize;

    /// 消息认证码的字节长度
    fn digest_size_x(&self) -> usize;

    /// 生成消息认证码
    fn mac(&mut self) -> Result<Vec<u8>, CipherError>;

    /// 生成消息认证码并与`tag`做常量时间比较
    fn verify(&mut self, tag: &[u8]) -> Result<(), CipherError> {
        let mac = self.mac()?;
        if bool::from(mac.as_slice().ct_eq(tag)) {
            Ok(())
        } else {
            Err(CipherError::MacMismatch)
        }
    }

    fn reset(&mut self);
}

//! DSTU 7564:2014 MAC mode <br>
//!
//! 直接在DSTU 7564哈希引擎之上构造的带密钥消息认证码, 不是HMAC的包装:
//!
//! `MAC = H(K* || M || pad(M) || K')`
//!
//! - `K*`: 密钥填充, 长度为严格大于密钥长度的最小块长度整数倍;
//! - `pad(M)`: 消息填充块, 末尾12字节存放消息位长度;
//! - `K'`: 密钥按位取反;
//!
//! - 流程:
//!   - init: 派生`K*`和`K'`, 将`K*`吸收到哈希引擎;
//!   - update: 吸收消息, 累计消息字节数;
//!   - finalize: 吸收`pad(M)`和`K'`, 输出哈希引擎的摘要;
//!
//! 每条消息都需要重新`init`, `finalize`或`reset`之后未经`init`的`update`/`finalize`会返回错误.

use crate::{CipherError, MAC};
use crypto_hash::{BlockDigest, DSTU7564Engine, DSTU7564Size};
use std::io::Write;
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    Uninit,
    Keyed,
    Finalized,
}

#[derive(Clone)]
pub struct DSTU7564Mac<D> {
    engine: D,
    size: DSTU7564Size,
    // K*
    padded_key: Vec<u8>,
    // K'
    inverted_key: Vec<u8>,
    // 自init或finalize之后吸收的消息字节数
    ilen: u64,
    state: State,
}

impl<D> DSTU7564Mac<D> {
    const NAME: &'static str = "DSTU7564Mac";
    const BITS_IN_BYTE: usize = 8;
    const MARKER: u8 = 0x80;
    // 填充块末尾存放位长度的区域
    const TAIL_LEN: usize = 12;

    /// 密钥填充后的字节长度: 严格大于`key_len`的最小的`block_len`整数倍
    pub const fn padded_key_len(key_len: usize, block_len: usize) -> usize {
        (key_len / block_len + 1) * block_len
    }

    /// 密钥位长度, 需要能放入32位的长度字段
    pub fn key_bit_len(key_len: usize) -> Result<u32, CipherError> {
        key_len
            .checked_mul(Self::BITS_IN_BYTE)
            .and_then(|bits| u32::try_from(bits).ok())
            .ok_or(CipherError::InvalidKeySize {
                target: u32::MAX as usize / Self::BITS_IN_BYTE,
                real: key_len,
            })
    }

    /// 计算`K*`. <br>
    ///
    /// 依次写入密钥、`0x80`标记和32位小端序的密钥位长度(位于倒数第12字节处), 后写入的会覆盖先写入的.
    pub fn pad_key(key: &[u8], block_len: usize) -> Result<Vec<u8>, CipherError> {
        let bits = Self::key_bit_len(key.len())?;
        let mut padded = vec![0u8; Self::padded_key_len(key.len(), block_len)];
        let tail = padded.len() - Self::TAIL_LEN;

        padded[..key.len()].copy_from_slice(key);
        padded[key.len()] = Self::MARKER;
        padded[tail..(tail + 4)].copy_from_slice(&bits.to_le_bytes());

        Ok(padded)
    }

    /// 计算`K'`
    pub fn invert_key(key: &[u8]) -> Vec<u8> {
        key.iter().map(|&k| k ^ 0xff).collect()
    }

    /// 已吸收`ilen`字节消息时的消息填充块. <br>
    ///
    /// 长度为`block_len - ilen % block_len`, 不足12字节时取`block_len`; 首字节为`0x80`, 倒数第12字节处
    /// 存放64位小端序的消息位长度.
    pub fn tail_padding(ilen: u64, block_len: usize) -> Vec<u8> {
        let rem = (ilen % block_len as u64) as usize;
        let extra = match block_len - rem {
            x if x < Self::TAIL_LEN => block_len,
            x => x,
        };

        let mut padded = vec![0u8; extra];
        let tail = extra - Self::TAIL_LEN;
        padded[0] = Self::MARKER;
        padded[tail..(tail + 8)]
            .copy_from_slice(&ilen.wrapping_mul(Self::BITS_IN_BYTE as u64).to_le_bytes());

        padded
    }

    pub const fn algorithm_name(&self) -> &'static str {
        Self::NAME
    }

    /// 消息认证码的字节长度
    pub const fn mac_size(&self) -> usize {
        self.size.digest_len()
    }

    pub const fn size(&self) -> DSTU7564Size {
        self.size
    }

    /// 当前消息已吸收的字节数
    pub const fn byte_count(&self) -> u64 {
        self.ilen
    }

    pub fn is_keyed(&self) -> bool {
        self.state == State::Keyed
    }

    fn check_keyed(&self) -> Result<(), CipherError> {
        if self.is_keyed() {
            Ok(())
        } else {
            log::debug!("{} rejected call in {:?} state", Self::NAME, self.state);
            Err(CipherError::NotInitialized(Self::NAME))
        }
    }

    fn clear_key(&mut self) {
        #[cfg(feature = "sec-zeroize")]
        {
            self.padded_key.zeroize();
            self.inverted_key.zeroize();
        }
        #[cfg(not(feature = "sec-zeroize"))]
        {
            self.padded_key.clear();
            self.inverted_key.clear();
        }
    }
}

impl<D: DSTU7564Engine> DSTU7564Mac<D> {
    /// `mac_bits`只能是256/384/512, 同时决定哈希引擎的摘要长度和MAC长度.
    pub fn new(mac_bits: usize) -> Result<Self, CipherError> {
        let size = DSTU7564Size::try_from(mac_bits)?;
        let engine = D::with_size(size)?;
        Self::with_engine(size, engine)
    }
}

impl<D: BlockDigest> DSTU7564Mac<D> {
    /// 使用已构造的哈希引擎, 引擎的块长度和摘要长度需要与`size`一致.
    pub fn with_engine(size: DSTU7564Size, mut engine: D) -> Result<Self, CipherError> {
        size.check_engine(&engine)?;
        engine.reset();

        Ok(Self {
            engine,
            size,
            padded_key: Vec::new(),
            inverted_key: Vec::new(),
            ilen: 0,
            state: State::Uninit,
        })
    }

    /// 哈希引擎的块字节长度
    pub fn block_len(&self) -> usize {
        self.engine.block_len()
    }

    /// 使用`key`开始一条新消息的认证, 之前未完成的消息会被丢弃.
    pub fn init(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let padded_key = Self::pad_key(key, self.block_len())?;

        self.clear_key();
        self.engine.reset();
        self.ilen = 0;

        self.inverted_key = Self::invert_key(key);
        self.padded_key = padded_key;
        self.engine.update(&self.padded_key);
        self.state = State::Keyed;

        log::debug!(
            "{} init: key {} bytes, padded key {} bytes, block {} bytes",
            Self::NAME,
            key.len(),
            self.padded_key.len(),
            self.block_len()
        );

        Ok(())
    }

    /// 吸收单个字节. 与多字节形式一样检查是否已`init`.
    pub fn update_byte(&mut self, byte: u8) -> Result<(), CipherError> {
        self.check_keyed()?;

        self.engine.update_byte(byte);
        self.ilen = self.ilen.wrapping_add(1);
        Ok(())
    }

    /// 吸收`data[offset..offset + len]`
    pub fn update(&mut self, data: &[u8], offset: usize, len: usize) -> Result<(), CipherError> {
        let Some(end) = offset.checked_add(len).filter(|&end| end <= data.len()) else {
            return Err(CipherError::InputOutOfBounds {
                offset,
                len,
                buf_len: data.len(),
            });
        };
        self.check_keyed()?;

        self.engine.update(&data[offset..end]);
        self.ilen = self.ilen.wrapping_add(len as u64);
        Ok(())
    }

    /// 将MAC写入`out[offset..]`, 返回写入的字节数`self.mac_size()`.
    pub fn finalize(&mut self, out: &mut [u8], offset: usize) -> Result<usize, CipherError> {
        let n = self.mac_size();
        let real = out.len().saturating_sub(offset);
        if real < n {
            return Err(CipherError::OutputBufTooShort { target: n, real });
        }
        self.check_keyed()?;

        let padded = Self::tail_padding(self.ilen, self.block_len());
        log::trace!(
            "{} finalize: {} message bytes, {} padding bytes",
            Self::NAME,
            self.ilen,
            padded.len()
        );
        self.engine.update(&padded);
        self.engine.update(&self.inverted_key);

        self.ilen = 0;
        self.state = State::Finalized;

        Ok(self.engine.finalize_into(&mut out[offset..(offset + n)]))
    }

    /// 丢弃当前消息并清除密钥, 开始新消息前需要重新`init`.
    pub fn reset(&mut self) {
        self.ilen = 0;
        self.engine.reset();
        self.clear_key();
        self.state = State::Uninit;
    }
}

#[cfg(feature = "sec-zeroize")]
impl<D> Zeroize for DSTU7564Mac<D> {
    fn zeroize(&mut self) {
        self.clear_key();
        self.ilen = 0;
        self.state = State::Uninit;
    }
}

#[cfg(feature = "sec-zeroize-drop")]
impl<D> Drop for DSTU7564Mac<D> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<D: BlockDigest> Write for DSTU7564Mac<D> {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.update(data, 0, data.len())
            .map_err(std::io::Error::other)?;
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<D: BlockDigest> MAC for DSTU7564Mac<D> {
    fn block_size_x(&self) -> usize {
        self.block_len()
    }

    fn digest_size_x(&self) -> usize {
        self.mac_size()
    }

    fn mac(&mut self) -> Result<Vec<u8>, CipherError> {
        let mut mac = vec![0u8; self.mac_size()];
        self.finalize(&mut mac, 0)?;
        Ok(mac)
    }

    fn reset(&mut self) {
        DSTU7564Mac::reset(self)
    }
}

mod error;
pub use error::HashError;

pub mod dstu7564;
pub use dstu7564::{DSTU7564Engine, DSTU7564Size};

/// 按块吸收消息的流式哈希引擎. 带密钥的构造(如`DSTU7564Mac`)直接驱动该接口完成密钥填充、消息填充和摘要输出,
/// 而不依赖具体的压缩函数实现.
///
/// 实现者保证:
/// - `block_len()`和`digest_len()`在实例生命周期内不变;
/// - `finalize_into`输出摘要后, 需要调用`reset`才能开始计算下一条消息的摘要;
pub trait BlockDigest {
    /// 内部状态每次处理的块的字节长度
    fn block_len(&self) -> usize;

    /// 输出摘要的字节长度
    fn digest_len(&self) -> usize;

    /// 吸收消息数据
    fn update(&mut self, data: &[u8]);

    /// 吸收单个字节
    fn update_byte(&mut self, byte: u8) {
        self.update(std::slice::from_ref(&byte))
    }

    /// 将`self.digest_len()`字节摘要写入`out`的起始位置, 返回写入的字节数.
    ///
    /// 调用者保证`out.len() >= self.digest_len()`.
    fn finalize_into(&mut self, out: &mut [u8]) -> usize;

    /// 重置到空消息的初始状态
    fn reset(&mut self);
}

impl<T> BlockDigest for Box<T>
where
    T: BlockDigest + ?Sized,
{
    fn block_len(&self) -> usize {
        (**self).block_len()
    }

    fn digest_len(&self) -> usize {
        (**self).digest_len()
    }

    fn update(&mut self, data: &[u8]) {
        (**self).update(data)
    }

    fn update_byte(&mut self, byte: u8) {
        (**self).update_byte(byte)
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> usize {
        (**self).finalize_into(out)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

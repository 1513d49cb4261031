use crate::MacError;
use ::config::{Config, Environment, File};
use cipher::DSTU7564Mac;
use crypto_hash::{DSTU7564Engine, DSTU7564Size};
use serde::{Deserialize, Serialize};

/// 运行时配置. <br>
///
/// 依次加载默认值、配置文件(可选)和以`DSTU_MAC_`为前缀的环境变量, 后加载的覆盖先加载的:
/// - `DSTU_MAC_MAC_BITS=384`
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MacConfig {
    // MAC位长度, 只能是256/384/512
    pub mac_bits: usize,
}

impl Default for MacConfig {
    fn default() -> Self {
        Self { mac_bits: 256 }
    }
}

impl MacConfig {
    pub const ENV_PREFIX: &'static str = "DSTU_MAC";

    pub fn load() -> Result<Self, MacError> {
        Self::load_with_file(None)
    }

    /// `f`不存在时忽略该配置文件
    pub fn load_with_file(f: Option<&str>) -> Result<Self, MacError> {
        let default_config = Config::try_from(&MacConfig::default())?;

        let mut config = Config::builder().add_source(default_config);
        if let Some(f) = f {
            config = config.add_source(File::with_name(f).required(false));
        }
        let config = config
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?;

        let myconfig: MacConfig = config.try_deserialize()?;
        myconfig.size()?;

        log::trace!("{:?}", myconfig);

        Ok(myconfig)
    }

    pub fn size(&self) -> Result<DSTU7564Size, MacError> {
        DSTU7564Size::try_from(self.mac_bits).map_err(|e| MacError::Cipher(e.into()))
    }

    /// 按配置构造尚未`init`的MAC
    pub fn build<D: DSTU7564Engine>(&self) -> Result<DSTU7564Mac<D>, MacError> {
        Ok(DSTU7564Mac::new(self.size()?.bits())?)
    }
}

#[cfg(test)]
mod tests {
    use super::MacConfig;
    use crate::{BlockDigest, DSTU7564Engine, DSTU7564Size, HashError, MacError};
    use std::io::Write;

    struct Zeros(DSTU7564Size);

    impl BlockDigest for Zeros {
        fn block_len(&self) -> usize {
            self.0.block_len()
        }

        fn digest_len(&self) -> usize {
            self.0.digest_len()
        }

        fn update(&mut self, _data: &[u8]) {}

        fn finalize_into(&mut self, out: &mut [u8]) -> usize {
            out[..self.digest_len()].fill(0);
            self.digest_len()
        }

        fn reset(&mut self) {}
    }

    impl DSTU7564Engine for Zeros {
        fn with_size(size: DSTU7564Size) -> Result<Self, HashError> {
            Ok(Self(size))
        }
    }

    fn write_json(name: &str, value: serde_json::Value) -> String {
        let p = std::env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
        let mut f = std::fs::File::create(&p).unwrap();
        f.write_all(value.to_string().as_bytes()).unwrap();
        p.to_string_lossy().into_owned()
    }

    // 环境变量是进程级共享状态, 所有加载来源在同一个测试中按顺序检查
    #[test]
    fn load_sources() {
        let _ = env_logger::builder().is_test(true).try_init();
        let key = "DSTU_MAC_MAC_BITS";
        std::env::remove_var(key);

        assert_eq!(MacConfig::load().unwrap(), MacConfig::default());
        assert_eq!(
            MacConfig::load_with_file(Some("dstu-mac-missing-config.json")).unwrap(),
            MacConfig { mac_bits: 256 }
        );

        let f = write_json("dstu-mac-384", serde_json::json!({"mac_bits": 384}));
        assert_eq!(
            MacConfig::load_with_file(Some(f.as_str())).unwrap(),
            MacConfig { mac_bits: 384 }
        );

        std::env::set_var(key, "512");
        assert_eq!(
            MacConfig::load_with_file(Some(f.as_str())).unwrap(),
            MacConfig { mac_bits: 512 }
        );

        std::env::set_var(key, "128");
        let e = MacConfig::load().unwrap_err();
        assert!(matches!(e, MacError::Cipher(ref c) if c.is_config()), "{e}");

        std::env::remove_var(key);
        let _ = std::fs::remove_file(f);
    }

    #[test]
    fn build() {
        for (bits, block_len) in [(256usize, 64usize), (384, 128), (512, 128)] {
            let mut mac = MacConfig { mac_bits: bits }.build::<Zeros>().unwrap();
            assert_eq!(mac.mac_size(), bits / 8);
            assert_eq!(mac.block_len(), block_len);
            assert!(mac.update(b"x", 0, 1).unwrap_err().is_state());
            mac.init(b"key").unwrap();
            mac.update(b"x", 0, 1).unwrap();
        }

        let e = MacConfig { mac_bits: 1024 }.build::<Zeros>().err().unwrap();
        assert!(matches!(e, MacError::Cipher(ref c) if c.is_config()));
    }
}

//! Decoder configuration.

/// Environment variable overriding [`DecoderConfig::max_body_bytes`].
pub const MAX_BODY_BYTES_ENV: &str = "AUTHY_ONETOUCH_MAX_BODY_BYTES";

/// Default upper bound on a response body (1 MiB)
const DEFAULT_MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Configuration for [`crate::ApprovalRequestDecoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Largest response body the decoder reads before giving up.
    pub max_body_bytes: u64,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl DecoderConfig {
    /// Set the body size limit.
    pub fn with_max_body_bytes(mut self, max_body_bytes: u64) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AUTHY_ONETOUCH_MAX_BODY_BYTES` (optional): body size limit in bytes
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DecoderConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_BODY_BYTES_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(limit) if limit > 0 => config = config.with_max_body_bytes(limit),
                _ => {
                    tracing::warn!(
                        variable = MAX_BODY_BYTES_ENV,
                        value = %raw,
                        "Ignoring invalid body size limit"
                    );
                }
            }
        }

        config
    }
}

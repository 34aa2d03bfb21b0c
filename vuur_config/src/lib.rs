use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::Deserialize;
use vuur_models::{
    email_address::{EmailAddress, EmailAddressWithName},
    Sensitive,
};

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads and merges the given config files in order, then applies
/// `VUUR__*` environment variable overrides (e.g. `VUUR__SMTP__HOST`).
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .add_source(
            Environment::with_prefix("VUUR")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub smtp: SmtpConfig,
    pub contact: ContactConfig,
    pub health: HealthConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    /// Port 465 implies an implicitly TLS-wrapped connection. Any other
    /// port uses a plain connection upgraded via STARTTLS when the relay
    /// offers it.
    pub port: u16,
    pub username: String,
    pub password: Sensitive<String>,
    /// `From` header used on all outbound mail.
    pub from: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// Mailbox that receives contact form notifications.
    pub recipient: EmailAddress,
}

#[derive(Debug, Deserialize)]
pub struct HealthConfig {
    pub cache_ttl: Duration,
}

/// Human-readable duration, e.g. `"30s"`, `"5m"`, `"2h 30m"`, `"1d"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut total = 0u64;
        for part in s.split_whitespace() {
            let seconds_per_unit = match part.as_bytes().last() {
                Some(b's') => 1,
                Some(b'm') => 60,
                Some(b'h') => 3600,
                Some(b'd') => 24 * 3600,
                _ => return Err(serde::de::Error::custom("Invalid duration")),
            };
            let count = part[..part.len() - 1]
                .parse::<u64>()
                .map_err(|_| serde::de::Error::custom("Invalid duration"))?;
            total = count
                .checked_mul(seconds_per_unit)
                .and_then(|seconds| total.checked_add(seconds))
                .ok_or_else(|| serde::de::Error::custom("Invalid duration"))?;
        }
        Ok(Self(std::time::Duration::from_secs(total)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
    }

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13)),
            ("42m", Some(42 * 60)),
            ("7h", Some(7 * 60 * 60)),
            ("20d", Some(20 * 24 * 60 * 60)),
            ("", Some(0)),
            ("1d 2h 3m 4s", Some(((24 + 2) * 60 + 3) * 60 + 4)),
            ("xyz", None),
            ("7dd", None),
            ("s", None),
            ("500000000000000000d", None),
            ("18446744073709551615s 1s", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input)
                .ok()
                .map(|x| x.0.as_secs());
            assert_eq!(output, expected);
        }
    }
}

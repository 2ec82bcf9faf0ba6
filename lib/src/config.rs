use serde::Deserialize;

use crate::error::Error;

const ENV_PREFIX: &str = "SMTP";

/// Default SMTP submission port, used when SMTP_PORT is not set
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP transport settings.
///
/// Loaded once at startup from environment variables prefixed with SMTP_
/// (SMTP_HOST, SMTP_PORT, SMTP_SECURE, SMTP_USER, SMTP_PASS) and passed
/// into the transport factory on every send. Nothing is read from the
/// environment after startup.
#[derive(Clone, Debug, Deserialize)]
pub struct SmtpConfig {
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Wrap the connection in TLS
    #[serde(default)]
    pub secure: bool,

    pub user: String,
    pub pass: String,
}

fn default_port() -> u16 {
    DEFAULT_SMTP_PORT
}

/// Loads SMTP settings from environment variables prefixed with SMTP_.
///
/// Fails if a required variable is missing or a value cannot be coerced
/// into its field type.
pub fn load_config() -> Result<SmtpConfig, Error> {
    let mut settings = config::Config::default();

    settings
        .merge(config::Environment::with_prefix(ENV_PREFIX))
        .map_err(|e| Error::Config(e.to_string()))?;

    settings
        .try_into::<SmtpConfig>()
        .map_err(|e| Error::Config(e.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn load_from_env() {
        std::env::set_var("SMTP_HOST", "smtp.example.com");
        std::env::set_var("SMTP_PORT", "2525");
        std::env::set_var("SMTP_SECURE", "true");
        std::env::set_var("SMTP_USER", "relay@example.com");
        std::env::set_var("SMTP_PASS", "hunter2");

        let config = load_config().unwrap();

        assert_eq!(config.host, "smtp.example.com");
        assert_eq!(config.port, 2525);
        assert!(config.secure);
        assert_eq!(config.user, "relay@example.com");
        assert_eq!(config.pass, "hunter2");
    }
}

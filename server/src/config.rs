use std::sync::Arc;

use courier::config::SmtpConfig;

/// Maximum size of a JSON request body, in bytes
pub const MAX_BODY_SIZE: u64 = 50 * 1024 * 1024;

#[derive(Debug)]
pub struct HttpArg {
    pub port: u16,
    pub smtp: Arc<SmtpConfig>,
}

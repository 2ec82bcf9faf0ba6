use std::convert::Infallible;
use std::sync::Arc;

use courier::config::SmtpConfig;

use warp::Filter;

/// Injects the shared SMTP settings into a route's handler
pub fn with_config(
    config: Arc<SmtpConfig>,
) -> impl Filter<Extract = (Arc<SmtpConfig>,), Error = Infallible> + Clone {
    warp::any().map(move || config.clone())
}

use std::sync::Arc;

use courier::config::SmtpConfig;

use warp::{reply::Reply, Filter, Rejection};

use super::config;
use super::controllers;
use super::filters;

/// Route for /
pub fn index() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path::end().and_then(controllers::index)
}

/// Route for /api/sendEmail
///
/// Accepts an email request as a JSON body and relays it over SMTP.
pub fn send_email(
    smtp: Arc<SmtpConfig>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "sendEmail")
        .and(warp::path::end())
        .and(warp::body::content_length_limit(config::MAX_BODY_SIZE))
        .and(warp::body::json())
        .and(filters::with_config(smtp))
        .and_then(controllers::send_email)
}

/// Route for /api/testEmail
///
/// Sends a fixed probe message from the configured account to itself.
pub fn test_email(
    smtp: Arc<SmtpConfig>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "testEmail")
        .and(warp::path::end())
        .and(filters::with_config(smtp))
        .and_then(controllers::test_email)
}

/// Route for /api/health
pub fn health() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "health")
        .and(warp::path::end())
        .and_then(controllers::health)
}

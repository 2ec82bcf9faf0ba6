use std::convert::Infallible;

use courier::api::ErrorReply;

use warp::{http::StatusCode, Rejection, Reply};

/// Wrap the shared courier error type so Reject can be impl'd
#[derive(Debug)]
pub enum ApiError {
    /// Required request fields absent or empty
    Validation(courier::Error),

    /// The send operation failed
    Send(courier::Error),

    /// The test send operation failed
    TestSend(courier::Error),
}

impl warp::reject::Reject for ApiError {}

/// Maps internal server errors to HTTP return codes and a JSON error body.
///
/// Validation failures reply 400 with no details; send failures reply 500
/// and forward the underlying failure message verbatim in `details`.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let status_code;
    let reply;

    if err.is_not_found() {
        status_code = StatusCode::NOT_FOUND;
        reply = ErrorReply {
            error: "Not found".to_string(),
            details: None,
        };
    } else if let Some(e) = err.find::<ApiError>() {
        match e {
            ApiError::Validation(e) => {
                status_code = StatusCode::BAD_REQUEST;
                reply = ErrorReply {
                    error: e.to_string(),
                    details: None,
                };
            }
            ApiError::Send(e) => {
                status_code = StatusCode::INTERNAL_SERVER_ERROR;
                reply = ErrorReply {
                    error: "Failed to send email".to_string(),
                    details: Some(e.to_string()),
                };
            }
            ApiError::TestSend(e) => {
                status_code = StatusCode::INTERNAL_SERVER_ERROR;
                reply = ErrorReply {
                    error: "Failed to send test email".to_string(),
                    details: Some(e.to_string()),
                };
            }
        }
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        status_code = StatusCode::BAD_REQUEST;
        reply = ErrorReply {
            error: e.to_string(),
            details: None,
        };
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        status_code = StatusCode::PAYLOAD_TOO_LARGE;
        reply = ErrorReply {
            error: "Request body too large".to_string(),
            details: None,
        };
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        status_code = StatusCode::METHOD_NOT_ALLOWED;
        reply = ErrorReply {
            error: "Method not allowed".to_string(),
            details: None,
        };
    } else {
        status_code = StatusCode::INTERNAL_SERVER_ERROR;
        reply = ErrorReply {
            error: "Internal server error".to_string(),
            details: None,
        };
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&reply),
        status_code,
    ))
}

use std::sync::Arc;

use chrono::Utc;

use courier::api::{HealthReply, IndexReply, SendReply};
use courier::config::SmtpConfig;
use courier::email::EmailRequest;
use courier::smtp;

use warp::{reply::Reply, Rejection};

use super::errors::ApiError;

pub async fn index() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&IndexReply {
        message: "Email server is running!".to_string(),
    }))
}

pub async fn send_email(
    request: EmailRequest,
    config: Arc<SmtpConfig>,
) -> Result<impl Reply, Rejection> {
    let num_attachments = request.attachments.as_ref().map(|a| a.len()).unwrap_or(0);

    log::info!(
        "Received email request: to = {:?}, subject = {:?}, attachments = {}",
        request.to,
        request.subject,
        num_attachments
    );

    let mail = request
        .validate()
        .map_err(|e| warp::reject::custom(ApiError::Validation(e)))?;

    // The caller's recipient is logged above but never used for delivery;
    // all outbound mail goes to smtp::FIXED_RECIPIENT.
    let message = smtp::build_message(&mail, &config)
        .map_err(|e| warp::reject::custom(ApiError::Send(e)))?;

    // lettre 0.9 sends synchronously; keep the session off the reactor
    let result = tokio::task::spawn_blocking(move || smtp::send(&config, message))
        .await
        .map_err(|e| {
            warp::reject::custom(ApiError::Send(courier::Error::Transport(e.to_string())))
        })?;

    match result {
        Ok(message_id) => {
            log::info!("Email sent successfully: {}", message_id);

            Ok(warp::reply::json(&SendReply {
                success: true,
                message: "Email sent successfully".to_string(),
                message_id,
            }))
        }
        Err(e) => {
            log::error!("Could not send email: {}", e);
            Err(warp::reject::custom(ApiError::Send(e)))
        }
    }
}

pub async fn test_email(config: Arc<SmtpConfig>) -> Result<impl Reply, Rejection> {
    log::info!("Received test email request");

    let message = smtp::build_test_message(&config)
        .map_err(|e| warp::reject::custom(ApiError::TestSend(e)))?;

    let result = tokio::task::spawn_blocking(move || smtp::send(&config, message))
        .await
        .map_err(|e| {
            warp::reject::custom(ApiError::TestSend(courier::Error::Transport(e.to_string())))
        })?;

    match result {
        Ok(message_id) => {
            log::info!("Test email sent: {}", message_id);

            Ok(warp::reply::json(&SendReply {
                success: true,
                message: "Test email sent successfully".to_string(),
                message_id,
            }))
        }
        Err(e) => {
            log::error!("Could not send test email: {}", e);
            Err(warp::reject::custom(ApiError::TestSend(e)))
        }
    }
}

pub async fn health() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&HealthReply {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}

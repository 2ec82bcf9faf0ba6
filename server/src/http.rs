use std::sync::Arc;

use courier::config::SmtpConfig;

use warp::{self, reply::Reply, Filter, Rejection};

use super::config;
use super::errors;
use super::routes;

/// Composes every route of the service.
///
/// Rejection recovery is applied by the caller so tests can drive the same
/// router that `run` serves.
pub fn router(
    smtp: Arc<SmtpConfig>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let get = warp::get().and(routes::index().or(routes::health()));
    let post = warp::post().and(routes::send_email(smtp.clone()).or(routes::test_email(smtp)));

    get.or(post)
}

pub async fn run(arg: config::HttpArg) {
    log::info!("Starting HTTP server at 0.0.0.0:{}...", arg.port);

    let router = router(arg.smtp).recover(errors::handle_rejection);

    warp::serve(router).run(([0, 0, 0, 0], arg.port)).await;
}

#[cfg(test)]
mod test {
    use super::*;

    use courier::api::{ErrorReply, HealthReply, IndexReply};

    use warp::http::StatusCode;

    /// Settings pointing at a local port with no listener; sends fail fast
    /// with a connection error and no mail leaves the machine.
    fn unreachable_smtp() -> Arc<SmtpConfig> {
        Arc::new(SmtpConfig {
            host: "127.0.0.1".to_string(),
            port: 9,
            secure: false,
            user: "relay@example.com".to_string(),
            pass: "hunter2".to_string(),
        })
    }

    #[tokio::test]
    async fn send_email_missing_fields() {
        let api = router(unreachable_smtp()).recover(errors::handle_rejection);

        let resp = warp::test::request()
            .method("POST")
            .path("/api/sendEmail")
            .json(&serde_json::json!({ "subject": "Hi", "body": "hello" }))
            .reply(&api)
            .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let reply: ErrorReply = serde_json::from_slice(resp.body()).unwrap();
        assert!(reply.error.contains("Missing required fields"));
        assert!(reply.details.is_none());
    }

    #[tokio::test]
    async fn send_email_empty_fields() {
        let api = router(unreachable_smtp()).recover(errors::handle_rejection);

        let resp = warp::test::request()
            .method("POST")
            .path("/api/sendEmail")
            .json(&serde_json::json!({ "to": "", "subject": "Hi", "body": "hello" }))
            .reply(&api)
            .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn send_email_malformed_body() {
        let api = router(unreachable_smtp()).recover(errors::handle_rejection);

        let resp = warp::test::request()
            .method("POST")
            .path("/api/sendEmail")
            .header("content-type", "application/json")
            .body("not json")
            .reply(&api)
            .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn send_email_transport_failure() {
        let api = router(unreachable_smtp()).recover(errors::handle_rejection);

        let resp = warp::test::request()
            .method("POST")
            .path("/api/sendEmail")
            .json(&serde_json::json!({
                "to": "someone@example.com",
                "subject": "Hi",
                "body": "hello"
            }))
            .reply(&api)
            .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let value: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(value["error"], "Failed to send email");
        assert!(value["details"].is_string());
        assert!(value.get("success").is_none());
    }

    #[tokio::test]
    async fn test_email_transport_failure() {
        let api = router(unreachable_smtp()).recover(errors::handle_rejection);

        let resp = warp::test::request()
            .method("POST")
            .path("/api/testEmail")
            .reply(&api)
            .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let value: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(value["error"], "Failed to send test email");
        assert!(value["details"].is_string());
        assert!(value.get("success").is_none());
    }

    #[tokio::test]
    async fn health_always_replies() {
        let api = router(unreachable_smtp()).recover(errors::handle_rejection);

        let resp = warp::test::request()
            .method("GET")
            .path("/api/health")
            .reply(&api)
            .await;

        assert_eq!(resp.status(), StatusCode::OK);

        let reply: HealthReply = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(reply.status, "ok");
        assert!(chrono::DateTime::parse_from_rfc3339(&reply.timestamp).is_ok());
    }

    #[tokio::test]
    async fn index_replies() {
        let api = router(unreachable_smtp()).recover(errors::handle_rejection);

        let resp = warp::test::request().method("GET").path("/").reply(&api).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let reply: IndexReply = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(reply.message, "Email server is running!");
    }

    #[tokio::test]
    async fn unknown_route_is_rejected() {
        let api = router(unreachable_smtp()).recover(errors::handle_rejection);

        let resp = warp::test::request()
            .method("GET")
            .path("/api/nope")
            .reply(&api)
            .await;

        // Method filters combine ahead of path rejections, so this may
        // surface as 404 or 405 depending on the route that got closest
        assert!(resp.status().is_client_error());

        let reply: ErrorReply = serde_json::from_slice(resp.body()).unwrap();
        assert!(!reply.error.is_empty());
    }
}

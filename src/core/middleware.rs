use axum::http::{header, HeaderValue, Method, Uri};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

use crate::core::error::AppError;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

/// CORS policy for every API route
pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Fallback for paths no route matches
pub async fn not_found_fallback(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Fallback for known paths requested with an unsupported method
pub async fn method_not_allowed_fallback(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{header, HeaderValue, Method};
    use axum_test::TestServer;

    use super::cors_layer;
    use crate::core::app::api_router;
    use crate::shared::random::ThreadRandom;
    use crate::shared::test_helpers::{seeded_store, test_server};

    fn header_list(value: Option<&HeaderValue>) -> Vec<String> {
        value
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_ascii_uppercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    #[tokio::test]
    async fn test_any_origin_is_allowed() {
        let server = test_server(seeded_store(&["Science"], 3));

        let response = server
            .get("/categories")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
    }

    #[tokio::test]
    async fn test_preflight_lists_methods_and_headers() {
        let server = test_server(seeded_store(&["Science"], 3));

        let response = server
            .method(Method::OPTIONS, "/questions")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:3000"))
            .add_header(
                header::ACCESS_CONTROL_REQUEST_METHOD,
                HeaderValue::from_static("POST"),
            )
            .add_header(
                header::ACCESS_CONTROL_REQUEST_HEADERS,
                HeaderValue::from_static("content-type"),
            )
            .await;

        response.assert_status_ok();
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );

        let methods = header_list(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS));
        for method in ["GET", "PUT", "POST", "DELETE", "OPTIONS"] {
            assert!(methods.contains(&method.to_string()), "missing {}", method);
        }

        let allowed = header_list(headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS));
        for name in ["CONTENT-TYPE", "AUTHORIZATION"] {
            assert!(allowed.contains(&name.to_string()), "missing {}", name);
        }
    }

    #[tokio::test]
    async fn test_origin_list_only_echoes_known_origins() {
        let app = api_router(
            Arc::new(seeded_store(&["Science"], 3)),
            Arc::new(ThreadRandom),
        )
        .layer(cors_layer(vec!["https://trivia.example".to_string()]));
        let server = TestServer::new(app).unwrap();

        let allowed = server
            .get("/categories")
            .add_header(header::ORIGIN, HeaderValue::from_static("https://trivia.example"))
            .await;
        assert_eq!(
            allowed.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("https://trivia.example"))
        );

        let other = server
            .get("/categories")
            .add_header(header::ORIGIN, HeaderValue::from_static("https://elsewhere.example"))
            .await;
        assert!(other
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}

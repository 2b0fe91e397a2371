//! HTTP Middleware
//!
//! HTTP 状态码错误日志中间件

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 拦截 HTTP 响应，状态码为 4xx / 5xx 时记录日志（含耗时）
///
/// 业务错误的具体原因在 `ApiError::into_response()` 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::{delete, get},
        Router,
    };
    use tower::util::ServiceExt;

    async fn no_content() -> StatusCode {
        StatusCode::NO_CONTENT
    }

    async fn gone() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    async fn broken() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn router() -> Router {
        Router::new()
            .route("/books/1", delete(no_content))
            .route("/books/2", get(gone))
            .route("/broken", get(broken))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_passes_responses_through() {
        assert_eq!(status_of("DELETE", "/books/1").await, StatusCode::NO_CONTENT);
        assert_eq!(status_of("GET", "/books/2").await, StatusCode::NOT_FOUND);
        assert_eq!(
            status_of("GET", "/broken").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_method_not_allowed_passes_through() {
        assert_eq!(
            status_of("GET", "/books/1").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}

use std::sync::Arc;

use axum::extract::{FromRequest, Request, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde_json::json;
use tracing::{debug, error};

use crate::connector::api::Container;
use crate::domain::{DomainError, GenerationRequest, MISSING_PARAMETERS};

/// Generation input accepted either as JSON or as an urlencoded form.
pub struct GenerateBody(pub GenerationRequest);

impl<S> FromRequest<S> for GenerateBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let parsed = if is_form {
            Form::<GenerationRequest>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|e| e.body_text())
        } else {
            Json::<GenerationRequest>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|e| e.body_text())
        };

        parsed.map(GenerateBody).map_err(|detail| {
            debug!("Rejected generate_sql body: {detail}");
            error_response(
                StatusCode::BAD_REQUEST,
                &format!("{MISSING_PARAMETERS}: unreadable request body"),
            )
        })
    }
}

/// `POST /generate_sql`
pub async fn generate_sql(
    State(container): State<Arc<Container>>,
    headers: HeaderMap,
    GenerateBody(request): GenerateBody,
) -> Response {
    let use_case = container.generate_use_case();
    match use_case.execute(request).await {
        Ok(record) => query_response(record.sql_query(), wants_json(&headers)),
        Err(e) => domain_error_response(e),
    }
}

/// `GET /get_sql_query`
pub async fn get_sql_query(
    State(container): State<Arc<Container>>,
    headers: HeaderMap,
) -> Response {
    let use_case = container.latest_use_case();
    match use_case.require().await {
        Ok(record) => query_response(record.sql_query(), wants_json(&headers)),
        Err(e) => domain_error_response(e),
    }
}

pub(crate) fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

fn query_response(sql_query: &str, json: bool) -> Response {
    if json {
        Json(json!({ "sql_query": sql_query })).into_response()
    } else {
        sql_query.to_string().into_response()
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn domain_error_response(e: DomainError) -> Response {
    match e {
        DomainError::InvalidInput(msg) => error_response(StatusCode::BAD_REQUEST, &msg),
        DomainError::NotFound(msg) => error_response(StatusCode::NOT_FOUND, &msg),
        other => {
            error!("Request failed: {other}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn wants_json_reads_accept_header() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));

        headers.insert(ACCEPT, HeaderValue::from_static("text/plain"));
        assert!(!wants_json(&headers));

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain;q=0.5"),
        );
        assert!(wants_json(&headers));
    }

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let response = domain_error_response(DomainError::invalid_input("nope"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_maps_to_server_error() {
        let response = domain_error_response(DomainError::internal("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Standard API response envelope
///
/// `statusCode` usually mirrors the HTTP status; message-only envelopes
/// report 204 while being sent as 200 with a body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip)]
    status: StatusCode,
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    fn with_status(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status,
            status_code: status.as_u16(),
            message: message.into(),
            data,
        }
    }

    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::OK, message, Some(data))
    }

    /// Envelope for POST endpoints (201)
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::CREATED, message, Some(data))
    }
}

impl ApiResponse<()> {
    /// Message-only envelope (`statusCode` 204, sent as HTTP 200)
    pub fn no_content(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            status_code: StatusCode::NO_CONTENT.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_uses_camel_case_keys() {
        let body = serde_json::to_value(ApiResponse::created(vec![1, 2], "Created")).unwrap();
        assert_eq!(
            body,
            json!({ "statusCode": 201, "message": "Created", "data": [1, 2] })
        );
    }

    #[test]
    fn no_content_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::no_content("Deleted")).unwrap();
        assert_eq!(body, json!({ "statusCode": 204, "message": "Deleted" }));
    }

    #[test]
    fn response_status_follows_envelope() {
        let response = ApiResponse::created("x", "Created").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn no_content_envelope_is_sent_as_ok() {
        let response = ApiResponse::no_content("Deleted").into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

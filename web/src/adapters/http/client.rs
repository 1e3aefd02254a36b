//! Bills backend client
//!
//! REST over JSON, with receipt uploads sent as multipart.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{multipart, Client, RequestBuilder};
use serde::Deserialize;

use crate::domain::entities::{Bill, BillDraft, BillId, ReceiptUpload, Session, UploadedReceipt};
use crate::domain::ports::BillStore;
use crate::error::StoreError;

/// Implementation of the bill store over the backend's REST API
#[derive(Clone)]
pub struct HttpBillStore {
    http: Client,
    base_url: String,
    jwt: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpBillStore {
    pub fn new(base_url: &str, jwt: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            jwt,
        }
    }

    /// Same backend, acting with another token
    pub fn with_token(&self, jwt: Option<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            jwt,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.jwt {
            Some(jwt) => request.bearer_auth(jwt),
            None => request,
        }
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| StoreError::Deserialization(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body, status.canonical_reason().unwrap_or("error"));
            Err(StoreError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Message of an error response: the JSON `message` field, the raw body,
/// or the status reason when the body is empty
fn error_message(body: &str, fallback: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }
    let body = body.trim();
    if body.is_empty() {
        fallback.to_string()
    } else {
        body.to_string()
    }
}

#[async_trait]
impl BillStore for HttpBillStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let response = self
            .authorize(self.http.get(self.api_url("/bills")))
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn upload_receipt(&self, upload: ReceiptUpload) -> Result<UploadedReceipt, StoreError> {
        let mut part = multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| StoreError::Api {
                    status: 400,
                    message: e.to_string(),
                })?;
        }
        let form = multipart::Form::new()
            .part("file", part)
            .text("email", upload.email);

        let response = self
            .authorize(self.http.post(self.api_url("/bills")))
            .multipart(form)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn create(&self, draft: BillDraft) -> Result<Bill, StoreError> {
        let response = self
            .authorize(self.http.post(self.api_url("/bills")))
            .json(&draft)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn update(&self, id: &BillId, draft: BillDraft) -> Result<Bill, StoreError> {
        let response = self
            .authorize(self.http.patch(self.api_url(&format!(
                "/bills/{}",
                urlencoding::encode(&id.0)
            ))))
            .json(&draft)
            .send()
            .await?;

        self.handle_response(response).await
    }

    fn scoped(&self, session: &Session) -> Arc<dyn BillStore> {
        Arc::new(self.with_token(session.jwt.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let store = HttpBillStore::new("http://localhost:5678/", None);
        assert_eq!(store.api_url("/bills"), "http://localhost:5678/bills");
    }

    #[test]
    fn with_token_keeps_backend() {
        let store = HttpBillStore::new("http://localhost:5678", None);
        let scoped = store.with_token(Some("jwt".to_string()));

        assert_eq!(scoped.base_url, "http://localhost:5678");
        assert_eq!(scoped.jwt.as_deref(), Some("jwt"));
    }

    #[test]
    fn error_message_prefers_json_field() {
        assert_eq!(
            error_message(r#"{"message": "bill not found"}"#, "Not Found"),
            "bill not found"
        );
        assert_eq!(error_message("plain failure", "Bad Gateway"), "plain failure");
        assert_eq!(error_message("  ", "Bad Gateway"), "Bad Gateway");
    }

    #[tokio::test]
    async fn unreachable_backend_is_connection_error() {
        let store = HttpBillStore::new("http://127.0.0.1:1", None);

        let err = store.list().await.unwrap_err();

        assert!(matches!(err, StoreError::Request(_)));
        assert!(err.status().is_none());
    }
}

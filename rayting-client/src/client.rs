use rayting_catalog::Collection;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::{AnalyticsRow, SaveOutcome, parse_save_response, snippet};

/// HTTP client for the J-Rayting REST backend.
///
/// No request timeout is set: calls wait as long as the backend takes.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for `base_url` (e.g. `http://localhost:5001/api`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("rayting/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// `GET /<collection>`. With `bust_cache`, appends `?_t=<millis>` so
    /// intermediaries never serve a stale list.
    pub async fn list_items<T: DeserializeOwned>(
        &self,
        collection: Collection,
        bust_cache: bool,
    ) -> Result<Vec<T>, ClientError> {
        let mut req = self.http.get(self.url(collection.endpoint()));
        if bust_cache {
            let millis = chrono::Utc::now().timestamp_millis();
            req = req.query(&[("_t", millis.to_string())]);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: snippet(&text),
            });
        }

        let items: Vec<T> = serde_json::from_str(&text)?;
        log::debug!("Fetched {} {} from {}", items.len(), collection, self.base_url);
        Ok(items)
    }

    /// `GET /<collection>/<id>`.
    pub async fn get_item<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: i64,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("{}/{}", collection.endpoint(), id)))
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: snippet(&text),
            });
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// `POST /<collection>`.
    pub async fn create_item<B: Serialize + ?Sized>(
        &self,
        collection: Collection,
        body: &B,
    ) -> Result<SaveOutcome, ClientError> {
        let resp = self
            .http
            .post(self.url(collection.endpoint()))
            .json(body)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        parse_save_response(status, &text)
    }

    /// `PUT /<collection>/<id>`.
    pub async fn update_item<B: Serialize + ?Sized>(
        &self,
        collection: Collection,
        id: i64,
        body: &B,
    ) -> Result<SaveOutcome, ClientError> {
        let resp = self
            .http
            .put(self.url(&format!("{}/{}", collection.endpoint(), id)))
            .json(body)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        parse_save_response(status, &text)
    }

    /// `DELETE /<collection>/<id>`.
    pub async fn delete_item(&self, collection: Collection, id: i64) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("{}/{}", collection.endpoint(), id)))
            .send()
            .await?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: snippet(&text),
            });
        }
        Ok(())
    }

    /// Pre-aggregated analytics for one dimension.
    pub async fn analytics(
        &self,
        collection: Collection,
        dimension: &str,
    ) -> Result<Vec<AnalyticsRow>, ClientError> {
        let resp = self
            .http
            .get(self.url(&analytics_path(collection, dimension)))
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: snippet(&text),
            });
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Film analytics predate the other collections and live at the top level.
pub fn analytics_path(collection: Collection, dimension: &str) -> String {
    let dimension = dimension.trim().trim_start_matches("by-");
    match collection {
        Collection::Films => format!("analytics/by-{dimension}"),
        other => format!("analytics/{}/by-{dimension}", other.endpoint()),
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;

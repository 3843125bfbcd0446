use crate::api::error::{status_error, ApiError};
use crate::api::models::{ConnectionReport, DeleteOutcome, Person, PersonCount, PersonPayload};
use reqwest::{Client, Response};
use tracing::debug;

/// Stateless client for the persons REST backend. The base URL points at the
/// persons collection; all paths are resolved under it.
#[derive(Clone)]
pub struct PersonClient {
    client: Client,
    base_url: String,
}

impl PersonClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List every person: `GET /persons`
    pub async fn list(&self) -> Result<Vec<Person>, ApiError> {
        debug!("GET {}", self.base_url);
        let response = self.client.get(&self.base_url).send().await?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Fetch one person: `GET /persons/{id}`
    pub async fn get(&self, id: i64) -> Result<Person, ApiError> {
        let url = format!("{}/{}", self.base_url, id);
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else if response.status() == 404 {
            Err(ApiError::NotFound { id })
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Search by display name: `GET /persons/search?name=`
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Person>, ApiError> {
        let url = format!("{}/search", self.base_url);
        debug!("GET {url}?name={name}");
        let response = self
            .client
            .get(&url)
            .query(&[("name", name)])
            .send()
            .await?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Search by department: `GET /persons/department?name=`
    pub async fn search_by_department(&self, department: &str) -> Result<Vec<Person>, ApiError> {
        let url = format!("{}/department", self.base_url);
        debug!("GET {url}?name={department}");
        let response = self
            .client
            .get(&url)
            .query(&[("name", department)])
            .send()
            .await?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Create a person: `POST /persons`. The backend assigns the id.
    pub async fn create(&self, payload: &PersonPayload) -> Result<Person, ApiError> {
        debug!("POST {}", self.base_url);
        let response = self
            .client
            .post(&self.base_url)
            .json(payload)
            .send()
            .await?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Full replacement of an existing person: `PUT /persons/{id}`
    pub async fn update(&self, id: i64, payload: &PersonPayload) -> Result<Person, ApiError> {
        let url = format!("{}/{}", self.base_url, id);
        debug!("PUT {url}");
        let response = self.client.put(&url).json(payload).send().await?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Delete a person: `DELETE /persons/{id}`. Returns the server's JSON
    /// body when it sends one, otherwise a synthesized success.
    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome, ApiError> {
        let url = format!("{}/{}", self.base_url, id);
        debug!("DELETE {url}");
        let response = self.client.delete(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));

        if is_json {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Ok(DeleteOutcome::synthesized())
        }
    }

    /// Record count: `GET /persons/count`
    pub async fn count(&self) -> Result<PersonCount, ApiError> {
        let url = format!("{}/count", self.base_url);
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Self::parse_json(response).await
        } else {
            Err(Self::error_from(response).await)
        }
    }

    /// Connectivity check: lists the collection and reports what it found
    pub async fn test_connection(&self) -> Result<ConnectionReport, ApiError> {
        let persons = self.list().await?;

        Ok(ConnectionReport {
            persons_found: persons.len(),
            message: format!("Connection successful! Found {} persons.", persons.len()),
        })
    }

    /// Decode a success body, keeping body-shape failures distinct from
    /// transport failures
    async fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        match response.text().await {
            Ok(body) => status_error(status, &body),
            Err(e) => ApiError::Transport(e),
        }
    }
}

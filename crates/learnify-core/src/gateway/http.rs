//! HTTP implementation of the persistence gateways.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{multipart, Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize};

use super::{CoursePersistenceGateway, ProfileGateway};
use crate::{
    error::{HttpResultExt, LearnifyError, Result},
    models::{CoursePlan, CourseSummary, ProfileUpdate, UserProfile},
    session::SessionContext,
};

/// Gateway talking to the course REST API.
///
/// Every request carries `Authorization: Bearer <token>` when the session
/// context has a token. Path parameters such as course IDs are always
/// encoded as a single path segment.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: Url,
    token: Option<String>,
    client: Client,
}

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

impl HttpGateway {
    /// Creates a gateway from an explicit session context.
    ///
    /// # Errors
    ///
    /// Returns `LearnifyError::InvalidInput` when the API URL cannot serve
    /// as a base for endpoint paths.
    pub fn new(context: &SessionContext) -> Result<Self> {
        let base_url = Url::parse(context.api_url.trim_end_matches('/'))
            .map_err(|e| LearnifyError::invalid_input("api_url").with_reason(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(LearnifyError::invalid_input("api_url")
                .with_reason(format!("'{base_url}' is not an http(s) base URL")));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .http_context("Failed to build HTTP client")?;

        Ok(Self {
            base_url,
            token: context.token.clone(),
            client,
        })
    }

    /// The API base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let mut url = self.base_url.clone();
        // Base URLs that cannot take path segments are rejected in `new`.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        debug!("{method} {url}");
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Turns non-success responses into errors.
    ///
    /// The body is used as the message when it is a plain string or a JSON
    /// object with a `message` field; otherwise `fallback` is used.
    async fn check(response: Response, fallback: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(LearnifyError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| fallback.to_string());
        warn!("API returned {status}: {message}");
        Err(LearnifyError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Decodes a JSON response body.
    async fn decode<T: DeserializeOwned>(response: Response, message: &str) -> Result<T> {
        let body = response.text().await.http_context(message)?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Validates a course ID used as a path segment.
fn course_segment(id: &str) -> Result<&str> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(LearnifyError::invalid_input("course_id")
            .with_reason(format!("'{id}' is not a valid course ID")));
    }
    Ok(id)
}

/// Extracts a human readable message from an error response body.
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(message)) => Some(message),
        Ok(serde_json::Value::Object(object)) => object
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(String::from),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    }
}

#[async_trait]
impl CoursePersistenceGateway for HttpGateway {
    async fn fetch_course(&self, id: &str) -> Result<CoursePlan> {
        let response = self
            .request(Method::GET, &["courses", course_segment(id)?])
            .send()
            .await
            .http_context("Failed to fetch course")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LearnifyError::CourseNotFound { id: id.to_string() });
        }

        let response = Self::check(response, "Failed to fetch course").await?;
        Self::decode(response, "Failed to read course").await
    }

    async fn persist_course(&self, plan: &CoursePlan) -> Result<()> {
        let response = self
            .request(Method::PUT, &["courses", course_segment(&plan.id)?])
            .json(plan)
            .send()
            .await
            .http_context("Failed to update course plan")?;

        Self::check(response, "Failed to update course plan").await?;
        Ok(())
    }

    async fn list_courses(&self) -> Result<Vec<CourseSummary>> {
        let response = self
            .request(Method::GET, &["courses", "mycourses"])
            .send()
            .await
            .http_context("Failed to fetch courses")?;

        let response = Self::check(response, "Failed to fetch courses").await?;
        Self::decode(response, "Failed to read courses").await
    }
}

#[async_trait]
impl ProfileGateway for HttpGateway {
    async fn fetch_profile(&self) -> Result<UserProfile> {
        let response = self
            .request(Method::GET, &["users", "profile"])
            .send()
            .await
            .http_context("Failed to fetch profile")?;

        let response = Self::check(response, "Failed to fetch profile").await?;
        Self::decode(response, "Failed to read profile").await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        let response = self
            .request(Method::PUT, &["users", "profile"])
            .json(update)
            .send()
            .await
            .http_context("Failed to update profile")?;

        Self::check(response, "Failed to update profile").await?;
        Ok(())
    }

    async fn upload_picture(&self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .request(Method::POST, &["profile"])
            .multipart(form)
            .send()
            .await
            .http_context("Failed to upload image")?;

        let response = Self::check(response, "Failed to upload image").await?;
        let uploaded: UploadResponse = Self::decode(response, "Failed to read upload response").await?;
        Ok(uploaded.url)
    }
}

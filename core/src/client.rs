//! Stateless HTTP request builder and response parser for the Pacemaker API.
//!
//! # Design
//! `PacemakerClient` holds only a `base_url` and carries no mutable state
//! between calls. Each endpoint is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Several endpoints share a response shape (`/users` and `/friendslist` both
//! return users; follow, unfollow and message all return a confirmation
//! string), so they share a parser.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Activity, Location, User};

/// Synchronous, stateless request builder for the Pacemaker API.
#[derive(Debug, Clone)]
pub struct PacemakerClient {
    base_url: String,
}

impl PacemakerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    // --- users ---

    pub fn build_list_users(&self) -> HttpRequest {
        self.get(format!("{}/users", self.base_url))
    }

    pub fn build_create_user(&self, user: &User) -> Result<HttpRequest, ApiError> {
        self.post_json(format!("{}/users", self.base_url), user)
    }

    // --- activities ---

    pub fn build_list_activities(&self, user_id: &str) -> HttpRequest {
        self.get(format!("{}/activities", self.user_url(user_id)))
    }

    pub fn build_create_activity(
        &self,
        user_id: &str,
        activity: &Activity,
    ) -> Result<HttpRequest, ApiError> {
        self.post_json(format!("{}/activities", self.user_url(user_id)), activity)
    }

    pub fn build_get_activity(&self, user_id: &str, activity_id: &str) -> HttpRequest {
        self.get(self.activity_url(user_id, activity_id))
    }

    // --- locations ---

    pub fn build_list_locations(&self, user_id: &str, activity_id: &str) -> HttpRequest {
        self.get(format!("{}/locations", self.activity_url(user_id, activity_id)))
    }

    pub fn build_add_location(
        &self,
        user_id: &str,
        activity_id: &str,
        location: &Location,
    ) -> Result<HttpRequest, ApiError> {
        self.post_json(
            format!("{}/locations", self.activity_url(user_id, activity_id)),
            location,
        )
    }

    // --- friends ---

    /// Following is a GET on the friend resource; unfollowing is a POST to
    /// the same path.
    pub fn build_follow(&self, user_id: &str, email: &str) -> HttpRequest {
        self.get(self.friend_url(user_id, email))
    }

    pub fn build_unfollow(&self, user_id: &str, email: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: self.friend_url(user_id, email),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list_friends(&self, user_id: &str) -> HttpRequest {
        self.get(format!("{}/friendslist", self.user_url(user_id)))
    }

    // --- messages ---

    /// The message text travels as a JSON string body.
    pub fn build_send_message(
        &self,
        user_id: &str,
        email: &str,
        text: &str,
    ) -> Result<HttpRequest, ApiError> {
        self.post_json(
            format!(
                "{}/message/{}",
                self.user_url(user_id),
                urlencoding::encode(email)
            ),
            &text,
        )
    }

    pub fn build_list_messages(&self, user_id: &str) -> HttpRequest {
        self.get(format!("{}/retrivemessage", self.user_url(user_id)))
    }

    // --- parsers ---

    /// Parses `GET /users` and `GET /users/{id}/friendslist`.
    pub fn parse_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        parse_json(response)
    }

    pub fn parse_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        parse_json(response)
    }

    pub fn parse_activities(&self, response: HttpResponse) -> Result<Vec<Activity>, ApiError> {
        parse_json(response)
    }

    pub fn parse_activity(&self, response: HttpResponse) -> Result<Activity, ApiError> {
        parse_json(response)
    }

    pub fn parse_locations(&self, response: HttpResponse) -> Result<Vec<Location>, ApiError> {
        parse_json(response)
    }

    /// Only the status matters; the echoed location is discarded unread.
    pub fn parse_add_location(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// Parses the acknowledgement returned by follow, unfollow and message.
    /// A JSON string body is unquoted; anything else is returned verbatim.
    pub fn parse_confirmation(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response)?;
        Ok(serde_json::from_str::<String>(&response.body).unwrap_or(response.body))
    }

    pub fn parse_messages(&self, response: HttpResponse) -> Result<Vec<String>, ApiError> {
        parse_json(response)
    }

    // --- helpers ---

    fn user_url(&self, user_id: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(user_id))
    }

    fn activity_url(&self, user_id: &str, activity_id: &str) -> String {
        format!(
            "{}/activities/{}",
            self.user_url(user_id),
            urlencoding::encode(activity_id)
        )
    }

    fn friend_url(&self, user_id: &str, email: &str) -> String {
        format!(
            "{}/friends/{}",
            self.user_url(user_id),
            urlencoding::encode(email)
        )
    }

    fn get(&self, path: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn post_json<B: Serialize + ?Sized>(
        &self,
        path: String,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(body).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

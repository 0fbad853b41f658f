//! Blocking Pacemaker API: one method per remote operation.
//!
//! Every method builds a request with `PacemakerClient`, executes it once on
//! the configured `Transport` and parses the response. There are no retries;
//! the first failure is returned to the caller.

use tracing::debug;

use crate::client::PacemakerClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::sort::sort_activities;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Activity, Location, User};

pub struct PacemakerApi<T = UreqTransport> {
    client: PacemakerClient,
    transport: T,
}

impl PacemakerApi<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }
}

impl<T: Transport> PacemakerApi<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: PacemakerClient::new(base_url),
            transport,
        }
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }

    // --- users ---

    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.send(self.client.build_list_users())?;
        self.client.parse_users(response)
    }

    pub fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let user = User::new(first_name, last_name, email, password);
        let response = self.send(self.client.build_create_user(&user)?)?;
        self.client.parse_user(response)
    }

    /// Fetches every user and returns the first whose email matches exactly.
    /// A failed fetch is an error, not an empty result.
    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let users = self.list_users()?;
        Ok(users.into_iter().find(|user| user.email == email))
    }

    /// The service has no delete endpoint. No request is issued.
    pub fn delete_user(&self, user_id: &str) -> Option<User> {
        debug!(user_id, "delete_user is not supported by the service");
        None
    }

    /// The service has no delete endpoint. No request is issued.
    pub fn delete_all_users(&self) {
        debug!("delete_all_users is not supported by the service");
    }

    // --- activities ---

    pub fn list_activities(&self, user_id: &str) -> Result<Vec<Activity>, ApiError> {
        let response = self.send(self.client.build_list_activities(user_id))?;
        self.client.parse_activities(response)
    }

    /// Fetches a user's activities and orders them by `type`, `location` or
    /// `distance`. Any other key returns the fetched order unchanged.
    pub fn list_activities_sorted(
        &self,
        user_id: &str,
        sort_by: &str,
    ) -> Result<Vec<Activity>, ApiError> {
        let mut activities = self.list_activities(user_id)?;
        sort_activities(&mut activities, sort_by);
        Ok(activities)
    }

    pub fn get_activity(&self, user_id: &str, activity_id: &str) -> Result<Activity, ApiError> {
        let response = self.send(self.client.build_get_activity(user_id, activity_id))?;
        self.client.parse_activity(response)
    }

    pub fn add_activity(
        &self,
        user_id: &str,
        kind: &str,
        location: &str,
        distance: f64,
    ) -> Result<Activity, ApiError> {
        let activity = Activity::new(kind, location, distance);
        let response = self.send(self.client.build_create_activity(user_id, &activity)?)?;
        self.client.parse_activity(response)
    }

    // --- locations ---

    pub fn list_locations(
        &self,
        user_id: &str,
        activity_id: &str,
    ) -> Result<Vec<Location>, ApiError> {
        let response = self.send(self.client.build_list_locations(user_id, activity_id))?;
        self.client.parse_locations(response)
    }

    pub fn add_location(
        &self,
        user_id: &str,
        activity_id: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), ApiError> {
        let location = Location::new(latitude, longitude);
        let request = self
            .client
            .build_add_location(user_id, activity_id, &location)?;
        let response = self.send(request)?;
        self.client.parse_add_location(response)
    }

    // --- friends ---

    pub fn follow(&self, user_id: &str, email: &str) -> Result<String, ApiError> {
        let response = self.send(self.client.build_follow(user_id, email))?;
        self.client.parse_confirmation(response)
    }

    pub fn unfollow(&self, user_id: &str, email: &str) -> Result<String, ApiError> {
        let response = self.send(self.client.build_unfollow(user_id, email))?;
        self.client.parse_confirmation(response)
    }

    pub fn list_friends(&self, user_id: &str) -> Result<Vec<User>, ApiError> {
        let response = self.send(self.client.build_list_friends(user_id))?;
        self.client.parse_users(response)
    }

    // --- messages ---

    pub fn send_message(&self, user_id: &str, email: &str, text: &str) -> Result<String, ApiError> {
        let response = self.send(self.client.build_send_message(user_id, email, text)?)?;
        self.client.parse_confirmation(response)
    }

    pub fn list_messages(&self, user_id: &str) -> Result<Vec<String>, ApiError> {
        let response = self.send(self.client.build_list_messages(user_id))?;
        self.client.parse_messages(response)
    }
}

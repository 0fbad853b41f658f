//! Best-effort facade over `PacemakerApi`.
//!
//! Every failure is logged at `warn` and turned into `None`, so "the request
//! failed" and "nothing came back" look the same to the caller. Use
//! `PacemakerApi` directly when the difference matters.

use tracing::warn;

use crate::api::PacemakerApi;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Activity, Location, User};

pub struct LenientApi<T = UreqTransport> {
    inner: PacemakerApi<T>,
}

fn suppress<R>(operation: &'static str, result: Result<R, ApiError>) -> Option<R> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(operation, %error, "pacemaker request failed");
            None
        }
    }
}

impl LenientApi<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: PacemakerApi::new(base_url),
        }
    }
}

impl<T: Transport> LenientApi<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            inner: PacemakerApi::with_transport(base_url, transport),
        }
    }

    pub fn list_users(&self) -> Option<Vec<User>> {
        suppress("list_users", self.inner.list_users())
    }

    pub fn create_user(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Option<User> {
        suppress(
            "create_user",
            self.inner
                .create_user(first_name, last_name, email, password),
        )
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        suppress("find_user_by_email", self.inner.find_user_by_email(email)).flatten()
    }

    pub fn delete_user(&self, user_id: &str) -> Option<User> {
        self.inner.delete_user(user_id)
    }

    pub fn delete_all_users(&self) {
        self.inner.delete_all_users()
    }

    pub fn list_activities(&self, user_id: &str) -> Option<Vec<Activity>> {
        suppress("list_activities", self.inner.list_activities(user_id))
    }

    /// A failed fetch yields `None`, not an unsorted or empty list.
    pub fn list_activities_sorted(&self, user_id: &str, sort_by: &str) -> Option<Vec<Activity>> {
        suppress(
            "list_activities_sorted",
            self.inner.list_activities_sorted(user_id, sort_by),
        )
    }

    pub fn get_activity(&self, user_id: &str, activity_id: &str) -> Option<Activity> {
        suppress("get_activity", self.inner.get_activity(user_id, activity_id))
    }

    pub fn add_activity(
        &self,
        user_id: &str,
        kind: &str,
        location: &str,
        distance: f64,
    ) -> Option<Activity> {
        suppress(
            "add_activity",
            self.inner.add_activity(user_id, kind, location, distance),
        )
    }

    pub fn list_locations(&self, user_id: &str, activity_id: &str) -> Option<Vec<Location>> {
        suppress("list_locations", self.inner.list_locations(user_id, activity_id))
    }

    pub fn add_location(&self, user_id: &str, activity_id: &str, latitude: f64, longitude: f64) {
        suppress(
            "add_location",
            self.inner
                .add_location(user_id, activity_id, latitude, longitude),
        );
    }

    pub fn follow(&self, user_id: &str, email: &str) -> Option<String> {
        suppress("follow", self.inner.follow(user_id, email))
    }

    pub fn unfollow(&self, user_id: &str, email: &str) -> Option<String> {
        suppress("unfollow", self.inner.unfollow(user_id, email))
    }

    pub fn list_friends(&self, user_id: &str) -> Option<Vec<User>> {
        suppress("list_friends", self.inner.list_friends(user_id))
    }

    pub fn send_message(&self, user_id: &str, email: &str, text: &str) -> Option<String> {
        suppress("send_message", self.inner.send_message(user_id, email, text))
    }

    pub fn list_messages(&self, user_id: &str) -> Option<Vec<String>> {
        suppress("list_messages", self.inner.list_messages(user_id))
    }
}

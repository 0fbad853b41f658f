//! Domain records exchanged with the Pacemaker service.
//!
//! # Design
//! Wire names are camelCase. The server assigns `id` values on creation and
//! echoes them back; outgoing bodies omit `id` when it is unset. The
//! mock-server crate defines its own copies of these shapes so integration
//! tests catch schema drift.

use serde::{Deserialize, Serialize};

/// A registered user. `email` is the natural key used by the friend and
/// messaging endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl User {
    pub fn new(first_name: &str, last_name: &str, email: &str, password: &str) -> Self {
        Self {
            id: None,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// An activity recorded for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub distance: f64,
}

impl Activity {
    pub fn new(kind: &str, location: &str, distance: f64) -> Self {
        Self {
            id: None,
            kind: kind.to_string(),
            location: location.to_string(),
            distance,
        }
    }
}

/// A GPS fix belonging to one activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub distance: f64,
}

#[derive(Deserialize)]
pub struct CreateActivity {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub distance: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Default)]
pub struct Store {
    users: Vec<User>,
    activities: HashMap<String, Vec<Activity>>,
    locations: HashMap<String, Vec<Location>>,
    following: HashMap<String, Vec<String>>,
    inboxes: HashMap<String, Vec<String>>,
}

impl Store {
    fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn has_email(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }

    fn activity(&self, user_id: &str, activity_id: &str) -> Option<&Activity> {
        self.activities
            .get(user_id)?
            .iter()
            .find(|a| a.id == activity_id)
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}/activities",
            get(list_activities).post(create_activity),
        )
        .route("/users/{id}/activities/{activity_id}", get(get_activity))
        .route(
            "/users/{id}/activities/{activity_id}/locations",
            get(list_locations).post(add_location),
        )
        .route("/users/{id}/friends/{email}", get(follow).post(unfollow))
        .route("/users/{id}/friendslist", get(list_friends))
        .route("/users/{id}/message/{email}", post(send_message))
        .route("/users/{id}/retrivemessage", get(list_messages))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "pacemaker mock server listening");
    }
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    Json(db.read().await.users.clone())
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<CreateUser>,
) -> (StatusCode, Json<User>) {
    let user = User {
        id: Uuid::new_v4().to_string(),
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        password: input.password,
    };
    debug!(id = %user.id, email = %user.email, "user created");
    db.write().await.users.push(user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn list_activities(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Activity>>, StatusCode> {
    let store = db.read().await;
    store.user(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(store.activities.get(&id).cloned().unwrap_or_default()))
}

async fn create_activity(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<CreateActivity>,
) -> Result<(StatusCode, Json<Activity>), StatusCode> {
    let mut store = db.write().await;
    store.user(&id).ok_or(StatusCode::NOT_FOUND)?;
    let activity = Activity {
        id: Uuid::new_v4().to_string(),
        kind: input.kind,
        location: input.location,
        distance: input.distance,
    };
    debug!(user = %id, activity = %activity.id, "activity created");
    store
        .activities
        .entry(id)
        .or_default()
        .push(activity.clone());
    Ok((StatusCode::CREATED, Json(activity)))
}

async fn get_activity(
    State(db): State<Db>,
    Path((id, activity_id)): Path<(String, String)>,
) -> Result<Json<Activity>, StatusCode> {
    let store = db.read().await;
    store
        .activity(&id, &activity_id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_locations(
    State(db): State<Db>,
    Path((id, activity_id)): Path<(String, String)>,
) -> Result<Json<Vec<Location>>, StatusCode> {
    let store = db.read().await;
    store
        .activity(&id, &activity_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(
        store
            .locations
            .get(&activity_id)
            .cloned()
            .unwrap_or_default(),
    ))
}

async fn add_location(
    State(db): State<Db>,
    Path((id, activity_id)): Path<(String, String)>,
    Json(location): Json<Location>,
) -> Result<(StatusCode, Json<Location>), StatusCode> {
    let mut store = db.write().await;
    store
        .activity(&id, &activity_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    store
        .locations
        .entry(activity_id)
        .or_default()
        .push(location);
    Ok((StatusCode::CREATED, Json(location)))
}

/// Idempotent: following someone twice keeps a single entry.
async fn follow(
    State(db): State<Db>,
    Path((id, email)): Path<(String, String)>,
) -> Result<Json<String>, StatusCode> {
    let mut store = db.write().await;
    store.user(&id).ok_or(StatusCode::NOT_FOUND)?;
    if !store.has_email(&email) {
        return Err(StatusCode::NOT_FOUND);
    }
    let friends = store.following.entry(id).or_default();
    if !friends.contains(&email) {
        friends.push(email.clone());
    }
    Ok(Json(format!("now following {email}")))
}

async fn unfollow(
    State(db): State<Db>,
    Path((id, email)): Path<(String, String)>,
) -> Result<Json<String>, StatusCode> {
    let mut store = db.write().await;
    store.user(&id).ok_or(StatusCode::NOT_FOUND)?;
    let friends = store.following.entry(id).or_default();
    let before = friends.len();
    friends.retain(|f| f != &email);
    if friends.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(format!("unfollowed {email}")))
}

async fn list_friends(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Vec<User>>, StatusCode> {
    let store = db.read().await;
    store.user(&id).ok_or(StatusCode::NOT_FOUND)?;
    let emails = store.following.get(&id).cloned().unwrap_or_default();
    let friends = emails
        .iter()
        .filter_map(|email| store.users.iter().find(|u| &u.email == email))
        .cloned()
        .collect();
    Ok(Json(friends))
}

/// Messages may only go to someone the sender follows; they land in the
/// recipient's inbox.
async fn send_message(
    State(db): State<Db>,
    Path((id, email)): Path<(String, String)>,
    Json(text): Json<String>,
) -> Result<Json<String>, StatusCode> {
    let mut store = db.write().await;
    store.user(&id).ok_or(StatusCode::NOT_FOUND)?;
    let follows = store
        .following
        .get(&id)
        .is_some_and(|friends| friends.contains(&email));
    if !follows {
        return Err(StatusCode::NOT_FOUND);
    }
    debug!(from = %id, to = %email, "message delivered");
    store.inboxes.entry(email.clone()).or_default().push(text);
    Ok(Json(format!("message sent to {email}")))
}

async fn list_messages(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>, StatusCode> {
    let store = db.read().await;
    let user = store.user(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(
        store.inboxes.get(&user.email).cloned().unwrap_or_default(),
    ))
}

/// Authentication endpoints
///
/// This module provides the account endpoints:
/// - Signup (registration)
/// - Login (credential check)
///
/// # Endpoints
///
/// - `POST /api/signup` — register a new user
/// - `POST /api/login` — verify credentials and return the profile
///
/// There are no sessions or tokens: a successful login simply hands the
/// profile back, and the client passes the user id with every task
/// request. Credentials are compared as plain text against the stored
/// value — a documented weakness of this system, not something to build
/// on (see DESIGN.md).

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use taskdeck_shared::models::user::{CreateUser, User};

/// Signup request
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// The public slice of a user account — everything except the credential
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
        }
    }
}

/// Response for both auth endpoints
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserProfile,
}

/// Extracts a required field, treating a blank string the same as a
/// missing key.
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Signup endpoint handler
///
/// # Endpoint
///
/// ```text
/// POST /api/signup
/// Content-Type: application/json
///
/// {
///   "name": "Ada",
///   "email": "ada@example.com",
///   "phone": "555-0100",
///   "password": "secret"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing name/email/password, or email already
///   registered
/// - `500 Internal Server Error`: store failure
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let (Some(name), Some(email), Some(password)) = (
        required(req.name),
        required(req.email),
        required(req.password),
    ) else {
        return Err(ApiError::BadRequest(
            "Name, Email, and Password are required".to_string(),
        ));
    };

    // Defensive duplicate check; the unique index still backstops a
    // concurrent signup that slips in between check and insert.
    if User::find_by_email(&state.db, &email).await?.is_some() {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let user = User::create(
        &state.db,
        CreateUser {
            name,
            email,
            phone: req.phone,
            password,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            user: user.into(),
        }),
    ))
}

/// Login endpoint handler
///
/// Succeeds only when the email exists and the password matches exactly.
/// Unknown email and wrong password produce the same answer, so the
/// endpoint cannot be used to enumerate accounts.
///
/// # Errors
///
/// - `400 Bad Request`: missing email or password
/// - `401 Unauthorized`: no match
/// - `500 Internal Server Error`: store failure
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (Some(email), Some(password)) = (required(req.email), required(req.password)) else {
        return Err(ApiError::BadRequest(
            "Email and Password are required".to_string(),
        ));
    };

    let user = User::find_by_email(&state.db, &email).await?;

    match user {
        Some(user) if user.password == password => {
            tracing::info!(user_id = user.id, "Login successful");
            Ok(Json(AuthResponse {
                message: "Login successful".to_string(),
                user: user.into(),
            }))
        }
        _ => Err(ApiError::Unauthorized("Invalid credentials".to_string())),
    }
}

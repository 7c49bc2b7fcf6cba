use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};

use mergington::data::{ActivityDirectory, SignupMessage};
use mergington::log;
use mergington::name::{ActivityName, Email};
use mergington::serde::Deserialize;

use crate::handlers::error::ApiError;
use crate::services::ActivityService;

#[derive(Debug, Deserialize)]
#[serde(crate = "mergington::serde")]
pub struct SignupQuery {
    pub email: Email,
}

/// Handler to list every activity
pub async fn list(
    State(state): State<Arc<crate::AppState>>,
) -> Result<Json<ActivityDirectory>, ApiError> {
    let directory = state.activities.list().await?;
    Ok(Json(directory))
}

/// Handler to sign a student up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<ActivityName>,
    Query(SignupQuery { email }): Query<SignupQuery>,
) -> Result<Json<SignupMessage>, ApiError> {
    match state.activities.signup(activity_name.as_str(), &email).await {
        Ok(()) => {
            log::info!("Signed up {} for {}", email, activity_name);
            Ok(Json(SignupMessage::signed_up(&email, &activity_name)))
        }
        Err(err) => {
            log::debug!("Signup of {} for {} rejected: {}", email, activity_name, err);
            Err(err.into())
        }
    }
}

/// Handler to remove a student from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<ActivityName>,
    Query(SignupQuery { email }): Query<SignupQuery>,
) -> Result<Json<SignupMessage>, ApiError> {
    match state
        .activities
        .unregister(activity_name.as_str(), &email)
        .await
    {
        Ok(()) => {
            log::info!("Removed {} from {}", email, activity_name);
            Ok(Json(SignupMessage::removed(&email, &activity_name)))
        }
        Err(err) => {
            log::debug!("Removal of {} from {} rejected: {}", email, activity_name, err);
            Err(err.into())
        }
    }
}

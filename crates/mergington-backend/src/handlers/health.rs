use std::sync::Arc;

use axum::{Json, extract::State};
use mergington::data::{HealthResponse, HealthStatus, ServiceInfo, UptimeInfo};
use mergington::log;

use crate::services::ActivityService;

fn human_readable_uptime(uptime: chrono::TimeDelta) -> String {
    let uptime_seconds = uptime.num_seconds();
    let days = uptime.num_days();
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn service_uptime(started_at: chrono::DateTime<chrono::Utc>) -> UptimeInfo {
    let uptime = chrono::Utc::now().signed_duration_since(started_at);
    UptimeInfo {
        seconds: uptime.num_seconds(),
        human: human_readable_uptime(uptime),
    }
}

pub async fn get(State(state): State<Arc<crate::AppState>>) -> Json<HealthResponse> {
    let directory = state.activities.list().await.unwrap_or_default();
    let participant_count = directory
        .0
        .iter()
        .map(|(_, activity)| activity.participants.len())
        .sum();

    let health_response = HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now().to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: service_uptime(state.started_at),
        services: ServiceInfo {
            activities: "up".to_string(),
            activity_count: directory.len(),
            participant_count,
        },
    };

    log::debug!("Health check: {:?}", health_response);

    Json(health_response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn human_uptime_drops_leading_zero_units() {
        assert_eq!(human_readable_uptime(TimeDelta::seconds(4)), "4s");
        assert_eq!(human_readable_uptime(TimeDelta::seconds(184)), "3m 4s");
        assert_eq!(human_readable_uptime(TimeDelta::seconds(7384)), "2h 3m 4s");
        assert_eq!(
            human_readable_uptime(TimeDelta::seconds(86400 + 7384)),
            "1d 2h 3m 4s"
        );
    }

    #[test]
    fn human_uptime_keeps_inner_zero_units() {
        assert_eq!(human_readable_uptime(TimeDelta::seconds(3600)), "1h 0m 0s");
    }
}

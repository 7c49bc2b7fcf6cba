use std::path::Path;

use mergington::data::{Activity, ActivityDirectory};
use mergington::errors::{Report, WrapErr};
use mergington::log;

/// The activities the school offers when no seed file is configured.
pub fn default_activities() -> ActivityDirectory {
    ActivityDirectory(vec![
        (
            "Chess Club".into(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".into(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".into(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team".into(),
            Activity::new(
                "Practice and compete in inter-school basketball games",
                "Wednesdays and Fridays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(["james@mergington.edu"]),
        ),
        (
            "Soccer Club".into(),
            Activity::new(
                "Train in soccer skills and play friendly matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["lucas@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Club".into(),
            Activity::new(
                "Explore painting, drawing, and sculpture",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["ava@mergington.edu"]),
        ),
        (
            "Drama Club".into(),
            Activity::new(
                "Act, direct, and produce school plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["ella@mergington.edu", "liam@mergington.edu"]),
        ),
        (
            "Math Club".into(),
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["noah@mergington.edu"]),
        ),
        (
            "Debate Team".into(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["isabella@mergington.edu", "ethan@mergington.edu"]),
        ),
    ])
}

/// Reads a seed file shaped like the `GET /activities` response.
pub async fn load_seed_file(path: &Path) -> Result<ActivityDirectory, Report> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("Failed to read seed file {}", path.display()))?;

    let directory: ActivityDirectory = mergington::serde_json::from_str(&contents)
        .wrap_err_with(|| format!("Invalid seed file {}", path.display()))?;

    for (name, activity) in &directory.0 {
        if activity.participants.len() > activity.max_participants {
            log::warn!(
                "Seeded activity {} is over capacity ({}/{}); it will refuse new signups",
                name,
                activity.participants.len(),
                activity.max_participants
            );
        }
    }

    Ok(directory)
}

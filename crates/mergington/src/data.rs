//! Data structures exchanged between the backend and its clients.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::SignupError;
use crate::name::{ActivityName, Email};

/// An extracurricular activity and the students signed up for it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Signup order is preserved.
    pub participants: Vec<Email>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, E>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Email>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_participant(&self, email: &Email) -> bool {
        self.participants.contains(email)
    }

    /// Returns the first email that appears more than once in the list.
    pub fn duplicate_participant(&self) -> Option<&Email> {
        self.participants
            .iter()
            .enumerate()
            .find(|(i, email)| self.participants[..*i].contains(*email))
            .map(|(_, email)| email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }

    /// Appends `email` to the participant list.
    ///
    /// A duplicate is rejected before capacity is considered, so a student who
    /// is already in a full activity is told they are signed up.
    pub fn add_participant(&mut self, email: Email) -> Result<(), SignupError> {
        if self.has_participant(&email) {
            return Err(SignupError::AlreadySignedUp);
        }
        if self.is_full() {
            return Err(SignupError::ActivityFull);
        }
        self.participants.push(email);
        Ok(())
    }

    pub fn remove_participant(&mut self, email: &Email) -> Result<(), SignupError> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(SignupError::NotSignedUp)?;
        self.participants.remove(position);
        Ok(())
    }
}

/// Every activity keyed by name, in the order the store was seeded.
///
/// Serializes as a JSON object. Deserializing keeps the object's key order and
/// rejects a name that appears twice or an activity listing a participant
/// twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDirectory(pub Vec<(ActivityName, Activity)>);

impl ActivityDirectory {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, activity)| activity)
    }

    pub fn names(&self) -> impl Iterator<Item = &ActivityName> {
        self.0.iter().map(|(name, _)| name)
    }
}

impl IntoIterator for ActivityDirectory {
    type Item = (ActivityName, Activity);
    type IntoIter = std::vec::IntoIter<(ActivityName, Activity)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for ActivityDirectory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DirectoryVisitor;

        impl<'de> Visitor<'de> for DirectoryVisitor {
            type Value = ActivityDirectory;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity names to activities")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(ActivityName, Activity)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, activity)) =
                    access.next_entry::<ActivityName, Activity>()?
                {
                    if entries.iter().any(|(existing, _)| *existing == name) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate activity `{name}`"
                        )));
                    }
                    if let Some(email) = activity.duplicate_participant() {
                        return Err(serde::de::Error::custom(format!(
                            "`{email}` is listed twice in activity `{name}`"
                        )));
                    }
                    entries.push((name, activity));
                }
                Ok(ActivityDirectory(entries))
            }
        }

        deserializer.deserialize_map(DirectoryVisitor)
    }
}

/// Success body of the signup endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SignupMessage {
    pub message: String,
}

impl SignupMessage {
    pub fn signed_up(email: &Email, activity: &ActivityName) -> Self {
        Self {
            message: format!("Signed up {email} for {activity}"),
        }
    }

    pub fn removed(email: &Email, activity: &ActivityName) -> Self {
        Self {
            message: format!("Removed {email} from {activity}"),
        }
    }
}

/// Error body returned alongside a non-2xx status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl From<&SignupError> for ErrorDetail {
    fn from(error: &SignupError) -> Self {
        Self {
            detail: error.to_string(),
        }
    }
}

/// Health check response structure
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub services: ServiceInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub activities: String,
    pub activity_count: usize,
    pub participant_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            2,
        )
        .with_participants(["michael@mergington.edu"])
    }

    #[test]
    fn add_participant_appends_in_order() {
        let mut activity = chess();
        activity
            .add_participant("daniel@mergington.edu".into())
            .unwrap();
        assert_eq!(
            activity.participants,
            vec![
                Email::from("michael@mergington.edu"),
                Email::from("daniel@mergington.edu")
            ]
        );
        assert!(activity.is_full());
        assert_eq!(activity.spots_left(), 0);
    }

    #[test]
    fn duplicate_wins_over_full() {
        let mut activity = chess();
        activity.add_participant("daniel@mergington.edu".into()).unwrap();
        let before = activity.clone();

        let err = activity
            .add_participant("michael@mergington.edu".into())
            .unwrap_err();
        assert_eq!(err, SignupError::AlreadySignedUp);

        let err = activity
            .add_participant("newstudent@mergington.edu".into())
            .unwrap_err();
        assert_eq!(err, SignupError::ActivityFull);

        assert_eq!(activity, before);
    }

    #[test]
    fn remove_participant_keeps_remaining_order() {
        let mut activity = Activity::new("Drama", "Mondays", 10).with_participants([
            "a@mergington.edu",
            "b@mergington.edu",
            "c@mergington.edu",
        ]);
        activity.remove_participant(&"b@mergington.edu".into()).unwrap();
        assert_eq!(
            activity.participants,
            vec![Email::from("a@mergington.edu"), Email::from("c@mergington.edu")]
        );

        let err = activity
            .remove_participant(&"b@mergington.edu".into())
            .unwrap_err();
        assert_eq!(err, SignupError::NotSignedUp);
    }

    #[test]
    fn directory_serializes_in_seed_order() {
        let directory = ActivityDirectory(vec![
            ("Zoology Club".into(), Activity::new("z", "Mon", 5)),
            ("Art Club".into(), Activity::new("a", "Tue", 5)),
        ]);
        let json = serde_json::to_string(&directory).unwrap();
        let zoology = json.find("Zoology Club").unwrap();
        let art = json.find("Art Club").unwrap();
        assert!(zoology < art);
        assert!(json.contains("\"max_participants\":5"));
        assert!(json.contains("\"participants\":[]"));
    }

    #[test]
    fn directory_deserialize_keeps_order_and_rejects_duplicates() {
        let json = r#"{
            "Soccer Club": {"description": "s", "schedule": "Tue", "max_participants": 22, "participants": ["lucas@mergington.edu"]},
            "Art Club": {"description": "a", "schedule": "Wed", "max_participants": 15, "participants": []}
        }"#;
        let directory: ActivityDirectory = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = directory.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Soccer Club", "Art Club"]);
        assert_eq!(directory.get("Soccer Club").unwrap().max_participants, 22);

        let duplicated = r#"{
            "Art Club": {"description": "a", "schedule": "Wed", "max_participants": 15, "participants": []},
            "Art Club": {"description": "b", "schedule": "Thu", "max_participants": 15, "participants": []}
        }"#;
        assert!(serde_json::from_str::<ActivityDirectory>(duplicated).is_err());
    }

    #[test]
    fn directory_deserialize_rejects_repeated_participant() {
        let json = r#"{
            "Chess Club": {"description": "c", "schedule": "Fri", "max_participants": 12,
                "participants": ["a@mergington.edu", "b@mergington.edu", "a@mergington.edu"]}
        }"#;
        let err = serde_json::from_str::<ActivityDirectory>(json).unwrap_err();
        assert!(err.to_string().contains("a@mergington.edu"));
        assert!(err.to_string().contains("Chess Club"));
    }

    #[test]
    fn duplicate_participant_finds_first_repeat() {
        let activity = Activity::new("Drama", "Mondays", 10).with_participants([
            "a@mergington.edu",
            "b@mergington.edu",
            "b@mergington.edu",
        ]);
        assert_eq!(
            activity.duplicate_participant(),
            Some(&Email::from("b@mergington.edu"))
        );
        assert_eq!(chess().duplicate_participant(), None);
    }

    #[test]
    fn signup_messages() {
        let email = Email::from("newstudent@mergington.edu");
        let activity = ActivityName::from("Chess Club");
        assert_eq!(
            SignupMessage::signed_up(&email, &activity).message,
            "Signed up newstudent@mergington.edu for Chess Club"
        );
        assert_eq!(
            SignupMessage::removed(&email, &activity).message,
            "Removed newstudent@mergington.edu from Chess Club"
        );
    }
}

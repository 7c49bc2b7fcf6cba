//! Typed names for the entities of the Mergington application.
//!
//! Activities and participants are both keyed by plain strings on the wire.
//! Wrapping them keeps an activity name from being passed where an email is
//! expected, while still serializing as a bare string.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A type-safe wrapper around a string key.
///
/// Comparison and hashing are byte-exact; no case folding or trimming is
/// applied.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name<T> {
    value: String,
    _phantom: std::marker::PhantomData<T>,
}

// Serialize as just a string
impl<T> Serialize for Name<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Name<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_string(value))
    }
}

impl<T> Name<T> {
    /// Creates a new name with the given value.
    ///
    /// # Example
    /// ```
    /// use mergington::name::ActivityName;
    ///
    /// let name = ActivityName::from_string("Chess Club".to_string());
    /// assert_eq!(name.as_str(), "Chess Club");
    /// ```
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns the string value of the name.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the name and returns the inner string value.
    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Debug for Name<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.value)
    }
}

impl<T> fmt::Display for Name<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Name<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for Name<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value.to_string())
    }
}

impl<T> AsRef<str> for Name<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<T> Borrow<str> for Name<T> {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl<T> PartialEq<str> for Name<T> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<T> PartialEq<&str> for Name<T> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

// Type markers for different entity types
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivityMarker;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmailMarker;

/// Type alias for activity names, the unique key of the store.
pub type ActivityName = Name<ActivityMarker>;

/// Type alias for participant emails.
pub type Email = Name<EmailMarker>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_name_creation() {
        let name = ActivityName::from_string("Chess Club".to_string());
        assert_eq!(name.as_str(), "Chess Club");
        assert_eq!(name.to_string(), "Chess Club");
    }

    #[test]
    fn test_name_from_str() {
        let email: Email = "michael@mergington.edu".into();
        assert_eq!(email, "michael@mergington.edu");
    }

    #[test]
    fn test_exact_comparison() {
        let lower: Email = "amy@mergington.edu".into();
        let upper: Email = "Amy@mergington.edu".into();
        assert_ne!(lower, upper);
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut map: HashMap<ActivityName, u32> = HashMap::new();
        map.insert("Art Club".into(), 15);
        assert_eq!(map.get("Art Club"), Some(&15));
        assert_eq!(map.get("Art"), None);
    }

    #[test]
    fn test_serde() {
        let original = Email::from_string("emma@mergington.edu".to_string());

        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!(serialized, "\"emma@mergington.edu\"");

        let deserialized: Email = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }
}

//! Shared error types and utilities for the mergington project.
pub use color_eyre::Report;
pub use color_eyre::eyre::WrapErr;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre: {0}")]
    ColorEyre(color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a signup or removal is rejected.
///
/// The display strings are sent to clients verbatim as the `detail` of the
/// error body, so changing them is a breaking API change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_strings() {
        assert_eq!(SignupError::ActivityNotFound.to_string(), "Activity not found");
        assert!(
            SignupError::AlreadySignedUp
                .to_string()
                .contains("already signed up")
        );
        assert!(SignupError::NotSignedUp.to_string().contains("not signed up"));
        assert_eq!(SignupError::ActivityFull.to_string(), "Activity is full");
    }
}

use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activity, ActivityDirectory};
use mergington::errors::SignupError;
use mergington::name::{ActivityName, Email};

/// A trait for reading activities and managing who is signed up for them.
///
/// The set of activities is fixed when the service is built; only each
/// activity's participant list changes afterwards. Implementations must make
/// the membership and capacity checks and the mutation of a single activity
/// atomic with respect to concurrent calls on the same activity.
///
/// # Examples
///
/// ```rust
/// async fn example_usage<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     let email = Email::from("newstudent@mergington.edu");
///     service.signup("Chess Club", &email).await?;
///
///     let directory = service.list().await?;
///     assert!(directory.get("Chess Club").unwrap().has_participant(&email));
///
///     service.unregister("Chess Club", &email).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity in seed order.
    async fn list(&self) -> Result<ActivityDirectory, Self::Error>;

    /// Signs `email` up for the named activity.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist, if the email is already
    /// on its list, or if the activity has no spots left. Nothing is changed
    /// on error.
    async fn signup(&self, name: &str, email: &Email) -> Result<(), Self::Error>;

    /// Removes `email` from the named activity.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is not on
    /// its list.
    async fn unregister(&self, name: &str, email: &Email) -> Result<(), Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// Activities live in a `DashMap`; a signup or removal holds the entry's write
/// guard for the whole check-then-mutate, which serializes access per
/// activity. Listing clones each entry under a short read guard, so it is not
/// a point-in-time snapshot across activities.
pub struct ActivityServiceInMemory {
    activities: DashMap<ActivityName, Activity>,
    // DashMap iteration order is arbitrary
    order: Vec<ActivityName>,
}

impl ActivityServiceInMemory {
    /// Builds a service holding exactly the activities in `directory`.
    pub fn new(directory: ActivityDirectory) -> Self {
        let activities = DashMap::with_capacity(directory.len());
        let mut order = Vec::with_capacity(directory.len());
        for (name, activity) in directory {
            order.push(name.clone());
            activities.insert(name, activity);
        }
        Self { activities, order }
    }

    /// Builds a service holding the built-in seed activities.
    pub fn seeded() -> Self {
        Self::new(super::seed::default_activities())
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = SignupError;

    async fn list(&self) -> Result<ActivityDirectory, Self::Error> {
        Ok(ActivityDirectory(
            self.order
                .iter()
                .filter_map(|name| {
                    self.activities
                        .get(name)
                        .map(|entry| (name.clone(), entry.value().clone()))
                })
                .collect(),
        ))
    }

    async fn signup(&self, name: &str, email: &Email) -> Result<(), Self::Error> {
        let mut entry = self
            .activities
            .get_mut(name)
            .ok_or(SignupError::ActivityNotFound)?;

        entry.add_participant(email.clone())
    }

    async fn unregister(&self, name: &str, email: &Email) -> Result<(), Self::Error> {
        let mut entry = self
            .activities
            .get_mut(name)
            .ok_or(SignupError::ActivityNotFound)?;

        entry.remove_participant(email)
    }
}

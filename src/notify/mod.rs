//! Notification-delivery collaborator.
//!
//! The scheduler never talks to the OS directly: it registers reminders
//! through the [`NotificationDelivery`] trait and treats the returned
//! handle as opaque. `LocalDelivery` is the production implementation,
//! `MockDelivery` is for tests.

pub mod local;
pub mod mock;

pub use local::LocalDelivery;
pub use mock::MockDelivery;

use crate::errors::AppResult;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Opaque registration handle. Callers must not interpret its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryHandle(pub String);

pub trait NotificationDelivery {
    fn request_permission(&self) -> AppResult<Permission>;

    /// Register a reminder to fire at `fire_date`.
    fn schedule_at(
        &self,
        title: &str,
        body: &str,
        fire_date: DateTime<Local>,
    ) -> AppResult<DeliveryHandle>;

    /// Drop every pending registration.
    fn cancel_all(&self) -> AppResult<()>;
}

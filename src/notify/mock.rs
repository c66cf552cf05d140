//! Mock delivery for tests: records calls, can simulate failures.

use super::{DeliveryHandle, NotificationDelivery, Permission};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledCall {
    pub title: String,
    pub body: String,
    pub fire_date: DateTime<Local>,
}

#[derive(Default)]
pub struct MockDelivery {
    /// Every `schedule_at` call, in order.
    pub scheduled: Mutex<Vec<ScheduledCall>>,
    fail_next: AtomicBool,
    cancel_count: AtomicUsize,
}

impl MockDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `schedule_at` call fail with a delivery error.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn scheduled_calls(&self) -> Vec<ScheduledCall> {
        self.scheduled.lock().unwrap().clone()
    }

    pub fn cancel_count(&self) -> usize {
        self.cancel_count.load(Ordering::SeqCst)
    }
}

impl NotificationDelivery for MockDelivery {
    fn request_permission(&self) -> AppResult<Permission> {
        Ok(Permission::Granted)
    }

    fn schedule_at(
        &self,
        title: &str,
        body: &str,
        fire_date: DateTime<Local>,
    ) -> AppResult<DeliveryHandle> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(AppError::Delivery("simulated failure".into()));
        }
        let mut scheduled = self.scheduled.lock().unwrap();
        scheduled.push(ScheduledCall {
            title: title.to_string(),
            body: body.to_string(),
            fire_date,
        });
        Ok(DeliveryHandle(format!("mock-{}", scheduled.len())))
    }

    fn cancel_all(&self) -> AppResult<()> {
        self.cancel_count.fetch_add(1, Ordering::SeqCst);
        self.scheduled.lock().unwrap().clear();
        Ok(())
    }
}

//! Session lifecycle event types

use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEventType {
    Started,
    Idle,
    Completed,
    Error,
}

/// A lifecycle event as dispatched by the plugin host.
#[derive(Clone, Debug)]
pub struct SessionEvent {
    pub event_type: SessionEventType,
    pub timestamp: DateTime<Utc>,
    pub session_id: String,
    pub message: Option<String>,
}

impl SessionEvent {
    pub fn new(event_type: SessionEventType, session_id: String) -> Self {
        Self {
            event_type,
            timestamp: Utc::now(),
            session_id,
            message: None,
        }
    }

    pub fn with_message(
        event_type: SessionEventType,
        session_id: String,
        message: String,
    ) -> Self {
        Self {
            event_type,
            timestamp: Utc::now(),
            session_id,
            message: Some(message),
        }
    }
}

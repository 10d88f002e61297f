//! Fetched view state guarded by request tickets

use crate::error::{AppError, AppResult};

/// Identifies one fetch issued for a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Failure shown to the user instead of the view's data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub status: Option<u16>,
}

impl From<&AppError> for Notice {
    fn from(e: &AppError) -> Self {
        Self {
            message: e.to_string(),
            status: e.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(Notice),
}

/// State of one fetched view.
///
/// Every fetch takes a ticket with [`begin`](Self::begin); only the result carrying the
/// latest ticket is applied, so a slow response can never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct ViewSlot<T> {
    latest: u64,
    state: Loadable<T>,
}

impl<T> Default for ViewSlot<T> {
    fn default() -> Self {
        Self {
            latest: 0,
            state: Loadable::Idle,
        }
    }
}

impl<T> ViewSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch and return its ticket
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.state = Loadable::Loading;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Apply a fetch result if its ticket is still the latest. Returns whether it was applied.
    pub fn apply(&mut self, ticket: Ticket, result: AppResult<T>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("Dropping stale response (ticket {} < {})", ticket.0, self.latest);
            return false;
        }
        self.state = match result {
            Ok(value) => Loadable::Ready(value),
            Err(e) => Loadable::Failed(Notice::from(&e)),
        };
        true
    }

    /// Drop the data and invalidate any fetch still in flight
    pub fn invalidate(&mut self) {
        self.latest += 1;
        self.state = Loadable::Idle;
    }

    pub fn state(&self) -> &Loadable<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        match self.state {
            Loadable::Ready(ref value) => Some(value),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self.state {
            Loadable::Failed(ref notice) => Some(notice),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, Loadable::Loading)
    }
}

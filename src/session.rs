use chrono::{DateTime, Local};

/// Opaque application-state handle supplied by the hosting shell.
///
/// The hub page accepts one of these on every render but reads no content
/// from it; everything it shows comes from the built-in tables in
/// [`crate::content`]. Hosts that later want to source records from shared
/// state can grow this type without touching the page contract.
#[derive(Debug, Clone)]
pub struct SessionState {
    started_at: DateTime<Local>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            started_at: Local::now(),
        }
    }

    /// Moment the shell created this session.
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

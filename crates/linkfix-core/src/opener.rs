//! Opener seam: how a corrected URL reaches a new viewing context.
//!
//! The corrector never navigates itself; it hands the corrected URL to the
//! host. Whether the host actually opens it (popup blocking etc.) is not
//! observable here, so the call has no return value.

use std::sync::Mutex;

/// Host mechanism for opening a URL in a new top-level viewing context
/// (e.g. a new browser tab).
pub trait Opener: Send + Sync {
    fn open_in_new_context(&self, url: &str);
}

/// Test support: records every opened URL for assertions.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the URLs opened so far, in order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Opener for RecordingOpener {
    fn open_in_new_context(&self, url: &str) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

//! Request-scoped "currently rendering an excerpt" flag.
//!
//! Host code that transforms content needs to know whether it is running
//! inside excerpt generation (for example, to suppress markup that only
//! belongs in full-body rendering). The flag is carried by an
//! [`ExcerptFlag`] handle the host creates once per request and clones into
//! its excerpt pipeline, so overlapping requests never observe or clear each
//! other's state.
//!
//! The two marker hooks are pass-through filters: they return their input
//! unchanged and exist only for their side effect on the flag. Register
//! [`ExcerptFlag::mark_excerpt_start`] at [`EXCERPT_START_PRIORITY`] and
//! [`ExcerptFlag::mark_excerpt_end`] at [`EXCERPT_END_PRIORITY`] so the flag
//! is set before any other excerpt filter runs and cleared only after all of
//! them have run.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Filter priority at which the start hook should be registered.
///
/// Runs before every other excerpt-transforming filter.
pub const EXCERPT_START_PRIORITY: u32 = 0;

/// Filter priority at which the end hook should be registered.
///
/// Runs after every other excerpt-transforming filter.
pub const EXCERPT_END_PRIORITY: u32 = 99_999;

/// Shared per-request flag signalling that an excerpt is being rendered.
///
/// Cloning is cheap; all clones observe the same flag. The flag starts
/// cleared. Nested excerpt generation is not tracked: a second start before
/// a matching end is a no-op on the already-set flag, and a single end
/// clears it for both.
#[derive(Clone, Debug, Default)]
pub struct ExcerptFlag {
    doing: Arc<AtomicBool>,
}

impl ExcerptFlag {
    /// Create a fresh, cleared flag for a new request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an excerpt is currently being rendered on this request.
    #[must_use]
    pub fn is_doing_excerpt(&self) -> bool {
        self.doing.load(Ordering::Acquire)
    }

    /// Pass-through filter hook that sets the flag.
    ///
    /// Must run before excerpt text is produced; the input is returned
    /// unchanged.
    pub fn mark_excerpt_start(&self, text: String) -> String {
        self.doing.store(true, Ordering::Release);
        text
    }

    /// Pass-through filter hook that clears the flag.
    ///
    /// Safe to run even if the start hook never ran; the input is returned
    /// unchanged.
    pub fn mark_excerpt_end(&self, text: String) -> String {
        self.doing.store(false, Ordering::Release);
        text
    }

    /// Set the flag for the duration of a lexical scope.
    ///
    /// For host code that renders an excerpt inline rather than through the
    /// filter pipeline. The flag is cleared when the returned guard drops.
    #[must_use]
    pub fn scope(&self) -> ExcerptScope {
        self.doing.store(true, Ordering::Release);
        ExcerptScope { flag: self.clone() }
    }
}

/// Guard returned by [`ExcerptFlag::scope`]; clears the flag on drop.
#[derive(Debug)]
pub struct ExcerptScope {
    flag: ExcerptFlag,
}

impl Drop for ExcerptScope {
    fn drop(&mut self) {
        self.flag.doing.store(false, Ordering::Release);
    }
}

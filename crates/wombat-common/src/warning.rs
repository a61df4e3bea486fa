//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector builder to report input it accepts but does not
//! recognize.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// A poisoned registry only means another thread panicked mid-insert; the set
/// itself is still usable.
fn registry() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about suspicious input (prints once per unique message)
///
/// Returns `true` if this call printed the warning, `false` if the same
/// message was already reported.
///
/// # Example
/// ```
/// use wombat_common::warning::warn_once;
///
/// let _ = warn_once("CSS", "unrecognized combinator '>>'");
/// assert!(!warn_once("CSS", "unrecognized combinator '>>'"));
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let should_print = registry()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        let line = format!("[Wombat {component}] ⚠ {message}");
        eprintln!("{}", line.yellow());
    }
    should_print
}

/// Check whether a warning has been reported since the last
/// [`clear_warnings`].
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    registry()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    if let Some(set) = registry().as_mut() {
        set.clear();
    }
}

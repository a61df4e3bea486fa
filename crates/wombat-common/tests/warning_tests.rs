//! Integration tests for the deduplicating warning registry.
//!
//! Tests in this binary share the process-wide registry, so each one uses
//! its own messages and none of them clears it.

use wombat_common::warning::{has_warned, warn_once};

#[test]
fn test_warn_once_prints_first_time_only() {
    assert!(warn_once("CSS", "dedup: first"));
    assert!(!warn_once("CSS", "dedup: first"));
    assert!(!warn_once("CSS", "dedup: first"));
}

#[test]
fn test_has_warned_tracks_reported_messages() {
    assert!(!has_warned("CSS", "tracked: never reported"));
    let _ = warn_once("CSS", "tracked: reported");
    assert!(has_warned("CSS", "tracked: reported"));
}

#[test]
fn test_same_message_different_component_is_distinct() {
    assert!(warn_once("CSS", "component: shared text"));
    assert!(warn_once("Object", "component: shared text"));
    assert!(has_warned("CSS", "component: shared text"));
    assert!(has_warned("Object", "component: shared text"));
}

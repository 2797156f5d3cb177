use super::LogFormatter;
use crate::log::LogLevel;

#[test]
fn level_prefix_is_rendered_without_timestamp() {
    let formatter = LogFormatter::new(false, true);
    assert_eq!(formatter.format(Some(LogLevel::Warning), "careful"), "[WARN] careful");
}

#[test]
fn bare_message_when_everything_is_disabled() {
    let formatter = LogFormatter::new(false, false);
    assert_eq!(formatter.format(Some(LogLevel::Error), "plain"), "plain");
}

#[test]
fn timestamp_precedes_level() {
    let formatter = LogFormatter::default();
    let line = formatter.format(Some(LogLevel::Info), "hello");
    let level_at = line.find("[INFO]").expect("level tag");
    assert!(level_at > 0);
    assert!(line.ends_with("hello"));
    assert!(line.chars().next().is_some_and(|ch| ch.is_ascii_digit()));
}

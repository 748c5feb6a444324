use super::*;

const RATE: Rate = Rate::new(3, 2);

#[test]
fn nothing_before_start() {
    let s = typewriter_at("hello", 0, 30, RATE);
    assert_eq!(s.visible_units, 0);
    assert!(!s.complete);
    assert_eq!(typewriter_at("hello", 30, 30, RATE).visible_units, 0);
}

#[test]
fn reveals_linearly_then_completes() {
    // 5 chars over 7.5 frames starting at 30.
    assert_eq!(typewriter_at("hello", 33, 30, RATE).visible_units, 2);
    assert_eq!(typewriter_at("hello", 36, 30, RATE).visible_units, 4);
    let done = typewriter_at("hello", 38, 30, RATE);
    assert_eq!(done.visible_units, 5);
    assert!(done.complete);
    assert_eq!(typewriter_at("hello", 500, 30, RATE).visible_units, 5);
}

#[test]
fn empty_text_is_complete_immediately() {
    let s = typewriter_at("", 0, 30, RATE);
    assert_eq!(s.visible_units, 0);
    assert!(s.complete);
}

#[test]
fn prefix_respects_char_boundaries() {
    assert_eq!(visible_prefix("héllo", 2), "hé");
    assert_eq!(visible_prefix("héllo", 0), "");
    assert_eq!(visible_prefix("héllo", 99), "héllo");
}

#[test]
fn emoji_reveals_as_a_whole() {
    // "🚀 Go" is 5 units: the rocket takes 2.
    assert_eq!(typewriter_at("🚀 Go", 500, 30, RATE).visible_units, 5);
    assert_eq!(visible_prefix("🚀 Go", 1), "");
    assert_eq!(visible_prefix("🚀 Go", 2), "🚀");
    assert_eq!(visible_prefix("🚀 Go", 3), "🚀 ");
    assert_eq!(visible_prefix("🚀 Go", 5), "🚀 Go");
}

use proptest::prelude::*;
use rpsl::{
    decode, encode, AttributeValue, DecodeError, Extra, Field, FieldMut, Record, Strategy,
    ValueError,
};

/// Synthetic record exercising every value strategy plus the extension bag.
#[derive(Debug, Clone, Default, PartialEq)]
struct Sample {
    key1: String,
    key2: u32,
    notes: String,
    tags: Vec<String>,
    peers: Vec<String>,
    lines: Vec<String>,
    optional: String,
    extra: Extra,
}

impl Record for Sample {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::text("key1", &self.key1),
            Field::unsigned("key2", &self.key2),
            Field::multiline("notes,omitempty", &self.notes),
            Field::list("tags,omitempty", Strategy::Comma, &self.tags),
            Field::list("peers,omitempty", Strategy::CommaSpace, &self.peers),
            Field::list("lines,omitempty", Strategy::Multiline, &self.lines),
            Field::text("optional,omitempty", &self.optional),
            Field::bag(&self.extra),
        ]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::text("key1", &mut self.key1),
            FieldMut::unsigned("key2", &mut self.key2),
            FieldMut::multiline("notes,omitempty", &mut self.notes),
            FieldMut::list("tags,omitempty", Strategy::Comma, &mut self.tags),
            FieldMut::list("peers,omitempty", Strategy::CommaSpace, &mut self.peers),
            FieldMut::list("lines,omitempty", Strategy::Multiline, &mut self.lines),
            FieldMut::text("optional,omitempty", &mut self.optional),
            FieldMut::bag(&mut self.extra),
        ]
    }
}

#[test]
fn encode_basic() {
    let s = Sample { key1: "value1".into(), key2: 65000, ..Default::default() };
    assert_eq!(encode(&s).unwrap(), "key1: value1\nkey2: 65000");
}

#[test]
fn omit_empty_contributes_no_lines() {
    let s = Sample { key1: "value1".into(), key2: 1, ..Default::default() };
    let text = encode(&s).unwrap();
    assert!(!text.contains("notes"));
    assert!(!text.contains("optional"));
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn multiline_text_emits_one_line_per_segment() {
    let s = Sample {
        key1: "value1".into(),
        key2: 1,
        notes: "value2-1\nvalue2-2".into(),
        ..Default::default()
    };
    assert_eq!(
        encode(&s).unwrap(),
        "key1: value1\nkey2: 1\nnotes: value2-1\nnotes: value2-2"
    );
}

#[test]
fn multiline_list_three_segments_round_trip() {
    let s = Sample {
        key2: 1,
        lines: vec!["one".into(), "two".into(), "three".into()],
        ..Default::default()
    };
    let text = encode(&s).unwrap();
    assert_eq!(text.matches("lines: ").count(), 3);

    let mut back = Sample::default();
    decode(&text, &mut back).unwrap();
    assert_eq!(back.lines, vec!["one", "two", "three"]);
}

#[test]
fn comma_and_comma_space_join() {
    let s = Sample {
        key2: 1,
        tags: vec!["a".into(), "b".into()],
        peers: vec!["x".into(), "y".into()],
        ..Default::default()
    };
    let text = encode(&s).unwrap();
    assert!(text.contains("tags: a,b"));
    assert!(text.contains("peers: x, y"));
}

#[test]
fn full_round_trip() {
    let mut s = Sample {
        key1: "value1".into(),
        key2: 65000,
        notes: "Line 1\nLine 2".into(),
        tags: vec!["a".into(), "b".into()],
        peers: vec!["x".into(), "y".into()],
        lines: vec!["l1".into(), "l2".into()],
        optional: "present".into(),
        ..Default::default()
    };
    s.extra.insert("x-color", "blue");
    s.extra.insert("x-shape", "round");

    let text = encode(&s).unwrap();
    let mut back = Sample::default();
    decode(&text, &mut back).unwrap();
    assert_eq!(back, s);
}

#[test]
fn cumulative_decode_appends() {
    let mut s = Sample::default();
    decode("tags: a", &mut s).unwrap();
    decode("tags: b", &mut s).unwrap();
    assert_eq!(s.tags, vec!["a", "b"]);
}

#[test]
fn scalar_decode_last_match_wins() {
    let mut s = Sample::default();
    decode("key1: first\nkey1: second", &mut s).unwrap();
    assert_eq!(s.key1, "second");
}

#[test]
fn malformed_lines_are_ignored() {
    let mut s = Sample::default();
    decode("\nkey1: value1\nkey2: 65000\nextra content", &mut s).unwrap();
    assert_eq!(s.key1, "value1");
    assert_eq!(s.key2, 65000);
}

#[test]
fn colon_in_value_is_preserved() {
    let mut s = Sample::default();
    decode("key1: see: https://example.com", &mut s).unwrap();
    assert_eq!(s.key1, "see: https://example.com");
}

#[test]
fn bag_takes_only_unmatched_keys() {
    let mut s = Sample::default();
    decode("key1: value1\nx-custom: y", &mut s).unwrap();
    assert_eq!(s.extra.get("x-custom"), Some("y"));
    assert_eq!(s.extra.get("key1"), None);
    assert_eq!(s.extra.len(), 1);
}

#[test]
fn bag_skips_empty_entries_on_encode() {
    let mut s = Sample { key2: 1, ..Default::default() };
    s.extra.insert("filled", "value");
    s.extra.insert("empty", "");
    let text = encode(&s).unwrap();
    assert!(text.contains("filled: value"));
    assert!(!text.contains("empty"));
}

#[test]
fn numeric_parse_failure_carries_key_and_text() {
    let mut s = Sample::default();
    let err = decode("key2: wrong", &mut s).unwrap_err();
    match err {
        DecodeError::NumericParse { key, text, .. } => {
            assert_eq!(key, "key2");
            assert_eq!(text, "wrong");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ── Invalid declarations ─────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct BadTag {
    value: String,
}

impl Record for BadTag {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::text(",omitempty", &self.value)]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![FieldMut::text(",omitempty", &mut self.value)]
    }
}

#[test]
fn invalid_tag_fails_encode_and_decode() {
    let mut bad = BadTag::default();
    let enc = encode(&bad).unwrap_err();
    assert!(enc.to_string().contains("has an invalid"));
    let dec = decode("value: x", &mut bad).unwrap_err();
    assert!(dec.to_string().contains("has an invalid"));
}

// ── Custom value failures ────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Failing;

impl AttributeValue for Failing {
    fn render(&self, key: &str) -> String {
        format!("{key}: failing")
    }

    fn merge(&mut self, _raw: &str) -> Result<(), ValueError> {
        Err("an error".into())
    }

    fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
struct WithFailing {
    text: String,
    failing: Failing,
}

impl Record for WithFailing {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::text("string", &self.text),
            Field::custom("error", &self.failing),
        ]
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::text("string", &mut self.text),
            FieldMut::custom("error", &mut self.failing),
        ]
    }
}

#[test]
fn nested_decode_failure_is_wrapped_with_the_key() {
    let mut target = WithFailing::default();
    let err = decode("string: value\nerror: irrelevant", &mut target).unwrap_err();
    match &err {
        DecodeError::Value { key, source } => {
            assert_eq!(key, "error");
            assert_eq!(source.to_string(), "an error");
        }
        other => panic!("unexpected error: {other}"),
    }
    // Fields populated before the failure stay set.
    assert_eq!(target.text, "value");
}

// ── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_round_trip(
        key1 in "[a-zA-Z0-9-]{0,16}",
        key2 in any::<u32>(),
        tags in proptest::collection::vec("[a-z0-9-]{1,8}", 0..4),
        peers in proptest::collection::vec("[a-z0-9-]{1,8}", 0..4),
        lines in proptest::collection::vec("[a-z0-9-]{1,8}", 0..4),
    ) {
        let sample = Sample { key1, key2, tags, peers, lines, ..Default::default() };
        let text = encode(&sample).unwrap();
        let mut back = Sample::default();
        decode(&text, &mut back).unwrap();
        prop_assert_eq!(back, sample);
    }
}

use medimate::history::normalize;
use medimate::models::{Message, Part, Role, StoredEntry};
use serde_json::json;

fn entry(value: serde_json::Value) -> StoredEntry {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_legacy_entries_become_single_part_messages() {
    let entries = vec![
        entry(json!({"role": "user", "text": "I have a headache"})),
        entry(json!({"role": "model", "text": "How long has it lasted?"})),
    ];

    let normalized = normalize(&entries);
    assert_eq!(
        normalized,
        vec![
            Message {
                role: Role::User,
                parts: vec![Part {
                    text: "I have a headache".to_string()
                }],
            },
            Message {
                role: Role::Model,
                parts: vec![Part {
                    text: "How long has it lasted?".to_string()
                }],
            },
        ]
    );
}

#[test]
fn test_canonical_entries_pass_through_unchanged() {
    let entries = vec![entry(
        json!({"role": "user", "parts": [{"text": "first"}, {"text": "second"}]}),
    )];

    let normalized = normalize(&entries);
    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized[0].role, Role::User);
    assert_eq!(normalized[0].parts.len(), 2);
    assert_eq!(normalized[0].parts[0].text, "first");
    assert_eq!(normalized[0].parts[1].text, "second");
}

#[test]
fn test_unrecognized_entries_are_dropped() {
    let entries = vec![
        entry(json!({"role": "user", "text": "kept"})),
        entry(json!({"something": "else"})),
        entry(json!({"role": "user"})),
        entry(json!(42)),
    ];

    let normalized = normalize(&entries);
    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized[0].parts[0].text, "kept");
}

#[test]
fn test_order_is_preserved_across_mixed_shapes() {
    let entries = vec![
        entry(json!({"role": "user", "parts": [{"text": "one"}]})),
        entry(json!({"bogus": true})),
        entry(json!({"role": "model", "text": "two"})),
        entry(json!({"role": "user", "text": "three"})),
    ];

    let normalized = normalize(&entries);
    let texts: Vec<&str> = normalized
        .iter()
        .map(|m| m.parts[0].text.as_str())
        .collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[test]
fn test_entry_with_invalid_role_is_dropped() {
    let entries = vec![entry(json!({"role": "assistant", "text": "wrong role name"}))];
    assert!(normalize(&entries).is_empty());
}

//! Property tests for the parse/stringify round trip and for index/entry
//! agreement under arbitrary mutation sequences.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use lineconf::{ConfigStore, Entry};

/// One generated source line, before padding is applied.
#[derive(Debug, Clone)]
enum Line {
    Pair {
        key: String,
        value: String,
        pads: [u8; 4],
    },
    Comment(String),
    Blank,
}

fn line_strategy() -> impl Strategy<Value = Line> {
    prop_oneof![
        3 => (
            "[a-z][a-z0-9_.]{0,8}",
            "[a-zA-Z0-9:/=_.-]{0,12}",
            prop::array::uniform4(0u8..3),
        )
            .prop_map(|(key, value, pads)| Line::Pair { key, value, pads }),
        1 => "#[ -~]{0,16}".prop_map(Line::Comment),
        1 => Just(Line::Blank),
    ]
}

/// Renders a line the way it would appear in a source file, with arbitrary
/// whitespace padding around the pair separator.
fn render(line: &Line) -> String {
    match line {
        Line::Pair { key, value, pads } => format!(
            "{}{}{}={}{}{}",
            " ".repeat(pads[0] as usize),
            key,
            " ".repeat(pads[1] as usize),
            " ".repeat(pads[2] as usize),
            value,
            " ".repeat(pads[3] as usize),
        ),
        Line::Comment(text) => text.clone(),
        Line::Blank => String::new(),
    }
}

/// Oracle for the canonical serialized form: comments verbatim, blanks as
/// bare line breaks, pairs normalized to `key = value` with duplicate keys
/// keeping the first position and the last value.
fn canonical(lines: &[Line]) -> String {
    enum Slot {
        Text(String),
        Pair(String),
    }

    let mut slots = Vec::new();
    let mut values: HashMap<String, String> = HashMap::new();
    for line in lines {
        match line {
            Line::Comment(text) => slots.push(Slot::Text(text.clone())),
            Line::Blank => slots.push(Slot::Text(String::new())),
            Line::Pair { key, value, .. } => {
                if !values.contains_key(key) {
                    slots.push(Slot::Pair(key.clone()));
                }
                values.insert(key.clone(), value.clone());
            }
        }
    }

    let mut out = String::new();
    for slot in slots {
        match slot {
            Slot::Text(text) => {
                out.push_str(&text);
                out.push('\n');
            }
            Slot::Pair(key) => {
                out.push_str(&key);
                out.push_str(" = ");
                out.push_str(&values[&key]);
                out.push('\n');
            }
        }
    }
    out
}

proptest! {
    #[test]
    fn round_trip_reproduces_structure(lines in prop::collection::vec(line_strategy(), 0..12)) {
        let text: String = lines.iter().map(|line| render(line) + "\n").collect();

        let mut store = ConfigStore::new();
        store.parse(&text).unwrap();
        prop_assert_eq!(store.stringify(), canonical(&lines));

        // Serialized output is a fixed point of parse/stringify.
        let mut reparsed = ConfigStore::new();
        reparsed.parse(&store.stringify()).unwrap();
        prop_assert_eq!(reparsed.entries(), store.entries());
    }

    #[test]
    fn index_and_entries_agree_under_mutation(
        ops in prop::collection::vec((0..5usize, "[a-z0-9]{0,6}", prop::bool::ANY), 0..40),
    ) {
        const KEYS: [&str; 5] = ["alpha", "beta", "gamma", "delta", "epsilon"];

        let mut store = ConfigStore::new();
        for (key_index, value, is_set) in ops {
            let key = KEYS[key_index];
            if is_set {
                store.set(key, value);
            } else {
                let _ = store.remove(key);
            }
        }

        let pair_keys: Vec<&str> = store.entries().iter().filter_map(Entry::key).collect();
        let unique: HashSet<&str> = pair_keys.iter().copied().collect();
        prop_assert_eq!(unique.len(), pair_keys.len(), "duplicate pair keys in entries");
        prop_assert_eq!(store.pair_count(), pair_keys.len());

        for entry in store.entries() {
            if let Some(key) = entry.key() {
                prop_assert!(store.contains(key));
                prop_assert_eq!(store.get(key), entry.value());
            }
        }
    }
}

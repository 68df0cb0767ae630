//! `decode(encode(tree)) == tree` for trees whose keys and values survive the
//! line format: no newlines, no surrounding whitespace, leaf keys without `=`,
//! keys not starting with `#`, leaf values not ending in `:`.

use proptest::prelude::*;
use vmdl::{Map, Value, decode, encode};

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[A-Za-z_][A-Za-z0-9_.-]{0,12}").unwrap(),
        prop::string::string_regex("[A-Za-z][A-Za-z0-9 :]{0,10}[A-Za-z0-9]").unwrap(),
        Just("caf\u{e9}".to_string()),
    ]
}

fn arb_leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::string::string_regex("[A-Za-z0-9]([A-Za-z0-9 ,./?=&#-]{0,20}[A-Za-z0-9/])?").unwrap(),
        Just("http://x?a=b=c".to_string()),
        Just("null".to_string()),
        Just("\u{4f60}\u{597d}".to_string()),
    ]
}

fn arb_map() -> impl Strategy<Value = Map> {
    let leaf = arb_leaf().prop_map(Value::Leaf);
    let value = leaf.prop_recursive(4, 48, 6, |inner| {
        prop::collection::vec((arb_key(), inner), 0..6)
            .prop_map(|entries| Value::Section(entries.into_iter().collect()))
    });
    prop::collection::vec((arb_key(), value), 0..8).prop_map(|entries| entries.into_iter().collect())
}

fn keys_in_order(map: &Map) -> Vec<String> {
    let mut out = Vec::new();
    for (k, v) in map {
        out.push(k.clone());
        if let Value::Section(child) = v {
            out.extend(keys_in_order(child).into_iter().map(|ck| format!("{k}/{ck}")));
        }
    }
    out
}

proptest! {
    #[test]
    fn decode_inverts_encode(tree in arb_map()) {
        let text = encode(&tree);
        let back = decode(&text);
        prop_assert_eq!(&back, &tree);
        prop_assert_eq!(keys_in_order(&back), keys_in_order(&tree));
    }

    #[test]
    fn encoding_is_a_fixed_point_after_one_decode(tree in arb_map()) {
        let once = encode(&tree);
        let twice = encode(&decode(&once));
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn encode_of_decode_normalizes_formatting() {
    let input = "# comment\nA:\n  B   =   1\n\n  C:\n\t\t\tD=2\nE = x\n";
    let out = encode(&decode(input));
    assert_eq!(out, "A:\n    B = 1\n    C:\n        D = 2\nE = x\n");
}

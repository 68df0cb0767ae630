#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vmdl::{Map, Value, decode, encode};

#[derive(Arbitrary, Debug)]
enum Node {
    Leaf(String),
    Section(Vec<(String, Node)>),
}

fn clean_key(k: &str) -> String {
    let k: String = k
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control() && !matches!(*c, '=' | ':' | '\u{feff}'))
        .collect();
    let k = k.trim_start_matches('#');
    if k.is_empty() { "k".to_string() } else { k.to_string() }
}

fn clean_leaf(v: &str) -> String {
    v.chars()
        .filter(|c| !c.is_whitespace() && !c.is_control() && *c != ':')
        .collect()
}

fn build(entries: &[(String, Node)], depth: usize) -> Map {
    let mut map = Map::new();
    for (k, node) in entries {
        let value = match node {
            Node::Section(children) if depth < 16 => Value::Section(build(children, depth + 1)),
            Node::Section(_) => Value::Leaf(String::new()),
            Node::Leaf(s) => Value::Leaf(clean_leaf(s)),
        };
        map.insert(clean_key(k), value);
    }
    map
}

fuzz_target!(|entries: Vec<(String, Node)>| {
    let tree = build(&entries, 0);
    let text = encode(&tree);
    let back = decode(&text);
    assert_eq!(back, tree, "round trip mismatch for {:?}", text);
});

use crate::decode::scanner::{LineKind, ParsedLine, scan};
use crate::value::{Map, Value};

/// An open section: its header's indentation and the entries collected so far.
/// The body is attached to the parent when the frame is closed.
struct Frame<'a> {
    level: usize,
    key: &'a str,
    line: usize,
    map: Map,
}

pub struct Parser<'a> {
    lines: Vec<ParsedLine<'a>>,
    stack: Vec<Frame<'a>>,
}

impl<'a> Parser<'a> {
    pub fn from_input(input: &'a str) -> Self {
        Self::from_lines(scan(input))
    }

    pub fn from_lines(lines: Vec<ParsedLine<'a>>) -> Self {
        Self {
            lines,
            stack: vec![Frame {
                level: 0,
                key: "",
                line: 0,
                map: Map::new(),
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn parse_document(mut self) -> Map {
        let lines = core::mem::take(&mut self.lines);
        for pl in lines {
            if !pl.kind.is_content() {
                continue;
            }
            // Unrecognized lines still close deeper sections.
            self.close_frames(pl.indent);
            match pl.kind {
                LineKind::Section { key } => self.stack.push(Frame {
                    level: pl.indent,
                    key,
                    line: pl.number,
                    map: Map::new(),
                }),
                LineKind::Assign { key, value } => {
                    self.insert(key, Value::Leaf(value.to_string()), pl.number)
                }
                LineKind::Unrecognized(body) => {
                    tracing::debug!(line = pl.number, body, "ignoring unrecognized line");
                }
                LineKind::Blank | LineKind::Comment(_) => {}
            }
        }
        self.close_frames(0);
        self.stack.pop().map(|root| root.map).unwrap_or_default()
    }

    fn close_frames(&mut self, level: usize) {
        while self.stack.len() > 1 && self.stack.last().is_some_and(|top| top.level >= level) {
            if let Some(frame) = self.stack.pop() {
                self.insert(frame.key, Value::Section(frame.map), frame.line);
            }
        }
    }

    fn insert(&mut self, key: &str, value: Value, line: usize) {
        if let Some(parent) = self.stack.last_mut() {
            if parent.map.insert(key.to_string(), value).is_some() {
                tracing::debug!(line, key, "key overwrites an earlier entry");
            }
        }
    }
}

pub fn parse_to_map(input: &str) -> Map {
    Parser::from_input(input).parse_document()
}

pub fn parse_to_map_with_strict(input: &str, strict: bool) -> Result<Map, crate::error::Error> {
    let lines = scan(input);
    if strict {
        crate::decode::validation::validate_lines(&lines)?;
    }
    Ok(Parser::from_lines(lines).parse_document())
}

/// Every leaf becomes a JSON string and every section a JSON object, in order.
#[cfg(feature = "json")]
pub fn to_json_value(map: &Map) -> serde_json::Value {
    let obj = map
        .iter()
        .map(|(k, v)| {
            let jv = match v {
                Value::Leaf(s) => serde_json::Value::String(s.clone()),
                Value::Section(m) => to_json_value(m),
            };
            (k.clone(), jv)
        })
        .collect();
    serde_json::Value::Object(obj)
}

use crate::{
    encode::{INDENT_WIDTH, writer::LineWriter},
    value::{Map, Value},
};

pub fn encode_map(map: &Map, w: &mut LineWriter, indent: usize) {
    for (key, value) in map {
        match value {
            Value::Leaf(s) => w.line_assign(indent, key, s),
            Value::Section(child) => {
                w.line_section(indent, key);
                encode_map(child, w, indent + INDENT_WIDTH);
            }
        }
    }
}

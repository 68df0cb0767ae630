//! Encoding pipeline: recursive walk over sections into a line writer

pub mod encoders;
#[cfg(feature = "json")]
pub mod normalize;
pub mod writer;

use crate::value::Map;

/// Spaces added per nesting level.
pub const INDENT_WIDTH: usize = 4;

pub fn encode_map_to_string(map: &Map, indent: usize) -> String {
    let mut w = writer::LineWriter::new();
    encoders::encode_map(map, &mut w, indent);
    w.into_string()
}

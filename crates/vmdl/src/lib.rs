#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod value;
pub mod encode;
pub mod decode;

#[cfg(feature = "serde")]
pub mod ser;
#[cfg(feature = "serde")]
pub mod de;

pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::value::{Map, Value};

use std::io::{Read, Write};

/// Decode leniently: unrecognized lines are skipped and indentation is never
/// rejected, so this cannot fail.
pub fn decode(text: &str) -> Map {
    let map = crate::decode::parser::parse_to_map(text);
    tracing::trace!(entries = map.len(), "decoded document");
    map
}

pub fn decode_with_options(text: &str, options: &Options) -> Result<Map> {
    let map = crate::decode::parser::parse_to_map_with_strict(text, options.strict)?;
    tracing::trace!(entries = map.len(), strict = options.strict, "decoded document");
    Ok(map)
}

pub fn decode_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Map> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    decode_with_options(&s, options)
}

pub fn encode(tree: &Map) -> String {
    encode_indented(tree, 0)
}

/// Render `tree` with every line prefixed by `indent` spaces; nested sections
/// add four more per level.
pub fn encode_indented(tree: &Map, indent: usize) -> String {
    crate::encode::encode_map_to_string(tree, indent)
}

pub fn encode_to_writer<W: Write>(mut writer: W, tree: &Map) -> Result<()> {
    writer.write_all(encode(tree).as_bytes())?;
    Ok(())
}

#[cfg(feature = "json")]
pub fn encode_to_string<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    crate::ser::to_string(value)
}

#[cfg(feature = "serde")]
pub fn decode_from_str<T: serde::de::DeserializeOwned>(s: &str, options: &Options) -> Result<T> {
    crate::de::from_str(s, options)
}

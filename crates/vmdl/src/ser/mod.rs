//! Serde encoding helpers for VMDL

use serde::{Serialize, Serializer};

use crate::value::Value;

#[cfg(feature = "json")]
use crate::{Result, value::Map};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Leaf(s) => serializer.serialize_str(s),
            Value::Section(map) => serializer.collect_map(map),
        }
    }
}

// Typed values reach the tree through serde_json::Value, which fixes the
// stringification of non-string scalars and arrays in one place.
#[cfg(feature = "json")]
pub fn to_map<T: Serialize + ?Sized>(value: &T) -> Result<Map> {
    let v = serde_json::to_value(value)?;
    crate::encode::normalize::from_json(&v)
}

#[cfg(feature = "json")]
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(crate::encode::encode_map_to_string(&to_map(value)?, 0))
}

#[cfg(feature = "json")]
pub fn to_writer<W: std::io::Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    let s = to_string(value)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

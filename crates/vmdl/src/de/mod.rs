//! serde::Deserializer implementation backed by the decoded tree

use serde::de::{self, DeserializeOwned, IntoDeserializer, MapAccess, Visitor, value::MapDeserializer};

use crate::value::{Map, Value};
use crate::{Error, Result, options::Options};

#[derive(Debug)]
pub struct DeError {
    msg: String,
}

impl core::fmt::Display for DeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.msg)
    }
}
impl de::Error for DeError {
    fn custom<T: core::fmt::Display>(t: T) -> Self {
        DeError {
            msg: format!("{}", t),
        }
    }
}
impl core::error::Error for DeError {}

impl From<DeError> for Error {
    fn from(e: DeError) -> Self {
        Error::Message(e.msg)
    }
}

/// Leaves are handed to visitors as strings only; there is no coercion to
/// numbers or booleans.
pub struct Deserializer {
    value: Value,
}

impl Deserializer {
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    pub fn from_map(map: Map) -> Self {
        Self {
            value: Value::Section(map),
        }
    }
}

impl<'de> IntoDeserializer<'de, DeError> for Value {
    type Deserializer = Deserializer;

    fn into_deserializer(self) -> Self::Deserializer {
        Deserializer::from_value(self)
    }
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = DeError;

    fn deserialize_any<V>(self, visitor: V) -> core::result::Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Leaf(s) => visitor.visit_string(s),
            Value::Section(map) => visitor.visit_map(MapDeserializer::new(map.into_iter())),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> core::result::Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> core::result::Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> core::result::Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Leaf(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Section(_) => Err(de::Error::custom(
                "expected a leaf naming a unit variant, found a section",
            )),
        }
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a string or a map of strings")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> core::result::Result<Value, E> {
        Ok(Value::Leaf(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> core::result::Result<Value, E> {
        Ok(Value::Leaf(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> core::result::Result<Value, E> {
        Ok(Value::Leaf(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> core::result::Result<Value, E> {
        Ok(Value::Leaf(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> core::result::Result<Value, E> {
        Ok(Value::Leaf(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> core::result::Result<Value, E> {
        Ok(Value::Leaf(v.to_string()))
    }

    // null is a leaf, never a section
    fn visit_unit<E: de::Error>(self) -> core::result::Result<Value, E> {
        Ok(Value::Leaf("null".to_string()))
    }

    fn visit_none<E: de::Error>(self) -> core::result::Result<Value, E> {
        self.visit_unit()
    }

    fn visit_some<D>(self, deserializer: D) -> core::result::Result<Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        serde::Deserialize::deserialize(deserializer)
    }

    fn visit_map<A>(self, mut access: A) -> core::result::Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = Map::new();
        while let Some((k, v)) = access.next_entry::<String, Value>()? {
            map.insert(k, v);
        }
        Ok(Value::Section(map))
    }
}

pub fn from_map<T: DeserializeOwned>(map: Map) -> Result<T> {
    Ok(serde::Deserialize::deserialize(Deserializer::from_map(map))?)
}

pub fn from_str<T: DeserializeOwned>(s: &str, options: &Options) -> Result<T> {
    let map = crate::decode::parser::parse_to_map_with_strict(s, options.strict)?;
    from_map(map)
}

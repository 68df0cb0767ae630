use indexmap::IndexMap;

/// An ordered section body. Inserting an existing key replaces its value in place.
pub type Map = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// `key = value`
    Leaf(String),
    /// `key:` followed by an indented block
    Section(Map),
}

impl Value {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Value::Leaf(_))
    }

    pub fn is_section(&self) -> bool {
        matches!(self, Value::Section(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Leaf(s) => Some(s),
            Value::Section(_) => None,
        }
    }

    pub fn as_section(&self) -> Option<&Map> {
        match self {
            Value::Section(map) => Some(map),
            Value::Leaf(_) => None,
        }
    }

    pub fn as_section_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Section(map) => Some(map),
            Value::Leaf(_) => None,
        }
    }

    /// Entry of a section; `None` for leaves.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_section().and_then(|map| map.get(key))
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_section(&self, key: &str) -> Option<&Map> {
        self.get(key).and_then(Value::as_section)
    }

    /// Follow `path` through nested sections. An empty path returns `self`.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let mut cur = self;
        for key in path {
            cur = cur.get(key)?;
        }
        Some(cur)
    }
}

/// Follow `path` from a root mapping. An empty path resolves to nothing,
/// since the root itself is not a `Value`.
pub fn lookup<'a>(root: &'a Map, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    root.get(*first)?.get_path(rest)
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Leaf(s) => f.write_str(s),
            Value::Section(map) => f.write_str(&crate::encode::encode_map_to_string(map, 0)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Leaf(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Leaf(s)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Section(map)
    }
}

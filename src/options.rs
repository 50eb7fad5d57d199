//! The per-node option store.
//!
//! Options are grammatical or formatting metadata attached to a constituent
//! (person, number, tense, decorations, markup tags, sentence types). Every
//! recognized name belongs to one of four kinds, and the kind decides how
//! repeated writes accumulate:
//! * scalar: the last write wins, the key keeps its first position;
//! * list: every write appends;
//! * tag: every write appends a `(name, attributes)` pair;
//! * typ: writes are merged into one mapping, later sub-keys overriding.

use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

use crate::datatype::{Map, Value};
use crate::error::{PhrasalError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Scalar,
    List,
    Tag,
    Typ,
}

macro_rules! option_names {
    ($($variant:ident => $name:literal : $kind:ident),* $(,)?) => {
        /// Every option name a constituent recognizes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum OptionName {
            $($variant),*
        }
        impl OptionName {
            pub const ALL: &'static [OptionName] = &[$(OptionName::$variant),*];
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(OptionName::$variant => $name),*
                }
            }
            pub fn kind(&self) -> OptionKind {
                match self {
                    $(OptionName::$variant => OptionKind::$kind),*
                }
            }
        }
        impl FromStr for OptionName {
            type Err = PhrasalError;
            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($name => Ok(OptionName::$variant),)*
                    _ => Err(PhrasalError::UnknownOption(s.to_owned())),
                }
            }
        }
    };
}

option_names! {
    Pe => "pe": Scalar,
    N => "n": Scalar,
    G => "g": Scalar,
    T => "t": Scalar,
    Aux => "aux": Scalar,
    F => "f": Scalar,
    Tn => "tn": Scalar,
    C => "c": Scalar,
    Pos => "pos": Scalar,
    Pro => "pro": Scalar,
    Ow => "ow": Scalar,
    Cap => "cap": Scalar,
    Lier => "lier": Scalar,
    DOpt => "dOpt": Scalar,
    Nat => "nat": Scalar,
    A => "a": List,
    B => "b": List,
    Ba => "ba": List,
    En => "en": List,
    Tag => "tag": Tag,
    Typ => "typ": Typ,
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A markup tag wrapped around the realized text of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    name: String,
    attributes: Option<Map>,
}
impl Tag {
    pub fn new(name: &str, attributes: Option<Map>) -> Self {
        Self {
            name: name.to_owned(),
            attributes,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn attributes(&self) -> Option<&Map> {
        self.attributes.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Scalar(Value),
    List(Vec<Value>),
    Tags(Vec<Tag>),
    Typ(Map),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Options {
    kept: IndexMap<OptionName, OptionValue>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
    pub fn get(&self, name: OptionName) -> Option<&OptionValue> {
        self.kept.get(&name)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&OptionName, &OptionValue)> {
        self.kept.iter()
    }

    pub fn set_scalar(&mut self, name: OptionName, value: Value) {
        debug_assert_eq!(name.kind(), OptionKind::Scalar);
        self.kept.insert(name, OptionValue::Scalar(value));
    }

    pub fn push_list(&mut self, name: OptionName, value: Value) {
        debug_assert_eq!(name.kind(), OptionKind::List);
        match self
            .kept
            .entry(name)
            .or_insert_with(|| OptionValue::List(Vec::new()))
        {
            OptionValue::List(values) => values.push(value),
            other => *other = OptionValue::List(vec![value]),
        }
    }

    pub fn push_tag(&mut self, tag: Tag) {
        match self
            .kept
            .entry(OptionName::Tag)
            .or_insert_with(|| OptionValue::Tags(Vec::new()))
        {
            OptionValue::Tags(tags) => tags.push(tag),
            other => *other = OptionValue::Tags(vec![tag]),
        }
    }

    pub fn merge_typ(&mut self, values: Map) {
        match self
            .kept
            .entry(OptionName::Typ)
            .or_insert_with(|| OptionValue::Typ(Map::new()))
        {
            OptionValue::Typ(typ) => typ.extend(values),
            other => *other = OptionValue::Typ(values),
        }
    }

    /// Sets an option from a loosely shaped value, dispatching on the kind of
    /// `name`. Tags accept either a bare name or a `[name, attributes]` pair,
    /// typ only accepts a mapping.
    pub fn set(&mut self, name: OptionName, value: Value) -> Result<()> {
        match name.kind() {
            OptionKind::Scalar => self.set_scalar(name, value),
            OptionKind::List => self.push_list(name, value),
            OptionKind::Tag => self.push_tag(tag_from_value(value)?),
            OptionKind::Typ => match value {
                Value::Map(map) => self.merge_typ(map),
                other => return Err(shape_error(name, &other)),
            },
        }
        Ok(())
    }
}

fn tag_from_value(value: Value) -> Result<Tag> {
    match value {
        Value::Text(name) => Ok(Tag::new(&name, None)),
        Value::List(pair) => match pair.as_slice() {
            [Value::Text(name)] | [Value::Text(name), Value::Null] => Ok(Tag::new(name, None)),
            [Value::Text(name), Value::Map(attributes)] => {
                Ok(Tag::new(name, Some(attributes.clone())))
            }
            _ => Err(shape_error(OptionName::Tag, &Value::List(pair.clone()))),
        },
        other => Err(shape_error(OptionName::Tag, &other)),
    }
}

fn shape_error(name: OptionName, value: &Value) -> PhrasalError {
    PhrasalError::OptionShape {
        option: name.to_string(),
        message: format!("{} {}", value.data_type(), value.literal()),
    }
}

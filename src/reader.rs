//! Rebuilds a constituent tree from its structured form.

use serde_json::Value as Json;

use crate::category::{PhraseCategory, TerminalCategory};
use crate::construct::{Constituent, Node, Phrase, Terminal};
use crate::datatype::Value;
use crate::error::{PhrasalError, Result};
use crate::options::{OptionKind, OptionName};

/// Parses a structured-form document, indented or not.
///
/// ```
/// use phrasal::prelude::*;
/// let cat = np![d("the"), n("cat").n("p")];
/// let read = from_structured_form(&cat.to_structured_form(0)).unwrap();
/// assert_eq!(read, Node::from(cat));
/// ```
pub fn from_structured_form(text: &str) -> Result<Node> {
    let json: Json = serde_json::from_str(text)?;
    from_json(&json)
}

pub fn from_json(json: &Json) -> Result<Node> {
    let object = json
        .as_object()
        .ok_or_else(|| parse_error(format!("expected a constituent object, found {}", json)))?;
    let node = if let Some(category) = object.get("terminal") {
        let category: TerminalCategory = text_field("terminal", category)?.parse()?;
        let lemma = object
            .get("lemma")
            .ok_or_else(|| parse_error(format!("{} terminal has no lemma", category)))?;
        Node::Terminal(Terminal::new(category, text_field("lemma", lemma)?))
    } else if let Some(category) = object.get("phrase") {
        let category: PhraseCategory = text_field("phrase", category)?.parse()?;
        let phrase = Phrase::new(category, Vec::<Node>::new());
        match object.get("elements") {
            Some(Json::Array(elements)) => {
                for element in elements {
                    phrase.add(from_json(element)?);
                }
            }
            Some(other) => {
                return Err(parse_error(format!("elements should be an array, found {}", other)));
            }
            None => (),
        }
        Node::Phrase(phrase)
    } else {
        return Err(parse_error("a constituent needs a terminal or a phrase field"));
    };
    if let Some(language) = object.get("lang") {
        node.set_language(text_field("lang", language)?);
    }
    match object.get("props") {
        Some(Json::Object(props)) => {
            for (name, value) in props {
                replay_option(&node, name, value)?;
            }
        }
        Some(other) => return Err(parse_error(format!("props should be an object, found {}", other))),
        None => (),
    }
    Ok(node)
}

// List and tag options are stored as arrays of their accumulated writes.
fn replay_option(node: &Node, name: &str, value: &Json) -> Result<()> {
    let option: OptionName = name.parse()?;
    match (option.kind(), value) {
        (OptionKind::List | OptionKind::Tag, Json::Array(writes)) => {
            for write in writes {
                node.option(name, Value::from(write.clone()))?;
            }
        }
        (OptionKind::List | OptionKind::Tag, other) => {
            return Err(parse_error(format!("{} should hold an array, found {}", name, other)));
        }
        (OptionKind::Scalar | OptionKind::Typ, value) => {
            node.option(name, Value::from(value.clone()))?;
        }
    }
    Ok(())
}

fn text_field<'a>(field: &str, value: &'a Json) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| parse_error(format!("{} should be a string, found {}", field, value)))
}

fn parse_error(message: impl Into<String>) -> PhrasalError {
    PhrasalError::Parse { message: message.into() }
}

//! The two printers of a constituent tree.
//!
//! Both walk the same tree and encode every literal through
//! [`Value::literal`]. Indentation follows one convention: a non-negative
//! column turns it on and is the column the current node starts at, a
//! negative one keeps everything on a single line.
//!
//! Expression form, indented from column 0:
//! ```text
//! S(NP(D("the"),
//!      N("cat")),
//!   VP(V("sit")))
//! ```
//! Structured form, indented from column 0:
//! ```text
//! {"phrase":"NP",
//!  "elements":[{"terminal":"D","lemma":"the"},
//!              {"terminal":"N","lemma":"cat"}]}
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use crate::construct::{Constituent, Node, Phrase, PhraseNode, Terminal};
use crate::datatype::{Value, key_value, quote};
use crate::error::{PhrasalError, Result};
use crate::options::{OptionValue, Options};

// width of `"elements":[` plus the space before it
const ELEMENTS_OFFSET: i32 = 13;

pub(crate) struct Renderer {
    // phrases currently being printed, to catch a phrase nested in itself
    path: Vec<*const RefCell<PhraseNode>>,
}

impl Renderer {
    pub fn new() -> Self {
        Self { path: Vec::new() }
    }

    pub fn expression(&mut self, node: &Node, indent: i32) -> Result<String> {
        match node {
            Node::Terminal(t) => self.terminal_expression(t),
            Node::Phrase(p) => self.phrase_expression(p, indent),
        }
    }

    pub fn structured(&mut self, node: &Node, indent: i32) -> String {
        match node {
            Node::Terminal(t) => self.terminal_structured(t),
            Node::Phrase(p) => self.phrase_structured(p, indent),
        }
    }

    pub fn terminal_expression(&mut self, terminal: &Terminal) -> Result<String> {
        let node = terminal.0.try_borrow().map_err(|_| {
            PhrasalError::Serialization("terminal is being modified".to_owned())
        })?;
        Ok(format!(
            "{}({}){}",
            node.category,
            quote(&node.lemma),
            option_clauses(&node.options)
        ))
    }

    pub fn phrase_expression(&mut self, phrase: &Phrase, indent: i32) -> Result<String> {
        let ptr = Rc::as_ptr(&phrase.0);
        let node = phrase.0.try_borrow().map_err(|_| {
            PhrasalError::Serialization("phrase is being modified".to_owned())
        })?;
        if self.path.contains(&ptr) {
            return Err(PhrasalError::Serialization(format!(
                "{} phrase contains itself",
                node.category
            )));
        }
        let indent = if indent >= 0 {
            indent + node.category.as_str().len() as i32 + 1
        } else {
            indent
        };
        self.path.push(ptr);
        let children: Result<Vec<String>> = node
            .elements
            .iter()
            .map(|child| self.expression(child, indent))
            .collect();
        self.path.pop();
        Ok(format!(
            "{}({}){}",
            node.category,
            children?.join(&separator(indent)),
            option_clauses(&node.options)
        ))
    }

    pub fn terminal_structured(&mut self, terminal: &Terminal) -> String {
        let Ok(node) = terminal.0.try_borrow() else {
            warn!("terminal is being modified, it is left out");
            return "null".to_owned();
        };
        let mut out = String::from("{");
        out += &key_value("terminal", &Value::from(node.category.as_str()));
        out.push(',');
        out += &key_value("lemma", &Value::from(&node.lemma));
        out += &common_fields(node.language.as_deref(), &node.options);
        out.push('}');
        out
    }

    pub fn phrase_structured(&mut self, phrase: &Phrase, indent: i32) -> String {
        let ptr = Rc::as_ptr(&phrase.0);
        let Ok(node) = phrase.0.try_borrow() else {
            warn!("phrase is being modified, it is left out");
            return "null".to_owned();
        };
        if self.path.contains(&ptr) {
            warn!(category = %node.category, "phrase contains itself, the inner occurrence is left out");
            return "null".to_owned();
        }
        let mut out = String::from("{");
        out += &key_value("phrase", &Value::from(node.category.as_str()));
        out += &common_fields(node.language.as_deref(), &node.options);
        out += &separator(if indent >= 0 { indent + 1 } else { indent });
        out += "\"elements\":[";
        let indent = if indent >= 0 { indent + ELEMENTS_OFFSET } else { indent };
        self.path.push(ptr);
        let children: Vec<String> = node
            .elements
            .iter()
            .map(|child| self.structured(child, indent))
            .collect();
        self.path.pop();
        out += &children.join(&separator(indent));
        out += "]}";
        out
    }
}

/// The expression form, falling back to the structured form when the tree
/// cannot be printed as an expression.
pub(crate) fn display<C: Constituent>(constituent: &C, indented: bool) -> String {
    let indent = if indented { 0 } else { -1 };
    match constituent.to_expression_form(indent) {
        Ok(expression) => expression,
        Err(e) => {
            warn!(error = %e, "falling back to the structured form");
            constituent.to_structured_form(indent)
        }
    }
}

fn separator(indent: i32) -> String {
    if indent < 0 {
        ",".to_owned()
    } else {
        format!(",\n{}", " ".repeat(indent as usize))
    }
}

// `.t("ps").b("*").b("/").tag("a",{"href":"x"})`
fn option_clauses(options: &Options) -> String {
    let mut out = String::new();
    for (name, value) in options.iter() {
        match value {
            OptionValue::Scalar(v) => {
                out += &format!(".{}({})", name, v.literal());
            }
            OptionValue::Typ(typ) => {
                out += &format!(".{}({})", name, Value::Map(typ.clone()).literal());
            }
            OptionValue::List(values) => {
                for v in values {
                    out += &format!(".{}({})", name, v.literal());
                }
            }
            OptionValue::Tags(tags) => {
                for tag in tags {
                    match tag.attributes() {
                        Some(attributes) => {
                            out += &format!(
                                ".{}({},{})",
                                name,
                                quote(tag.name()),
                                Value::Map(attributes.clone()).literal()
                            );
                        }
                        None => out += &format!(".{}({})", name, quote(tag.name())),
                    }
                }
            }
        }
    }
    out
}

// `,"lang":"en","props":{...}`, each part only when present
fn common_fields(language: Option<&str>, options: &Options) -> String {
    let mut out = String::new();
    if let Some(language) = language {
        out.push(',');
        out += &key_value("lang", &Value::from(language));
    }
    if !options.is_empty() {
        let props: Vec<String> = options
            .iter()
            .map(|(name, value)| key_value(name.as_str(), &props_value(value)))
            .collect();
        out += ",\"props\":{";
        out += &props.join(",");
        out.push('}');
    }
    out
}

fn props_value(value: &OptionValue) -> Value {
    match value {
        OptionValue::Scalar(v) => v.clone(),
        OptionValue::List(values) => Value::List(values.clone()),
        OptionValue::Tags(tags) => Value::List(
            tags.iter()
                .map(|tag| {
                    Value::List(vec![
                        Value::from(tag.name()),
                        tag.attributes().cloned().map_or(Value::Null, Value::Map),
                    ])
                })
                .collect(),
        ),
        OptionValue::Typ(typ) => Value::Map(typ.clone()),
    }
}

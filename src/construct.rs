//! Constituents: the nodes of a syntax tree.
//!
//! A [`Terminal`] pairs a category with a lemma, a [`Phrase`] pairs a category
//! with an ordered list of children, and [`Node`] is the tagged union of the
//! two. All three implement [`Constituent`], which carries the option setters,
//! the language tag and both serializers.
//!
//! Handles are shared references. Cloning a handle, or inserting the same node
//! into two phrases, yields two views of one mutable node: a change made
//! through either is visible through both. Use [`Constituent::deep_copy`] to
//! get an independent tree.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::category::{PhraseCategory, TerminalCategory};
use crate::datatype::{Map, Value};
use crate::error::Result;
use crate::options::{OptionName, Options, Tag};
use crate::render::{self, Renderer};

lazy_static! {
    static ref LANGUAGE: Regex = Regex::new(r"^[a-z]{2}$").unwrap();
}

macro_rules! scalar_setters {
    ($($method:ident => $name:ident),* $(,)?) => {
        $(
            fn $method(&self, value: impl Into<Value>) -> Self {
                let value = value.into();
                self.update_options(|options| options.set_scalar(OptionName::$name, value));
                self.clone()
            }
        )*
    };
}

macro_rules! list_setters {
    ($($method:ident => $name:ident),* $(,)?) => {
        $(
            fn $method(&self, value: impl Into<Value>) -> Self {
                let value = value.into();
                self.update_options(|options| options.push_list(OptionName::$name, value));
                self.clone()
            }
        )*
    };
}

/// The capability shared by every node of the tree.
///
/// Setters mutate the node in place and return a handle to the same node, so
/// that calls can be chained: `n("cat").n("p").ba("*")`.
pub trait Constituent: Clone {
    /// A snapshot of the option store.
    fn options(&self) -> Options;
    /// Runs `f` against the option store of this node.
    ///
    /// Panics if `f` reaches back into this same node.
    fn update_options(&self, f: impl FnOnce(&mut Options));
    fn language(&self) -> Option<String>;
    /// Sets the language this node is realized in. Children keep their own.
    fn set_language(&self, language: &str) -> Self;
    /// The functional notation read by the realization engine.
    ///
    /// A non-negative `indent` is the column the node starts at and turns on
    /// one-child-per-line output, a negative one gives a single line.
    fn to_expression_form(&self, indent: i32) -> Result<String>;
    /// The JSON document form, indented with the same convention.
    fn to_structured_form(&self, indent: i32) -> String;
    /// An independent copy of the whole tree below this node.
    fn deep_copy(&self) -> Self;

    /// Sets an option by name, the way the structured form spells it.
    /// Unknown names and badly shaped values are rejected without touching
    /// the option store.
    fn option(&self, name: &str, value: impl Into<Value>) -> Result<Self> {
        let name: OptionName = name.parse()?;
        let value = value.into();
        let mut outcome = Ok(());
        self.update_options(|options| outcome = options.set(name, value));
        outcome.map(|_| self.clone())
    }

    fn tag(&self, name: &str) -> Self {
        let tag = Tag::new(name, None);
        self.update_options(|options| options.push_tag(tag));
        self.clone()
    }

    fn tag_with(&self, name: &str, attributes: impl Into<Value>) -> Self {
        let attributes = match attributes.into() {
            Value::Null => None,
            Value::Map(attributes) => Some(attributes),
            other => {
                warn!(tag = name, attributes = %other, "tag attributes should be a mapping, they are ignored");
                None
            }
        };
        let tag = Tag::new(name, attributes);
        self.update_options(|options| options.push_tag(tag));
        self.clone()
    }

    /// Merges `values` into the sentence type of this node.
    fn typ(&self, values: impl Into<Value>) -> Self {
        match values.into() {
            Value::Map(values) => self.update_options(|options| options.merge_typ(values)),
            other => warn!(typ = %other, "typ should be given a mapping, it is ignored"),
        }
        self.clone()
    }

    scalar_setters! {
        pe => Pe,
        n => N,
        g => G,
        t => T,
        aux => Aux,
        f => F,
        tn => Tn,
        c => C,
        pos => Pos,
        pro => Pro,
        ow => Ow,
        cap => Cap,
        lier => Lier,
        d_opt => DOpt,
        nat => Nat,
    }

    list_setters! {
        a => A,
        b => B,
        ba => Ba,
        en => En,
    }
}

fn checked_language(language: &str) -> String {
    if !LANGUAGE.is_match(language) {
        warn!(language, "language should be a two letter tag");
    }
    language.to_owned()
}

// ------------- Terminal -------------
#[derive(Debug, PartialEq)]
pub(crate) struct TerminalNode {
    pub(crate) category: TerminalCategory,
    pub(crate) lemma: String,
    pub(crate) options: Options,
    pub(crate) language: Option<String>,
}

#[derive(Clone)]
pub struct Terminal(pub(crate) Rc<RefCell<TerminalNode>>);

impl Terminal {
    pub fn new(category: TerminalCategory, lemma: impl Into<Value>) -> Self {
        let lemma = lemma.into();
        let lemma = match category {
            TerminalCategory::DT => {
                if !matches!(lemma, Value::Text(_) | Value::Date(_) | Value::DateTime(_)) {
                    warn!(
                        "DT parameter {} is a {}. It should be a string or a date, its string value is used.",
                        lemma,
                        lemma.data_type()
                    );
                }
                // slashes make the engine read the date in local time
                lemma.to_string().replace('-', "/")
            }
            TerminalCategory::NO => {
                if !matches!(lemma, Value::Text(_) | Value::Int(_) | Value::Float(_)) {
                    warn!(
                        "NO parameter {} is a {}. It should be a string or a number, its string value is used.",
                        lemma,
                        lemma.data_type()
                    );
                }
                lemma.to_string()
            }
            _ => lemma.to_string(),
        };
        Self(Rc::new(RefCell::new(TerminalNode {
            category,
            lemma,
            options: Options::new(),
            language: None,
        })))
    }
    pub fn category(&self) -> TerminalCategory {
        self.0.borrow().category
    }
    pub fn lemma(&self) -> String {
        self.0.borrow().lemma.clone()
    }
}

impl Constituent for Terminal {
    fn options(&self) -> Options {
        self.0.borrow().options.clone()
    }
    fn update_options(&self, f: impl FnOnce(&mut Options)) {
        f(&mut self.0.borrow_mut().options);
    }
    fn language(&self) -> Option<String> {
        self.0.borrow().language.clone()
    }
    fn set_language(&self, language: &str) -> Self {
        self.0.borrow_mut().language = Some(checked_language(language));
        self.clone()
    }
    fn to_expression_form(&self, _indent: i32) -> Result<String> {
        Renderer::new().terminal_expression(self)
    }
    fn to_structured_form(&self, _indent: i32) -> String {
        Renderer::new().terminal_structured(self)
    }
    fn deep_copy(&self) -> Self {
        let node = self.0.borrow();
        Self(Rc::new(RefCell::new(TerminalNode {
            category: node.category,
            lemma: node.lemma.clone(),
            options: node.options.clone(),
            language: node.language.clone(),
        })))
    }
}

impl PartialEq for Terminal {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || *self.0.borrow() == *other.0.borrow()
    }
}

// ------------- Phrase -------------
#[derive(Debug)]
pub(crate) struct PhraseNode {
    pub(crate) category: PhraseCategory,
    pub(crate) elements: Vec<Node>,
    pub(crate) options: Options,
    pub(crate) language: Option<String>,
}

#[derive(Clone)]
pub struct Phrase(pub(crate) Rc<RefCell<PhraseNode>>);

impl Phrase {
    pub fn new(category: PhraseCategory, elements: impl Into<Element>) -> Self {
        let mut kept = Vec::new();
        flatten(elements.into(), &mut kept);
        Self(Rc::new(RefCell::new(PhraseNode {
            category,
            elements: kept,
            options: Options::new(),
            language: None,
        })))
    }
    pub fn category(&self) -> PhraseCategory {
        self.0.borrow().category
    }
    /// Handles to the children, in order.
    pub fn children(&self) -> Vec<Node> {
        self.0.borrow().elements.clone()
    }
    pub fn child(&self, index: usize) -> Option<Node> {
        self.0.borrow().elements.get(index).cloned()
    }
    pub fn len(&self) -> usize {
        self.0.borrow().elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.borrow().elements.is_empty()
    }

    /// Appends one element or a (possibly nested) sequence of elements.
    pub fn add(&self, elements: impl Into<Element>) -> Self {
        self.insert(None, elements.into())
    }

    /// Inserts one element or a (possibly nested) sequence of elements so that
    /// the first of them lands at `index`. An index past the end appends.
    pub fn add_at(&self, elements: impl Into<Element>, index: usize) -> Self {
        self.insert(Some(index), elements.into())
    }

    fn insert(&self, index: Option<usize>, element: Element) -> Self {
        let mut nodes = Vec::new();
        flatten(element, &mut nodes);
        if nodes.is_empty() {
            return self.clone();
        }
        let mut phrase = self.0.borrow_mut();
        let length = phrase.elements.len();
        let at = match index {
            Some(i) if i > length => {
                debug!(index = i, length, "insertion index past the end, appending");
                length
            }
            Some(i) => i,
            None => length,
        };
        phrase.elements.splice(at..at, nodes);
        drop(phrase);
        self.clone()
    }

    fn copy_along(&self, path: &mut Vec<*const RefCell<PhraseNode>>) -> Self {
        let ptr = Rc::as_ptr(&self.0);
        if path.contains(&ptr) {
            warn!(category = %self.category(), "phrase contains itself, the copy shares it");
            return self.clone();
        }
        path.push(ptr);
        let node = self.0.borrow();
        let elements = node
            .elements
            .iter()
            .map(|child| match child {
                Node::Terminal(t) => Node::Terminal(t.deep_copy()),
                Node::Phrase(p) => Node::Phrase(p.copy_along(path)),
            })
            .collect();
        let copy = Self(Rc::new(RefCell::new(PhraseNode {
            category: node.category,
            elements,
            options: node.options.clone(),
            language: node.language.clone(),
        })));
        path.pop();
        copy
    }
}

impl Constituent for Phrase {
    fn options(&self) -> Options {
        self.0.borrow().options.clone()
    }
    fn update_options(&self, f: impl FnOnce(&mut Options)) {
        f(&mut self.0.borrow_mut().options);
    }
    fn language(&self) -> Option<String> {
        self.0.borrow().language.clone()
    }
    fn set_language(&self, language: &str) -> Self {
        self.0.borrow_mut().language = Some(checked_language(language));
        self.clone()
    }
    fn to_expression_form(&self, indent: i32) -> Result<String> {
        Renderer::new().phrase_expression(self, indent)
    }
    fn to_structured_form(&self, indent: i32) -> String {
        Renderer::new().phrase_structured(self, indent)
    }
    fn deep_copy(&self) -> Self {
        self.copy_along(&mut Vec::new())
    }
}

type PhrasePair = (*const RefCell<PhraseNode>, *const RefCell<PhraseNode>);

// A pair met again while it is already being compared counts as equal, so
// phrases nested in themselves compare without recursing forever.
fn phrases_equal(left: &Phrase, right: &Phrase, compared: &mut HashSet<PhrasePair>) -> bool {
    if Rc::ptr_eq(&left.0, &right.0) {
        return true;
    }
    if !compared.insert((Rc::as_ptr(&left.0), Rc::as_ptr(&right.0))) {
        return true;
    }
    let (l, r) = (left.0.borrow(), right.0.borrow());
    l.category == r.category
        && l.language == r.language
        && l.options == r.options
        && l.elements.len() == r.elements.len()
        && l.elements
            .iter()
            .zip(&r.elements)
            .all(|pair| match pair {
                (Node::Terminal(a), Node::Terminal(b)) => a == b,
                (Node::Phrase(a), Node::Phrase(b)) => phrases_equal(a, b, compared),
                _ => false,
            })
}

impl PartialEq for Phrase {
    fn eq(&self, other: &Self) -> bool {
        phrases_equal(self, other, &mut HashSet::new())
    }
}

// ------------- Node -------------
/// Either kind of constituent, as held in the children of a phrase.
#[derive(Clone, PartialEq)]
pub enum Node {
    Terminal(Terminal),
    Phrase(Phrase),
}

impl Node {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Terminal(_))
    }
    pub fn as_terminal(&self) -> Option<&Terminal> {
        match self {
            Node::Terminal(t) => Some(t),
            Node::Phrase(_) => None,
        }
    }
    pub fn as_phrase(&self) -> Option<&Phrase> {
        match self {
            Node::Phrase(p) => Some(p),
            Node::Terminal(_) => None,
        }
    }
    /// The category tag, whichever kind of node this is.
    pub fn category_tag(&self) -> &'static str {
        match self {
            Node::Terminal(t) => t.category().as_str(),
            Node::Phrase(p) => p.category().as_str(),
        }
    }
}

impl Constituent for Node {
    fn options(&self) -> Options {
        match self {
            Node::Terminal(t) => t.options(),
            Node::Phrase(p) => p.options(),
        }
    }
    fn update_options(&self, f: impl FnOnce(&mut Options)) {
        match self {
            Node::Terminal(t) => t.update_options(f),
            Node::Phrase(p) => p.update_options(f),
        }
    }
    fn language(&self) -> Option<String> {
        match self {
            Node::Terminal(t) => t.language(),
            Node::Phrase(p) => p.language(),
        }
    }
    fn set_language(&self, language: &str) -> Self {
        match self {
            Node::Terminal(t) => Node::Terminal(t.set_language(language)),
            Node::Phrase(p) => Node::Phrase(p.set_language(language)),
        }
    }
    fn to_expression_form(&self, indent: i32) -> Result<String> {
        Renderer::new().expression(self, indent)
    }
    fn to_structured_form(&self, indent: i32) -> String {
        Renderer::new().structured(self, indent)
    }
    fn deep_copy(&self) -> Self {
        match self {
            Node::Terminal(t) => Node::Terminal(t.deep_copy()),
            Node::Phrase(p) => Node::Phrase(p.deep_copy()),
        }
    }
}

impl From<Terminal> for Node {
    fn from(t: Terminal) -> Self {
        Node::Terminal(t)
    }
}
impl From<Phrase> for Node {
    fn from(p: Phrase) -> Self {
        Node::Phrase(p)
    }
}

// ------------- Element -------------
/// Anything a phrase accepts as children: a node, a raw value that will be
/// quoted, or a nested sequence of either. Nulls are dropped.
#[derive(Clone)]
pub enum Element {
    Node(Node),
    Value(Value),
    Seq(Vec<Element>),
}

// Depth-first, so that the kept nodes come out in reading order.
fn flatten(element: Element, kept: &mut Vec<Node>) {
    match element {
        Element::Node(node) => kept.push(node),
        Element::Seq(elements) => {
            for e in elements {
                flatten(e, kept);
            }
        }
        Element::Value(Value::Null) => (),
        Element::Value(Value::List(values)) => {
            for v in values {
                flatten(Element::Value(v), kept);
            }
        }
        Element::Value(value) => {
            warn!("Phrase parameter is not a Constituent: {}, it is quoted", value);
            kept.push(Node::Terminal(Terminal::new(
                TerminalCategory::Q,
                value.to_string(),
            )));
        }
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}
impl From<&Node> for Element {
    fn from(node: &Node) -> Self {
        Element::Node(node.clone())
    }
}
impl From<Terminal> for Element {
    fn from(t: Terminal) -> Self {
        Element::Node(Node::Terminal(t))
    }
}
impl From<&Terminal> for Element {
    fn from(t: &Terminal) -> Self {
        Element::Node(Node::Terminal(t.clone()))
    }
}
impl From<Phrase> for Element {
    fn from(p: Phrase) -> Self {
        Element::Node(Node::Phrase(p))
    }
}
impl From<&Phrase> for Element {
    fn from(p: &Phrase) -> Self {
        Element::Node(Node::Phrase(p.clone()))
    }
}
impl From<Value> for Element {
    fn from(v: Value) -> Self {
        Element::Value(v)
    }
}
impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::Value(Value::from(s))
    }
}
impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::Value(Value::from(s))
    }
}
impl From<bool> for Element {
    fn from(b: bool) -> Self {
        Element::Value(Value::from(b))
    }
}
impl From<i32> for Element {
    fn from(i: i32) -> Self {
        Element::Value(Value::from(i))
    }
}
impl From<i64> for Element {
    fn from(i: i64) -> Self {
        Element::Value(Value::from(i))
    }
}
impl From<f64> for Element {
    fn from(x: f64) -> Self {
        Element::Value(Value::from(x))
    }
}
impl From<NaiveDate> for Element {
    fn from(d: NaiveDate) -> Self {
        Element::Value(Value::from(d))
    }
}
impl From<NaiveDateTime> for Element {
    fn from(dt: NaiveDateTime) -> Self {
        Element::Value(Value::from(dt))
    }
}
impl From<Map> for Element {
    fn from(m: Map) -> Self {
        Element::Value(Value::Map(m))
    }
}
impl<T: Into<Element>> From<Vec<T>> for Element {
    fn from(elements: Vec<T>) -> Self {
        Element::Seq(elements.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<Element>> From<Option<T>> for Element {
    fn from(o: Option<T>) -> Self {
        o.map_or(Element::Value(Value::Null), Into::into)
    }
}

// ------------- Display -------------
// The expression form, or the structured form when the former cannot be
// produced. `{:#}` indents.
impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render::display(self, f.alternate()))
    }
}
impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render::display(self, f.alternate()))
    }
}
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render::display(self, f.alternate()))
    }
}
impl fmt::Debug for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Terminal({})", self)
    }
}
impl fmt::Debug for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Phrase({})", self)
    }
}
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Terminal(t) => write!(f, "{:?}", t),
            Node::Phrase(p) => write!(f, "{:?}", p),
        }
    }
}

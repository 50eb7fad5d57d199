//! Phrasal – builds constituent trees for the jsRealB realization engine.
//!
//! A tree is made of *constituents*:
//! * a [`construct::Terminal`] pairs a category (noun, verb, determiner, date,
//!   number, quoted text, ...) with a lemma;
//! * a [`construct::Phrase`] pairs a category (noun phrase, verb phrase,
//!   sentence, ...) with an ordered list of children.
//!
//! Both carry options (number, tense, decorations, markup tags, sentence types)
//! set through the chainable methods of [`construct::Constituent`].
//!
//! ## Modules
//! * [`datatype`] – The [`datatype::Value`] carried by lemmas and options, and
//!   its literal encoding.
//! * [`options`] – The per-node option store and its four kinds of option.
//! * [`construct`] – Terminals, phrases, insertion and flattening of children.
//! * `render` – The expression and structured printers behind
//!   [`construct::Constituent::to_expression_form`] and
//!   [`construct::Constituent::to_structured_form`].
//! * [`category`] – The category registry and its named constructors.
//! * [`reader`] – Rebuilds a tree from its structured form.
//! * [`realizer`] – Hands a serialized tree to the realization engine.
//! * [`settings`], [`logger`] – Configuration and logging for binaries.
//!
//! ## Serialized forms
//! The *expression form* is the functional notation the engine reads, the
//! *structured form* a JSON document for inspection and transport. Both take
//! an indentation column; a negative column gives single-line output.
//!
//! ## Quick Start
//! ```
//! use phrasal::prelude::*;
//! use serde_json::json;
//!
//! let sentence = s![
//!     np![d("the"), no(3).d_opt(json!({"nat": true})), n("cat")],
//!     vp![v("eat"), np![d("a"), n("mouse")]]
//! ]
//! .typ(json!({"pas": true, "neg": true}));
//! assert_eq!(
//!     sentence.to_string(),
//!     r#"S(NP(D("the"),NO("3").dOpt({"nat":true}),N("cat")),VP(V("eat"),NP(D("a"),N("mouse")))).typ({"pas":true,"neg":true})"#
//! );
//! let json: serde_json::Value = serde_json::from_str(&sentence.to_structured_form(0)).unwrap();
//! assert_eq!(json["phrase"], "S");
//! ```
//!
//! ## Sharing
//! Node handles are shared references: a node inserted into two phrases is one
//! node, and changing it changes both. [`construct::Constituent::deep_copy`]
//! gives an independent tree.

pub mod category;
pub mod construct;
pub mod datatype;
pub mod error;
pub mod logger;
pub mod options;
pub mod reader;
pub mod realizer;
mod render;
pub mod settings;

pub use error::{PhrasalError, Result};

/// Everything needed to build and print trees.
pub mod prelude {
    pub use crate::category::*;
    pub use crate::construct::{Constituent, Element, Node, Phrase, Terminal};
    pub use crate::datatype::Value;
    pub use crate::reader::from_structured_form;
    pub use crate::{adv_p, ap, cp, np, pp, s, sp, vp};
}

//! The registry of grammatical categories and their named constructors.
//!
//! Every category is only a tag: the constructors below fix the tag and
//! hand over to [`Terminal::new`] or [`Phrase::new`], where all the tree
//! behavior lives.
//!
//! ```
//! use phrasal::prelude::*;
//! let cat = np![d("the"), a("grey"), n("cat")];
//! assert_eq!(cat.to_string(), r#"NP(D("the"),A("grey"),N("cat"))"#);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::construct::{Element, Phrase, Terminal};
use crate::datatype::Value;
use crate::error::PhrasalError;

macro_rules! terminal_categories {
    ($($variant:ident => $constructor:ident),* $(,)?) => {
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TerminalCategory {
            $($variant),*
        }
        impl TerminalCategory {
            pub const ALL: &'static [TerminalCategory] = &[$(TerminalCategory::$variant),*];
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(TerminalCategory::$variant => stringify!($variant)),*
                }
            }
        }
        impl FromStr for TerminalCategory {
            type Err = PhrasalError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(TerminalCategory::$variant),)*
                    _ => Err(PhrasalError::Parse { message: format!("unknown terminal category {}", s) }),
                }
            }
        }
        $(
            #[doc = concat!("Builds a `", stringify!($variant), "` terminal.")]
            pub fn $constructor(lemma: impl Into<Value>) -> Terminal {
                Terminal::new(TerminalCategory::$variant, lemma)
            }
        )*
    };
}

macro_rules! phrase_categories {
    ($($variant:ident => $constructor:ident),* $(,)?) => {
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PhraseCategory {
            $($variant),*
        }
        impl PhraseCategory {
            pub const ALL: &'static [PhraseCategory] = &[$(PhraseCategory::$variant),*];
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(PhraseCategory::$variant => stringify!($variant)),*
                }
            }
        }
        impl FromStr for PhraseCategory {
            type Err = PhrasalError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok(PhraseCategory::$variant),)*
                    _ => Err(PhrasalError::Parse { message: format!("unknown phrase category {}", s) }),
                }
            }
        }
        $(
            #[doc = concat!("Builds a `", stringify!($variant), "` phrase from a (possibly nested) sequence of elements.")]
            pub fn $constructor(elements: impl Into<Element>) -> Phrase {
                Phrase::new(PhraseCategory::$variant, elements)
            }
        )*
    };
}

terminal_categories! {
    N => n,
    A => a,
    Pro => pro,
    D => d,
    Adv => adv,
    V => v,
    P => p,
    C => c,
    DT => dt,
    NO => no,
    Q => q,
}

phrase_categories! {
    NP => np,
    AP => ap,
    AdvP => adv_p,
    VP => vp,
    PP => pp,
    CP => cp,
    S => s,
    SP => sp,
}

impl fmt::Display for TerminalCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl fmt::Display for PhraseCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Variadic forms of the phrase constructors. Each argument may be anything
// that converts into an Element: a node, a raw value, an Option or a Vec.

#[macro_export]
macro_rules! np {
    ($($e:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::construct::Element> =
            ::std::vec![$($crate::construct::Element::from($e)),*];
        $crate::category::np(elements)
    }};
}
#[macro_export]
macro_rules! ap {
    ($($e:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::construct::Element> =
            ::std::vec![$($crate::construct::Element::from($e)),*];
        $crate::category::ap(elements)
    }};
}
#[macro_export]
macro_rules! adv_p {
    ($($e:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::construct::Element> =
            ::std::vec![$($crate::construct::Element::from($e)),*];
        $crate::category::adv_p(elements)
    }};
}
#[macro_export]
macro_rules! vp {
    ($($e:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::construct::Element> =
            ::std::vec![$($crate::construct::Element::from($e)),*];
        $crate::category::vp(elements)
    }};
}
#[macro_export]
macro_rules! pp {
    ($($e:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::construct::Element> =
            ::std::vec![$($crate::construct::Element::from($e)),*];
        $crate::category::pp(elements)
    }};
}
#[macro_export]
macro_rules! cp {
    ($($e:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::construct::Element> =
            ::std::vec![$($crate::construct::Element::from($e)),*];
        $crate::category::cp(elements)
    }};
}
#[macro_export]
macro_rules! s {
    ($($e:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::construct::Element> =
            ::std::vec![$($crate::construct::Element::from($e)),*];
        $crate::category::s(elements)
    }};
}
#[macro_export]
macro_rules! sp {
    ($($e:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::construct::Element> =
            ::std::vec![$($crate::construct::Element::from($e)),*];
        $crate::category::sp(elements)
    }};
}

//! Classification of grammars: left recursion and the LL(1) class.

pub mod ll;
pub mod recursive;

pub use self::ll::{LlClassification, LlNonterminalClass, SelectCheck};
pub use self::recursive::LeftRecursion;

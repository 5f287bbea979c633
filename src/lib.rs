//! Small ordered-collection bits.

mod lex;

pub use lex::LexSet;

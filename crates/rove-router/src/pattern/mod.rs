//! Path-pattern compilation.
//!
//! Patterns are compiled in three stages:
//!
//! - [`splitter`]: separates balanced inline-regex `(...)` spans from
//!   literal/placeholder text
//! - [`token`]: lexes literal pieces into typed segment tokens
//! - [`compile`]: lowers the pieces to one anchored regex plus an ordered
//!   key schema
//!
//! # Pattern syntax
//!
//! | Syntax        | Meaning                                             |
//! |---------------|-----------------------------------------------------|
//! | `/users`      | literal text                                        |
//! | `:name`       | named parameter (one segment)                       |
//! | `:name?`      | optional named parameter                            |
//! | `:name*`      | named parameter plus catch-all remainder            |
//! | `.:name`      | named parameter excluding dots (file extensions)    |
//! | `+`           | unnamed match of one or more characters             |
//! | `*`           | unnamed match of zero or more characters            |
//! | `(...)`       | raw regex fragment, matched positionally            |

pub mod compile;
pub mod splitter;
pub mod token;

pub use compile::{compile, CompileOptions, CompiledPattern, Key};
pub use splitter::{split_pattern, Piece};
pub use token::{tokenize, ParamToken, Token};

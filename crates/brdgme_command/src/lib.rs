//! Command parsing for brdgme games.
//!
//! Games describe the commands a player may currently issue as a tree of
//! [`Parser`] combinators, built fresh from the game state for each attempt.
//! The same tree can be reflected into a serializable [`Spec`] for clients,
//! summarized as [`Usage`] help, or traced to explain a rejection.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      Parser<C>                           │
//! │  Int  Token  Enum  Player  Space     (leaves)            │
//! │  OneOf  Chain  Many  Opt  Doc  Map   (combinators)       │
//! └───────┬──────────────────┬─────────────────┬─────────────┘
//!         │ parse            │ to_spec         │ parse_traced
//!         ▼                  ▼                 ▼
//!   Output / ParseError     Spec ──► Usage    Tracer
//!                            │                  │
//!                          JSON          TraceBuffer / formatters
//! ```
//!
//! # Example
//!
//! ```
//! use brdgme_command::{Int, Parser, Value};
//!
//! let bid: Parser = Parser::chain(vec![
//!     Parser::token("bid"),
//!     Parser::after_space(Parser::Int(Int::bounded(0, 15))),
//! ]);
//! let output = bid.parse("BID 10", &[]).unwrap();
//! assert_eq!(output.value.get(1), Some(&Value::Int(10)));
//!
//! let err = bid.parse("bid 20", &[]).unwrap_err();
//! assert_eq!(err.to_string(), "20 is too high, expected number between 0 and 15");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chain;
pub mod doc;
pub mod enumeration;
pub mod error;
pub mod int;
pub mod many;
pub mod map;
pub mod one_of;
pub mod opt;
pub mod output;
pub mod parser;
pub mod player;
pub mod space;
pub mod spec;
pub mod text;
pub mod token;
pub mod trace;
pub mod usage;
pub mod value;

pub use chain::Chain;
pub use doc::Doc;
pub use enumeration::{Enum, EnumValue};
pub use error::ParseError;
pub use int::Int;
pub use many::Many;
pub use map::{Map, MapFn};
pub use one_of::OneOf;
pub use opt::Opt;
pub use output::{Output, ParseResult};
pub use parser::{Parser, ParserKind};
pub use player::Player;
pub use space::Space;
pub use spec::Spec;
pub use text::{comma_list, comma_list_and, comma_list_or};
pub use token::Token;
pub use trace::{Tracer, TracerConfig};
pub use usage::{Usage, render_usage};
pub use value::Value;

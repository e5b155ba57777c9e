#![deny(missing_docs)]
// This is an XML parser. XML can be untrusted input from the internet.
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod element;
mod entities;
mod error;
mod handler;
mod lexer;
mod machine;
mod parser;
mod reader;
mod state;
mod stream;

#[doc(hidden)]
pub mod testutils;

pub use element::{Attribute, Element};
pub use entities::decode_named_entity;
pub use error::{Error, StreamError};
pub use handler::Handler;
pub use lexer::{Lexer, LexerOptions};
pub use parser::Parser;
pub use reader::Utf8Reader;
pub use stream::ElementStream;

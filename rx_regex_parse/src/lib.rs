
extern crate thiserror;
extern crate log;

mod ast;
mod charset;
mod error;
mod parser;
pub mod lexer;

pub use ast::{Node, Bounds, Chain};
pub use charset::CharSet;
pub use error::{Error, SyntaxError, CharSetError};
pub use parser::parse;

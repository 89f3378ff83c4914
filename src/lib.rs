pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod scope;

pub use ast::{Value, Variable};
pub use config::{LoadOptions, XxmlConfig};
pub use error::XxmlError;
pub use lexer::{tokenize, LexMode, Token, TokenKind};
pub use parser::{parse, parse_str};
pub use scope::{FromValue, Resolved, Scope};

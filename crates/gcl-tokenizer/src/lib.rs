//! A tokenizer for GCL

mod error;
pub use error::{ErrorKind, GclError};

mod span;
pub use span::Span;

mod token;
pub use token::{Punct, Token, TokenKind};

mod tokenizer;
pub use tokenizer::Tokenizer;

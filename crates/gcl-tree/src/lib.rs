//! Document tree for the GCL configuration language.
//!
//! GCL is a small JSON-like configuration format: dicts with identifier
//! keys, arrays, strings, integers, booleans, `null`, and `#` line
//! comments. This crate turns GCL text into a [`Value`] tree:
//!
//! ```
//! let value = gcl_tree::parse("{port: 8080, hosts: [\"a\", \"b\"]}").unwrap();
//! assert_eq!(value.as_dict().unwrap()["port"].as_int(), Some(8080));
//! ```

mod diagnostic;
mod parser;
mod value;


pub use diagnostic::{render_report, write_report};
pub use gcl_tokenizer::{ErrorKind, GclError, Punct, Span, Token, TokenKind, Tokenizer};
pub use parser::Parser;
pub use value::{Array, Dict, Value};

/// Parse one GCL document into a tree.
///
/// Reads exactly one value from `source`; anything after it is ignored.
/// The first lexical or structural error aborts the parse and is
/// returned as a [`GclError`].
pub fn parse(source: &str) -> Result<Value, GclError> {
    Parser::new(source).parse_document()
}

//! Rendering of GCL document trees back to text.
//!
//! The formatter is a plain pattern-matching traversal over
//! [`gcl_tree::Value`]; it is a consumer of the tree, not part of the
//! parsing pipeline.

mod options;
mod value_format;

pub use options::FormatOptions;
pub use value_format::{format_value, format_value_default};

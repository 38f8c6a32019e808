//! Format a [`gcl_tree::Value`] as GCL text.

use gcl_tree::{Array, Dict, Value};

use crate::FormatOptions;

/// Format a value as GCL text with the given options.
///
/// Every defined value re-parses to an equal tree; `Undefined` renders
/// as a placeholder keyword that the grammar does not accept.
pub fn format_value(value: &Value, options: FormatOptions) -> String {
    let mut formatter = ValueFormatter::new(options);
    formatter.format(value);
    formatter.finish()
}

/// Format a value as GCL text with default options.
pub fn format_value_default(value: &Value) -> String {
    format_value(value, FormatOptions::default())
}

struct ValueFormatter {
    options: FormatOptions,
    out: String,
    depth: usize,
}

impl ValueFormatter {
    fn new(options: FormatOptions) -> Self {
        Self {
            options,
            out: String::new(),
            depth: 0,
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn format(&mut self, value: &Value) {
        match value {
            Value::Undefined => self.out.push_str("undefined"),
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Int(value) => self.out.push_str(&value.to_string()),
            Value::Float(value) => self.out.push_str(&value.to_string()),
            Value::String(text) => self.write_string(text),
            Value::Array(items) => self.write_array(items),
            Value::Dict(entries) => self.write_dict(entries),
        }
    }

    fn write_array(&mut self, items: &Array) {
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }

        self.out.push('[');
        self.depth += 1;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline_indent();
            self.format(item);
        }
        self.depth -= 1;
        self.newline_indent();
        self.out.push(']');
    }

    fn write_dict(&mut self, entries: &Dict) {
        if entries.is_empty() {
            self.out.push_str("{}");
            return;
        }

        self.out.push('{');
        self.depth += 1;
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline_indent();
            self.out.push_str(key);
            self.out.push_str(": ");
            self.format(value);
        }
        self.depth -= 1;
        self.newline_indent();
        self.out.push('}');
    }

    fn write_string(&mut self, text: &str) {
        self.out.push('"');
        for c in text.chars() {
            match c {
                '\\' => self.out.push_str("\\\\"),
                '"' => self.out.push_str("\\\""),
                '\n' => self.out.push_str("\\n"),
                '\t' => self.out.push_str("\\t"),
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    fn newline_indent(&mut self) {
        self.out.push('\n');
        for _ in 0..self.depth {
            self.out.push_str(self.options.indent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(entries: &[(&str, Value)]) -> Value {
        Value::Dict(
            entries
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_format_scalars() {
        insta::assert_snapshot!(format_value_default(&Value::Null), @"null");
        insta::assert_snapshot!(format_value_default(&Value::Bool(true)), @"true");
        insta::assert_snapshot!(format_value_default(&Value::Bool(false)), @"false");
        insta::assert_snapshot!(format_value_default(&Value::Int(-42)), @"-42");
        insta::assert_snapshot!(format_value_default(&Value::Undefined), @"undefined");
    }

    #[test]
    fn test_format_strings_escape() {
        insta::assert_snapshot!(format_value_default(&Value::from("plain")), @r#""plain""#);
        insta::assert_snapshot!(
            format_value_default(&Value::from("a\nb\t\"c\"\\d")),
            @r#""a\nb\t\"c\"\\d""#
        );
    }

    #[test]
    fn test_format_empty_containers() {
        insta::assert_snapshot!(format_value_default(&Value::Array(vec![])), @"[]");
        insta::assert_snapshot!(format_value_default(&dict(&[])), @"{}");
    }

    #[test]
    fn test_format_array() {
        let value = Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        insta::assert_snapshot!(format_value_default(&value), @r"
[
    1,
    2,
    3
]
");
    }

    #[test]
    fn test_format_dict_in_key_order() {
        let value = dict(&[("b", Value::Int(2)), ("a", Value::Int(1))]);
        insta::assert_snapshot!(format_value_default(&value), @r"
{
    a: 1,
    b: 2
}
");
    }

    #[test]
    fn test_format_nested() {
        let value = dict(&[
            ("name", Value::from("gcl")),
            (
                "server",
                dict(&[
                    ("port", Value::Int(8080)),
                    ("hosts", Value::Array(vec![Value::from("a"), Value::from("b")])),
                ]),
            ),
        ]);
        insta::assert_snapshot!(format_value_default(&value), @r#"
{
    name: "gcl",
    server: {
        hosts: [
            "a",
            "b"
        ],
        port: 8080
    }
}
"#);
    }

    #[test]
    fn test_custom_indent() {
        let value = dict(&[("a", Value::Int(1))]);
        let text = format_value(&value, FormatOptions::new().indent("  "));
        assert_eq!(text, "{\n  a: 1\n}");
    }
}

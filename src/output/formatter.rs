//! serde_json formatter reproducing Python's `json.dumps` defaults
//!
//! `json.dumps` separates items with `", "` and keys from values with `": "`,
//! and escapes everything outside printable ASCII as `\uXXXX`.

use serde_json::ser::Formatter;
use std::io;

/// Compact formatter with Python's default separators and ASCII-only output
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonCompatFormatter;

impl Formatter for PythonCompatFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..idx].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", *unit)?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    fn render<T: Serialize>(value: &T) -> String {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PythonCompatFormatter);
        value.serialize(&mut ser).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_object_separators() {
        let value = serde_json::json!({"a": 1, "b": "x"});
        assert_eq!(render(&value), r#"{"a": 1, "b": "x"}"#);
    }

    #[test]
    fn test_array_separators() {
        assert_eq!(render(&vec![1, 2, 3]), "[1, 2, 3]");
        assert_eq!(render(&Vec::<u8>::new()), "[]");
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        assert_eq!(render(&"tiz\u{f3}n"), r#""tiz\u00f3n""#);
    }

    #[test]
    fn test_astral_plane_uses_surrogate_pair() {
        assert_eq!(render(&"\u{1f331}"), r#""\ud83c\udf31""#);
    }

    #[test]
    fn test_delete_char_is_escaped() {
        assert_eq!(render(&"a\u{7f}b"), r#""a\u007fb""#);
    }

    #[test]
    fn test_control_and_quote_escapes() {
        assert_eq!(render(&"line\n\"q\"\\"), r#""line\n\"q\"\\""#);
    }
}

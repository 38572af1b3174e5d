//! Delimited-Text Parsing
//!
//! Streaming character-level parser for the spreadsheet CSV export. A naive
//! split-on-comma is not enough: fields may be quoted and contain embedded
//! commas, line breaks or doubled-quote escapes.

/// Parse `text` into rows of fields.
///
/// - A field may be wrapped in double quotes; inside quotes `""` is a
///   literal quote.
/// - Outside quotes a comma ends the field; `\n`, `\r` or `\r\n` (one
///   break) ends the row.
/// - Completed fields are trimmed; all values stay text.
/// - A trailing partial row is still emitted.
pub fn parse(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(field.trim().to_string());
                field.clear();
            }
            '\n' | '\r' if !in_quotes => {
                // Blank lines produce no row at all
                if !field.is_empty() || !row.is_empty() {
                    row.push(field.trim().to_string());
                    field.clear();
                    rows.push(std::mem::take(&mut row));
                }
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field.trim().to_string());
        rows.push(row);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_plain_rows() {
        let rows = parse("a,b,c\nd,e,f\n");
        assert_eq!(rows, vec![row(&["a", "b", "c"]), row(&["d", "e", "f"])]);
    }

    #[test]
    fn test_quoted_fields_keep_commas_and_escaped_quotes() {
        let rows = parse("\"Sweets, Snacks\",\"Bal \"\"Mithai\"\"\",\"80\"");
        assert_eq!(rows, vec![row(&["Sweets, Snacks", "Bal \"Mithai\"", "80"])]);
    }

    #[test]
    fn test_quoted_field_with_embedded_line_break() {
        let rows = parse("name,\"first line\nsecond line\",end\n");
        assert_eq!(rows, vec![row(&["name", "first line\nsecond line", "end"])]);
    }

    #[test]
    fn test_line_break_variants_each_end_one_row() {
        let rows = parse("a,b\r\nc,d\re,f\ng,h");
        assert_eq!(
            rows,
            vec![
                row(&["a", "b"]),
                row(&["c", "d"]),
                row(&["e", "f"]),
                row(&["g", "h"]),
            ]
        );
    }

    #[test]
    fn test_unquoted_fields_are_trimmed() {
        let rows = parse("  Sweets ,  Jalebi  , 60 \n");
        assert_eq!(rows, vec![row(&["Sweets", "Jalebi", "60"])]);
    }

    #[test]
    fn test_trailing_partial_row_is_emitted() {
        let rows = parse("a,b\nc,d");
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let rows = parse("a,b\n\n\nc,d\n");
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["c", "d"])]);
    }

    #[test]
    fn test_empty_trailing_fields_survive() {
        let rows = parse("a,,\n");
        assert_eq!(rows, vec![row(&["a", "", ""])]);
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert!(parse("").is_empty());
    }
}

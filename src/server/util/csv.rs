//! Minimal RFC 4180 reader for admin uploads.
//!
//! Supports quoted fields, doubled quotes inside quoted fields, embedded line breaks
//! and both CRLF and LF record separators. Blank lines are skipped. Every record keeps
//! the line it started on so callers can report row errors precisely.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// A quoted field runs to the end of the input.
    #[error("Unterminated quoted field starting on line {0}")]
    UnterminatedQuote(usize),

    /// Text follows the closing quote of a field before the next separator.
    #[error("Unexpected character after closing quote on line {0}")]
    TextAfterQuote(usize),
}

/// One parsed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    /// 1-based line on which the record starts.
    pub line: usize,
    pub fields: Vec<String>,
}

impl CsvRecord {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

struct Reader {
    records: Vec<CsvRecord>,
    fields: Vec<String>,
    field: String,
    line: usize,
    record_line: usize,
    closed_quote: bool,
}

impl Reader {
    fn end_field(&mut self) {
        self.fields.push(std::mem::take(&mut self.field));
        self.closed_quote = false;
    }

    fn end_record(&mut self) {
        let blank = self.fields.is_empty() && self.field.is_empty() && !self.closed_quote;
        self.end_field();

        let fields = std::mem::take(&mut self.fields);
        if !blank {
            self.records.push(CsvRecord {
                line: self.record_line,
                fields,
            });
        }

        self.line += 1;
        self.record_line = self.line;
    }
}

/// Parses CSV text into records.
///
/// # Returns
/// - `Ok(Vec<CsvRecord>)` - All non-blank records in input order
/// - `Err(CsvError)` - The input is not well-formed
pub fn parse(input: &str) -> Result<Vec<CsvRecord>, CsvError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);

    let mut reader = Reader {
        records: Vec::new(),
        fields: Vec::new(),
        field: String::new(),
        line: 1,
        record_line: 1,
        closed_quote: false,
    };
    let mut in_quotes = false;
    let mut quote_line = 0;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    reader.field.push('"');
                }
                '"' => {
                    in_quotes = false;
                    reader.closed_quote = true;
                }
                '\n' => {
                    reader.line += 1;
                    reader.field.push(c);
                }
                _ => reader.field.push(c),
            }
            continue;
        }

        match c {
            '"' if reader.field.is_empty() && !reader.closed_quote => {
                in_quotes = true;
                quote_line = reader.line;
            }
            ',' => reader.end_field(),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                reader.end_record();
            }
            '\n' => reader.end_record(),
            _ if reader.closed_quote => return Err(CsvError::TextAfterQuote(reader.line)),
            _ => reader.field.push(c),
        }
    }

    if in_quotes {
        return Err(CsvError::UnterminatedQuote(quote_line));
    }

    if !reader.field.is_empty() || !reader.fields.is_empty() || reader.closed_quote {
        reader.end_record();
    }

    Ok(reader.records)
}

//! Compiles `$name` placeholders in configured SQL into SQLite numbered parameters.
//! Literals, quoted identifiers and comments are copied through untouched.

/// SQL with numbered placeholders and the parameter name bound at each number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledSql {
    /// Rewritten text using `?1`, `?2`, ...
    pub sql: String,
    /// `names[i]` is bound at `?{i + 1}`. Each name appears once.
    pub names: Vec<String>,
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// End (exclusive) of a quoted run starting at `start`. A doubled quote is an escape.
fn skip_quoted(bytes: &[u8], start: usize, close: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        if bytes[i] == close {
            if close != b']' && bytes.get(i + 1) == Some(&close) {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}

fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|p| start + p)
        .unwrap_or(bytes.len())
}

fn skip_block_comment(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    bytes.len()
}

/// Rewrite every `$name` into `?N`, reusing N for repeated names.
pub fn compile_named(query: &str) -> CompiledSql {
    let bytes = query.as_bytes();
    let mut sql = String::with_capacity(query.len() + 8);
    let mut names: Vec<String> = Vec::new();
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let next = bytes.get(i + 1).copied();
        i = match bytes[i] {
            q @ (b'\'' | b'"' | b'`') => skip_quoted(bytes, i, q),
            b'[' => skip_quoted(bytes, i, b']'),
            b'-' if next == Some(b'-') => skip_line_comment(bytes, i),
            b'/' if next == Some(b'*') => skip_block_comment(bytes, i),
            b'$' if next.map(is_ident_start).unwrap_or(false) => {
                let mut end = i + 1;
                while end < bytes.len() && is_ident_char(bytes[end]) {
                    end += 1;
                }
                let name = &query[i + 1..end];
                let index = match names.iter().position(|n| n == name) {
                    Some(p) => p + 1,
                    None => {
                        names.push(name.to_string());
                        names.len()
                    }
                };
                sql.push_str(&query[copied..i]);
                sql.push('?');
                sql.push_str(&index.to_string());
                copied = end;
                end
            }
            _ => i + 1,
        };
    }
    sql.push_str(&query[copied..]);

    CompiledSql { sql, names }
}

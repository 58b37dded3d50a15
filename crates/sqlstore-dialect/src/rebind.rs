//! Placeholder rebinding.
//!
//! Statements are often written once with `?` markers. Rebinding rewrites
//! them into the target engine's placeholders, numbered left to right.
//! Markers inside quoted literals, identifiers and comments are left alone,
//! and `??` yields a literal `?` (the PostgreSQL JSON key operator). On
//! engines where a backslash escapes inside literals (MySQL), `\'` does not
//! close the literal.

use crate::dialect::SqlDialect;

/// Rewrites `?` markers in `sql` into `dialect` placeholders.
#[must_use]
pub fn rebind(dialect: &dyn SqlDialect, sql: &str) -> String {
    let backslash_escapes = dialect.backslash_escapes();
    let mut out = String::with_capacity(sql.len() + 8);
    let mut ordinal = 0;
    let mut quote: Option<char> = None;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(open) = quote {
            out.push(c);
            if c == '\\' && backslash_escapes && open != '`' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == open {
                // A doubled quote closes and reopens, so it needs no special case.
                quote = None;
            }
            continue;
        }

        match c {
            '\'' | '"' | '`' => {
                quote = Some(c);
                out.push(c);
            }
            '-' if chars.peek() == Some(&'-') => {
                out.push(c);
                for next in chars.by_ref() {
                    out.push(next);
                    if next == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                out.push(c);
                out.push('*');
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    out.push(next);
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            '?' if chars.peek() == Some(&'?') => {
                chars.next();
                out.push('?');
            }
            '?' => {
                ordinal += 1;
                out.push_str(&dialect.placeholder(ordinal));
            }
            _ => out.push(c),
        }
    }

    out
}

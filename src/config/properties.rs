//! `.properties` file parsing
//!
//! Follows the `java.util.Properties` line format so existing
//! `gradle-local.properties` files work unchanged:
//! - `key=value`, `key:value` or `key value`
//! - `#` and `!` start comment lines
//! - a trailing odd backslash joins the next line (its leading whitespace dropped)
//! - escapes `\t \n \r \f \uXXXX`, and `\x` for any other `x`
//!
//! Parsing never fails. A malformed `\u` escape loses its backslash like any other.

use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Parsed key/value pairs. Later duplicates win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    pub fn parse(content: &str) -> Self {
        let entries = logical_lines(content)
            .iter()
            .map(|line| split_entry(line))
            .collect();
        Self { entries }
    }

    /// Parse raw file bytes. Like `java.util.Properties.load(InputStream)` the
    /// bytes are ISO-8859-1, so decoding never fails; other characters need `\uXXXX`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let content: String = bytes.iter().map(|&b| b as char).collect();
        Self::parse(&content)
    }

    /// Load a properties file. A missing file is `Ok(None)`.
    pub fn load(path: &Path) -> io::Result<Option<Self>> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Some(Self::from_bytes(&bytes))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

fn logical_lines(content: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut continuing = false;

    for raw in content.lines() {
        let line = raw.trim_start_matches(is_blank);

        if !continuing && (line.is_empty() || line.starts_with('#') || line.starts_with('!')) {
            continue;
        }

        let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            current.push_str(&line[..line.len() - 1]);
            continuing = true;
        } else {
            current.push_str(line);
            out.push(std::mem::take(&mut current));
            continuing = false;
        }
    }

    if continuing && !current.is_empty() {
        out.push(current);
    }

    out
}

fn split_entry(line: &str) -> (String, String) {
    let chars: Vec<char> = line.chars().collect();

    let mut key_end = 0;
    let mut escaped = false;
    while key_end < chars.len() {
        let c = chars[key_end];
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            break;
        }
        key_end += 1;
    }

    let mut value_start = key_end;
    while value_start < chars.len() && is_blank(chars[value_start]) {
        value_start += 1;
    }
    if value_start < chars.len() && (chars[value_start] == '=' || chars[value_start] == ':') {
        value_start += 1;
        while value_start < chars.len() && is_blank(chars[value_start]) {
            value_start += 1;
        }
    }

    let key: String = chars[..key_end].iter().collect();
    let value: String = chars[value_start..].iter().collect();
    (unescape(&key), unescape(&value))
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                match u32::from_str_radix(&hex, 16) {
                    Ok(code) if hex.len() == 4 => {
                        chars.nth(3);
                        out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                    }
                    _ => out.push('u'),
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

//! Edit script parsing.
//!
//! Converts script lines into `Action` values. Parsing is pure: no editor
//! state is touched, so a malformed script is rejected before any edit runs.
//!
//! Line forms (keywords are case-sensitive):
//! * `insert <pos> <text>`: text is everything after the single space that
//!   follows `<pos>`, or a double-quoted string with `\n`, `\t`, `\"` and
//!   `\\` escapes (use quotes to keep trailing spaces visible).
//! * `delete <pos> <len>`
//! * `undo`, `snapshot`, `restore`, `print`
//! * blank lines and lines starting with `#` are skipped.

use crate::{Action, ActionError};

/// A parsed action with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub action: Action,
}

pub struct ScriptParser;

impl ScriptParser {
    /// Parse a single line. `Ok(None)` for blank and comment lines.
    pub fn parse_line(raw: &str) -> Result<Option<Action>, String> {
        let s = raw.trim_end_matches(['\r', '\n']).trim_start();
        if s.is_empty() || s.starts_with('#') {
            return Ok(None);
        }
        let (keyword, rest) = s.split_once(' ').unwrap_or((s, ""));
        let action = match keyword {
            "insert" => Self::parse_insert(rest)?,
            "delete" => Self::parse_delete(rest)?,
            "undo" => Self::bare(Action::Undo, keyword, rest)?,
            "snapshot" => Self::bare(Action::Snapshot, keyword, rest)?,
            "restore" => Self::bare(Action::Restore, keyword, rest)?,
            "print" => Self::bare(Action::Print, keyword, rest)?,
            other => return Err(format!("unknown action `{other}`")),
        };
        Ok(Some(action))
    }

    fn bare(action: Action, keyword: &str, rest: &str) -> Result<Action, String> {
        if rest.trim().is_empty() {
            Ok(action)
        } else {
            Err(format!("`{keyword}` takes no arguments"))
        }
    }

    fn parse_insert(rest: &str) -> Result<Action, String> {
        let rest = rest.trim_start();
        let (pos, text) = rest.split_once(' ').unwrap_or((rest, ""));
        let position = parse_number(pos, "position")?;
        let text = if text.starts_with('"') {
            unquote(text)?
        } else {
            text.to_string()
        };
        Ok(Action::Insert { position, text })
    }

    fn parse_delete(rest: &str) -> Result<Action, String> {
        let mut parts = rest.split_whitespace();
        let position = parse_number(parts.next().unwrap_or(""), "position")?;
        let length = parse_number(parts.next().unwrap_or(""), "length")?;
        if parts.next().is_some() {
            return Err("`delete` takes exactly two arguments".to_string());
        }
        Ok(Action::Delete { position, length })
    }
}

/// Parse a whole script, failing on the first malformed line.
pub fn parse_script(src: &str) -> Result<Vec<ScriptLine>, ActionError> {
    let mut out = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        let line = idx + 1;
        match ScriptParser::parse_line(raw) {
            Ok(Some(action)) => out.push(ScriptLine { line, action }),
            Ok(None) => {}
            Err(message) => return Err(ActionError::Parse { line, message }),
        }
    }
    Ok(out)
}

fn parse_number(s: &str, what: &str) -> Result<usize, String> {
    if s.is_empty() {
        return Err(format!("missing {what}"));
    }
    s.parse::<usize>().map_err(|_| format!("invalid {what} `{s}`"))
}

fn unquote(s: &str) -> Result<String, String> {
    let inner = s
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .ok_or_else(|| "unterminated quoted text".to_string())?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some(other) => return Err(format!("unknown escape `\\{other}`")),
                None => return Err("dangling escape at end of quoted text".to_string()),
            },
            '"' => return Err("unescaped quote inside quoted text".to_string()),
            c => out.push(c),
        }
    }
    Ok(out)
}

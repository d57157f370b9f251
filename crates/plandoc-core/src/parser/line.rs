//! Line classification and task content parsing.

use crate::models::TaskStatus;

/// Columns a tab advances the indentation by.
const TAB_WIDTH: usize = 4;

/// Structural role of one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// Empty or whitespace-only line
    Blank,
    /// Opening or closing code fence using the given character
    Fence(char),
    /// ATX heading with its level (1-6) and inline content
    Heading { level: usize, content: &'a str },
    /// Bullet or ordered list item with its indentation and content
    Item { indent: usize, content: &'a str },
    /// List item with a broken marker (`-[x] item`, `1.item`), kept whole
    Malformed { indent: usize, content: &'a str },
    /// Anything else: paragraphs, tables, quotes, rules
    Text { indent: usize, content: &'a str },
}

/// Classify a single line of a markdown document.
pub(crate) fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return Line::Blank;
    }

    let indent = indentation(line);

    if trimmed.starts_with("```") {
        return Line::Fence('`');
    }
    if trimmed.starts_with("~~~") {
        return Line::Fence('~');
    }

    if indent <= 3 {
        if let Some((level, content)) = heading(trimmed) {
            return Line::Heading { level, content };
        }
    }

    if is_thematic_break(trimmed) {
        return Line::Text {
            indent,
            content: trimmed.trim_end(),
        };
    }

    if let Some(content) = list_item(trimmed) {
        return Line::Item { indent, content };
    }

    let content = trimmed.trim_end();
    if is_malformed_item(trimmed) {
        Line::Malformed { indent, content }
    } else {
        Line::Text { indent, content }
    }
}

fn indentation(line: &str) -> usize {
    let mut width = 0;
    for ch in line.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += TAB_WIDTH,
            _ => break,
        }
    }
    width
}

fn heading(trimmed: &str) -> Option<(usize, &str)> {
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let rest = &trimmed[level..];
    if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
        return None;
    }

    Some((level, strip_closing_hashes(rest.trim())))
}

/// Remove an optional ATX closing sequence (`## Title ##`).
fn strip_closing_hashes(content: &str) -> &str {
    let without = content.trim_end_matches('#');
    if without.len() == content.len() {
        return content;
    }
    if without.is_empty() || without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        content
    }
}

fn is_thematic_break(trimmed: &str) -> bool {
    let Some(first) = trimmed.chars().next() else {
        return false;
    };
    if !matches!(first, '-' | '*' | '_') {
        return false;
    }

    let mut count = 0;
    for ch in trimmed.chars() {
        if ch == first {
            count += 1;
        } else if !ch.is_whitespace() {
            return false;
        }
    }
    count >= 3
}

/// Returns the content after a list marker when `trimmed` starts a list item.
fn list_item(trimmed: &str) -> Option<&str> {
    let marker_len = if trimmed.starts_with(['-', '*', '+']) {
        1
    } else {
        let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
        if digits == 0 || digits > 9 {
            return None;
        }
        if !trimmed[digits..].starts_with(['.', ')']) {
            return None;
        }
        digits + 1
    };

    let rest = &trimmed[marker_len..];
    if rest.is_empty() {
        return Some("");
    }
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    Some(rest.trim())
}

/// Whether `trimmed` looks like a list item whose marker lost its space.
///
/// Only a bullet glued to a word or a checkbox counts. Emphasis (`*word*`,
/// `**bold**`), decimals (`1.5`) and options (`--flag`) stay prose.
fn is_malformed_item(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    match chars.next() {
        Some('-' | '+') => chars.next().is_some_and(|c| c == '[' || c.is_alphanumeric()),
        Some('*') => chars.next() == Some('['),
        Some(c) if c.is_ascii_digit() => {
            let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
            let mut rest = trimmed[digits..].chars();
            matches!(rest.next(), Some('.' | ')'))
                && rest.next().is_some_and(|c| c == '[' || c.is_alphabetic())
        }
        _ => false,
    }
}

/// Status, assignee and cleaned text parsed from a task line's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TaskContent {
    pub status: TaskStatus,
    pub assignee: Option<String>,
    pub text: String,
}

/// Parse the inline content of a task line.
///
/// A recognized checkbox marker sets the status. An unrecognized bracket
/// token stays in the text and the status falls back to open. The first
/// valid `@name` token becomes the assignee and is removed from the text.
pub(crate) fn parse_task_content(content: &str) -> TaskContent {
    let (marker_status, rest) = split_status_marker(content);

    let mut assignee = None;
    let mut words = Vec::new();
    for word in rest.split_whitespace() {
        if assignee.is_none() {
            if let Some(name) = assignee_name(word) {
                assignee = Some(name.to_string());
                continue;
            }
        }
        words.push(word);
    }
    let mut text = words.join(" ");

    let status = match marker_status {
        Some(status) => status,
        None => match strikethrough(&text) {
            Some(inner) => {
                text = inner;
                TaskStatus::Cancelled
            }
            None => TaskStatus::Open,
        },
    };

    TaskContent {
        status,
        assignee,
        text,
    }
}

fn split_status_marker(content: &str) -> (Option<TaskStatus>, &str) {
    let Some(marker) = content.get(..3) else {
        return (None, content);
    };
    let Some(status) = TaskStatus::from_marker(marker) else {
        return (None, content);
    };

    let rest = &content[3..];
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        (Some(status), rest)
    } else {
        (None, content)
    }
}

fn assignee_name(word: &str) -> Option<&str> {
    let name = word
        .strip_prefix('@')?
        .trim_end_matches(['.', ',', ';', ':', '!', '?', ')']);
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    valid.then_some(name)
}

fn strikethrough(text: &str) -> Option<String> {
    let inner = text.strip_prefix("~~")?.strip_suffix("~~")?;
    let inner = inner.trim();
    (!inner.is_empty() && !inner.contains("~~")).then(|| inner.to_string())
}

/// Collapse runs of whitespace to single spaces.
pub(crate) fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

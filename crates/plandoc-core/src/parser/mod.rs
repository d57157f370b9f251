//! Plan document parser.
//!
//! Turns the text of a `*.plan.md` document into a [`Project`] task tree.
//! Parsing is total: every line either opens a task, continues one, or is
//! treated as prose belonging to the article around the task list. Nothing
//! in the content can make the parse fail.
//!
//! # Syntax
//!
//! - The first `# Title` before any task names the project.
//! - Headings (`##` .. `######`, or `#` after the title) open tasks nested by
//!   heading level.
//! - Bullet (`-`, `*`, `+`) and ordered (`1.`, `1)`) list items open tasks
//!   nested by indentation, below the nearest open heading task.
//! - Indented lines that directly follow a list item continue its text.
//! - A list item whose marker is glued to its text (`-[x] item`, `1.item`)
//!   becomes an open task holding the whole line.
//! - Fenced code blocks are skipped.
//!
//! The first token of a task may be a checkbox marker (see
//! [`crate::models::STATUS_MARKERS`]); the first `@name` token names the
//! assignee.
//!
//! # Examples
//!
//! ```rust
//! use plandoc_core::{models::TaskStatus, parser};
//!
//! let project = parser::parse(
//!     "# Launch\n\n- [x] Build @ann\n  - [ ] Test\n- [/] Release\n",
//!     "fallback",
//! );
//!
//! assert_eq!(project.title, "Launch");
//! assert_eq!(project.tasks.len(), 2);
//! assert_eq!(project.tasks[0].status, TaskStatus::Done);
//! assert_eq!(project.tasks[0].assignee.as_deref(), Some("ann"));
//! assert_eq!(project.tasks[0].children[0].text, "Test");
//! assert_eq!(project.tasks[1].status, TaskStatus::InProgress);
//! ```

mod line;


use std::path::Path;

use log::debug;

use self::line::{classify, normalize, parse_task_content, Line};
use crate::models::{Project, Task, TaskStatus};

/// Suffixes stripped from a file name to build a fallback title.
const TITLE_SUFFIXES: &[&str] = &[".plan.md", ".md", ".markdown"];

/// What opened a task: decides which later lines nest below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Heading(usize),
    Item(usize),
}

impl Anchor {
    /// Whether a node anchored at `child` belongs below a node anchored here.
    fn contains(self, child: Anchor) -> bool {
        match (self, child) {
            (Anchor::Heading(parent), Anchor::Heading(level)) => parent < level,
            (Anchor::Heading(_), Anchor::Item(_)) => true,
            (Anchor::Item(_), Anchor::Heading(_)) => false,
            (Anchor::Item(parent), Anchor::Item(indent)) => parent < indent,
        }
    }
}

/// Incremental tree builder holding the chain of open ancestors.
struct TreeBuilder {
    roots: Vec<Task>,
    open: Vec<(Anchor, Task)>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            roots: Vec::new(),
            open: Vec::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.open.is_empty()
    }

    /// Close open tasks until the top of the chain can contain `anchor`,
    /// then open a new task there.
    fn push(&mut self, anchor: Anchor, mut task: Task) {
        while let Some((top, _)) = self.open.last() {
            if top.contains(anchor) {
                break;
            }
            self.close_top();
        }
        task.depth = self.open.len();
        self.open.push((anchor, task));
    }

    fn close_top(&mut self) {
        if let Some((_, task)) = self.open.pop() {
            match self.open.last_mut() {
                Some((_, parent)) => parent.children.push(task),
                None => self.roots.push(task),
            }
        }
    }

    /// The most recently opened list item, if it is still the innermost task.
    fn current_item(&mut self) -> Option<&mut Task> {
        match self.open.last_mut() {
            Some((Anchor::Item(_), task)) => Some(task),
            _ => None,
        }
    }

    fn finish(mut self) -> Vec<Task> {
        while !self.open.is_empty() {
            self.close_top();
        }
        self.roots
    }
}

/// Parse a plan document into a project tree.
///
/// `default_title` is used when the document has no level-1 heading before
/// its first task.
pub fn parse(text: &str, default_title: &str) -> Project {
    let mut builder = TreeBuilder::new();
    let mut title: Option<String> = None;
    let mut fence: Option<char> = None;
    let mut continuing = false;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = classify(raw);

        if let Some(open_fence) = fence {
            if line == Line::Fence(open_fence) {
                fence = None;
            }
            continue;
        }

        match line {
            Line::Blank => continuing = false,
            Line::Fence(ch) => {
                fence = Some(ch);
                continuing = false;
            }
            Line::Heading { level, content } => {
                continuing = false;
                if level == 1 && title.is_none() && builder.is_empty() {
                    title = Some(normalize(content));
                    continue;
                }
                builder.push(Anchor::Heading(level), new_task(content, line_no));
            }
            Line::Item { indent, content } => {
                builder.push(Anchor::Item(indent), new_task(content, line_no));
                continuing = true;
            }
            Line::Malformed { indent, content } => {
                builder.push(Anchor::Item(indent), plain_task(content, line_no));
                continuing = true;
            }
            Line::Text { indent, content } => {
                let appended = continuing
                    && indent > 0
                    && match builder.current_item() {
                        Some(task) => {
                            if !task.text.is_empty() {
                                task.text.push(' ');
                            }
                            task.text.push_str(&normalize(content));
                            true
                        }
                        None => false,
                    };
                continuing = appended;
            }
        }
    }

    let tasks = builder.finish();
    let project = Project {
        title: title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| default_title.to_string()),
        modified_at: None,
        tasks,
    };

    debug!(
        "Parsed plan '{}' with {} tasks",
        project.title,
        project.task_count()
    );
    project
}

fn new_task(content: &str, line: usize) -> Task {
    let parsed = parse_task_content(content);
    Task {
        text: parsed.text,
        status: parsed.status,
        assignee: parsed.assignee,
        depth: 0,
        line,
        children: Vec::new(),
    }
}

/// An open task holding a line verbatim, with no marker or assignee parsing.
fn plain_task(content: &str, line: usize) -> Task {
    Task {
        text: normalize(content),
        status: TaskStatus::Open,
        assignee: None,
        depth: 0,
        line,
        children: Vec::new(),
    }
}

/// Derive a fallback project title from a document path.
///
/// # Examples
///
/// ```rust
/// use std::path::Path;
///
/// use plandoc_core::parser::title_from_path;
///
/// assert_eq!(title_from_path(Path::new("notes/q3.plan.md")), "q3");
/// assert_eq!(title_from_path(Path::new("README.md")), "README");
/// ```
pub fn title_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = TITLE_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(&name);

    if stem.is_empty() {
        "Untitled".to_string()
    } else {
        stem.to_string()
    }
}

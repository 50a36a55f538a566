//! ASCII tree rendering in the style of `tree(1)`.
//!
//! ```text
//! ├── folder1
//! │   ├── file1
//! │   └── file2
//! └── folder2
//!     └── file3
//! ```

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::arena::{NodeId, OutlineArena};

/// Glyphs used to draw branches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderStyle {
    /// Branch for a node that has later siblings
    pub branch: String,
    /// Branch for the final child of its parent
    pub last_branch: String,
    /// Continuation below a node that has later siblings
    pub vertical: String,
    /// Continuation below a final child
    pub space: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            branch: "├── ".into(),
            last_branch: "└── ".into(),
            vertical: "│   ".into(),
            space: "    ".into(),
        }
    }
}

/// Serializes an outline into branch-drawing text, independent of any cursor.
#[derive(Debug, Clone, Default)]
pub struct AsciiRenderer {
    pub style: RenderStyle,
}

impl AsciiRenderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    /// Full export text; every line is newline-terminated.
    #[instrument(level = "trace", skip_all)]
    pub fn render(&self, outline: &OutlineArena) -> String {
        let mut out = String::new();
        for line in self.render_lines(outline) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Export text as discrete lines, without a trailing empty entry.
    #[instrument(level = "trace", skip_all)]
    pub fn render_lines(&self, outline: &OutlineArena) -> Vec<String> {
        let mut lines = Vec::new();
        let top = outline.top_level();
        for (i, &child) in top.iter().enumerate() {
            self.render_node(outline, child, "", i + 1 == top.len(), &mut lines);
        }
        lines
    }

    fn render_node(
        &self,
        outline: &OutlineArena,
        id: NodeId,
        prefix: &str,
        is_last: bool,
        lines: &mut Vec<String>,
    ) {
        let Some(node) = outline.get_node(id) else {
            return;
        };
        let branch = if is_last {
            &self.style.last_branch
        } else {
            &self.style.branch
        };
        // A branch glyph is never followed by a zero-width label
        let label = if node.text.is_empty() { " " } else { &node.text };
        lines.push(format!("{prefix}{branch}{label}"));

        if !node.expanded {
            return;
        }
        let continuation = if is_last {
            &self.style.space
        } else {
            &self.style.vertical
        };
        let child_prefix = format!("{prefix}{continuation}");
        let children = node.children();
        for (i, &child) in children.iter().enumerate() {
            self.render_node(outline, child, &child_prefix, i + 1 == children.len(), lines);
        }
    }
}

/// Render with the default glyphs.
pub fn render(outline: &OutlineArena) -> String {
    AsciiRenderer::default().render(outline)
}

/// Render with the default glyphs, one entry per line.
pub fn render_lines(outline: &OutlineArena) -> Vec<String> {
    AsciiRenderer::default().render_lines(outline)
}

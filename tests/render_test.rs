//! Tests for the ASCII tree renderer

use rstest::rstest;

use ttree::domain::{render, render_lines, AsciiRenderer, NodeId, OutlineArena, RenderStyle};

/// Empty outline plus a helper to attach labelled nodes.
struct Fixture {
    outline: OutlineArena,
}

impl Fixture {
    fn new() -> Self {
        Self {
            outline: OutlineArena::new(),
        }
    }

    fn add(&mut self, parent: Option<NodeId>, text: &str) -> NodeId {
        let parent = parent.unwrap_or(self.outline.root());
        let id = self.outline.new_node(text);
        self.outline.add_child(parent, id).unwrap();
        id
    }
}

#[test]
fn given_default_style_then_uses_box_drawing_glyphs() {
    let style = RenderStyle::default();
    assert_eq!(style.branch, "├── ");
    assert_eq!(style.last_branch, "└── ");
    assert_eq!(style.vertical, "│   ");
    assert_eq!(style.space, "    ");
}

#[test]
fn given_single_node_when_rendering_then_last_branch() {
    let mut f = Fixture::new();
    f.add(None, "item");
    assert_eq!(render(&f.outline), "└── item\n");
}

#[test]
fn given_siblings_when_rendering_then_only_final_uses_last_branch() {
    let mut f = Fixture::new();
    f.add(None, "item1");
    f.add(None, "item2");
    f.add(None, "item3");

    assert_eq!(
        render_lines(&f.outline),
        vec!["├── item1", "├── item2", "└── item3"]
    );
}

#[test]
fn given_folders_when_rendering_then_matches_tree_output() {
    let mut f = Fixture::new();
    let folder1 = f.add(None, "folder1");
    f.add(Some(folder1), "file1");
    f.add(Some(folder1), "file2");
    let folder2 = f.add(None, "folder2");
    f.add(Some(folder2), "file3");

    let expected = "\
├── folder1
│   ├── file1
│   └── file2
└── folder2
    └── file3
";
    assert_eq!(render(&f.outline), expected);
}

#[test]
fn given_mixed_structure_when_rendering_then_prefixes_follow_ancestors() {
    let mut f = Fixture::new();
    let a = f.add(None, "a");
    f.add(Some(a), "a1");
    f.add(None, "b");
    let c = f.add(None, "c");
    f.add(Some(c), "c1");
    f.add(Some(c), "c2");

    let expected = "\
├── a
│   └── a1
├── b
└── c
    ├── c1
    └── c2
";
    assert_eq!(render(&f.outline), expected);
}

#[test]
fn given_deep_nesting_when_rendering_then_blank_continuations() {
    let mut f = Fixture::new();
    let a = f.add(None, "a");
    let b = f.add(Some(a), "b");
    let c = f.add(Some(b), "c");
    f.add(Some(c), "d");

    let expected = "\
└── a
    └── b
        └── c
            └── d
";
    assert_eq!(render(&f.outline), expected);
}

#[test]
fn given_empty_text_when_rendering_then_glyph_followed_by_single_space() {
    let mut f = Fixture::new();
    f.add(None, "");
    assert_eq!(render(&f.outline), "└──  \n");
}

#[test]
fn given_collapsed_node_when_rendering_then_children_omitted() {
    let mut f = Fixture::new();
    let parent = f.add(None, "parent");
    f.add(Some(parent), "child");
    f.outline.set_expanded(parent, false);

    assert_eq!(render(&f.outline), "└── parent\n");
}

#[test]
fn given_empty_forest_when_rendering_then_empty_string_and_no_lines() {
    let f = Fixture::new();
    assert_eq!(render(&f.outline), "");
    assert!(render_lines(&f.outline).is_empty());
}

#[test]
fn given_unchanged_outline_when_rendering_twice_then_identical() {
    let mut f = Fixture::new();
    let a = f.add(None, "a");
    f.add(Some(a), "");
    f.add(None, "b");

    let renderer = AsciiRenderer::default();
    assert_eq!(renderer.render(&f.outline), renderer.render(&f.outline));
}

#[rstest]
#[case("x")]
#[case("multi word label")]
#[case("ünïcødé")]
fn given_any_label_when_rendering_lines_then_matches_render(#[case] label: &str) {
    let mut f = Fixture::new();
    let a = f.add(None, label);
    f.add(Some(a), label);

    let joined: String = render_lines(&f.outline)
        .iter()
        .map(|l| format!("{}\n", l))
        .collect();
    assert_eq!(joined, render(&f.outline));
}

#[test]
fn given_custom_style_when_rendering_then_uses_its_glyphs() {
    let mut f = Fixture::new();
    let a = f.add(None, "a");
    f.add(Some(a), "a1");
    f.add(None, "b");
    let renderer = AsciiRenderer::new(RenderStyle {
        branch: "|-- ".into(),
        last_branch: "`-- ".into(),
        vertical: "|   ".into(),
        space: "    ".into(),
    });

    assert_eq!(renderer.render(&f.outline), "|-- a\n|   `-- a1\n`-- b\n");
}

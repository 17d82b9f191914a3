use std::fmt;

use nabu_inspect::reflect::Scalar;

use crate::id::WidgetId;
use crate::input::Interaction;
use crate::style::StyleSnapshot;

/// What kind of widget a [`Node`] records, with the state it showed.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Window { open: bool },
    Header { open: bool },
    Separator,
    SeparatorText,
    Text,
    Drag { value: Scalar },
    Slider { value: Scalar, min: Scalar, max: Scalar },
    Checkbox { checked: bool },
    InputText { text: String },
    Combo { preview: String },
    MenuItem { selected: bool },
    Radio { active: bool },
    Button,
    Dummy { width: f32, height: f32 },
}

impl NodeKind {
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Window { .. } => "window",
            NodeKind::Header { .. } => "header",
            NodeKind::Separator => "separator",
            NodeKind::SeparatorText => "separator-text",
            NodeKind::Text => "text",
            NodeKind::Drag { .. } => "drag",
            NodeKind::Slider { .. } => "slider",
            NodeKind::Checkbox { .. } => "checkbox",
            NodeKind::InputText { .. } => "input",
            NodeKind::Combo { .. } => "combo",
            NodeKind::MenuItem { .. } => "item",
            NodeKind::Radio { .. } => "radio",
            NodeKind::Button => "button",
            NodeKind::Dummy { .. } => "dummy",
        }
    }
}

/// One widget submitted during a frame, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: WidgetId,
    /// Id path followed by the label, `/`-separated.
    pub path: String,
    pub kind: NodeKind,
    /// Visible part of the label (everything before `##`).
    pub label: String,
    pub disabled: bool,
    /// Placed on the same line as the previous node.
    pub same_line: bool,
    /// Width in pixels set through `set_next_item_width`.
    pub width: Option<f32>,
    pub tooltip: Option<String>,
    pub style: StyleSnapshot,
    /// Number of id segments in effect.
    pub depth: usize,
}

/// Everything a frame produced.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub nodes: Vec<Node>,
    /// Interactions whose target was submitted disabled.
    pub dropped: Vec<Interaction>,
    /// Interactions whose target was never submitted.
    pub unmatched: Vec<Interaction>,
    /// Id, disabled or style pushes left open at the end of the frame.
    pub unbalanced: bool,
}

impl Frame {
    pub fn node(&self, path: &str) -> Option<&Node> {
        let id = WidgetId::from_path(path);
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.node(path).is_some()
    }

    /// All nodes whose kind has the given [`NodeKind::tag`].
    pub fn nodes_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.kind.tag() == tag)
    }

    /// Index of the node at `path` in submission order.
    pub fn position(&self, path: &str) -> Option<usize> {
        let id = WidgetId::from_path(path);
        self.nodes.iter().position(|n| n.id == id)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            write!(f, "{:indent$}", "", indent = node.depth * 2)?;
            if node.same_line {
                f.write_str("~ ")?;
            }
            write!(f, "[{}] {}", node.kind.tag(), node.label)?;
            match &node.kind {
                NodeKind::Window { open } | NodeKind::Header { open } => write!(f, " {}", if *open { "v" } else { ">" })?,
                NodeKind::Drag { value } => write!(f, " = {value}")?,
                NodeKind::Slider { value, min, max } => write!(f, " = {value} ({min}..{max})")?,
                NodeKind::Checkbox { checked } => write!(f, " = {checked}")?,
                NodeKind::InputText { text } => write!(f, " = {text:?}")?,
                NodeKind::Combo { preview } => write!(f, " = {preview}")?,
                NodeKind::MenuItem { selected } | NodeKind::Radio { active: selected } => {
                    if *selected {
                        f.write_str(" *")?;
                    }
                }
                NodeKind::Dummy { width, height } => write!(f, " {width}x{height}")?,
                _ => {}
            }
            if node.disabled {
                f.write_str(" (disabled)")?;
            }
            if let Some(tooltip) = &node.tooltip {
                write!(f, " \"{tooltip}\"")?;
            }
            writeln!(f)?;
        }
        for i in &self.unmatched {
            writeln!(f, "unmatched: {} {:?}", i.path, i.action)?;
        }
        Ok(())
    }
}

//! Parse trees.
//!
//! A node records the half-open token range it matched. Sequences are
//! flattened into their parent and zero-width matches leave no node, so the
//! children of a node always tile its range exactly.

use std::fmt::Write;

use rowan::TextRange;
use serde::{Serialize, Serializer};
use sqlgram_core::{Colors, Token};

/// Half-open range of token indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TokenRange {
    pub start: usize,
    pub end: usize,
}

impl TokenRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// What a node matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// One token matched by a keyword, literal text or token set.
    Token,
    Identifier(&'static str),
    LiteralString(&'static str),
    Production(&'static str),
    /// The chosen candidate of an alternation.
    Alternation { branch: usize },
    Optional,
    Repetition,
    /// One repetition item.
    Item,
    /// One repetition separator.
    Separator,
}

impl NodeKind {
    fn tag(&self) -> &'static str {
        match self {
            NodeKind::Token => "token",
            NodeKind::Identifier(_) => "identifier",
            NodeKind::LiteralString(_) => "string",
            NodeKind::Production(_) => "production",
            NodeKind::Alternation { .. } => "alternation",
            NodeKind::Optional => "optional",
            NodeKind::Repetition => "repetition",
            NodeKind::Item => "item",
            NodeKind::Separator => "separator",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::Token | NodeKind::Identifier(_) | NodeKind::LiteralString(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNode {
    pub kind: NodeKind,
    pub span: TokenRange,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    pub fn new(kind: NodeKind, span: TokenRange, children: Vec<ParseNode>) -> Self {
        Self {
            kind,
            span,
            children,
        }
    }

    pub(crate) fn leaf(kind: NodeKind, position: usize) -> Self {
        Self::new(kind, TokenRange::new(position, position + 1), Vec::new())
    }

    pub fn production_name(&self) -> Option<&'static str> {
        match self.kind {
            NodeKind::Production(name) => Some(name),
            _ => None,
        }
    }

    /// Chosen branch, for alternation nodes.
    pub fn branch(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Alternation { branch } => Some(branch),
            _ => None,
        }
    }

    /// This node and all descendants in preorder.
    pub fn descendants(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    /// Direct production children, looking through structural nodes.
    pub fn child_productions(&self) -> Vec<&ParseNode> {
        let mut out = Vec::new();
        collect_child_productions(self, &mut out);
        out
    }
}

fn collect_child_productions<'a>(node: &'a ParseNode, out: &mut Vec<&'a ParseNode>) {
    for child in &node.children {
        match child.kind {
            NodeKind::Production(_) => out.push(child),
            _ if child.kind.is_leaf() => {}
            _ => collect_child_productions(child, out),
        }
    }
}

pub struct Preorder<'a> {
    stack: Vec<&'a ParseNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a ParseNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Options for [`ParseTree::dump`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DumpOptions {
    pub colors: Colors,
    /// Append `[start..end]` token ranges.
    pub spans: bool,
    /// S-expression of productions only, eliding single-child chains.
    pub compact: bool,
}

/// A successful parse: the root node plus the tokens it indexes into.
#[derive(Debug, Clone)]
pub struct ParseTree<'t> {
    root: ParseNode,
    tokens: &'t [Token],
}

impl<'t> ParseTree<'t> {
    pub fn new(root: ParseNode, tokens: &'t [Token]) -> Self {
        Self { root, tokens }
    }

    pub fn root(&self) -> &ParseNode {
        &self.root
    }

    pub fn tokens(&self) -> &'t [Token] {
        self.tokens
    }

    pub fn span(&self) -> TokenRange {
        self.root.span
    }

    /// First production node named `name`, in preorder.
    pub fn find(&self, name: &str) -> Option<&ParseNode> {
        self.root
            .descendants()
            .find(|n| n.production_name() == Some(name))
    }

    pub fn find_all(&self, name: &str) -> Vec<&ParseNode> {
        self.root
            .descendants()
            .filter(|n| n.production_name() == Some(name))
            .collect()
    }

    /// `(description, text)` for every identifier, in source order.
    pub fn identifiers(&self) -> Vec<(&'static str, &'t str)> {
        self.root
            .descendants()
            .filter_map(|n| match n.kind {
                NodeKind::Identifier(description) => {
                    Some((description, self.tokens[n.span.start].text.as_str()))
                }
                _ => None,
            })
            .collect()
    }

    /// Text of the first identifier bound to `description`.
    pub fn identifier(&self, description: &str) -> Option<&'t str> {
        self.identifiers()
            .into_iter()
            .find(|(d, _)| *d == description)
            .map(|(_, text)| text)
    }

    /// Token texts of `node` joined by single spaces.
    pub fn text(&self, node: &ParseNode) -> String {
        self.tokens[node.span.start..node.span.end]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Source byte range covered by `node`; `None` for an empty node.
    pub fn source_range(&self, node: &ParseNode) -> Option<TextRange> {
        if node.span.is_empty() {
            return None;
        }
        let first = self.tokens.get(node.span.start)?;
        let last = self.tokens.get(node.span.end - 1)?;
        Some(TextRange::new(first.span.start(), last.span.end()))
    }

    pub fn dump(&self, options: DumpOptions) -> String {
        let mut out = String::new();
        if options.compact {
            self.write_compact(&mut out, &self.root, options.colors);
            out.push('\n');
        } else {
            self.write_node(&mut out, &self.root, 0, options);
        }
        out
    }

    fn write_node(&self, out: &mut String, node: &ParseNode, depth: usize, options: DumpOptions) {
        let c = options.colors;
        for _ in 0..depth {
            out.push_str("  ");
        }
        match node.kind {
            NodeKind::Production(name) => {
                let _ = write!(out, "{}{name}{}", c.production, c.reset);
            }
            NodeKind::Token => {
                let _ = write!(out, "{}{}{}", c.keyword, self.tokens[node.span.start].text, c.reset);
            }
            NodeKind::Identifier(description) | NodeKind::LiteralString(description) => {
                let _ = write!(
                    out,
                    "{}{}{} {}<{description}>{}",
                    c.name, self.tokens[node.span.start].text, c.reset, c.dim, c.reset
                );
            }
            NodeKind::Alternation { branch } => {
                let _ = write!(out, "{}alt #{branch}{}", c.dim, c.reset);
            }
            kind => {
                let _ = write!(out, "{}{}{}", c.dim, kind.tag(), c.reset);
            }
        }
        if options.spans {
            let _ = write!(out, " {}[{}..{}]{}", c.dim, node.span.start, node.span.end, c.reset);
        }
        out.push('\n');
        for child in &node.children {
            self.write_node(out, child, depth + 1, options);
        }
    }

    fn write_compact(&self, out: &mut String, node: &ParseNode, colors: Colors) {
        let mut parts = Vec::new();
        self.compact_parts(node, colors, &mut parts);
        out.push_str(&parts.join(" "));
    }

    /// Renders `node` into `parts`: leaves as their text, productions with a
    /// single rendered child as that child, other productions as `(name ...)`.
    fn compact_parts(&self, node: &ParseNode, colors: Colors, parts: &mut Vec<String>) {
        if node.kind.is_leaf() {
            parts.push(self.tokens[node.span.start].text.clone());
            return;
        }
        let mut inner = Vec::new();
        for child in &node.children {
            self.compact_parts(child, colors, &mut inner);
        }
        match node.kind {
            NodeKind::Production(name) if inner.len() > 1 => parts.push(format!(
                "({}{name}{} {})",
                colors.production,
                colors.reset,
                inner.join(" ")
            )),
            _ => parts.extend(inner),
        }
    }

    /// Serialize as pretty JSON; leaves carry their token text.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn view<'a>(&'a self, node: &'a ParseNode) -> NodeView<'a> {
        let (name, branch) = match node.kind {
            NodeKind::Identifier(d) | NodeKind::LiteralString(d) | NodeKind::Production(d) => {
                (Some(d), None)
            }
            NodeKind::Alternation { branch } => (None, Some(branch)),
            _ => (None, None),
        };
        NodeView {
            kind: node.kind.tag(),
            name,
            branch,
            span: node.span,
            text: node
                .kind
                .is_leaf()
                .then(|| self.tokens[node.span.start].text.as_str()),
            children: node.children.iter().map(|c| self.view(c)).collect(),
        }
    }
}

impl Serialize for ParseTree<'_> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.view(&self.root).serialize(s)
    }
}

#[derive(Serialize)]
struct NodeView<'a> {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<usize>,
    span: TokenRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<NodeView<'a>>,
}

// src/ui/dom.rs
// Virtual document: an arena of nodes with parent links

use super::aria;
use super::node::{Node, escape_text, write_close_tag, write_open_tag};

/// Handle to a node inside one `Document`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct DomNode {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An in-memory document tree
///
/// Every document has the shape `html > body > div` (the container);
/// mounted content goes inside the container.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<DomNode>,
    body: NodeId,
    container: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document with an empty container
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            body: NodeId(0),
            container: NodeId(0),
        };
        let html = doc.push(element_data("html"), None);
        doc.body = doc.push(element_data("body"), Some(html));
        doc.container = doc.push(element_data("div"), Some(doc.body));
        doc
    }

    /// Build a document with `node` mounted into the container
    pub fn mount(node: &Node) -> Self {
        let mut doc = Self::new();
        let container = doc.container;
        doc.insert(node, container);
        doc
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, data: NodeData, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(DomNode {
            data,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    /// Append a copy of `node` (and its subtree) under `parent`
    pub fn insert(&mut self, node: &Node, parent: NodeId) -> NodeId {
        match node {
            Node::Text(content) => self.push(NodeData::Text(content.clone()), Some(parent)),
            Node::Element(element) => {
                let id = self.push(
                    NodeData::Element {
                        tag: element.tag.clone(),
                        attrs: element.attrs.clone(),
                    },
                    Some(parent),
                );
                for child in &element.children {
                    self.insert(child, id);
                }
                id
            }
        }
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0].data
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.tag(id).is_some()
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id.0].data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            NodeData::Text(_) => None,
        }
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    /// Nodes below `id` in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    /// Element nodes below `id` in document order
    pub fn elements_under(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(id).filter(|n| self.is_element(*n))
    }

    /// Parent chain starting at the parent of `id`
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |n| self.parent(*n))
    }

    /// Concatenated text of every text node in the subtree
    pub fn text_content(&self, id: NodeId) -> String {
        match &self.nodes[id.0].data {
            NodeData::Text(content) => content.clone(),
            NodeData::Element { .. } => self
                .descendants(id)
                .filter_map(|n| match self.data(n) {
                    NodeData::Text(content) => Some(content.as_str()),
                    NodeData::Element { .. } => None,
                })
                .collect(),
        }
    }

    /// Concatenated text of the direct text children only
    pub fn own_text(&self, id: NodeId) -> String {
        self.children(id)
            .iter()
            .filter_map(|n| match self.data(*n) {
                NodeData::Text(content) => Some(content.as_str()),
                NodeData::Element { .. } => None,
            })
            .collect()
    }

    /// First element (document order) whose `id` attribute equals `dom_id`
    pub fn element_by_id(&self, dom_id: &str) -> Option<NodeId> {
        self.elements_under(self.root())
            .find(|n| self.attr(*n, "id") == Some(dom_id))
    }

    pub fn element(&self, id: NodeId) -> ElementRef<'_> {
        ElementRef { doc: self, id }
    }

    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].data {
            NodeData::Text(content) => out.push_str(&escape_text(content)),
            NodeData::Element { tag, attrs } => {
                write_open_tag(tag, attrs, out);
                if super::node::VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                for child in self.children(id) {
                    self.write_html(*child, out);
                }
                write_close_tag(tag, out);
            }
        }
    }

    /// Indented dump of the subtree, one tag or text run per line
    pub fn pretty(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_pretty(id, 0, &mut out);
        out
    }

    fn write_pretty(&self, id: NodeId, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match &self.nodes[id.0].data {
            NodeData::Text(content) => {
                let trimmed = content.trim();
                if !trimmed.is_empty() {
                    out.push_str(&indent);
                    out.push_str(&escape_text(trimmed));
                    out.push('\n');
                }
            }
            NodeData::Element { tag, attrs } => {
                out.push_str(&indent);
                write_open_tag(tag, attrs, out);
                out.push('\n');
                if super::node::VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                for child in self.children(id) {
                    self.write_pretty(*child, depth + 1, out);
                }
                out.push_str(&indent);
                write_close_tag(tag, out);
                out.push('\n');
            }
        }
    }
}

fn element_data(tag: &str) -> NodeData {
    NodeData::Element {
        tag: tag.to_string(),
        attrs: Vec::new(),
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}

/// Borrowed view of one element for inspection in queries and tests
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> ElementRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }

    pub fn tag(&self) -> &'a str {
        self.doc.tag(self.id).unwrap_or_default()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.doc.attr(self.id, name)
    }

    pub fn text_content(&self) -> String {
        self.doc.text_content(self.id)
    }

    pub fn role(&self) -> Option<String> {
        aria::role(self.doc, self.id)
    }

    pub fn accessible_name(&self) -> String {
        aria::accessible_name(self.doc, self.id)
    }

    /// False when hidden from the accessibility tree
    pub fn is_accessible(&self) -> bool {
        !aria::is_inaccessible(self.doc, self.id)
    }

    pub fn outer_html(&self) -> String {
        self.doc.outer_html(self.id)
    }

    /// True when this element sits inside the subtree of `ancestor`
    pub fn is_within(&self, ancestor: NodeId) -> bool {
        self.doc.ancestors(self.id).any(|a| a == ancestor)
    }
}

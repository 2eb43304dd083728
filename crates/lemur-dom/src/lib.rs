//! DOM tree implementation for the Lemur renderer.
//!
//! This crate provides an owned, immutable-after-construction DOM tree
//! loosely following the [DOM Living Standard](https://dom.spec.whatwg.org/).
//!
//! # Design
//!
//! Nodes form a closed set of three kinds (element, text, comment)
//! modeled as a tagged enum. Every node owns its subtree outright: a
//! parent holds its children by value, there are no parent or sibling
//! back-references, and cycles are impossible by construction. Cloning a
//! node deep-copies the whole subtree, so a parsed document can be handed
//! to each consumer as an independent value.
//!
//! External code inspects node contents through the [`NodeVisitor`]
//! protocol rather than by matching on [`Node`] directly, which keeps the
//! variant set a private detail of render pipelines built on top.

use std::collections::HashMap;

/// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
///
/// "An element has an associated attribute list."
///
/// Map of attribute names to values, remembering first-insertion order so
/// serialization reproduces the order attributes were declared in markup.
///
/// Invariant: the ordering vector and the map always hold exactly the
/// same set of keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    values: HashMap<String, String>,
    order: Vec<String>,
}

impl AttributeMap {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute.
    ///
    /// The first write wins: if `name` is already present the call is
    /// silently ignored, matching how duplicate attribute declarations in
    /// markup are dropped.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !self.values.contains_key(&name) {
            self.order.push(name.clone());
            let _ = self.values.insert(name, value.into());
        }
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of attributes held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the map holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .filter_map(|name| self.values.get(name).map(|v| (name.as_str(), v.as_str())))
    }

    /// Serialize back to markup-attribute syntax.
    ///
    /// Returns `""` for an empty map; otherwise `name="value"` pairs
    /// joined by single spaces, in insertion order. Values are substituted
    /// literally with no escaping of embedded quotes — a known limitation
    /// preserved for compatibility with existing output.
    #[must_use]
    pub fn print(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Node is an abstract interface that is used by all nodes in a tree."
///
/// The closed set of node kinds in a Lemur document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// [§ 4.9](https://dom.spec.whatwg.org/#interface-element)
    /// "Element nodes are simply known as elements."
    Element(ElementNode),
    /// [§ 4.10](https://dom.spec.whatwg.org/#interface-text)
    /// "Text nodes are known as text."
    Text(TextNode),
    /// [§ 4.7](https://dom.spec.whatwg.org/#interface-comment)
    /// "Comment nodes are known as comments."
    Comment(CommentNode),
}

impl Node {
    /// Build a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextNode::new(text))
    }

    /// Build a comment node.
    #[must_use]
    pub fn comment(comment: impl Into<String>) -> Self {
        Self::Comment(CommentNode::new(comment))
    }

    /// Build an element node.
    #[must_use]
    pub fn element(
        tag: impl Into<String>,
        attributes: AttributeMap,
        children: Vec<Node>,
    ) -> Self {
        Self::Element(ElementNode::new(tag, attributes, children))
    }

    /// The node's tag name.
    ///
    /// Elements report their assigned tag; text and comment nodes report
    /// fixed sentinel tags ([`TextNode::TAG`], [`CommentNode::TAG`]) that
    /// contain a space and therefore can never collide with a real
    /// element tag.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        match self {
            Self::Element(element) => element.tag_name(),
            Self::Text(_) => TextNode::TAG,
            Self::Comment(_) => CommentNode::TAG,
        }
    }

    /// Whether the node's tag name equals `candidate`.
    #[must_use]
    pub fn is(&self, candidate: &str) -> bool {
        self.tag_name() == candidate
    }

    /// Dispatch to the visitor operation matching this node's kind.
    ///
    /// This is the sanctioned way for external code to inspect node
    /// contents.
    pub fn accept<V: NodeVisitor>(&self, visitor: &mut V) {
        match self {
            Self::Element(element) => visitor.visit_element(element),
            Self::Text(text) => visitor.visit_text(text),
            Self::Comment(comment) => visitor.visit_comment(comment),
        }
    }
}

/// Per-kind operations for inspecting a [`Node`].
///
/// [`Node::accept`] performs the dispatch, so a visitor never needs to
/// match on the node enum itself. Adding a node kind means adding a
/// method here; adding a visitor requires no change to node types.
pub trait NodeVisitor {
    /// Visit an element node.
    fn visit_element(&mut self, element: &ElementNode);
    /// Visit a text node.
    fn visit_text(&mut self, text: &TextNode);
    /// Visit a comment node.
    fn visit_comment(&mut self, comment: &CommentNode);
}

/// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
///
/// An element: tag name, attributes, and an exclusively owned sequence of
/// child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    tag: String,
    /// The element's attribute list.
    pub attributes: AttributeMap,
    children: Vec<Node>,
}

impl ElementNode {
    /// Create an element node, taking ownership of its children.
    #[must_use]
    pub fn new(tag: impl Into<String>, attributes: AttributeMap, children: Vec<Node>) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            children,
        }
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// A snapshot of the element's children.
    ///
    /// Children are returned as fresh clones, never as references into
    /// the live tree, so mutating the returned nodes cannot affect this
    /// element. Clone cost is linear in subtree size.
    #[must_use]
    pub fn children(&self) -> Vec<Node> {
        self.children.clone()
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The element's attributes pretty-printed as markup.
    #[must_use]
    pub fn print_attributes(&self) -> String {
        self.attributes.print()
    }

    /// [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes)
    ///
    /// "The id attribute specifies its element's unique identifier (ID)."
    ///
    /// Returns `""` when the attribute is absent.
    #[must_use]
    pub fn id(&self) -> String {
        self.attributes.get("id").unwrap_or_default().to_string()
    }

    /// [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes)
    ///
    /// "The class attribute, if specified, must have a value that is a set
    /// of space-separated tokens."
    ///
    /// Consecutive separators collapse and a whitespace-only value yields
    /// an empty vec; empty tokens are never emitted.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.attributes
            .get("class")
            .map(|list| list.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
///
/// A text node holding literal character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    text: String,
}

impl TextNode {
    /// Sentinel tag reported by every text node.
    pub const TAG: &'static str = "TEXT NODE";

    /// Create a text node.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The literal text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
///
/// A comment node holding literal comment content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    comment: String,
}

impl CommentNode {
    /// Sentinel tag reported by every comment node.
    pub const TAG: &'static str = "COMMENT NODE";

    /// Create a comment node.
    #[must_use]
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }

    /// The literal comment content.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// A [`NodeVisitor`] that serializes a node tree back to markup text.
///
/// Attribute values are substituted literally (see
/// [`AttributeMap::print`]); no indentation or whitespace normalization
/// is performed.
#[derive(Debug, Default)]
pub struct MarkupPrinter {
    output: String,
}

impl MarkupPrinter {
    /// Create a printer with empty output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize `node` and return the accumulated markup.
    #[must_use]
    pub fn print(mut self, node: &Node) -> String {
        node.accept(&mut self);
        self.output
    }
}

impl NodeVisitor for MarkupPrinter {
    fn visit_element(&mut self, element: &ElementNode) {
        let tag = element.tag_name();
        let attributes = element.print_attributes();
        if attributes.is_empty() {
            self.output.push_str(&format!("<{tag}>"));
        } else {
            self.output.push_str(&format!("<{tag} {attributes}>"));
        }
        for child in element.children() {
            child.accept(self);
        }
        self.output.push_str(&format!("</{tag}>"));
    }

    fn visit_text(&mut self, text: &TextNode) {
        self.output.push_str(text.text());
    }

    fn visit_comment(&mut self, comment: &CommentNode) {
        self.output.push_str(&format!("<!--{}-->", comment.comment()));
    }
}

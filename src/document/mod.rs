// src/document/mod.rs
//! Owned HTML document and the typed node view the extractors work on.

use crate::utils::error::DocumentError;
use html5ever::tendril::TendrilSink;
use html5ever::{ns, parse_document, serialize, serialize::SerializeOpts, Attribute, LocalName, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use once_cell::sync::Lazy;
use regex::Regex;
use std::rc::Rc;

// Any whitespace run, NBSP included (`\s` is Unicode-aware)
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Failed to compile WHITESPACE_RE")
});

/// Classification of a node for segmentation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Paragraph,
    /// `<h1>`..`<h6>`, carrying the level.
    Heading(u8),
    Other,
}

impl NodeKind {
    pub fn of(node: &Handle) -> Self {
        match local_name(node) {
            Some("p") => NodeKind::Paragraph,
            Some("h1") => NodeKind::Heading(1),
            Some("h2") => NodeKind::Heading(2),
            Some("h3") => NodeKind::Heading(3),
            Some("h4") => NodeKind::Heading(4),
            Some("h5") => NodeKind::Heading(5),
            Some("h6") => NodeKind::Heading(6),
            _ => NodeKind::Other,
        }
    }

    /// Paragraphs and headings make up the structural sequence.
    pub fn is_structural(self) -> bool {
        !matches!(self, NodeKind::Other)
    }
}

/// A parsed HTML document.
///
/// The tree is reference counted internally, so a `Document` is neither
/// `Send` nor `Sync`: parse it, process it and drop it on the same thread.
pub struct Document {
    dom: RcDom,
}

impl Document {
    /// Parses an HTML string. html5ever recovers from malformed markup the
    /// way browsers do, so parsing itself never fails.
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), Default::default()).one(html);
        tracing::trace!("Parsed document ({} bytes of input)", html.len());
        Self { dom }
    }

    /// The document root node.
    pub fn root(&self) -> &Handle {
        &self.dom.document
    }

    /// All nodes in document (depth-first, source) order. Every call starts a
    /// fresh walk.
    pub fn nodes(&self) -> DocumentNodes {
        DocumentNodes::new(self.root())
    }

    /// The `<body>` container.
    pub fn body(&self) -> Result<Handle, DocumentError> {
        self.nodes()
            .find(|node| local_name(node) == Some("body"))
            .ok_or(DocumentError::MissingBody)
    }

    /// Paragraph and heading elements of the whole document, in order.
    pub fn structural_sequence(&self) -> Vec<Handle> {
        self.nodes()
            .filter(|node| NodeKind::of(node).is_structural())
            .collect()
    }

    /// Serializes the document, including any stamped attributes.
    pub fn to_html(&self) -> Result<String, DocumentError> {
        let mut output = Vec::new();
        let serializable = SerializableHandle::from(self.dom.document.clone());
        serialize(&mut output, &serializable, SerializeOpts::default())
            .map_err(|e| DocumentError::Serialize(e.to_string()))?;

        String::from_utf8(output)
            .map_err(|e| DocumentError::Serialize(format!("UTF-8 conversion failed: {}", e)))
    }
}

/// Lazy pre-order walk over a subtree, the starting node included.
pub struct DocumentNodes {
    stack: Vec<Handle>,
}

impl DocumentNodes {
    pub fn new(start: &Handle) -> Self {
        Self { stack: vec![start.clone()] }
    }
}

impl Iterator for DocumentNodes {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.borrow().iter().rev().cloned());
        Some(node)
    }
}

/// Lowercase local tag name, `None` for non-element nodes.
pub fn local_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

pub fn attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == attr_name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Sets (or overwrites) an attribute on an element. Non-elements are left
/// alone and `false` is returned.
pub fn set_attr(node: &Handle, attr_name: &str, value: &str) -> bool {
    let NodeData::Element { attrs, .. } = &node.data else {
        return false;
    };

    let mut attrs = attrs.borrow_mut();
    if let Some(existing) = attrs.iter_mut().find(|a| &*a.name.local == attr_name) {
        existing.value = value.to_string().into();
    } else {
        attrs.push(Attribute {
            name: QualName::new(None, ns!(), LocalName::from(attr_name)),
            value: value.to_string().into(),
        });
    }
    true
}

pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take()?;
    let parent = weak.upgrade();
    node.parent.set(Some(weak));
    parent
}

/// Identity comparison, never structural equality.
pub fn same_node(a: &Handle, b: &Handle) -> bool {
    Rc::ptr_eq(a, b)
}

/// Raw text of a text node, `None` for anything else.
pub fn text_of(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

/// Tag-free, whitespace-collapsed text content of a subtree.
pub fn text_content(node: &Handle) -> String {
    let raw: String = DocumentNodes::new(node).filter_map(|n| text_of(&n)).collect();
    normalize_text(&raw)
}

pub fn normalize_text(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kinds_in_document_order() {
        let doc = Document::parse("<body><h1>T</h1><p>a</p><div><h3>s</h3><p>b</p></div></body>");
        let kinds: Vec<NodeKind> = doc
            .structural_sequence()
            .iter()
            .map(NodeKind::of)
            .collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Heading(1),
                NodeKind::Paragraph,
                NodeKind::Heading(3),
                NodeKind::Paragraph
            ]
        );
    }

    #[test]
    fn test_nodes_is_restartable() {
        let doc = Document::parse("<body><p>one</p><p>two</p></body>");
        assert_eq!(doc.nodes().count(), doc.nodes().count());
    }

    #[test]
    fn test_text_content_collapses_whitespace_and_strips_tags() {
        let doc = Document::parse("<body><p>  Hello\n   <b>bold</b>\u{a0}world  </p></body>");
        let p = doc.structural_sequence().remove(0);
        assert_eq!(text_content(&p), "Hello bold world");
    }

    #[test]
    fn test_set_attr_overwrites_existing_value() {
        let doc = Document::parse(r#"<body><p id="old" class="x">a</p></body>"#);
        let p = doc.structural_sequence().remove(0);
        assert!(set_attr(&p, "id", "p_1"));
        assert_eq!(attr(&p, "id").as_deref(), Some("p_1"));
        assert_eq!(attr(&p, "class").as_deref(), Some("x"));
    }

    #[test]
    fn test_missing_body_is_reported() {
        let doc = Document::parse(
            r#"<html><head><title>x</title></head><frameset><frame src="a.html"></frameset></html>"#,
        );
        assert!(matches!(doc.body(), Err(DocumentError::MissingBody)));
    }

    #[test]
    fn test_parent_and_identity() {
        let doc = Document::parse("<body><h2>References</h2></body>");
        let heading = doc.structural_sequence().remove(0);
        let text = heading.children.borrow()[0].clone();
        let up = parent(&text).expect("text node has a parent");
        assert!(same_node(&up, &heading));
        // The weak link survives the lookup
        assert!(parent(&text).is_some());
    }

    #[test]
    fn test_to_html_contains_stamped_attribute() {
        let doc = Document::parse("<body><p>a</p></body>");
        let p = doc.structural_sequence().remove(0);
        set_attr(&p, "id", "p_1");
        let html = doc.to_html().unwrap();
        assert!(html.contains(r#"<p id="p_1">a</p>"#), "got: {}", html);
    }
}

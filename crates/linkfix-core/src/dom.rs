//! Minimal document tree standing in for the host DOM.
//!
//! The corrector only ever reads and writes anchor `href` attributes, so the
//! model is deliberately small: an arena of element nodes addressed by copyable
//! handles, with subtree insertion as the one structural operation. This keeps
//! the watcher testable without a live rendering engine.

use thiserror::Error;

/// Error for handle-based tree access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("invalid node handle {0}")]
    InvalidHandle(usize),
}

/// Copyable reference to an element node in a [`DomTree`]. Handles never
/// dangle within one tree (nodes are not removed), but a handle from another
/// tree is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(usize);

impl NodeHandle {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Detached element subtree, built before insertion into a tree.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Shorthand for `<a href="...">`.
    pub fn anchor(href: impl Into<String>) -> Self {
        Element::new("a").attr("href", href)
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}

struct NodeData {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<NodeHandle>,
}

/// Arena-backed element tree rooted at a `body` node.
pub struct DomTree {
    nodes: Vec<NodeData>,
    body: NodeHandle,
}

impl DomTree {
    /// New tree containing only an empty `body` root.
    pub fn new() -> Self {
        let body = NodeData {
            tag: "body".to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        };
        DomTree {
            nodes: vec![body],
            body: NodeHandle(0),
        }
    }

    pub fn body(&self) -> NodeHandle {
        self.body
    }

    fn node(&self, handle: NodeHandle) -> Result<&NodeData, DomError> {
        self.nodes
            .get(handle.index())
            .ok_or(DomError::InvalidHandle(handle.index()))
    }

    /// Materializes `element` (and its descendants) under `parent`, returning
    /// the handle of the inserted subtree root.
    pub fn insert_subtree(
        &mut self,
        parent: NodeHandle,
        element: Element,
    ) -> Result<NodeHandle, DomError> {
        self.node(parent)?;
        let root = self.materialize(element);
        self.nodes[parent.index()].children.push(root);
        Ok(root)
    }

    fn materialize(&mut self, element: Element) -> NodeHandle {
        let handle = NodeHandle(self.nodes.len());
        self.nodes.push(NodeData {
            tag: element.tag,
            attrs: element.attrs,
            children: Vec::new(),
        });
        for child in element.children {
            let child_handle = self.materialize(child);
            self.nodes[handle.index()].children.push(child_handle);
        }
        handle
    }

    pub fn tag(&self, handle: NodeHandle) -> Result<&str, DomError> {
        Ok(&self.node(handle)?.tag)
    }

    pub fn attr(&self, handle: NodeHandle, name: &str) -> Result<Option<&str>, DomError> {
        let node = self.node(handle)?;
        Ok(node
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str()))
    }

    /// Sets (or adds) an attribute on the element.
    pub fn set_attr(
        &mut self,
        handle: NodeHandle,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.node(handle)?;
        let node = &mut self.nodes[handle.index()];
        match node.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.into(),
            None => node.attrs.push((name.to_string(), value.into())),
        }
        Ok(())
    }

    pub fn children(&self, handle: NodeHandle) -> Result<&[NodeHandle], DomError> {
        Ok(&self.node(handle)?.children)
    }

    /// Handles of all `a` elements strictly below `root`, in document order.
    /// The root itself is excluded, matching `querySelectorAll` over an added
    /// node (which matches descendants only).
    pub fn anchors_in(&self, root: NodeHandle) -> Result<Vec<NodeHandle>, DomError> {
        let mut anchors = Vec::new();
        let mut stack: Vec<NodeHandle> = self.node(root)?.children.iter().rev().copied().collect();
        while let Some(handle) = stack.pop() {
            let node = self.node(handle)?;
            if node.tag == "a" {
                anchors.push(handle);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        Ok(anchors)
    }

    /// True if `handle` equals `root` or lies in the subtree below it.
    pub fn contains(&self, root: NodeHandle, handle: NodeHandle) -> Result<bool, DomError> {
        self.node(handle)?;
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            if current == handle {
                return Ok(true);
            }
            stack.extend(self.node(current)?.children.iter().copied());
        }
        Ok(false)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

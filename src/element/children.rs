use super::{Element, Node};
use alloc::sync::Arc;
use core::{ops::Deref, slice};
use serde::Serialize;

/// Children of an element.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Children {
    /// A single child.
    Single(Arc<Node>),
    /// An ordered sequence of children.
    Many(Vec<Arc<Node>>),
}

impl Children {
    /// Returns children in order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        let nodes = match self {
            Self::Single(node) => slice::from_ref(node),
            Self::Many(nodes) => nodes.as_slice(),
        };

        nodes.iter().map(Deref::deref)
    }

    /// Returns a number of children.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(nodes) => nodes.len(),
        }
    }

    /// Returns `true` if there is no child.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Children {
    fn default() -> Self {
        Self::Many(vec![])
    }
}

impl From<Arc<Node>> for Children {
    fn from(node: Arc<Node>) -> Self {
        Self::Single(node)
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Arc::new(node).into()
    }
}

impl From<Element> for Children {
    fn from(element: Element) -> Self {
        Node::from(element).into()
    }
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Node::from(text).into()
    }
}

impl From<String> for Children {
    fn from(text: String) -> Self {
        Node::from(text).into()
    }
}

impl From<Vec<Arc<Node>>> for Children {
    fn from(nodes: Vec<Arc<Node>>) -> Self {
        Self::Many(nodes)
    }
}

impl From<Vec<Node>> for Children {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Many(nodes.into_iter().map(Arc::new).collect())
    }
}

impl From<Vec<Element>> for Children {
    fn from(elements: Vec<Element>) -> Self {
        Self::Many(elements.into_iter().map(Element::into_shared).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn count_single_child() {
        let children = Children::from("text");

        assert_eq!(children.len(), 1);
        assert!(!children.is_empty());
    }

    #[test]
    fn count_empty_children() {
        assert_eq!(Children::default().len(), 0);
        assert!(Children::default().is_empty());
    }

    #[test]
    fn iterate_mixed_children() {
        let children = Children::from(vec![Node::from("a"), Node::from("b")]);

        assert_eq!(
            children.iter().filter_map(Node::as_text).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }
}

//! Helpers over `markup5ever_rcdom` handles.

use alloc::rc::Rc;
use markup5ever_rcdom::{Handle, NodeData};

/// Returns descendants of a node in document order, excluding the node itself.
pub fn descendants(node: &Handle) -> impl Iterator<Item = Handle> {
    let mut stack = node.children.borrow().iter().rev().cloned().collect::<Vec<_>>();

    core::iter::from_fn(move || {
        let node = stack.pop()?;
        stack.extend(node.children.borrow().iter().rev().cloned());
        Some(node)
    })
}

/// Returns an attribute value of an element node.
pub fn attribute(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attribute| &*attribute.name.local == name)
            .map(|attribute| attribute.value.to_string()),
        _ => None,
    }
}

/// Returns a tag name of an element node.
pub fn tag(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

/// Returns text joined from direct text children of a node.
pub fn own_text(node: &Handle) -> String {
    let mut text = String::new();

    for child in node.children.borrow().iter() {
        if let NodeData::Text { contents } = &child.data {
            text.push_str(&contents.borrow());
        }
    }

    text
}

/// Appends a child to a parent node.
pub fn append(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Detaches all children of a node.
pub fn clear(parent: &Handle) {
    for child in parent.children.take() {
        child.parent.set(None);
    }
}

/// Returns a parent of a node if it is still attached.
pub fn parent(node: &Handle) -> Option<Handle> {
    let parent = node.parent.take();
    let handle = parent.as_ref().and_then(|parent| parent.upgrade());
    node.parent.set(parent);
    handle
}

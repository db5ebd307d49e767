mod error;

pub use self::error::MountError;
use crate::{
    document::{Document, dom},
    element::{Element, Node},
};
use core::cell::RefCell;
use html5ever::{Attribute, LocalName, Namespace, QualName, tendril::StrTendril};
use log::{debug, trace};
use markup5ever_rcdom::{self as rcdom, Handle, NodeData};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// A root that owns the content of a container node.
pub struct Root {
    container: Handle,
}

impl Root {
    /// Creates a root from the ID of a container element in a document.
    pub fn new(document: &Document, id: &str) -> Result<Self, MountError> {
        document
            .get_element_by_id(id)
            .map(Self::from_handle)
            .ok_or_else(|| MountError::ContainerNotFound(id.into()))
    }

    /// Creates a root from a container node.
    pub const fn from_handle(container: Handle) -> Self {
        Self { container }
    }

    /// Returns a container node.
    pub const fn container(&self) -> &Handle {
        &self.container
    }

    /// Renders an element tree into the container, replacing its prior content.
    pub fn render(&self, element: &Element) {
        debug!("mounting <{}> into a container", element.tag());

        dom::clear(&self.container);
        dom::append(&self.container, materialize_element(element));
    }
}

/// Mounts an element tree into a container element with an ID.
pub fn mount(document: &Document, id: &str, element: &Element) -> Result<Root, MountError> {
    let root = Root::new(document, id)?;
    root.render(element);
    Ok(root)
}

fn materialize(node: &Node) -> Handle {
    match node {
        Node::Element(element) => materialize_element(element),
        Node::Text(text) => rcdom::Node::new(NodeData::Text {
            contents: RefCell::new(StrTendril::from(text.as_str())),
        }),
    }
}

fn materialize_element(element: &Element) -> Handle {
    trace!("creating <{}>", element.tag());

    let handle = rcdom::Node::new(NodeData::Element {
        name: html_name(element.tag()),
        attrs: RefCell::new(
            element
                .attributes()
                .map(|(key, value)| Attribute {
                    name: QualName::new(None, Namespace::from(""), LocalName::from(key)),
                    value: StrTendril::from(value.to_string()),
                })
                .collect(),
        ),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    });

    for child in element.children().iter() {
        dom::append(&handle, materialize(child));
    }

    handle
}

fn html_name(tag: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(tag))
}

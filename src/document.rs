pub mod dom;
mod error;

pub use self::error::DocumentError;
use html5ever::{
    parse_document,
    serialize::{SerializeOpts, serialize},
    tendril::TendrilSink,
};
use markup5ever_rcdom::{Handle, RcDom, SerializableHandle};
use std::io::Read;

const EMPTY_DOCUMENT: &str = "<!DOCTYPE html><html><head></head><body></body></html>";

/// A host document into which element trees are mounted.
pub struct Document {
    dom: RcDom,
}

impl Document {
    /// Parses an HTML document.
    pub fn parse(html: &str) -> Self {
        Self {
            dom: parse_document(RcDom::default(), Default::default()).one(html),
        }
    }

    /// Reads and parses an HTML document.
    pub fn read(mut reader: impl Read) -> Result<Self, DocumentError> {
        Ok(Self {
            dom: parse_document(RcDom::default(), Default::default())
                .from_utf8()
                .read_from(&mut reader)?,
        })
    }

    /// Returns a document node.
    pub const fn root(&self) -> &Handle {
        &self.dom.document
    }

    /// Returns a `body` element.
    pub fn body(&self) -> Option<Handle> {
        dom::descendants(self.root()).find(|node| dom::tag(node).as_deref() == Some("body"))
    }

    /// Finds an element by its `id` attribute.
    pub fn get_element_by_id(&self, id: &str) -> Option<Handle> {
        dom::descendants(self.root())
            .find(|node| dom::attribute(node, "id").as_deref() == Some(id))
    }

    /// Returns `true` if a node is attached to the document.
    pub fn contains(&self, node: &Handle) -> bool {
        let mut current = node.clone();

        while let Some(parent) = dom::parent(&current) {
            current = parent;
        }

        Handle::ptr_eq(&current, self.root())
    }

    /// Serializes the document into HTML.
    pub fn to_html(&self) -> Result<String, DocumentError> {
        let mut bytes = vec![];

        serialize(
            &mut bytes,
            &SerializableHandle::from(self.root().clone()),
            SerializeOpts::default(),
        )?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::parse(EMPTY_DOCUMENT)
    }
}

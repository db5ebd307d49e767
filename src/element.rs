mod attribute;
mod children;

pub use self::{attribute::AttributeValue, children::Children};
use alloc::{collections::BTreeMap, sync::Arc};
use serde::{Serialize, Serializer, ser::SerializeStruct};

const CHILDREN_KEY: &str = "children";

/// A node in an element tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// An element.
    Element(Element),
    /// A text.
    Text(String),
}

impl Node {
    /// Returns an element if the node is one.
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Returns a text if the node is one.
    #[allow(clippy::missing_const_for_fn)]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text.as_str()),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// An immutable description of a presentation node.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, AttributeValue>,
    children: Children,
}

impl Element {
    /// Creates an element.
    ///
    /// A later attribute overwrites an earlier one with the same key. A `children`
    /// attribute is dropped in favor of the children argument.
    pub fn new<'a>(
        tag: impl Into<String>,
        attributes: impl IntoIterator<Item = (&'a str, AttributeValue)>,
        children: impl Into<Children>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attributes: attributes
                .into_iter()
                .filter(|(key, _)| *key != CHILDREN_KEY)
                .map(|(key, value)| (key.to_owned(), value))
                .collect(),
            children: children.into(),
        }
    }

    /// Returns a tag name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns attributes sorted by their keys.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Returns an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Returns children.
    pub const fn children(&self) -> &Children {
        &self.children
    }

    /// Converts the element into a node shareable between parents.
    pub fn into_shared(self) -> Arc<Node> {
        Arc::new(self.into())
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Props<'a> {
            #[serde(flatten)]
            attributes: &'a BTreeMap<String, AttributeValue>,
            children: &'a Children,
        }

        let mut state = serializer.serialize_struct("Element", 2)?;
        state.serialize_field("type", &self.tag)?;
        state.serialize_field(
            "props",
            &Props {
                attributes: &self.attributes,
                children: &self.children,
            },
        )?;
        state.end()
    }
}

/// Creates an element from a tag, attributes, and children.
pub fn create_element<'a>(
    tag: impl Into<String>,
    attributes: impl IntoIterator<Item = (&'a str, AttributeValue)>,
    children: impl Into<Children>,
) -> Element {
    Element::new(tag, attributes, children)
}

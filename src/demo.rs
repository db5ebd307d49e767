use crate::element::{Element, create_element};
use clap::ValueEnum;

/// A demo element tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Example {
    /// A parent with nested headings.
    #[default]
    Parent,
    /// A heading with attributes.
    Heading,
}

impl Example {
    /// Builds an element tree.
    pub fn element(self) -> Element {
        match self {
            Self::Parent => parent(),
            Self::Heading => heading(),
        }
    }
}

/// Builds a parent element with two nested headings.
pub fn parent() -> Element {
    create_element(
        "div",
        [("id", "parent".into())],
        create_element(
            "div",
            [("id", "child".into())],
            vec![
                create_element("h1", [], "I am h1"),
                create_element("h2", [], "I am h2"),
            ],
        ),
    )
}

/// Builds a heading element.
pub fn heading() -> Element {
    create_element(
        "h2",
        [("id", "heading".into()), ("xyz", "abc".into())],
        "Hello world from react in app",
    )
}

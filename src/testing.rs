//! Rendering components into a throwaway document and querying the output.

mod error;

pub use self::error::{Query, QueryError};
use crate::{
    component::Component,
    document::{Document, dom},
    mount::{MountError, mount},
};
use itertools::Itertools;
use markup5ever_rcdom::Handle;

const CONTAINER_ID: &str = "root";
const HOST_DOCUMENT: &str =
    r#"<!DOCTYPE html><html><head></head><body><div id="root"></div></body></html>"#;
const IGNORED_TAGS: &[&str] = &["script", "style"];
const TEST_ID_ATTRIBUTE: &str = "data-testid";

/// Rendered output of a component.
pub struct Screen {
    document: Document,
    container: Handle,
}

impl Screen {
    /// Returns a document.
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Returns a container node.
    pub const fn container(&self) -> &Handle {
        &self.container
    }

    /// Returns `true` if a node is attached to the document.
    pub fn is_in_document(&self, node: &Handle) -> bool {
        self.document.contains(node)
    }

    /// Gets a single element by its visible text.
    pub fn get_by_text(&self, text: &str) -> Result<Handle, QueryError> {
        get(self.find_by_text(text), Query::Text(text.into()))
    }

    /// Queries a single element by its visible text.
    pub fn query_by_text(&self, text: &str) -> Result<Option<Handle>, QueryError> {
        query(self.find_by_text(text), Query::Text(text.into()))
    }

    /// Gets all elements with visible text in document order.
    pub fn get_all_by_text(&self, text: &str) -> Result<Vec<Handle>, QueryError> {
        let nodes = self.find_by_text(text);

        if nodes.is_empty() {
            Err(QueryError::NotFound {
                query: Query::Text(text.into()),
            })
        } else {
            Ok(nodes)
        }
    }

    /// Gets a single element by its `data-testid` attribute.
    pub fn get_by_test_id(&self, id: &str) -> Result<Handle, QueryError> {
        get(self.find_by_test_id(id), Query::TestId(id.into()))
    }

    /// Queries a single element by its `data-testid` attribute.
    pub fn query_by_test_id(&self, id: &str) -> Result<Option<Handle>, QueryError> {
        query(self.find_by_test_id(id), Query::TestId(id.into()))
    }

    fn find_by_text(&self, text: &str) -> Vec<Handle> {
        self.elements()
            .filter(|node| {
                dom::tag(node).is_some_and(|tag| !IGNORED_TAGS.contains(&tag.as_str()))
                    && normalize(&dom::own_text(node)) == text
            })
            .collect()
    }

    fn find_by_test_id(&self, id: &str) -> Vec<Handle> {
        self.elements()
            .filter(|node| dom::attribute(node, TEST_ID_ATTRIBUTE).as_deref() == Some(id))
            .collect()
    }

    fn elements(&self) -> impl Iterator<Item = Handle> {
        dom::descendants(self.document.root()).filter(|node| dom::tag(node).is_some())
    }
}

/// Renders a component with props into a fresh document.
pub fn render<C: Component>(component: &C, props: &C::Props) -> Result<Screen, MountError> {
    let document = Document::parse(HOST_DOCUMENT);
    let root = mount(&document, CONTAINER_ID, &component.render(props))?;
    let container = root.container().clone();

    Ok(Screen {
        document,
        container,
    })
}

fn get(mut nodes: Vec<Handle>, query: Query) -> Result<Handle, QueryError> {
    match nodes.len() {
        0 => Err(QueryError::NotFound { query }),
        1 => Ok(nodes.remove(0)),
        count => Err(QueryError::Multiple { query, count }),
    }
}

fn query(nodes: Vec<Handle>, query: Query) -> Result<Option<Handle>, QueryError> {
    match get(nodes, query) {
        Ok(node) => Ok(Some(node)),
        Err(QueryError::NotFound { .. }) => Ok(None),
        Err(error) => Err(error),
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        component::{RestaurantCard, RestaurantCardProps, with_promoted_label},
        element::{Element, create_element},
    };
    use pretty_assertions::assert_eq;

    struct Fixed(Element);

    impl Component for Fixed {
        type Props = ();

        fn render(&self, _: &Self::Props) -> Element {
            self.0.clone()
        }
    }

    fn props() -> RestaurantCardProps {
        RestaurantCardProps::new(
            serde_json::from_str(include_str!("../fixtures/res_card.json")).unwrap(),
        )
    }

    #[test]
    fn render_restaurant_card_with_props() {
        let screen = render(&RestaurantCard, &props()).unwrap();

        let name = screen
            .get_by_text("Leon's - Burgers & Wings (Leon Grill)")
            .unwrap();

        assert!(screen.is_in_document(&name));
    }

    #[test]
    fn render_restaurant_card_with_promoted_label() {
        let screen = render(&with_promoted_label(RestaurantCard), &props()).unwrap();

        let label = screen.get_by_text("Promoted").unwrap();
        let card = screen.get_by_test_id("resCard").unwrap();

        assert!(screen.is_in_document(&label));
        assert!(screen.is_in_document(&card));
    }

    #[test]
    fn render_restaurant_card_without_promoted_label() {
        let screen = render(&RestaurantCard, &props()).unwrap();

        assert!(matches!(screen.query_by_text("Promoted"), Ok(None)));
    }

    #[test]
    fn normalize_whitespace() {
        let screen = render(
            &Fixed(create_element("p", [], "  Hello \n  world ")),
            &(),
        )
        .unwrap();

        assert!(screen.get_by_text("Hello world").is_ok());
    }

    #[test]
    fn fail_to_get_missing_text() {
        let screen = render(&Fixed(create_element("p", [], "hello")), &()).unwrap();

        assert_eq!(
            screen.get_by_text("bye").err(),
            Some(QueryError::NotFound {
                query: Query::Text("bye".into())
            })
        );
    }

    #[test]
    fn fail_to_get_duplicate_text() {
        let screen = render(
            &Fixed(create_element(
                "ul",
                [],
                vec![
                    create_element("li", [], "item"),
                    create_element("li", [], "item"),
                ],
            )),
            &(),
        )
        .unwrap();

        assert_eq!(
            screen.get_by_text("item").err(),
            Some(QueryError::Multiple {
                query: Query::Text("item".into()),
                count: 2
            })
        );
        assert_eq!(screen.get_all_by_text("item").unwrap().len(), 2);
    }

    #[test]
    fn ignore_script_text() {
        let screen = render(&Fixed(create_element("script", [], "code")), &()).unwrap();

        assert!(matches!(screen.query_by_text("code"), Ok(None)));
    }

    #[test]
    fn query_missing_test_id() {
        let screen = render(&Fixed(create_element("p", [], "hello")), &()).unwrap();

        assert!(matches!(screen.query_by_test_id("resCard"), Ok(None)));
        assert!(screen.get_by_test_id("resCard").is_err());
    }

    #[test]
    fn render_into_container() {
        let screen = render(&Fixed(create_element("p", [], "hello")), &()).unwrap();

        assert_eq!(
            screen
                .container()
                .children
                .borrow()
                .iter()
                .filter_map(dom::tag)
                .collect::<Vec<_>>(),
            vec!["p"]
        );
    }
}

use super::Component;
use crate::element::{Element, create_element};

const LABEL: &str = "Promoted";
const TEST_ID: &str = "promoted";

/// A component that adds a "Promoted" label to another component.
#[derive(Clone, Copy, Debug, Default)]
pub struct PromotedLabel<C> {
    component: C,
}

impl<C> PromotedLabel<C> {
    /// Returns a wrapped component.
    pub const fn component(&self) -> &C {
        &self.component
    }
}

impl<C: Component> Component for PromotedLabel<C> {
    type Props = C::Props;

    fn render(&self, props: &Self::Props) -> Element {
        create_element(
            "div",
            [("data-testid", TEST_ID.into())],
            vec![
                create_element("label", [("class", "promoted-label".into())], LABEL),
                self.component.render(props),
            ],
        )
    }
}

/// Wraps a component with a "Promoted" label.
pub const fn with_promoted_label<C: Component>(component: C) -> PromotedLabel<C> {
    PromotedLabel { component }
}

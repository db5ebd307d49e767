mod promoted_label;
mod restaurant;
mod restaurant_card;

pub use self::{
    promoted_label::{PromotedLabel, with_promoted_label},
    restaurant::{Restaurant, RestaurantInfo, Sla},
    restaurant_card::{CDN_URL, RestaurantCard, RestaurantCardProps},
};
use crate::element::Element;

/// A component that renders an element tree from props.
pub trait Component {
    /// Props of the component.
    type Props;

    /// Renders an element tree.
    fn render(&self, props: &Self::Props) -> Element;
}

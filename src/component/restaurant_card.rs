use super::{Component, Restaurant};
use crate::element::{Children, Element, create_element};
use itertools::Itertools;

/// A base URL of restaurant images.
pub const CDN_URL: &str =
    "https://media-assets.swiggy.com/swiggy/image/upload/fl_lossy,f_auto,q_auto,w_660/";

const TEST_ID: &str = "resCard";

/// Props of [`RestaurantCard`].
#[derive(Clone, Debug, PartialEq)]
pub struct RestaurantCardProps {
    res_data: Restaurant,
}

impl RestaurantCardProps {
    /// Creates props.
    pub const fn new(res_data: Restaurant) -> Self {
        Self { res_data }
    }

    /// Returns a restaurant record.
    pub const fn res_data(&self) -> &Restaurant {
        &self.res_data
    }
}

/// A card displaying a restaurant.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestaurantCard;

impl Component for RestaurantCard {
    type Props = RestaurantCardProps;

    fn render(&self, props: &Self::Props) -> Element {
        let info = props.res_data().info();

        create_element(
            "div",
            [
                ("data-testid", TEST_ID.into()),
                ("class", "res-card".into()),
            ],
            vec![
                create_element(
                    "img",
                    [
                        ("class", "res-logo".into()),
                        ("alt", "res-logo".into()),
                        (
                            "src",
                            format!("{CDN_URL}{}", info.cloudinary_image_id()).into(),
                        ),
                    ],
                    vec![] as Vec<Element>,
                ),
                create_element("h3", [], info.name()),
                create_element("h4", [], info.cuisines().join(", ")),
                create_element(
                    "h4",
                    [],
                    info.avg_rating()
                        .map(|rating| format!("{rating} stars"))
                        .map_or_else(Children::default, Children::from),
                ),
                create_element("h4", [], info.cost_for_two()),
                create_element(
                    "h4",
                    [],
                    info.sla()
                        .sla_string()
                        .map_or_else(Children::default, Children::from),
                ),
            ],
        )
    }
}

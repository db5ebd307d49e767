use serde::Deserialize;

/// A restaurant record.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Restaurant {
    info: RestaurantInfo,
}

impl Restaurant {
    /// Creates a restaurant record.
    pub const fn new(info: RestaurantInfo) -> Self {
        Self { info }
    }

    /// Returns restaurant information.
    pub const fn info(&self) -> &RestaurantInfo {
        &self.info
    }
}

/// Restaurant information.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantInfo {
    id: String,
    name: String,
    cloudinary_image_id: String,
    #[serde(default)]
    cuisines: Vec<String>,
    avg_rating: Option<f64>,
    cost_for_two: String,
    #[serde(default)]
    sla: Sla,
}

impl RestaurantInfo {
    /// Creates restaurant information.
    pub const fn new(
        id: String,
        name: String,
        cloudinary_image_id: String,
        cuisines: Vec<String>,
        avg_rating: Option<f64>,
        cost_for_two: String,
        sla: Sla,
    ) -> Self {
        Self {
            id,
            name,
            cloudinary_image_id,
            cuisines,
            avg_rating,
            cost_for_two,
            sla,
        }
    }

    /// Returns an ID.
    #[allow(clippy::missing_const_for_fn)]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns a name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns an image ID on the CDN.
    #[allow(clippy::missing_const_for_fn)]
    pub fn cloudinary_image_id(&self) -> &str {
        &self.cloudinary_image_id
    }

    /// Returns cuisines.
    pub fn cuisines(&self) -> impl Iterator<Item = &str> {
        self.cuisines.iter().map(String::as_str)
    }

    /// Returns an average rating.
    pub const fn avg_rating(&self) -> Option<f64> {
        self.avg_rating
    }

    /// Returns a cost for two people.
    #[allow(clippy::missing_const_for_fn)]
    pub fn cost_for_two(&self) -> &str {
        &self.cost_for_two
    }

    /// Returns a delivery service level.
    pub const fn sla(&self) -> &Sla {
        &self.sla
    }
}

/// A delivery service level.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sla {
    delivery_time: Option<u32>,
    sla_string: Option<String>,
}

impl Sla {
    /// Creates a delivery service level.
    pub const fn new(delivery_time: Option<u32>, sla_string: Option<String>) -> Self {
        Self {
            delivery_time,
            sla_string,
        }
    }

    /// Returns a delivery time in minutes.
    pub const fn delivery_time(&self) -> Option<u32> {
        self.delivery_time
    }

    /// Returns a human-readable delivery time.
    pub fn sla_string(&self) -> Option<&str> {
        self.sla_string.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserialize_fixture() {
        let restaurant =
            serde_json::from_str::<Restaurant>(include_str!("../../fixtures/res_card.json"))
                .unwrap();

        assert_eq!(
            restaurant.info().name(),
            "Leon's - Burgers & Wings (Leon Grill)"
        );
        assert_eq!(restaurant.info().avg_rating(), Some(4.4));
        assert_eq!(restaurant.info().id(), "334475");
        assert_eq!(restaurant.info().sla().sla_string(), Some("25-30 mins"));
        assert_eq!(restaurant.info().sla().delivery_time(), Some(26));
        assert_eq!(restaurant.info().cuisines().count(), 5);
    }

    #[test]
    fn deserialize_minimal_record() {
        let restaurant = serde_json::from_str::<Restaurant>(
            r#"{"info":{"id":"1","name":"Cafe","cloudinaryImageId":"x","costForTwo":"₹100 for two"}}"#,
        )
        .unwrap();

        assert_eq!(restaurant.info().avg_rating(), None);
        assert_eq!(restaurant.info().cuisines().count(), 0);
        assert_eq!(restaurant.info().sla(), &Sla::default());
    }

    #[test]
    fn create_record() {
        let info = RestaurantInfo::new(
            "1".into(),
            "Cafe".into(),
            "image".into(),
            vec![],
            Some(4.0),
            "₹100 for two".into(),
            Sla::new(Some(20), Some("20-25 mins".into())),
        );
        let restaurant = Restaurant::new(info.clone());

        assert_eq!(restaurant.info(), &info);
        assert_eq!(restaurant.info().sla().delivery_time(), Some(20));
    }
}

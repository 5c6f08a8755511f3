use serde::Serialize;

/// Filter criteria for a product query, snapshotted fresh from the current
/// input values on every list fetch. Empty fields mean "no constraint".
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ProductFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub name: Option<String>,
    pub gender: Option<String>,
}

impl ProductFilter {
    #[must_use]
    pub fn new(
        min_price: Option<f64>,
        max_price: Option<f64>,
        name: Option<String>,
        gender: Option<String>,
    ) -> Self {
        let min_price = min_price.filter(|p| *p >= 0.0);
        let max_price = max_price.filter(|p| *p >= 0.0);

        // An inverted range is reordered so the bounds always satisfy
        // min <= max.
        let (min_price, max_price) = match (min_price, max_price) {
            (Some(min), Some(max)) if max < min => (Some(max), Some(min)),
            bounds => bounds,
        };

        Self {
            min_price,
            max_price,
            name: name.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            gender: gender
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_price.is_none()
            && self.max_price.is_none()
            && self.name.is_none()
            && self.gender.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drops_blank_and_negative_values() {
        let filter = ProductFilter::new(
            Some(-1.0),
            Some(100.0),
            Some("   ".to_string()),
            Some(" male ".to_string()),
        );

        assert_eq!(filter.min_price, None);
        assert_eq!(filter.max_price, Some(100.0));
        assert_eq!(filter.name, None);
        assert_eq!(filter.gender.as_deref(), Some("male"));
    }

    #[test]
    fn inverted_price_bounds_are_reordered() {
        let filter = ProductFilter::new(Some(50.0), Some(10.0), None, None);
        assert_eq!(filter.min_price, Some(10.0));
        assert_eq!(filter.max_price, Some(50.0));

        let filter = ProductFilter::new(Some(10.0), Some(10.0), None, None);
        assert_eq!(filter.min_price, Some(10.0));
        assert_eq!(filter.max_price, Some(10.0));

        let filter = ProductFilter::new(None, Some(10.0), None, None);
        assert_eq!(filter.min_price, None);
        assert_eq!(filter.max_price, Some(10.0));
    }

    #[test]
    fn default_filter_is_empty() {
        assert!(ProductFilter::default().is_empty());
        assert!(!ProductFilter::new(Some(1.0), None, None, None).is_empty());
    }
}

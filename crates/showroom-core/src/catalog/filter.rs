use super::models::{BodyType, VehicleRecord};

/// Records whose body type matches `active`, in catalog order
///
/// `None` means no filter: every record passes.
pub fn filter(vehicles: &[VehicleRecord], active: Option<BodyType>) -> Vec<&VehicleRecord> {
    match active {
        None => vehicles.iter().collect(),
        Some(body_type) => vehicles
            .iter()
            .filter(|v| v.body_type == body_type)
            .collect(),
    }
}

/// One selectable chip of the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: Option<BodyType>,
}

impl FilterOption {
    /// "All" followed by one option per body type
    pub fn all() -> Vec<FilterOption> {
        std::iter::once(FilterOption { value: None })
            .chain(BodyType::ALL.iter().map(|b| FilterOption { value: Some(*b) }))
            .collect()
    }

    pub fn label(&self) -> String {
        match self.value {
            None => "All".to_string(),
            Some(body_type) => body_type.label(),
        }
    }

    pub fn is_active(&self, active: Option<BodyType>) -> bool {
        self.value == active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ModelType};
    use proptest::prelude::*;

    fn arb_body_type() -> impl Strategy<Value = BodyType> {
        prop_oneof![
            Just(BodyType::Suv),
            Just(BodyType::Estate),
            Just(BodyType::Sedan),
        ]
    }

    fn arb_vehicles() -> impl Strategy<Value = Vec<VehicleRecord>> {
        prop::collection::vec(arb_body_type(), 0..24).prop_map(|bodies| {
            bodies
                .into_iter()
                .enumerate()
                .map(|(i, body_type)| VehicleRecord {
                    id: format!("car-{}", i),
                    model_name: format!("Car {}", i),
                    body_type,
                    model_type: ModelType::PureElectric,
                    image_url: format!("https://example.com/{}.jpg", i),
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_no_filter_is_identity(vehicles in arb_vehicles()) {
            let result = filter(&vehicles, None);
            prop_assert_eq!(result.len(), vehicles.len());
            for (a, b) in result.iter().zip(vehicles.iter()) {
                prop_assert_eq!(*a, b);
            }
        }

        #[test]
        fn prop_filter_is_ordered_subsequence(
            vehicles in arb_vehicles(),
            body_type in arb_body_type(),
        ) {
            let result = filter(&vehicles, Some(body_type));
            let mut cursor = vehicles.iter();
            for record in &result {
                prop_assert_eq!(record.body_type, body_type);
                prop_assert!(cursor.any(|v| v == *record), "not a subsequence");
            }
            let expected = vehicles.iter().filter(|v| v.body_type == body_type).count();
            prop_assert_eq!(result.len(), expected);
        }
    }

    #[test]
    fn test_suv_filter_scenario() {
        let mut vehicles = Catalog::builtin().vehicles().to_vec();
        // 3 suv, 3 estate, 2 sedan
        vehicles.remove(3);
        vehicles.insert(
            5,
            VehicleRecord {
                id: "v60-cross-country".to_string(),
                model_name: "V60 Cross Country".to_string(),
                body_type: BodyType::Estate,
                model_type: ModelType::PlugInHybrid,
                image_url: "https://example.com/v60cc.jpg".to_string(),
            },
        );
        let catalog = Catalog::new(vehicles).unwrap();
        assert_eq!(catalog.len(), 8);

        let suvs = filter(catalog.vehicles(), Some(BodyType::Suv));
        let ids: Vec<&str> = suvs.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["xc90-recharge", "xc60-recharge", "xc40-recharge"]);

        let all = filter(catalog.vehicles(), None);
        assert_eq!(all.len(), 8);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let catalog = Catalog::builtin();
        let sedans_only: Vec<VehicleRecord> = filter(catalog.vehicles(), Some(BodyType::Sedan))
            .into_iter()
            .cloned()
            .collect();
        assert!(filter(&sedans_only, Some(BodyType::Estate)).is_empty());
    }

    #[test]
    fn test_filter_options() {
        let labels: Vec<String> = FilterOption::all().iter().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["All", "Suv", "Estate", "Sedan"]);
        assert!(FilterOption::all()[0].is_active(None));
        assert!(!FilterOption::all()[1].is_active(None));
    }
}

// mod.rs - Validation rules module root

pub mod config;
pub mod expected;
pub mod missing;
pub mod object_name;
pub mod registry;
pub mod size_range;
pub mod traits;

// Re-export main types for convenience
pub use config::ValidationConfig;
pub use expected::ExpectedValueRule;
pub use missing::{MissingDataRule, MISSING_DATA};
pub use object_name::ObjectNameRule;
pub use registry::RuleSet;
pub use size_range::{SizeRangeRule, INVALID_SIZE};
pub use traits::ValidationRule;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MergedRecord;

    const HEADERS: [&str; 6] = [
        "Filename",
        "Size",
        "Width",
        "IPTC:ObjectName",
        "IPTC:Sup.",
        "IPTC:Source",
    ];

    fn record(values: &[&str]) -> MergedRecord {
        let headers: Vec<String> = HEADERS.iter().map(|s| s.to_string()).collect();
        MergedRecord::from_values(1, &headers, values)
    }

    #[test]
    fn test_default_rule_order() {
        let rules = RuleSet::default();
        let names: Vec<&str> = rules.list_rules().into_iter().map(|(name, _)| name).collect();

        assert_eq!(rules.len(), 6);
        assert_eq!(
            names,
            vec!["missing-data", "size-range", "resolution", "object-name", "category", "source"]
        );
    }

    #[test]
    fn test_valid_row_has_no_errors() {
        let rules = RuleSet::default();
        let errors = rules.evaluate(&record(&[
            "IMG001",
            "3 Mio",
            "3200 DPI",
            "IMG001_front",
            "MQB - Iconotheque",
            "evian",
        ]));
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_checks_do_not_short_circuit() {
        let rules = RuleSet::default();
        let errors = rules.evaluate(&record(&["IMG001", "", "72 DPI", "IMG002_x", "Other", "nestle"]));

        assert_eq!(errors.len(), 6);
        assert_eq!(errors[0], MISSING_DATA);
        assert_eq!(errors[1], INVALID_SIZE);
        assert!(errors[2].contains("3200 DPI") && errors[2].contains("72 DPI"));
        assert!(errors[3].contains("IMG002"));
        assert!(errors[4].contains("MQB - Iconotheque"));
        assert!(errors[5].contains("evian") && errors[5].contains("nestle"));
    }

    #[test]
    fn test_custom_constants_flow_into_rules() {
        let config = ValidationConfig {
            source: "nestle".to_string(),
            size_max: 10.0,
            ..ValidationConfig::default()
        };
        let rules = RuleSet::from_config(&config);
        let errors = rules.evaluate(&record(&[
            "IMG001",
            "8 Mio",
            "3200 DPI",
            "IMG001_front",
            "MQB - Iconotheque",
            "nestle",
        ]));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_push_appends_after_standard_rules() {
        let mut rules = RuleSet::default();
        rules.push(Box::new(ExpectedValueRule::new("extra", "Filename", "IMG999")));

        let errors = rules.evaluate(&record(&[
            "IMG001",
            "3 Mio",
            "3200 DPI",
            "IMG001_front",
            "MQB - Iconotheque",
            "evian",
        ]));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("IMG999"));
        assert_eq!(rules.list_rules().last().map(|(name, _)| *name), Some("extra"));
    }

    #[test]
    fn test_empty_rule_set() {
        let rules = RuleSet::new();
        assert!(rules.is_empty());
        assert!(rules.evaluate(&record(&["", "", "", "", "", ""])).is_empty());
    }
}

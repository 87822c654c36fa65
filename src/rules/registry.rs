// registry.rs - Ordered rule set evaluated against every row

use super::config::ValidationConfig;
use super::traits::ValidationRule;
use super::{ExpectedValueRule, MissingDataRule, ObjectNameRule, SizeRangeRule};
use crate::data::MergedRecord;

/// Rules evaluated in insertion order, without short-circuiting
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The six archival checks, in reporting order
    pub fn from_config(config: &ValidationConfig) -> Self {
        let mut rules = Self::new();

        rules.push(Box::new(MissingDataRule));
        rules.push(Box::new(SizeRangeRule::new(
            &config.size_column,
            &config.size_unit,
            config.size_min,
            config.size_max,
        )));
        rules.push(Box::new(ExpectedValueRule::new(
            "resolution",
            &config.width_column,
            &config.resolution_label,
        )));
        rules.push(Box::new(ObjectNameRule::new(
            &config.filename_column,
            &config.object_name_column,
            config.object_name_separator,
        )));
        rules.push(Box::new(ExpectedValueRule::new(
            "category",
            &config.category_column,
            &config.category,
        )));
        rules.push(Box::new(ExpectedValueRule::new(
            "source",
            &config.source_column,
            &config.source,
        )));

        rules
    }

    /// Append a rule after the existing ones
    pub fn push(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run every rule and collect messages in rule order
    pub fn evaluate(&self, record: &MergedRecord) -> Vec<String> {
        self.rules
            .iter()
            .flat_map(|rule| rule.check(record))
            .collect()
    }

    /// Rule names and descriptions in evaluation order
    pub fn list_rules(&self) -> Vec<(&str, String)> {
        self.rules
            .iter()
            .map(|rule| (rule.name(), rule.description()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::from_config(&ValidationConfig::default())
    }
}

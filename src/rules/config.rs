// config.rs - Constants the validation rules compare against

/// Named values consumed by the standard rule set
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    pub size_column: String,
    pub size_unit: String,
    pub size_min: f64,
    pub size_max: f64,

    pub width_column: String,
    pub resolution_label: String,

    pub filename_column: String,
    pub object_name_column: String,
    pub object_name_separator: char,

    pub category_column: String,
    pub category: String,

    pub source_column: String,
    pub source: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            size_column: "Size".to_string(),
            size_unit: " Mio".to_string(),
            size_min: 2.0,
            size_max: 4.0,
            width_column: "Width".to_string(),
            resolution_label: "3200 DPI".to_string(),
            filename_column: "Filename".to_string(),
            object_name_column: "IPTC:ObjectName".to_string(),
            object_name_separator: '_',
            category_column: "IPTC:Sup.".to_string(),
            category: "MQB - Iconotheque".to_string(),
            source_column: "IPTC:Source".to_string(),
            source: "evian".to_string(),
        }
    }
}

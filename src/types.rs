use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Free-form OSM tag set attached to a feature
pub type Properties = Map<String, Value>;

/// Top-level GeoJSON document. Only the `features` member is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// One GeoJSON feature as it appears on the wire.
///
/// Both members are kept as raw JSON so that a single odd feature is skipped
/// by the pipeline instead of failing the whole document. Non-object
/// `properties` read as an empty tag set; `geometry` is validated when it is
/// reduced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: Value,
    #[serde(default)]
    pub geometry: Value,
}

impl Feature {
    pub fn tags(&self) -> Tags<'_> {
        Tags::new(self.properties.as_object())
    }
}

/// A (longitude, latitude) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// Read-only view over a feature's tags.
///
/// Lookups follow the loose semantics of the source data: a tag "holds" when
/// it is present and not `null`, `false`, `0` or the empty string.
#[derive(Debug, Clone, Copy)]
pub struct Tags<'a> {
    properties: Option<&'a Properties>,
}

impl<'a> Tags<'a> {
    pub fn new(properties: Option<&'a Properties>) -> Self {
        Self { properties }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.properties.and_then(|p| p.get(key))
    }

    /// True when `key` is a string exactly equal to `expected`
    pub fn equals(&self, key: &str, expected: &str) -> bool {
        self.get(key).and_then(Value::as_str) == Some(expected)
    }

    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }

    /// Copy of a truthy tag, keeping its JSON type
    pub fn value(&self, key: &str) -> Option<Value> {
        self.get(key).filter(|v| is_truthy(v)).cloned()
    }

    /// Text of a truthy tag. Non-string values are rendered as JSON text.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| is_truthy(v)).map(value_text)
    }
}

/// Display text of a JSON value: strings as-is, anything else as JSON
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Closed set of port sub-types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortCategory {
    FerryTerminal,
    Marina,
    Pier,
    Boatyard,
    Harbour,
    Port,
    #[default]
    Other,
}

impl PortCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortCategory::FerryTerminal => "ferry_terminal",
            PortCategory::Marina => "marina",
            PortCategory::Pier => "pier",
            PortCategory::Boatyard => "boatyard",
            PortCategory::Harbour => "harbour",
            PortCategory::Port => "port",
            PortCategory::Other => "other",
        }
    }

    /// Upper-case words used in synthesized names, e.g. `FERRY TERMINAL`
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }
}

impl fmt::Display for PortCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized output record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortRecord {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub port_type: PortCategory,
    pub status: String,
    pub source: String,
    // Passthrough attributes keep the source tag's JSON type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub town: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mooring: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ferry_type: Option<Value>,
}

impl PortRecord {
    /// `town`, falling back to `city`, for display
    pub fn area(&self) -> Option<String> {
        self.town.as_ref().or(self.city.as_ref()).map(value_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> Properties {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_tags_truthiness() {
        let p = props(json!({
            "empty": "",
            "no": false,
            "zero": 0,
            "null": null,
            "yes": "yes",
            "flag": true,
            "count": 3
        }));
        let tags = Tags::new(Some(&p));

        assert!(!tags.is_truthy("empty"));
        assert!(!tags.is_truthy("no"));
        assert!(!tags.is_truthy("zero"));
        assert!(!tags.is_truthy("null"));
        assert!(!tags.is_truthy("missing"));
        assert!(tags.is_truthy("yes"));
        assert!(tags.is_truthy("flag"));
        assert!(tags.is_truthy("count"));
    }

    #[test]
    fn test_tags_text_renders_non_strings() {
        let p = props(json!({"operator": "Port Authority", "mooring": true, "capacity": 12, "ferry": ""}));
        let tags = Tags::new(Some(&p));

        assert_eq!(tags.text("operator").as_deref(), Some("Port Authority"));
        assert_eq!(tags.text("mooring").as_deref(), Some("true"));
        assert_eq!(tags.text("capacity").as_deref(), Some("12"));
        assert_eq!(tags.text("ferry"), None);
    }

    #[test]
    fn test_tags_value_keeps_json_type() {
        let p = props(json!({"mooring": true, "capacity": 12, "operator": "RNLI", "ferry": false}));
        let tags = Tags::new(Some(&p));

        assert_eq!(tags.value("mooring"), Some(json!(true)));
        assert_eq!(tags.value("capacity"), Some(json!(12)));
        assert_eq!(tags.value("operator"), Some(json!("RNLI")));
        assert_eq!(tags.value("ferry"), None);
        assert_eq!(tags.value("missing"), None);
    }

    #[test]
    fn test_non_object_properties_read_as_empty() {
        let feature: Feature =
            serde_json::from_value(json!({"properties": "harbour", "geometry": null})).unwrap();
        assert!(feature.tags().get("harbour").is_none());
        assert!(feature.geometry.is_null());
    }

    #[test]
    fn test_tags_without_properties() {
        let tags = Tags::new(None);
        assert!(tags.get("name").is_none());
        assert!(!tags.equals("amenity", "ferry_terminal"));
    }

    #[test]
    fn test_category_label() {
        assert_eq!(PortCategory::FerryTerminal.label(), "FERRY TERMINAL");
        assert_eq!(PortCategory::Other.label(), "OTHER");
        assert_eq!(PortCategory::default(), PortCategory::Other);
    }

    #[test]
    fn test_record_omits_absent_optional_fields() {
        let record = PortRecord {
            name: "Harbour".to_string(),
            lat: 1.5,
            lng: 2.25,
            port_type: PortCategory::Harbour,
            status: "Open".to_string(),
            source: "OSM".to_string(),
            operator: None,
            town: Some(Value::from("Dover")),
            city: None,
            mooring: None,
            ferry_type: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["type"], json!("harbour"));
        assert_eq!(obj["town"], json!("Dover"));
        assert!(!obj.contains_key("operator"));
        assert!(!obj.contains_key("ferry_type"));
        assert_eq!(record.area().as_deref(), Some("Dover"));
    }
}

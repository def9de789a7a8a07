use crate::constants::keys;
use crate::types::{PortCategory, Tags};

/// Outcome of inspecting a feature's tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    NotPortRelated,
    Port(PortCategory),
}

impl Classification {
    pub fn is_port_related(&self) -> bool {
        matches!(self, Classification::Port(_))
    }

    pub fn category(&self) -> Option<PortCategory> {
        match self {
            Classification::Port(category) => Some(*category),
            Classification::NotPortRelated => None,
        }
    }
}

pub type Predicate = fn(&Tags<'_>) -> bool;

/// A named tag predicate and the category it assigns
pub struct CategoryRule {
    pub name: &'static str,
    pub predicate: Predicate,
    pub category: PortCategory,
}

impl CategoryRule {
    pub fn matches(&self, tags: &Tags<'_>) -> bool {
        (self.predicate)(tags)
    }
}

/// Category rules in priority order. The first match decides the category.
pub static CATEGORY_RULES: [CategoryRule; 8] = [
    CategoryRule {
        name: "amenity=ferry_terminal",
        predicate: is_ferry_terminal_amenity,
        category: PortCategory::FerryTerminal,
    },
    CategoryRule {
        name: "leisure=marina",
        predicate: is_marina,
        category: PortCategory::Marina,
    },
    CategoryRule {
        name: "man_made=pier",
        predicate: is_pier,
        category: PortCategory::Pier,
    },
    CategoryRule {
        name: "waterway=boatyard",
        predicate: is_boatyard,
        category: PortCategory::Boatyard,
    },
    CategoryRule {
        name: "harbour",
        predicate: has_harbour_tag,
        category: PortCategory::Harbour,
    },
    CategoryRule {
        name: "industrial=port",
        predicate: is_industrial_port,
        category: PortCategory::Port,
    },
    CategoryRule {
        name: "seamark:type=harbour",
        predicate: is_seamark_harbour,
        category: PortCategory::Harbour,
    },
    CategoryRule {
        name: "ferry=yes",
        predicate: is_ferry,
        category: PortCategory::FerryTerminal,
    },
];

fn is_ferry_terminal_amenity(tags: &Tags<'_>) -> bool {
    tags.equals(keys::AMENITY, "ferry_terminal")
}

fn is_marina(tags: &Tags<'_>) -> bool {
    tags.equals(keys::LEISURE, "marina")
}

fn is_pier(tags: &Tags<'_>) -> bool {
    tags.equals(keys::MAN_MADE, "pier")
}

fn is_boatyard(tags: &Tags<'_>) -> bool {
    tags.equals(keys::WATERWAY, "boatyard")
}

fn has_harbour_tag(tags: &Tags<'_>) -> bool {
    tags.is_truthy(keys::HARBOUR)
}

fn is_industrial_port(tags: &Tags<'_>) -> bool {
    tags.equals(keys::INDUSTRIAL, "port")
}

fn is_seamark_harbour(tags: &Tags<'_>) -> bool {
    tags.equals(keys::SEAMARK_TYPE, "harbour")
}

fn is_ferry(tags: &Tags<'_>) -> bool {
    tags.equals(keys::FERRY, "yes")
}

/// Marks a feature as port-related without assigning a category
fn is_ferry_station(tags: &Tags<'_>) -> bool {
    tags.equals(keys::PUBLIC_TRANSPORT, "station") && is_ferry(tags)
}

/// The first rule matching `tags`, if any
pub fn matching_rule(tags: &Tags<'_>) -> Option<&'static CategoryRule> {
    CATEGORY_RULES.iter().find(|rule| rule.matches(tags))
}

/// Decide whether a feature is port-related and, if so, its category.
pub fn classify(tags: &Tags<'_>) -> Classification {
    match matching_rule(tags) {
        Some(rule) => Classification::Port(rule.category),
        None if is_ferry_station(tags) => Classification::Port(PortCategory::Other),
        None => Classification::NotPortRelated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Properties;
    use serde_json::{json, Value};

    fn classify_json(value: Value) -> Classification {
        let props: Properties = value.as_object().cloned().unwrap();
        classify(&Tags::new(Some(&props)))
    }

    #[test]
    fn test_each_rule_assigns_its_category() {
        let cases = [
            (json!({"amenity": "ferry_terminal"}), PortCategory::FerryTerminal),
            (json!({"leisure": "marina"}), PortCategory::Marina),
            (json!({"man_made": "pier"}), PortCategory::Pier),
            (json!({"waterway": "boatyard"}), PortCategory::Boatyard),
            (json!({"harbour": "yes"}), PortCategory::Harbour),
            (json!({"industrial": "port"}), PortCategory::Port),
            (json!({"seamark:type": "harbour"}), PortCategory::Harbour),
            (json!({"ferry": "yes"}), PortCategory::FerryTerminal),
        ];

        for (props, expected) in cases {
            assert_eq!(classify_json(props.clone()), Classification::Port(expected), "{props}");
        }
    }

    #[test]
    fn test_ferry_terminal_amenity_outranks_marina() {
        let result = classify_json(json!({"leisure": "marina", "amenity": "ferry_terminal"}));
        assert_eq!(result, Classification::Port(PortCategory::FerryTerminal));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let result = classify_json(json!({
            "man_made": "pier",
            "harbour": "yes",
            "industrial": "port",
            "ferry": "yes"
        }));
        assert_eq!(result, Classification::Port(PortCategory::Pier));

        let rule = {
            let props: Properties = json!({"industrial": "port", "seamark:type": "harbour"})
                .as_object()
                .cloned()
                .unwrap();
            matching_rule(&Tags::new(Some(&props))).map(|r| r.name)
        };
        assert_eq!(rule, Some("industrial=port"));
    }

    #[test]
    fn test_ferry_station_is_port_related() {
        let result = classify_json(json!({"public_transport": "station", "ferry": "yes"}));
        assert!(result.is_port_related());
        assert_eq!(result.category(), Some(PortCategory::FerryTerminal));
    }

    #[test]
    fn test_unrelated_features_do_not_match() {
        assert_eq!(classify_json(json!({"landuse": "residential"})), Classification::NotPortRelated);
        assert_eq!(classify_json(json!({"public_transport": "station"})), Classification::NotPortRelated);
        assert_eq!(classify_json(json!({"ferry": "no"})), Classification::NotPortRelated);
        assert_eq!(classify_json(json!({"harbour": ""})), Classification::NotPortRelated);
        assert_eq!(classify_json(json!({"amenity": true})), Classification::NotPortRelated);
        assert_eq!(classify(&Tags::new(None)), Classification::NotPortRelated);
        assert_eq!(Classification::NotPortRelated.category(), None);
    }

    #[test]
    fn test_harbour_tag_is_truthy_check() {
        assert_eq!(classify_json(json!({"harbour": true})), Classification::Port(PortCategory::Harbour));
        assert_eq!(classify_json(json!({"harbour": false})), Classification::NotPortRelated);
    }
}

//! Property keys and fixed values recognized by the classifier and normalizer.
//! This table is not user-configurable.

pub mod keys {
    pub const AMENITY: &str = "amenity";
    pub const LEISURE: &str = "leisure";
    pub const MAN_MADE: &str = "man_made";
    pub const WATERWAY: &str = "waterway";
    pub const HARBOUR: &str = "harbour";
    pub const INDUSTRIAL: &str = "industrial";
    pub const SEAMARK_TYPE: &str = "seamark:type";
    pub const FERRY: &str = "ferry";
    pub const PUBLIC_TRANSPORT: &str = "public_transport";

    pub const NAME: &str = "name";
    pub const ADDR_PLACE: &str = "addr:place";
    pub const ADDR_CITY: &str = "addr:city";
    pub const ADDR_TOWN: &str = "addr:town";
    pub const ADDR_VILLAGE: &str = "addr:village";
    pub const OSM_ID: &str = "@id";

    pub const OPERATOR: &str = "operator";
    pub const MOORING: &str = "mooring";
}

/// Address keys consulted for a name, in priority order, after `name`.
pub const NAME_FALLBACK_KEYS: [&str; 4] = [
    keys::ADDR_PLACE,
    keys::ADDR_CITY,
    keys::ADDR_TOWN,
    keys::ADDR_VILLAGE,
];

pub const RECORD_STATUS: &str = "Open";
pub const RECORD_SOURCE: &str = "OSM";

/// Label used in diagnostics for features without a `name` property.
pub const UNNAMED_FEATURE: &str = "unnamed feature";

/// Decimal places kept on output coordinates
pub const COORDINATE_PRECISION: usize = 6;

// CLI / config defaults
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_INPUT_PATH: &str = "osm_data.json";
pub const DEFAULT_OUTPUT_PATH: &str = "cleaned_ports.json";
pub const DEFAULT_PREVIEW_COUNT: usize = 10;

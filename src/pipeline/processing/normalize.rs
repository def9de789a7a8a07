use crate::constants::{keys, COORDINATE_PRECISION, NAME_FALLBACK_KEYS, RECORD_SOURCE, RECORD_STATUS};
use crate::types::{Coordinate, PortCategory, PortRecord, Tags};

/// Everything the normalizer needs to know about one accepted feature
#[derive(Debug, Clone, Copy)]
pub struct NormalizeInput<'a> {
    pub tags: Tags<'a>,
    pub category: PortCategory,
    pub coordinate: Coordinate,
    /// 0-based position of the feature in the input collection
    pub index: usize,
}

/// Build the output record for a port-related feature.
pub fn normalize(input: &NormalizeInput<'_>) -> PortRecord {
    let tags = &input.tags;

    PortRecord {
        name: derive_name(tags, input.category, input.index),
        lat: round_coordinate(input.coordinate.lat),
        lng: round_coordinate(input.coordinate.lng),
        port_type: input.category,
        status: RECORD_STATUS.to_string(),
        source: RECORD_SOURCE.to_string(),
        operator: tags.value(keys::OPERATOR),
        town: tags.value(keys::ADDR_TOWN),
        city: tags.value(keys::ADDR_CITY),
        mooring: tags.value(keys::MOORING),
        ferry_type: tags.value(keys::FERRY),
    }
}

/// Resolve a display name.
///
/// Order: `name`, then the address keys (`addr:place`, `addr:city`,
/// `addr:town`, `addr:village`), then `"<CATEGORY> <osm id>"` when `@id` is
/// set, then `"<CATEGORY> <index + 1>"`. Candidates that are blank after
/// trimming are passed over.
pub fn derive_name(tags: &Tags<'_>, category: PortCategory, index: usize) -> String {
    let explicit = std::iter::once(keys::NAME)
        .chain(NAME_FALLBACK_KEYS)
        .filter_map(|key| tags.text(key))
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty());

    if let Some(name) = explicit {
        return name;
    }

    let suffix = match tags.text(keys::OSM_ID) {
        Some(osm_id) => osm_id_number(&osm_id).to_string(),
        None => (index + 1).to_string(),
    };

    format!("{} {}", category.label(), suffix).trim().to_string()
}

/// Second `/`-separated segment of an OSM id such as `node/12345`, or `""`
fn osm_id_number(osm_id: &str) -> &str {
    osm_id.split('/').nth(1).unwrap_or("")
}

/// Round to six decimal places.
///
/// The exact binary value is rounded, not `value * 1e6`, so `125.5890015`
/// (stored just below the halfway point) becomes `125.589001`. Exact halves
/// round away from zero.
pub fn round_coordinate(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let magnitude = value.abs();
    let rounded = exact_half_up(magnitude).unwrap_or_else(|| {
        format!("{:.*}", COORDINATE_PRECISION, magnitude)
            .parse()
            .unwrap_or(magnitude)
    });

    rounded.copysign(value)
}

/// A value ending exactly in a 7th-decimal `5` is a multiple of 2^-7, so the
/// tie can be detected in integers. `{:.6}` would round it half-to-even.
fn exact_half_up(magnitude: f64) -> Option<f64> {
    let in_128ths = magnitude * 128.0;
    if in_128ths.fract() != 0.0 || in_128ths >= (1u64 << 46) as f64 {
        return None;
    }

    // magnitude * 10^7 == in_128ths * 10^7 / 2^7 == in_128ths * 5^7
    let scaled = in_128ths as u64 * 78_125;
    (scaled % 10 == 5).then(|| (scaled / 10 + 1) as f64 / 1e6)
}

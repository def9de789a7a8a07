use serde_json::Value;

use crate::error::GeometryError;
use crate::types::Coordinate;

/// Supported geometry shapes after validation
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
    /// Rings; the first is the outer boundary
    Polygon(Vec<Vec<Coordinate>>),
}

/// Decodes a GeoJSON geometry object: its `type` string plus whatever JSON
/// sits under `coordinates`.
impl TryFrom<&Value> for Geometry {
    type Error = GeometryError;

    fn try_from(raw: &Value) -> Result<Self, Self::Error> {
        let object = raw
            .as_object()
            .ok_or(GeometryError::Invalid("not a JSON object"))?;
        let kind = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or(GeometryError::Invalid("missing `type`"))?;
        let coordinates = object.get("coordinates");

        match kind {
            "Point" => coordinates
                .and_then(parse_position)
                .map(Geometry::Point)
                .ok_or(GeometryError::Malformed("Point")),
            "LineString" => coordinates
                .and_then(parse_positions)
                .map(Geometry::LineString)
                .ok_or(GeometryError::Malformed("LineString")),
            "Polygon" => coordinates
                .and_then(Value::as_array)
                .and_then(|rings| rings.iter().map(parse_positions).collect::<Option<Vec<_>>>())
                .map(Geometry::Polygon)
                .ok_or(GeometryError::Malformed("Polygon")),
            other => Err(GeometryError::Unsupported(other.to_string())),
        }
    }
}

/// `[lng, lat, ...]`; anything past the second member is ignored
fn parse_position(value: &Value) -> Option<Coordinate> {
    let members = value.as_array()?;
    let lng = members.first()?.as_f64()?;
    let lat = members.get(1)?.as_f64()?;
    Some(Coordinate::new(lng, lat))
}

fn parse_positions(value: &Value) -> Option<Vec<Coordinate>> {
    value.as_array()?.iter().map(parse_position).collect()
}

/// Reduce a feature's raw geometry to one representative coordinate.
/// `null` (or an absent member) is a missing geometry.
pub fn reduce_raw(geometry: &Value) -> Result<Coordinate, GeometryError> {
    if geometry.is_null() {
        return Err(GeometryError::Missing);
    }
    reduce(&Geometry::try_from(geometry)?)
}

/// Reduce a geometry to one representative coordinate.
///
/// Points pass through, linestrings use the vertex at `len / 2`, polygons use
/// the plain vertex mean of the outer ring without its closing vertex.
pub fn reduce(geometry: &Geometry) -> Result<Coordinate, GeometryError> {
    match geometry {
        Geometry::Point(coordinate) => Ok(*coordinate),
        Geometry::LineString(vertices) => vertices
            .get(vertices.len() / 2)
            .copied()
            .ok_or(GeometryError::Empty("LineString")),
        Geometry::Polygon(rings) => {
            let outer = rings.first().ok_or(GeometryError::Empty("Polygon"))?;
            ring_vertex_mean(outer)
        }
    }
}

fn ring_vertex_mean(ring: &[Coordinate]) -> Result<Coordinate, GeometryError> {
    if ring.len() < 2 {
        return Err(GeometryError::DegeneratePolygon { vertices: ring.len() });
    }

    let open = &ring[..ring.len() - 1];
    let count = open.len() as f64;
    let (sum_lng, sum_lat) = open
        .iter()
        .fold((0.0, 0.0), |(lng, lat), c| (lng + c.lng, lat + c.lat));

    Ok(Coordinate::new(sum_lng / count, sum_lat / count))
}

// Port extraction pipeline: classify, reduce geometry, normalize

pub mod processing;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, instrument, warn};

use crate::constants::{keys, UNNAMED_FEATURE};
use crate::error::GeometryError;
use crate::types::{Coordinate, Feature, FeatureCollection, PortRecord};
use processing::{classify, normalize, reduce_raw, Classification, NormalizeInput};

/// Why a port-related feature produced no record
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    Geometry(GeometryError),
    /// Reduced coordinate has a zero, NaN or infinite component
    InvalidCoordinates(Coordinate),
}

impl SkipReason {
    /// Short, stable label for metrics
    pub fn as_label(&self) -> &'static str {
        match self {
            SkipReason::Geometry(GeometryError::Missing) => "missing_geometry",
            SkipReason::Geometry(GeometryError::Invalid(_)) => "invalid_geometry",
            SkipReason::Geometry(GeometryError::Unsupported(_)) => "unsupported_geometry",
            SkipReason::Geometry(GeometryError::Malformed(_)) => "malformed_geometry",
            SkipReason::Geometry(GeometryError::Empty(_)) => "empty_geometry",
            SkipReason::Geometry(GeometryError::DegeneratePolygon { .. }) => "degenerate_polygon",
            SkipReason::InvalidCoordinates(_) => "invalid_coordinates",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Geometry(e) => write!(f, "No valid coordinates ({e})"),
            SkipReason::InvalidCoordinates(c) => {
                write!(f, "No valid coordinates (lng={}, lat={})", c.lng, c.lat)
            }
        }
    }
}

/// A port-related feature that was dropped
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFeature {
    pub index: usize,
    /// `name` property or "unnamed feature"
    pub label: String,
    pub reason: SkipReason,
}

/// Result of one pass over a feature collection
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    pub records: Vec<PortRecord>,
    pub total_features: usize,
    pub port_features: usize,
    #[serde(skip)]
    pub skipped: Vec<SkippedFeature>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl PipelineResult {
    pub fn accepted(&self) -> usize {
        self.records.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn duration_secs(&self) -> f64 {
        (self.finished_at - self.started_at)
            .to_std()
            .map(|d| d.as_secs_f64())
            .unwrap_or_default()
    }
}

enum FeatureOutcome {
    NotPortRelated,
    Accepted(PortRecord),
    Skipped(SkippedFeature),
}

pub struct Pipeline;

impl Pipeline {
    /// Run classification, geometry reduction and normalization over every
    /// feature in order. Per-feature failures are collected, never returned
    /// as errors.
    #[instrument(skip(collection), fields(features = collection.features.len()))]
    pub fn run(collection: &FeatureCollection) -> PipelineResult {
        let started_at = Utc::now();
        info!("🔧 Processing {} features", collection.features.len());

        let mut records = Vec::new();
        let mut skipped = Vec::new();
        let mut port_features = 0;

        for (index, feature) in collection.features.iter().enumerate() {
            match Self::process_feature(index, feature) {
                FeatureOutcome::NotPortRelated => {}
                FeatureOutcome::Accepted(record) => {
                    port_features += 1;
                    debug!(index, name = %record.name, port_type = %record.port_type, "Accepted feature");
                    records.push(record);
                }
                FeatureOutcome::Skipped(skip) => {
                    port_features += 1;
                    warn!("Skipping {}: {}", skip.label, skip.reason);
                    skipped.push(skip);
                }
            }
        }

        let result = PipelineResult {
            records,
            total_features: collection.features.len(),
            port_features,
            skipped,
            started_at,
            finished_at: Utc::now(),
        };

        info!(
            "✅ Extracted {} ports ({} port-related features, {} skipped)",
            result.accepted(),
            result.port_features,
            result.skipped_count()
        );
        crate::metrics::record_run(&result);

        result
    }

    fn process_feature(index: usize, feature: &Feature) -> FeatureOutcome {
        let tags = feature.tags();

        let category = match classify(&tags) {
            Classification::NotPortRelated => return FeatureOutcome::NotPortRelated,
            Classification::Port(category) => category,
        };

        let skip = |reason| {
            FeatureOutcome::Skipped(SkippedFeature {
                index,
                label: tags.text(keys::NAME).unwrap_or_else(|| UNNAMED_FEATURE.to_string()),
                reason,
            })
        };

        let coordinate = match reduce_raw(&feature.geometry) {
            Ok(coordinate) => coordinate,
            Err(e) => return skip(SkipReason::Geometry(e)),
        };

        if !has_usable_coordinates(&coordinate) {
            return skip(SkipReason::InvalidCoordinates(coordinate));
        }

        FeatureOutcome::Accepted(normalize(&NormalizeInput {
            tags,
            category,
            coordinate,
            index,
        }))
    }
}

/// Both components must be non-zero and finite. A genuine `(0, 0)` location
/// is indistinguishable from missing data here and is dropped.
pub fn has_usable_coordinates(coordinate: &Coordinate) -> bool {
    let usable = |v: f64| v != 0.0 && v.is_finite();
    usable(coordinate.lng) && usable(coordinate.lat)
}

pub mod config;
pub mod constants;
pub mod error;
pub mod idempotency;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod storage;
pub mod types;

pub use error::{GeometryError, PortError, Result};
pub use pipeline::{Pipeline, PipelineResult, SkipReason, SkippedFeature};
pub use types::{Coordinate, Feature, FeatureCollection, PortCategory, PortRecord};

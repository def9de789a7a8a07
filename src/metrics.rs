//! Run counters. No exporter is installed by this crate; without a recorder
//! these calls are no-ops.

use ::metrics::{counter, describe_counter, describe_histogram, histogram};

use crate::pipeline::PipelineResult;

pub const FEATURES_TOTAL: &str = "osm_ports_features_total";
pub const PORT_FEATURES_TOTAL: &str = "osm_ports_port_features_total";
pub const RECORDS_TOTAL: &str = "osm_ports_records_total";
pub const SKIPPED_TOTAL: &str = "osm_ports_skipped_total";
pub const PIPELINE_DURATION_SECONDS: &str = "osm_ports_pipeline_duration_seconds";

/// Register descriptions with whichever recorder is installed
pub fn describe() {
    describe_counter!(FEATURES_TOTAL, "Features read from the input collection");
    describe_counter!(PORT_FEATURES_TOTAL, "Features classified as port-related");
    describe_counter!(RECORDS_TOTAL, "Port records written");
    describe_counter!(SKIPPED_TOTAL, "Port-related features dropped, by reason");
    describe_histogram!(PIPELINE_DURATION_SECONDS, "Wall time of one pipeline pass");
}

pub fn record_run(result: &PipelineResult) {
    counter!(FEATURES_TOTAL).increment(result.total_features as u64);
    counter!(PORT_FEATURES_TOTAL).increment(result.port_features as u64);
    counter!(RECORDS_TOTAL).increment(result.accepted() as u64);
    for skip in &result.skipped {
        counter!(SKIPPED_TOTAL, "reason" => skip.reason.as_label()).increment(1);
    }
    histogram!(PIPELINE_DURATION_SECONDS).record(result.duration_secs());
}

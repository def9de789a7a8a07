// Per-feature processing: classification, geometry reduction, normalization

pub mod classify;
pub mod geometry;
pub mod normalize;

pub use classify::{classify, Classification};
pub use geometry::{reduce, reduce_raw, Geometry};
pub use normalize::{normalize, NormalizeInput};

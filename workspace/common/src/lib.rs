//! Domain types shared between the compute layer and the frontend.
//! These structs describe cycle state and hormone readings in the shape a
//! data provider would deliver them, so both sides agree on one definition.

mod hormone;
mod summary;

pub use hormone::{Hormone, HormoneSample};
pub use summary::{Confidence, CycleSummary, InsightSummary, ScoreBand};

//! Poll pipeline: fetch → freshness filter → dedup → render → deliver → record.

mod cycle;
mod dedup;
mod deliverer;
mod freshness;

pub use cycle::{CycleReport, Pipeline};
pub use dedup::DeliveryRecord;
pub use deliverer::Deliverer;
pub use freshness::{is_recent, select_recent};

//! Point aggregation service
//!
//! Collapses repeat occupations of the same physical point into a single
//! averaged position and computes first-to-last dispersion statistics.
//!
//! ## Architecture
//!
//! - **Identity inference** (`identity`): derives the physical point name
//!   from a raw measurement name by taking the leading alphanumeric run
//! - **Processing** (`processor`): groups measurements by inferred name,
//!   averages coordinates in decimal arithmetic, and emits a difference
//!   record for every point observed at two or more distinct end times
//!
//! Aggregation is a pure in-memory computation. It never fails: any list of
//! validated measurements produces a result, and an empty input produces an
//! empty result.

pub mod identity;
pub mod processor;

pub use identity::point_name;
pub use processor::{aggregate, AggregateResult};

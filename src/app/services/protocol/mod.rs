//! Protocol and output rendering service
//!
//! Turns the aggregation results into the survey deliverables:
//!
//! - **Text protocol** (`text`): the plain-text GNSS (RTK) measurement
//!   protocol with the measured-points table, per-point averaging blocks,
//!   final coordinates, and first-to-last dispersion, optionally re-wrapped
//!   for A4 printing
//! - **Czech durations** (`duration`): the two duration spellings used by
//!   the protocol tables
//! - **Averaged CSV** (`writer`): the averaged point list written back out
//!   in the source format's column convention
//!
//! Rendering is infallible string building; only the CSV writer touches the
//! filesystem and can fail.

pub mod duration;
pub mod text;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use text::TextProtocol;
pub use writer::AveragedPointWriter;

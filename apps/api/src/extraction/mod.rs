//! Model-reply extraction pipeline: fence stripping and object isolation,
//! control-character repair, envelope normalisation, outcome classification
//! and record mapping. Pure functions only; no I/O happens here.

pub mod classifier;
pub mod mapper;
pub mod repair;
pub mod sanitize;
pub mod verdict;

pub use classifier::{classify_extraction, ExtractionOutcome, NOT_A_JOB_DESCRIPTION};
pub use mapper::draft_record;

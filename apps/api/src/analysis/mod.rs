// Skill-gap analysis engine.
// Extraction and recommendation are static lookups; classification is 1-NN
// over a fixed reference table. Nothing here holds mutable state.

pub mod classifier;
pub mod extractor;
pub mod gap;
pub mod handlers;
pub mod pipeline;
pub mod recommendations;
pub mod upload;

//! Extract, transform and load building blocks
//!
//! The stage traits are generic over their item types; [`Pipeline`] wires
//! one of each together and reports a [`PipelineOutcome`] that tells an
//! empty source apart from a load that wrote nothing.

mod extract;
mod load;
mod pipeline;
mod transform;

pub use extract::Extractor;
pub use load::Loader;
pub use pipeline::{Pipeline, PipelineOutcome};
pub use transform::{IdentityTransformer, Transformer};

//! Content model, structured-field codec and the fetch-or-fallback boundary.

pub mod codec;
pub mod defaults;
pub mod fallback;
pub mod model;

pub use fallback::{lookup_published, or_default, with_fallback, Lookup};

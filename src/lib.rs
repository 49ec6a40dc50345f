/// Item Resolver
///
/// Client-side accessor for remotely hosted content items. Each item flavor is
/// fetched once per resolver and served from memory afterwards.

pub mod config;
pub mod error;
pub mod item;
pub mod timer;

pub use config::ResolverConfig;
pub use error::{ResolverError, ResolverResult};
pub use item::{ItemFlavorKey, ItemResolver, ItemResponse};
pub use timer::IntervalCounter;

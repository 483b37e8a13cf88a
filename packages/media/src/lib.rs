pub mod resolver;
pub mod source;

pub use resolver::{DEFAULT_STORAGE_PREFIX, PhotoResolver, ResolvedPhoto};
pub use source::PhotoSource;

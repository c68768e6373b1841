pub mod config;
pub mod dataset;
pub mod details;
pub mod error;
pub mod fetch;
pub mod genres;
pub mod resolve;
pub mod text;

pub use config::Config;
pub use dataset::{DatasetId, IndexStore, Record};
pub use error::{ResolveError, Result};
pub use resolve::Resolver;

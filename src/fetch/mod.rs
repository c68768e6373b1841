pub mod trending;

pub use trending::{TrendingClient, TrendingMovie};

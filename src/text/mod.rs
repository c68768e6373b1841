pub mod extract;
pub mod normalize;

pub use extract::{extract_title, title_hint};
pub use normalize::normalize;

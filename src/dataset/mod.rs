pub mod index;
pub mod record;
pub mod source;
pub mod store;

pub use index::DatasetIndex;
pub use record::{get_field, Record};
pub use source::{DatasetId, DatasetSource, FsSource, MemorySource};
pub use store::IndexStore;

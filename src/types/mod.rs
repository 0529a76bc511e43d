pub mod labels;
pub mod versioning;

pub use labels::{Label, LabelError, LabelMap};
pub use versioning::SnapshotVersion;

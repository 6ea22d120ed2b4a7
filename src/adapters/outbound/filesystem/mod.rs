/// Filesystem adapters for catalog snapshots and rendered output
mod catalog_snapshot;
mod file_writer;

pub use catalog_snapshot::CatalogSnapshotFile;
pub use file_writer::{FileSystemWriter, StdoutPresenter};

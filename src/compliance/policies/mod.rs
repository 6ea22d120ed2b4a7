pub mod scan_profiles;

pub use scan_profiles::{ScanOption, ScanProfiles};

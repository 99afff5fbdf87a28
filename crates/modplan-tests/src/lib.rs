pub mod fixtures;

// Re-export key testing utilities
pub use fixtures::{ManifestFixture, cyclic_manifest, layered_manifest, unknown_dep_manifest};

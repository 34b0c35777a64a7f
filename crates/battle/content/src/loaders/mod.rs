//! Content loaders for reading battle data from files.
//!
//! Each loader turns one RON/TOML file into the battle-core type it describes.

pub mod actions;
pub mod classes;
pub mod config;
pub mod factory;
pub mod opponents;

pub use actions::ActionLoader;
pub use classes::ClassLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use opponents::OpponentLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

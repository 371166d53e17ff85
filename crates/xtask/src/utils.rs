//! Utility functions for xtask commands

use std::path::PathBuf;

use game_content::ContentFactory;

/// Environment variable naming a content directory.
pub const CONTENT_DIR_VAR: &str = "CONTENT_DIR";

/// Content source: `--content`, then `$CONTENT_DIR`, then the bundled data.
pub fn content_factory(explicit: Option<PathBuf>) -> ContentFactory {
    match explicit.or_else(|| std::env::var_os(CONTENT_DIR_VAR).map(PathBuf::from)) {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    }
}

/// `explicit`, or `default` resolved inside the factory's data directory.
pub fn content_path(factory: &ContentFactory, explicit: Option<PathBuf>, default: &str) -> PathBuf {
    explicit.unwrap_or_else(|| factory.data_dir().join(default))
}

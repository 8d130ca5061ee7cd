//! Tag-list configuration for gameplay-tags.
//!
//! Reads the ordered list of dotted tag paths from a `tags.toml` file and
//! feeds it to a [`TagRegistry`].
//!
//! # File format
//!
//! ```toml
//! # Optional: what to do when a path is listed twice.
//! # "ignore" (default), "warn" or "error"
//! on_duplicate = "warn"
//!
//! [tags]
//! paths = [
//!     "Weapon.Rifle.M4",
//!     "Weapon.Rifle.AK47",
//!     "Team.CT",
//! ]
//! ```
//!
//! Order matters: identifiers follow registration order, so reordering or
//! inserting paths in the middle of the list changes the identifiers of
//! later siblings.
//!
//! # Usage
//!
//! ```ignore
//! let registry = gameplay_tags_config::load_registry("assets/tags.toml")?;
//! let m4 = registry.lookup("Weapon.Rifle.M4");
//! ```

mod toml_parser;

pub use toml_parser::{OnDuplicate, TagsConfig, TagsConfigError};

use std::path::Path;

use gameplay_tags::TagRegistry;
use tracing::info;

/// Main entry point: read a tag file and build a registry from it.
///
/// # Errors
///
/// Returns an error if:
/// - the file cannot be read or parsed
/// - a path is malformed, or duplicated with `on_duplicate = "error"`
/// - registration overflows the identifier layout
pub fn load_registry(config_path: impl AsRef<Path>) -> Result<TagRegistry, TagsConfigError> {
    let config_path = config_path.as_ref();
    let config = TagsConfig::from_file(config_path)?;
    let registry = config.build_registry()?;
    info!(
        file = %config_path.display(),
        paths = config.len(),
        tags = registry.len(),
        "loaded tag registry"
    );
    Ok(registry)
}

/// Reload a tag file into an existing registry, replacing its contents.
pub fn reload_registry(
    registry: &mut TagRegistry,
    config_path: impl AsRef<Path>,
) -> Result<(), TagsConfigError> {
    let config = TagsConfig::from_file(config_path)?;
    config.apply_to(registry, true)?;
    Ok(())
}

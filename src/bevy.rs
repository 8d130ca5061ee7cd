//! Bevy integration for gameplay tags (feature `bevy`).
//!
//! Provides:
//! - `TagPlugin`: builder-pattern plugin that registers a tag list and
//!   inserts the [`TagRegistry`] as a Resource
//! - [`TagContainer`](crate::TagContainer) as a Component
//!
//! # Example
//!
//! ```ignore
//! use bevy::prelude::*;
//! use gameplay_tags::{TagContainer, TagRegistry, bevy::TagPlugin};
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(TagPlugin::from_paths(["Weapon.Rifle.M4", "Status.Burning"]))
//!         .add_systems(Startup, spawn_entities)
//!         .run();
//! }
//!
//! fn spawn_entities(mut commands: Commands, registry: Res<TagRegistry>) {
//!     let burning = registry.lookup("Status.Burning");
//!     commands.spawn(TagContainer::new().with_stacks(&burning, 3));
//! }
//! ```

use bevy::prelude::*;

use crate::registry::TagRegistry;

// =============================================================================
// Plugin
// =============================================================================

/// Bevy plugin for the tag system.
///
/// ```ignore
/// App::new().add_plugins(
///     TagPlugin::new()
///         .with_path("Weapon.Rifle.M4")
///         .with_path("Weapon.SMG.MP5"),
/// )
/// ```
#[derive(Default)]
pub struct TagPlugin {
    paths: Vec<String>,
}

impl TagPlugin {
    /// Create a plugin with no tags; the registry starts with only the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plugin that registers `paths` in order.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Append one path to the registration list.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }
}

impl Plugin for TagPlugin {
    fn build(&self, app: &mut App) {
        let registry = TagRegistry::from_paths(&self.paths)
            .expect("Failed to build TagRegistry from plugin paths");
        app.insert_resource(registry);
    }
}

// =============================================================================
// Resource impl for TagRegistry
// =============================================================================

impl Resource for TagRegistry {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TagContainer;

    #[test]
    fn plugin_inserts_registry() {
        let mut app = App::new();
        app.add_plugins(TagPlugin::from_paths(["Weapon.Rifle.M4"]).with_path("Team.CT"));

        let registry = app.world().resource::<TagRegistry>();
        assert!(registry.contains("Weapon.Rifle.M4"));
        assert!(registry.contains("Team.CT"));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn container_is_a_component() {
        let mut app = App::new();
        app.add_plugins(TagPlugin::from_paths(["Status.Burning"]));

        let burning = app.world().resource::<TagRegistry>().lookup("Status.Burning");
        let entity = app
            .world_mut()
            .spawn(TagContainer::new().with_stacks(&burning, 2))
            .id();

        let container = app.world().get::<TagContainer>(entity).unwrap();
        assert_eq!(container.get_tag_count(&burning), 2);
    }
}

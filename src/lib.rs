//! # Hierarchical Gameplay Tags (gameplay-tags)
//!
//! Organizes dotted labels such as `Weapon.Rifle.Sniper.AWP` into a tree and
//! gives every node a compact identifier that encodes its ancestry.
//! Per-entity [`TagContainer`]s then track how many stacks of each tag an
//! owner carries.
//!
//! ## Design
//!
//! A [`TagId`] is a `u64` holding one byte per tree level. Each byte is the
//! 1-based position of a node among its siblings:
//!
//! ```text
//! ┌────────┬────────┬────────┬────────┬────────┬────────┬────────┬────────┐
//! │ byte 7 │ byte 6 │ byte 5 │ byte 4 │ byte 3 │ byte 2 │ byte 1 │ byte 0 │
//! └────────┴────────┴────────┴────────┴────────┴────────┴────────┴────────┘
//!   deepest tags use every byte; Weapon.Rifle.M4 = 0x00_00_00_00_00_01_01_01
//! ```
//!
//! - up to [`MAX_DEPTH`] (8) levels below the root
//! - up to [`MAX_SIBLINGS`] (255) children per node
//! - identifier `0` is the root and never a registered tag
//!
//! ## Usage
//!
//! ```
//! use gameplay_tags::{TagContainer, TagRegistry};
//!
//! let mut registry = TagRegistry::new();
//! registry
//!     .register_paths(["Weapon.Rifle.M4", "Weapon.Rifle.AK47", "Weapon.SMG.MP5"], false)
//!     .unwrap();
//!
//! let m4 = registry.lookup("Weapon.Rifle.M4");
//! let rifle = registry.lookup("Weapon.Rifle");
//! assert!(m4.is_valid());
//! assert!(m4.is_descendant_of(&rifle));
//!
//! // Lookup misses fall back to the (invalid) root tag.
//! assert!(!registry.lookup("Weapon.Laser").is_valid());
//!
//! let mut inventory = TagContainer::new();
//! inventory.add_tag(&m4, 2);
//! assert_eq!(inventory.get_tag_count(&m4), 2);
//! ```

#[cfg(feature = "bevy")]
pub mod bevy;
pub mod container;
pub mod error;
pub mod layout;
pub mod registry;
pub mod tag;
pub mod traits;
pub mod tree;

pub use container::TagContainer;
pub use error::TagError;
pub use layout::{
    BytePath, ID_BYTES, LEVEL_BITS, MAX_DEPTH, MAX_SIBLINGS, byte_path, child_id, depth_of,
    id_is_descendant_of, is_sibling, parent_id_of, sibling_index_of,
};
pub use registry::TagRegistry;
pub use tag::{ROOT_LABEL, Tag};
pub use traits::IntoTagId;
pub use tree::{NodeId, Tree, TreeNode};

/// Tag identifier, one byte per level, parent-relative.
///
/// `0` is reserved for the root / unset tag.
pub type TagId = u64;

/// Identifier of the root node; doubles as the invalid identifier.
pub const ROOT_ID: TagId = 0;

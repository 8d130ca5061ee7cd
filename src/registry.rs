//! Tag registry: builds the tag tree from dotted paths and resolves lookups.

use std::collections::HashMap;

use tracing::{debug, trace};
use zerocopy::{FromBytes, Immutable, IntoBytes};

use crate::error::{Result, TagError};
use crate::layout::{self, MAX_DEPTH, MAX_SIBLINGS};
use crate::tag::Tag;
use crate::traits::IntoTagId;
use crate::tree::{NodeId, Tree};
use crate::{ROOT_ID, TagId};

/// Registry for hierarchical tags.
///
/// Provides:
/// - Path → Tag registration with parent auto-creation and dedup
/// - Path → Tag lookup (legacy root fallback, or explicit `Option`)
/// - Identifier → Tag lookup by walking the identifier's byte path
/// - Subtree queries and a pre-order tree dump
/// - Per-tag metadata storage
///
/// Identifiers depend on registration order: the n-th child registered under
/// a parent gets sibling index n. Registering the same paths in the same
/// order always yields the same identifiers.
#[derive(Clone, Debug)]
pub struct TagRegistry {
    tree: Tree<Tag>,
    /// Dynamic metadata storage: id → (key → bytes)
    metadata: HashMap<TagId, HashMap<String, Vec<u8>>>,
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TagRegistry {
    /// Create a registry holding only the root tag.
    pub fn new() -> Self {
        Self {
            tree: Tree::new(Tag::root()),
            metadata: HashMap::new(),
        }
    }

    /// Build a registry from a list of paths, registered in order.
    pub fn from_paths<I, S>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        registry.register_paths(paths, false)?;
        Ok(registry)
    }

    /// Discard every registered tag and all metadata.
    pub fn reset(&mut self) {
        debug!(tags = self.len(), "resetting tag registry");
        self.tree = Tree::new(Tag::root());
        self.metadata.clear();
    }

    /// Register a dotted path, creating any missing ancestors.
    ///
    /// Idempotent: registering an existing path returns the existing tag and
    /// creates nothing. Either the whole path is registered or, on error,
    /// nothing is.
    ///
    /// # Errors
    ///
    /// - [`TagError::EmptyPath`] / [`TagError::EmptySegment`] for malformed paths
    /// - [`TagError::DepthOverflow`] if the path is deeper than [`MAX_DEPTH`]
    /// - [`TagError::SiblingOverflow`] if a parent already has 255 children
    pub fn register_path(&mut self, path: &str) -> Result<Tag> {
        debug!(path, "loading tag");
        let segments = split_path(path)?;
        if segments.len() > MAX_DEPTH {
            return Err(TagError::DepthOverflow {
                path: path.to_string(),
                depth: segments.len(),
                max: MAX_DEPTH,
            });
        }

        // Descend through the part of the path that already exists.
        let mut node = self.tree.root();
        let mut missing = segments.as_slice();
        while let Some((segment, rest)) = missing.split_first() {
            match self.child_by_segment(segment, node) {
                Some(child) => {
                    node = child;
                    missing = rest;
                }
                None => break,
            }
        }

        if missing.is_empty() {
            return Ok(self.tree[node].clone());
        }

        // Only the first new node joins an existing sibling list.
        if self.tree.children(node).len() >= MAX_SIBLINGS {
            return Err(TagError::SiblingOverflow {
                parent: self.tree[node].label().to_string(),
                max: MAX_SIBLINGS,
            });
        }

        for segment in missing {
            let parent = &self.tree[node];
            let id = layout::child_id(parent.id(), self.tree.children(node).len() + 1)?;
            let tag = Tag::new(id, format!("{}.{}", parent.label(), segment));
            debug!(tag = %tag, "tag created");
            node = self.tree.add_child(node, tag);
        }

        Ok(self.tree[node].clone())
    }

    /// Register several paths in order, optionally resetting first.
    ///
    /// Stops at the first failing path; paths before it stay registered.
    pub fn register_paths<I, S>(&mut self, paths: I, reset_first: bool) -> Result<Vec<Tag>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if reset_first {
            self.reset();
        }
        paths
            .into_iter()
            .map(|path| self.register_path(path.as_ref()))
            .collect()
    }

    /// Path → Tag, falling back to the root tag when the path is unknown.
    ///
    /// The root is not [valid](Tag::is_valid), so callers can tell a miss
    /// apart with `is_valid()`. New code should prefer [`find`](Self::find).
    pub fn lookup(&self, path: &str) -> Tag {
        self.find(path).unwrap_or_else(|| self.root()).clone()
    }

    /// Path → Tag, `None` when any segment is missing or the path is malformed.
    pub fn find(&self, path: &str) -> Option<&Tag> {
        let segments = split_path(path).ok()?;
        let mut node = self.tree.root();
        for segment in segments {
            match self.child_by_segment(segment, node) {
                Some(child) => node = child,
                None => {
                    trace!(path, segment, parent = self.tree[node].label(), "tag not found");
                    return None;
                }
            }
        }
        Some(&self.tree[node])
    }

    /// 1-based position of the child of `parent` whose last segment is
    /// `component`.
    pub fn find_child_index(&self, component: &str, parent: NodeId) -> Option<u8> {
        let position = self
            .tree
            .children(parent)
            .iter()
            .position(|&child| self.tree[child].last_segment() == component)?;
        u8::try_from(position + 1).ok()
    }

    fn child_by_segment(&self, segment: &str, parent: NodeId) -> Option<NodeId> {
        let index = self.find_child_index(segment, parent)?;
        self.tree.children(parent).get(index as usize - 1).copied()
    }

    /// Identifier → tree node, following the identifier's byte path.
    pub fn node_of(&self, id: impl IntoTagId) -> Option<NodeId> {
        let mut node = self.tree.root();
        for &index in layout::byte_path(id.into_tag_id()).iter() {
            let position = (index as usize).checked_sub(1)?;
            node = *self.tree.children(node).get(position)?;
        }
        Some(node)
    }

    /// Identifier → Tag. `get(ROOT_ID)` is the root.
    #[inline]
    pub fn get(&self, id: impl IntoTagId) -> Option<&Tag> {
        self.node_of(id).map(|node| &self.tree[node])
    }

    /// Identifier → path without the root marker.
    #[inline]
    pub fn path_of(&self, id: impl IntoTagId) -> Option<&str> {
        self.get(id).map(Tag::display_label)
    }

    /// The registered tag matching both the id and the label of `tag`.
    ///
    /// Use this to check tags that came from outside the registry, such as
    /// deserialized ones.
    pub fn resolve(&self, tag: &Tag) -> Option<&Tag> {
        self.get(tag.id())
            .filter(|registered| registered.is_valid() && registered.label() == tag.label())
    }

    /// The root tag (identifier 0, not valid).
    #[inline]
    pub fn root(&self) -> &Tag {
        &self.tree[self.tree.root()]
    }

    /// The underlying tree.
    #[inline]
    pub fn tree(&self) -> &Tree<Tag> {
        &self.tree
    }

    /// Check if a path is registered.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// Check if an identifier belongs to a registered (non-root) tag.
    #[inline]
    pub fn contains_id(&self, id: impl IntoTagId) -> bool {
        let id = id.into_tag_id();
        id != ROOT_ID && self.node_of(id).is_some()
    }

    /// Number of registered tags, root excluded.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Longest registered path, in segments (0 when empty).
    #[inline]
    pub fn tree_depth(&self) -> usize {
        self.tree.height()
    }

    /// All registered tags in pre-order, root excluded.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> + '_ {
        self.tree
            .pre_order()
            .skip(1)
            .map(move |(node, _)| &self.tree[node])
    }

    /// Direct children of a tag, in registration order.
    pub fn children_of(&self, id: impl IntoTagId) -> impl Iterator<Item = &Tag> + '_ {
        self.node_of(id)
            .into_iter()
            .flat_map(move |node| self.tree.children(node).iter())
            .map(move |&child| &self.tree[child])
    }

    /// Parent of a tag; `None` for the root or unknown ids.
    pub fn parent_of(&self, id: impl IntoTagId) -> Option<&Tag> {
        let node = self.node_of(id)?;
        self.tree.parent(node).map(|parent| &self.tree[parent])
    }

    /// The subtree rooted at `ancestor` (including itself), in pre-order.
    pub fn descendants_of(&self, ancestor: impl IntoTagId) -> Vec<&Tag> {
        match self.node_of(ancestor) {
            Some(node) => self
                .tree
                .pre_order_from(node)
                .map(|(id, _)| &self.tree[id])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Check if `candidate` path is a descendant of (or equal to) `ancestor` path.
    ///
    /// Returns `None` if either path is not registered.
    ///
    /// ```text
    /// registry.is_descendant_of_path("Weapon.Rifle.M4", "Weapon") → Some(true)
    /// registry.is_descendant_of_path("Team.T", "Weapon")          → Some(false)
    /// registry.is_descendant_of_path("Unknown", "Weapon")         → None
    /// ```
    pub fn is_descendant_of_path(&self, candidate: &str, ancestor: &str) -> Option<bool> {
        let candidate = self.find(candidate)?;
        let ancestor = self.find(ancestor)?;
        Some(candidate.is_descendant_of(ancestor))
    }

    /// Pre-order dump, one label per line, root first.
    pub fn dump_tree(&self) -> String {
        let mut out = String::new();
        for (node, _) in self.tree.pre_order() {
            out.push_str(self.tree[node].display_label());
            out.push('\n');
        }
        out
    }

    /// Emit [`dump_tree`](Self::dump_tree) through `tracing` at debug level.
    pub fn log_tree(&self) {
        for (node, depth) in self.tree.pre_order() {
            let tag = &self.tree[node];
            debug!(depth, id = tag.id(), "{}", tag.display_label());
        }
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    /// Set typed metadata for a registered tag.
    ///
    /// The type must implement `zerocopy::IntoBytes + Immutable`.
    /// Returns the previous raw bytes if any; see
    /// [`set_meta_raw`](Self::set_meta_raw) for unregistered ids.
    pub fn set_meta<G: IntoTagId, T: IntoBytes + Immutable>(
        &mut self,
        id: G,
        key: impl Into<String>,
        value: &T,
    ) -> Option<Vec<u8>> {
        self.set_meta_raw(id, key, value.as_bytes().to_vec())
    }

    /// Get typed metadata for a tag.
    ///
    /// Returns `None` if the key doesn't exist or the stored size doesn't
    /// match `T`.
    pub fn get_meta<T: FromBytes>(&self, id: impl IntoTagId, key: &str) -> Option<T> {
        let bytes = self.get_meta_raw(id, key)?;
        T::read_from_bytes(bytes).ok()
    }

    /// Set raw bytes metadata for a tag.
    ///
    /// No-op returning `None` unless `id` is a registered tag, so a lookup
    /// miss (the root) or a stale identifier never collects metadata.
    pub fn set_meta_raw(
        &mut self,
        id: impl IntoTagId,
        key: impl Into<String>,
        value: Vec<u8>,
    ) -> Option<Vec<u8>> {
        let id = id.into_tag_id();
        if !self.contains_id(id) {
            trace!(id, "metadata ignored for unregistered tag");
            return None;
        }
        self.metadata
            .entry(id)
            .or_default()
            .insert(key.into(), value)
    }

    #[inline]
    pub fn get_meta_raw(&self, id: impl IntoTagId, key: &str) -> Option<&[u8]> {
        self.metadata
            .get(&id.into_tag_id())?
            .get(key)
            .map(Vec::as_slice)
    }

    #[inline]
    pub fn has_meta(&self, id: impl IntoTagId, key: &str) -> bool {
        self.metadata
            .get(&id.into_tag_id())
            .is_some_and(|m| m.contains_key(key))
    }

    /// Remove metadata for a tag, returning the removed bytes if any.
    pub fn remove_meta(&mut self, id: impl IntoTagId, key: &str) -> Option<Vec<u8>> {
        self.metadata.get_mut(&id.into_tag_id())?.remove(key)
    }

    /// All metadata keys stored for a tag.
    pub fn meta_keys(&self, id: impl IntoTagId) -> Option<impl Iterator<Item = &str>> {
        self.metadata
            .get(&id.into_tag_id())
            .map(|m| m.keys().map(String::as_str))
    }
}

/// Split "A.B.C" into ["A", "B", "C"], rejecting empty paths and segments.
fn split_path(path: &str) -> Result<Vec<&str>> {
    if path.is_empty() {
        return Err(TagError::EmptyPath);
    }
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(TagError::EmptySegment {
            path: path.to_string(),
        });
    }
    Ok(segments)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const WEAPONS: &[&str] = &[
        "Weapon.Rifle.M4",
        "Weapon.Rifle.AK47",
        "Weapon.Rifle.SCAR",
        "Weapon.Rifle.Sniper.M80",
        "Weapon.Rifle.Sniper.AWP",
        "Weapon.SMG.Vector",
        "Weapon.SMG.MP5",
        "Team.T",
        "Team.CT",
    ];

    fn sample() -> TagRegistry {
        TagRegistry::from_paths(WEAPONS).unwrap()
    }

    #[test]
    fn new_registry_has_only_root() {
        let reg = TagRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.root().id(), ROOT_ID);
        assert_eq!(reg.root().label(), "root");
        assert!(!reg.root().is_valid());
    }

    #[test]
    fn register_creates_parents() {
        let mut reg = TagRegistry::new();
        let m4 = reg.register_path("Weapon.Rifle.M4").unwrap();

        assert_eq!(reg.len(), 3);
        assert!(reg.contains("Weapon"));
        assert!(reg.contains("Weapon.Rifle"));
        assert_eq!(m4.label(), "root.Weapon.Rifle.M4");
        assert_eq!(m4.id(), 0x010101);
    }

    #[test]
    fn register_idempotent() {
        let mut reg = TagRegistry::new();
        let first = reg.register_path("Weapon.Rifle.M4").unwrap();
        let second = reg.register_path("Weapon.Rifle.M4").unwrap();

        assert_eq!(first, second);
        assert_eq!(reg.len(), 3);

        let rifle = reg.node_of(reg.lookup("Weapon.Rifle")).unwrap();
        assert_eq!(reg.tree().children(rifle).len(), 1);
    }

    #[test]
    fn register_existing_prefix_returns_existing_tag() {
        let mut reg = sample();
        let before = reg.len();
        let rifle = reg.register_path("Weapon.Rifle").unwrap();
        assert_eq!(rifle, reg.lookup("Weapon.Rifle"));
        assert_eq!(reg.len(), before);
    }

    #[test]
    fn siblings_differ_in_trailing_byte() {
        let reg = sample();
        let m4 = reg.lookup("Weapon.Rifle.M4");
        let ak47 = reg.lookup("Weapon.Rifle.AK47");
        let rifle = reg.lookup("Weapon.Rifle");

        assert_eq!(m4.parent_id(), Some(rifle.id()));
        assert_eq!(ak47.parent_id(), Some(rifle.id()));
        assert_eq!(layout::sibling_index_of(m4.id()), 1);
        assert_eq!(layout::sibling_index_of(ak47.id()), 2);
    }

    #[test]
    fn lookup_miss_returns_root() {
        let reg = sample();
        let miss = reg.lookup("Weapon.Rifle.Railgun");
        assert_eq!(miss, *reg.root());
        assert!(!miss.is_valid());
        assert!(reg.find("Weapon.Rifle.Railgun").is_none());
    }

    #[test]
    fn lookup_degenerate_input_returns_root() {
        let reg = sample();
        assert!(!reg.lookup("").is_valid());
        assert!(!reg.lookup("Weapon..M4").is_valid());
        assert!(reg.find(".Weapon").is_none());
    }

    #[test]
    fn same_segment_under_different_parents() {
        let mut reg = TagRegistry::new();
        let combat_idle = reg.register_path("Combat.Idle").unwrap();
        let movement_idle = reg.register_path("Movement.Idle").unwrap();

        assert_ne!(combat_idle, movement_idle);
        assert_eq!(reg.lookup("Combat.Idle"), combat_idle);
        assert_eq!(reg.lookup("Movement.Idle"), movement_idle);
    }

    #[test]
    fn find_child_index_is_one_based() {
        let reg = sample();
        let root = reg.tree().root();
        assert_eq!(reg.find_child_index("Weapon", root), Some(1));
        assert_eq!(reg.find_child_index("Team", root), Some(2));
        assert_eq!(reg.find_child_index("Vehicle", root), None);
    }

    #[test]
    fn rejects_degenerate_paths() {
        let mut reg = TagRegistry::new();
        assert_eq!(reg.register_path(""), Err(TagError::EmptyPath));
        for path in [".A", "A.", "A..B", "."] {
            assert!(
                matches!(reg.register_path(path), Err(TagError::EmptySegment { .. })),
                "should reject {path:?}"
            );
        }
        assert!(reg.is_empty());
    }

    #[test]
    fn depth_overflow_is_reported() {
        let mut reg = TagRegistry::new();
        reg.register_path("L1.L2.L3.L4.L5.L6.L7.L8").unwrap();
        assert_eq!(reg.tree_depth(), 8);

        let err = reg.register_path("L1.L2.L3.L4.L5.L6.L7.L8.L9").unwrap_err();
        assert_eq!(
            err,
            TagError::DepthOverflow {
                path: "L1.L2.L3.L4.L5.L6.L7.L8.L9".into(),
                depth: 9,
                max: MAX_DEPTH,
            }
        );
        assert_eq!(reg.len(), 8);
    }

    #[test]
    fn sibling_overflow_is_reported_atomically() {
        let mut reg = TagRegistry::new();
        for i in 0..MAX_SIBLINGS {
            reg.register_path(&format!("Item.I{i}")).unwrap();
        }
        let last = reg.lookup(&format!("Item.I{}", MAX_SIBLINGS - 1));
        assert_eq!(layout::sibling_index_of(last.id()), 255);

        let before = reg.len();
        let err = reg.register_path("Item.Overflow.Deep").unwrap_err();
        assert_eq!(
            err,
            TagError::SiblingOverflow {
                parent: "root.Item".into(),
                max: MAX_SIBLINGS,
            }
        );
        assert_eq!(reg.len(), before);
        assert!(!reg.contains("Item.Overflow"));

        // Existing children are still reachable.
        assert!(reg.register_path("Item.I0").is_ok());
    }

    #[test]
    fn register_paths_with_reset() {
        let mut reg = sample();
        let tags = reg.register_paths(["Animal.Dog", "Animal.Cat"], true).unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(reg.len(), 3);
        assert!(!reg.contains("Weapon"));
        assert_eq!(tags[0].id(), 0x0101);
        assert_eq!(tags[1].id(), 0x0102);
    }

    #[test]
    fn register_paths_without_reset_extends() {
        let mut reg = sample();
        let before = reg.len();
        reg.register_paths(["Weapon.Pistol.Glock"], false).unwrap();
        assert_eq!(reg.len(), before + 2);
        assert!(reg.contains("Weapon.Rifle.M4"));
    }

    #[test]
    fn reset_clears_tags_and_metadata() {
        let mut reg = sample();
        let m4 = reg.lookup("Weapon.Rifle.M4");
        reg.set_meta(&m4, "damage", &30i32);

        reg.reset();
        assert!(reg.is_empty());
        assert!(!reg.has_meta(&m4, "damage"));
    }

    #[test]
    fn id_lookup_walks_byte_path() {
        let reg = sample();
        for tag in reg.tags() {
            assert_eq!(reg.get(tag.id()), Some(tag));
            assert!(reg.contains_id(tag));
        }
        assert_eq!(reg.get(ROOT_ID), Some(reg.root()));
        assert!(!reg.contains_id(ROOT_ID));
        assert!(reg.get(0x0909u64).is_none());
        // Zero byte inside the path never names a node.
        assert!(reg.get(0x0100u64).is_none());
    }

    #[test]
    fn resolve_rejects_foreign_tags() {
        let reg = sample();
        let m4 = reg.lookup("Weapon.Rifle.M4");
        let json = serde_json::to_string(&m4).unwrap();
        let back: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(reg.resolve(&back), Some(&m4));

        let forged: Tag =
            serde_json::from_str(r#"{"id":65793,"label":"root.Weapon.Laser"}"#).unwrap();
        assert_eq!(reg.resolve(&forged), None);
        let unknown: Tag = serde_json::from_str(r#"{"id":4660,"label":"root.X"}"#).unwrap();
        assert_eq!(reg.resolve(&unknown), None);
        assert_eq!(reg.resolve(&Tag::default()), None);
    }

    #[test]
    fn path_of_strips_root() {
        let reg = sample();
        let awp = reg.lookup("Weapon.Rifle.Sniper.AWP");
        assert_eq!(reg.path_of(&awp), Some("Weapon.Rifle.Sniper.AWP"));
    }

    #[test]
    fn children_and_parent() {
        let reg = sample();
        let rifle = reg.lookup("Weapon.Rifle");
        let kids: Vec<&str> = reg.children_of(&rifle).map(Tag::last_segment).collect();
        assert_eq!(kids, vec!["M4", "AK47", "SCAR", "Sniper"]);

        let m4 = reg.lookup("Weapon.Rifle.M4");
        assert_eq!(reg.parent_of(&m4), Some(&rifle));
        assert_eq!(reg.parent_of(reg.lookup("Weapon")), Some(reg.root()));
        assert_eq!(reg.parent_of(ROOT_ID), None);
    }

    #[test]
    fn descendants_of_collects_subtree() {
        let reg = sample();
        let smg = reg.lookup("Weapon.SMG");
        let paths: Vec<&str> = reg
            .descendants_of(&smg)
            .into_iter()
            .map(Tag::display_label)
            .collect();
        assert_eq!(paths, vec!["Weapon.SMG", "Weapon.SMG.Vector", "Weapon.SMG.MP5"]);
        assert!(reg.descendants_of(0x7777u64).is_empty());
    }

    #[test]
    fn subtree_check_by_path() {
        let reg = sample();
        assert_eq!(reg.is_descendant_of_path("Weapon.Rifle.M4", "Weapon"), Some(true));
        assert_eq!(reg.is_descendant_of_path("Team.T", "Weapon"), Some(false));
        assert_eq!(reg.is_descendant_of_path("Unknown", "Weapon"), None);
    }

    #[test]
    fn dump_tree_is_pre_order() {
        let reg = TagRegistry::from_paths(["Weapon.Rifle.M4", "Weapon.SMG", "Team"]).unwrap();
        assert_eq!(
            reg.dump_tree(),
            "root\nWeapon\nWeapon.Rifle\nWeapon.Rifle.M4\nWeapon.SMG\nTeam\n"
        );
    }

    #[test]
    fn tags_iterates_without_root() {
        let reg = sample();
        assert_eq!(reg.tags().count(), reg.len());
        assert!(reg.tags().all(Tag::is_valid));
    }

    // =========================================================================
    // Metadata tests
    // =========================================================================

    #[test]
    fn metadata_typed_set_get() {
        let mut reg = TagRegistry::new();
        let m4 = reg.register_path("Weapon.Rifle.M4").unwrap();

        reg.set_meta(&m4, "damage", &33i32);
        reg.set_meta(&m4, "magazine", &30u16);

        assert_eq!(reg.get_meta::<i32>(&m4, "damage"), Some(33));
        assert_eq!(reg.get_meta::<u16>(&m4, "magazine"), Some(30));
        assert_eq!(reg.get_meta::<i32>(&m4, "nonexistent"), None);

        // Wrong size returns None
        assert_eq!(reg.get_meta::<u64>(&m4, "damage"), None);
    }

    #[test]
    fn metadata_raw_overwrite_and_remove() {
        let mut reg = TagRegistry::new();
        let id = reg.register_path("Team.CT").unwrap().id();

        assert!(reg.set_meta_raw(id, "color", vec![0, 0, 255]).is_none());
        assert_eq!(
            reg.set_meta_raw(id, "color", vec![0, 128, 255]),
            Some(vec![0, 0, 255])
        );
        assert_eq!(reg.get_meta_raw(id, "color"), Some(&[0, 128, 255][..]));

        let keys: Vec<&str> = reg.meta_keys(id).unwrap().collect();
        assert_eq!(keys, vec!["color"]);

        assert!(reg.remove_meta(id, "color").is_some());
        assert!(!reg.has_meta(id, "color"));
    }

    #[test]
    fn metadata_requires_registered_tag() {
        let mut reg = sample();

        // A lookup miss is the root; nothing may attach to it.
        let miss = reg.lookup("Weapon.Laser");
        assert!(reg.set_meta(&miss, "damage", &99i32).is_none());
        assert_eq!(reg.get_meta::<i32>(&reg.lookup("Armor.Plate"), "damage"), None);
        assert!(!reg.has_meta(ROOT_ID, "damage"));

        assert!(reg.set_meta_raw(0xDEAD_BEEFu64, "x", vec![1]).is_none());
        assert!(!reg.has_meta(0xDEAD_BEEFu64, "x"));
        assert!(reg.meta_keys(0xDEAD_BEEFu64).is_none());

        // Registered tags are unaffected.
        let m4 = reg.lookup("Weapon.Rifle.M4");
        reg.set_meta(&m4, "damage", &30i32);
        assert_eq!(reg.get_meta::<i32>(&m4, "damage"), Some(30));
    }
}

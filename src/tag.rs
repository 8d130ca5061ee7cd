//! The [`Tag`] value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::layout::{self, BytePath};
use crate::{ROOT_ID, TagId};

/// Label carried by the root node. Every other label starts with `"root."`.
pub const ROOT_LABEL: &str = "root";

const ROOT_PREFIX: &str = "root.";

/// One node of the tag hierarchy.
///
/// A tag is an interned identifier plus the full dotted label it was
/// registered under (`root.Weapon.Rifle.M4`). Equality, hashing and ordering
/// look at the identifier only; the label is there for display and
/// registration lookups.
///
/// Tags are produced by [`TagRegistry`](crate::TagRegistry). Clones are cheap
/// (the label is shared).
///
/// Deserialized tags are trusted input: serde accepts any `id`/`label`
/// pair. Pass them through [`TagRegistry::resolve`](crate::TagRegistry::resolve)
/// to get the registered tag back, or `None` if the pair does not match.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Tag {
    id: TagId,
    label: Arc<str>,
}

impl Tag {
    pub(crate) fn new(id: TagId, label: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    pub(crate) fn root() -> Self {
        Self::new(ROOT_ID, ROOT_LABEL)
    }

    #[inline]
    pub fn id(&self) -> TagId {
        self.id
    }

    /// Full label including the root marker.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// False for the root and for default-constructed tags.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.id != ROOT_ID
    }

    /// Final dot-separated component (`M4` for `root.Weapon.Rifle.M4`).
    pub fn last_segment(&self) -> &str {
        self.label
            .rsplit_once('.')
            .map_or(&*self.label, |(_, last)| last)
    }

    /// Label without the leading root marker (`Weapon.Rifle.M4`).
    pub fn display_label(&self) -> &str {
        self.label.strip_prefix(ROOT_PREFIX).unwrap_or(&*self.label)
    }

    #[inline]
    pub fn byte_path(&self) -> BytePath {
        BytePath::from_id(self.id)
    }

    /// Levels below the root (0 for the root itself).
    #[inline]
    pub fn depth(&self) -> u8 {
        layout::depth_of(self.id)
    }

    #[inline]
    pub fn parent_id(&self) -> Option<TagId> {
        layout::parent_id_of(self.id)
    }

    /// Is this tag `ancestor` or somewhere below it?
    #[inline]
    pub fn is_descendant_of(&self, ancestor: &Tag) -> bool {
        layout::id_is_descendant_of(self.id, ancestor.id)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.label, self.id)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({}#{:#x})", self.label, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: TagId, label: &str) -> Tag {
        Tag::new(id, label)
    }

    #[test]
    fn nonzero_id_is_valid() {
        assert!(tag(1, "root.Tag.A").is_valid());
    }

    #[test]
    fn zero_id_is_not_valid() {
        assert!(!Tag::default().is_valid());
        assert!(!Tag::root().is_valid());
    }

    #[test]
    fn equality_ignores_label() {
        let a = tag(1, "root.Tag.A");
        let b = tag(2, "root.Tag.B");
        let c = tag(1, "root.Tag.C");

        assert_ne!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.cmp(&c), Ordering::Equal);
    }

    #[test]
    fn invalid_tag_never_equals_valid_tag() {
        assert_ne!(Tag::default(), tag(1, "root.A"));
        assert_eq!(Tag::default(), Tag::root());
    }

    #[test]
    fn segments_and_display() {
        let m4 = tag(0x010101, "root.Weapon.Rifle.M4");
        assert_eq!(m4.last_segment(), "M4");
        assert_eq!(m4.display_label(), "Weapon.Rifle.M4");
        assert_eq!(m4.to_string(), "root.Weapon.Rifle.M4#65793");

        let root = Tag::root();
        assert_eq!(root.last_segment(), "root");
        assert_eq!(root.display_label(), "root");
    }

    #[test]
    fn display_label_only_strips_leading_marker() {
        let t = tag(0x0101, "root.Spawn.root.Point");
        assert_eq!(t.display_label(), "Spawn.root.Point");
    }

    #[test]
    fn hierarchy_helpers_follow_id() {
        let rifle = tag(0x0101, "root.Weapon.Rifle");
        let m4 = tag(0x010101, "root.Weapon.Rifle.M4");
        let smg = tag(0x0102, "root.Weapon.SMG");

        assert_eq!(m4.depth(), 3);
        assert_eq!(m4.parent_id(), Some(rifle.id()));
        assert_eq!(m4.byte_path().as_slice(), &[1, 1, 1]);
        assert!(m4.is_descendant_of(&rifle));
        assert!(!m4.is_descendant_of(&smg));
        assert!(m4.is_descendant_of(&Tag::root()));
    }

    #[test]
    fn serde_roundtrip_keeps_label() {
        let m4 = tag(0x010101, "root.Weapon.Rifle.M4");
        let json = serde_json::to_string(&m4).unwrap();
        assert_eq!(json, r#"{"id":65793,"label":"root.Weapon.Rifle.M4"}"#);

        let back: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m4);
        assert_eq!(back.label(), m4.label());
    }
}

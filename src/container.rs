//! `TagContainer`: per-owner stack counts keyed by tag.
//!
//! # Example
//!
//! ```
//! use gameplay_tags::{TagContainer, TagRegistry};
//!
//! let registry = TagRegistry::from_paths(["Status.Burning", "Status.Slowed"]).unwrap();
//! let burning = registry.lookup("Status.Burning");
//!
//! let mut tags = TagContainer::new();
//! tags.add_tag(&burning, 2);
//! tags.remove_tag(&burning, 1);
//! assert_eq!(tags.get_tag_count(&burning), 1);
//!
//! let status = registry.lookup("Status");
//! assert!(tags.has_descendant_of(&status));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Tag;

/// Multiset of tags: each present tag carries a stack count of at least 1.
///
/// Entries iterate in ascending identifier order. Invalid tags and
/// non-positive stack amounts are ignored rather than reported.
#[cfg_attr(feature = "bevy", derive(bevy::prelude::Component))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagContainer {
    tags: BTreeMap<Tag, u64>,
}

impl TagContainer {
    /// Create an empty tag container.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: add one stack of a tag and return self.
    #[inline]
    pub fn with(self, tag: &Tag) -> Self {
        self.with_stacks(tag, 1)
    }

    /// Builder method: add `stacks` of a tag and return self.
    #[inline]
    pub fn with_stacks(mut self, tag: &Tag, stacks: i32) -> Self {
        self.add_tag(tag, stacks);
        self
    }

    /// Add `stacks` of `tag`.
    ///
    /// No-op if the tag is invalid or `stacks <= 0`. Counts are `u64`, so
    /// `i32` deltas cannot realistically reach the saturation point.
    pub fn add_tag(&mut self, tag: &Tag, stacks: i32) {
        if !tag.is_valid() || stacks <= 0 {
            return;
        }
        let stacks = u64::from(stacks.unsigned_abs());
        self.tags
            .entry(tag.clone())
            .and_modify(|count| *count = count.saturating_add(stacks))
            .or_insert(stacks);
    }

    /// Remove `stacks` of `tag`; the entry disappears once no stacks remain.
    ///
    /// No-op if the tag is absent or `stacks <= 0`.
    pub fn remove_tag(&mut self, tag: &Tag, stacks: i32) {
        if stacks <= 0 {
            return;
        }
        let Some(count) = self.tags.get_mut(tag) else {
            return;
        };
        let stacks = u64::from(stacks.unsigned_abs());
        if *count <= stacks {
            self.tags.remove(tag);
        } else {
            *count -= stacks;
        }
    }

    /// Drop every stack of `tag`.
    #[inline]
    pub fn clear_tag(&mut self, tag: &Tag) {
        self.tags.remove(tag);
    }

    /// True if the tag has at least one stack.
    #[inline]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains_key(tag)
    }

    /// Stack count of `tag`, 0 when absent.
    #[inline]
    pub fn get_tag_count(&self, tag: &Tag) -> u64 {
        self.tags.get(tag).copied().unwrap_or(0)
    }

    /// Check if any tag in the container is `ancestor` or below it.
    ///
    /// O(n) in the number of distinct tags.
    pub fn has_descendant_of(&self, ancestor: &Tag) -> bool {
        self.tags.keys().any(|tag| tag.is_descendant_of(ancestor))
    }

    /// Entries at or below `ancestor`, in identifier order.
    pub fn descendants_of<'a>(
        &'a self,
        ancestor: &'a Tag,
    ) -> impl Iterator<Item = (&'a Tag, u64)> + 'a {
        self.iter()
            .filter(move |(tag, _)| tag.is_descendant_of(ancestor))
    }

    /// Total stacks held at or below `ancestor`.
    pub fn count_descendants_of(&self, ancestor: &Tag) -> u64 {
        self.descendants_of(ancestor)
            .fold(0u64, |total, (_, count)| total.saturating_add(count))
    }

    /// Iterate over `(tag, stacks)` in ascending identifier order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Tag, u64)> + '_ {
        self.tags.iter().map(|(tag, &count)| (tag, count))
    }

    /// Number of distinct tags.
    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Remove every tag.
    #[inline]
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    /// Multi-line debug listing; same as the `Display` output.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

/// ```text
/// TagSet{
///     root.Animal.Dog#257: 2,
///     root.Animal.Cat#258: 1
/// }
/// ```
impl fmt::Display for TagContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TagSet{\n")?;
        for (i, (tag, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",\n")?;
            }
            write!(f, "\t{tag}: {count}")?;
        }
        if !self.is_empty() {
            f.write_str("\n")?;
        }
        f.write_str("}")
    }
}

impl<'a> FromIterator<&'a Tag> for TagContainer {
    fn from_iter<T: IntoIterator<Item = &'a Tag>>(iter: T) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl<'a> Extend<&'a Tag> for TagContainer {
    fn extend<T: IntoIterator<Item = &'a Tag>>(&mut self, iter: T) {
        for tag in iter {
            self.add_tag(tag, 1);
        }
    }
}

impl<'a> Extend<(&'a Tag, i32)> for TagContainer {
    fn extend<T: IntoIterator<Item = (&'a Tag, i32)>>(&mut self, iter: T) {
        for (tag, stacks) in iter {
            self.add_tag(tag, stacks);
        }
    }
}

// =============================================================================
// Serde: an ordered sequence of (tag, stacks) pairs
// =============================================================================

impl Serialize for TagContainer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tags.iter())
    }
}

impl<'de> Deserialize<'de> for TagContainer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<(Tag, u64)>::deserialize(deserializer)?;
        let mut container = Self::new();
        for (tag, count) in entries {
            if !tag.is_valid() || count == 0 {
                continue;
            }
            let slot = container.tags.entry(tag).or_insert(0);
            *slot = slot.saturating_add(count);
        }
        Ok(container)
    }
}

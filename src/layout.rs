//! Identifier layout: one byte per tree level, parent-relative.
//!
//! A child's identifier is its parent's identifier shifted left by one byte,
//! with the child's 1-based sibling index in the freed low byte:
//!
//! ```text
//! child_id = (parent_id << 8) | sibling_index
//!
//! root                    0x00
//! Weapon                  0x01
//! Weapon.Rifle            0x01_01
//! Weapon.Rifle.M4         0x01_01_01
//! Weapon.Rifle.AK47       0x01_01_02
//! Weapon.SMG              0x01_02
//! ```
//!
//! Reading the significant bytes from most to least significant gives the
//! sibling index at every depth from the top down (the *byte path*). A tag is
//! an ancestor of another iff its byte path is a prefix of the other's, so
//! subtree checks are a shift and a compare with no registry lookup.
//!
//! Sibling indices are never zero, so the number of significant bytes is the
//! depth of the tag. The root owns identifier 0 and an empty byte path.

use std::fmt;
use std::ops::Deref;

use crate::error::TagError;
use crate::{ROOT_ID, TagId};

/// Bits consumed by one tree level.
pub const LEVEL_BITS: u32 = 8;

/// Width of a [`TagId`] in bytes.
pub const ID_BYTES: usize = size_of::<TagId>();

/// Maximum depth below the root (one byte per level).
pub const MAX_DEPTH: usize = ID_BYTES;

/// Maximum number of children per node (sibling indices 1..=255).
pub const MAX_SIBLINGS: usize = u8::MAX as usize;

const LEVEL_MASK: TagId = (1 << LEVEL_BITS) - 1;

const _: () = assert!(MAX_DEPTH as u32 * LEVEL_BITS == TagId::BITS);

// =============================================================================
// Standalone identifier operations (no registry needed)
// =============================================================================

/// Depth of an identifier: the number of significant bytes.
///
/// Exact bit-width inspection; `depth_of(0) == 0`.
#[inline]
pub const fn depth_of(id: TagId) -> u8 {
    let bits = TagId::BITS - id.leading_zeros();
    bits.div_ceil(LEVEL_BITS) as u8
}

/// Compute the identifier of the `sibling_index`-th child (1-based) of `parent`.
///
/// # Errors
///
/// - [`TagError::SiblingOverflow`] if `sibling_index` is outside `1..=255`
/// - [`TagError::DepthOverflow`] if `parent` already sits at [`MAX_DEPTH`]
pub fn child_id(parent: TagId, sibling_index: usize) -> Result<TagId, TagError> {
    if sibling_index == 0 || sibling_index > MAX_SIBLINGS {
        return Err(TagError::SiblingOverflow {
            parent: format!("#{parent:#x}"),
            max: MAX_SIBLINGS,
        });
    }
    let depth = depth_of(parent) as usize;
    if depth >= MAX_DEPTH {
        return Err(TagError::DepthOverflow {
            path: format!("#{parent:#x}"),
            depth: depth + 1,
            max: MAX_DEPTH,
        });
    }
    Ok((parent << LEVEL_BITS) | sibling_index as TagId)
}

/// Parent identifier, or `None` for the root.
#[inline]
pub const fn parent_id_of(id: TagId) -> Option<TagId> {
    if id == ROOT_ID {
        None
    } else {
        Some(id >> LEVEL_BITS)
    }
}

/// 1-based position of the tag among its siblings (0 for the root).
#[inline]
pub const fn sibling_index_of(id: TagId) -> u8 {
    (id & LEVEL_MASK) as u8
}

/// Is `candidate` a descendant of (or equal to) `ancestor`?
///
/// ```text
/// id_is_descendant_of(Weapon.Rifle.M4, Weapon) → true
/// id_is_descendant_of(Team.T, Weapon)          → false
/// ```
#[inline]
pub const fn id_is_descendant_of(candidate: TagId, ancestor: TagId) -> bool {
    if ancestor == ROOT_ID {
        return true;
    }
    let ancestor_depth = depth_of(ancestor);
    let candidate_depth = depth_of(candidate);
    if candidate_depth < ancestor_depth {
        return false;
    }
    let shift = (candidate_depth - ancestor_depth) as u32 * LEVEL_BITS;
    (candidate >> shift) == ancestor
}

/// Do `a` and `b` share the same parent (and are distinct non-root tags)?
#[inline]
pub const fn is_sibling(a: TagId, b: TagId) -> bool {
    a != b && a != ROOT_ID && b != ROOT_ID && (a >> LEVEL_BITS) == (b >> LEVEL_BITS)
}

/// Byte path of an identifier. See [`BytePath`].
#[inline]
pub const fn byte_path(id: TagId) -> BytePath {
    BytePath::from_id(id)
}

// =============================================================================
// BytePath
// =============================================================================

/// Big-endian significant bytes of an identifier: one sibling index per
/// level, top level first.
///
/// Stored inline; dereferences to `[u8]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BytePath {
    bytes: [u8; ID_BYTES],
    len: u8,
}

impl BytePath {
    /// Decompose `id`. Identifier 0 yields an empty path.
    pub const fn from_id(id: TagId) -> Self {
        let len = depth_of(id);
        let mut bytes = [0u8; ID_BYTES];
        let mut i = 0;
        while i < len as usize {
            let shift = (len as usize - 1 - i) as u32 * LEVEL_BITS;
            bytes[i] = ((id >> shift) & LEVEL_MASK) as u8;
            i += 1;
        }
        Self { bytes, len }
    }

    /// Reassemble the identifier.
    pub fn to_id(&self) -> TagId {
        self.as_slice()
            .iter()
            .fold(ROOT_ID, |id, &b| (id << LEVEL_BITS) | b as TagId)
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// True if this path is a prefix of (or equal to) `other`.
    #[inline]
    pub fn is_prefix_of(&self, other: &BytePath) -> bool {
        other.as_slice().starts_with(self.as_slice())
    }
}

impl Deref for BytePath {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for BytePath {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for BytePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl From<BytePath> for Vec<u8> {
    fn from(path: BytePath) -> Self {
        path.as_slice().to_vec()
    }
}

//! Conversions accepted wherever the API takes an identifier.

use crate::{Tag, TagId};

/// Anything that names a tag by identifier: a raw [`TagId`] or a [`Tag`].
pub trait IntoTagId {
    fn into_tag_id(self) -> TagId;
}

impl IntoTagId for TagId {
    #[inline]
    fn into_tag_id(self) -> TagId {
        self
    }
}

impl IntoTagId for &Tag {
    #[inline]
    fn into_tag_id(self) -> TagId {
        self.id()
    }
}

impl IntoTagId for Tag {
    #[inline]
    fn into_tag_id(self) -> TagId {
        self.id()
    }
}

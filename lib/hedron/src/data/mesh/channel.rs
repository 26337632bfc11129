use std::slice::ChunksExact;

use crate::{Attribute, AttributeComponent, AttributeComponentType, AttributeType};

/// Errors related to [Channels](Channel).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    #[error("channel range out of bounds: {offset} + {count} > {len} elements")]
    DestinationOverflow {
        offset: usize,
        count: usize,
        len: usize,
    },
    #[error("source range out of bounds: {offset} + {count} > {len} elements")]
    SourceOverflow {
        offset: usize,
        count: usize,
        len: usize,
    },
}

/// Fixed-capacity storage for one vertex attribute (or the index list) of a mesh.
///
/// A channel holds exactly [`len`](Channel::len) elements, each made of
/// `attr_type().size_elements()` components of type `C`. The capacity is fixed at construction;
/// data is written through [`map`](Channel::map) or [`fill_from`](Channel::fill_from).
#[derive(Debug, Clone, PartialEq)]
pub struct Channel<C> {
    ty: AttributeType,
    data: Box<[C]>,
}

impl<C: AttributeComponentType> Channel<C> {
    /// Construct a zero-filled channel of `len` elements.
    pub fn new(ty: AttributeType, len: usize) -> Self {
        Self {
            ty,
            data: vec![C::default(); len * ty.size_elements()].into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn attr_type(&self) -> AttributeType {
        self.ty
    }

    #[inline(always)]
    pub fn attr_component(&self) -> AttributeComponent {
        C::COMPONENT
    }

    /// Number of components making up one element.
    #[inline(always)]
    pub fn width(&self) -> usize {
        self.ty.size_elements()
    }

    /// Number of elements in this channel.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / self.width()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw components of every element, in order.
    #[inline]
    pub fn as_slice(&self) -> &[C] {
        &self.data
    }

    /// The components of the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&[C]> {
        let width = self.width();
        let start = index.checked_mul(width)?;
        self.data.get(start..start.checked_add(width)?)
    }

    /// The element at `index`, as a typed value.
    ///
    /// Returns `None` if `index` is out of range or if `A` doesn't have this channel's width.
    pub fn element<A: Attribute<Component = C>>(&self, index: usize) -> Option<A> {
        if A::TYPE != self.ty {
            return None;
        }
        self.get(index).map(A::from_components)
    }

    /// Iterate over the components of each element.
    #[inline]
    pub fn iter(&self) -> ChunksExact<'_, C> {
        self.data.chunks_exact(self.width())
    }

    /// Copy `count` elements from `src`, starting at element `src_offset`, into this channel,
    /// starting at element `dest_offset`.
    ///
    /// `src` is a flat component array laid out with this channel's width. Nothing is written if
    /// either range is out of bounds.
    pub fn map(
        &mut self,
        dest_offset: usize,
        count: usize,
        src: &[C],
        src_offset: usize,
    ) -> Result<(), ChannelError> {
        let width = self.width();
        let len = self.len();
        if dest_offset.checked_add(count).map_or(true, |end| end > len) {
            return Err(ChannelError::DestinationOverflow {
                offset: dest_offset,
                count,
                len,
            });
        }
        let src_len = src.len() / width;
        if src_offset.checked_add(count).map_or(true, |end| end > src_len) {
            return Err(ChannelError::SourceOverflow {
                offset: src_offset,
                count,
                len: src_len,
            });
        }
        let dest = dest_offset * width..(dest_offset + count) * width;
        let src = &src[src_offset * width..(src_offset + count) * width];
        self.data[dest].copy_from_slice(src);
        Ok(())
    }

    /// Copy as many whole elements of `src` as fit into this channel, starting at element 0.
    ///
    /// Returns the number of elements copied; elements past that are left untouched.
    pub fn fill_from(&mut self, src: &[C]) -> usize {
        let count = self.len().min(src.len() / self.width());
        let end = count * self.width();
        self.data[..end].copy_from_slice(&src[..end]);
        count
    }
}

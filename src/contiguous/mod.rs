// Copyright 2024 Gabriel Bjørnager Jensen.
//
// This file is part of contiguous.
//
// contiguous is free software: you can redistribute it
// and/or modify it under the terms of the GNU
// Lesser General Public License as published by
// the Free Software Foundation, either version 3
// of the License, or (at your option) any later
// version.
//
// contiguous is distributed in the hope that it will
// be useful, but WITHOUT ANY WARRANTY; without
// even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// Lesser General Public License for more details.
//
// You should have received a copy of the GNU Less-
// er General Public License along with contiguous. If
// not, see <https://www.gnu.org/licenses/>.

//! The typed handle tying a deserialised record to the buffer its dynamic arrays
//! resolve against.

use crate::buffer::Buffer;
use crate::dynamic::{ArrayView, Dynamic};
use crate::layout::Layout;

use core::marker::PhantomData;
use core::ptr;

/// A value of type `T` deserialised in place, paired with the [`Buffer`] that owns
/// both its own image and every dynamic array reachable from it.
///
/// `Contiguous<T>` is the handle returned by [`deserialize_in_place`] and
/// [`deserialize_copy`]; it is what lets a [`Dynamic<E>`] field be resolved into an
/// [`ArrayView`] without threading the backing buffer through every call that
/// touches `T`.
///
/// [`deserialize_in_place`]: crate::entry::deserialize_in_place
/// [`deserialize_copy`]: crate::entry::deserialize_copy
pub struct Contiguous<T: Layout> {
	buffer: Buffer,

	_marker: PhantomData<T>,
}

impl<T: Layout> Contiguous<T> {
	/// Pairs an already-populated buffer with the type it was sized and sliced for.
	///
	/// Callers within this crate must ensure that `buffer` was produced by a
	/// matching `size_tail`/`slice_tail` pass for `T`; this is upheld by
	/// [`deserialize_in_place`](crate::entry::deserialize_in_place) and
	/// [`deserialize_copy`](crate::entry::deserialize_copy), the only intended
	/// constructors.
	#[inline]
	#[must_use]
	pub(crate) const fn new(buffer: Buffer) -> Self { Self { buffer, _marker: PhantomData } }

	/// Pairs `buffer` with the type that will be deserialised into it, without
	/// requiring that it already hold a valid `T`.
	///
	/// This exists so a caller can build a destination handle ahead of a first
	/// [`deserialize_copy`](crate::deserialize_copy) call. `buffer`'s contents do
	/// not need to already be valid: every byte
	/// `deserialize_copy`/`deserialize_in_place` touch is fully overwritten (copied
	/// from the input, or zero-filled) before either returns successfully, and
	/// [`get`](Self::get)/[`resolve`](Self::resolve) should not be called on a
	/// handle built this way until after such a call has succeeded.
	#[inline]
	#[must_use]
	pub const fn from_buffer(buffer: Buffer) -> Self { Self::new(buffer) }

	/// Borrows the backing buffer.
	#[inline]
	#[must_use]
	pub const fn buffer(&self) -> &Buffer { &self.buffer }

	/// Mutably borrows the backing buffer.
	///
	/// Shrinking or otherwise corrupting the buffer's tail region will invalidate
	/// any [`Dynamic`] field still reachable from [`get`](Self::get); prefer
	/// [`buffer`](Self::buffer) unless you specifically need to mutate raw bytes.
	#[inline]
	#[must_use]
	pub fn buffer_mut(&mut self) -> &mut Buffer { &mut self.buffer }

	/// Consumes the handle, returning the backing buffer.
	#[inline]
	#[must_use]
	pub fn into_buffer(self) -> Buffer { self.buffer }

	/// Reads out the deserialised value of `T` by value.
	///
	/// `T`'s own inline image always starts at offset zero, regardless of whether
	/// `T` itself contains indirections -- only the *tail* bytes a `Dynamic` field
	/// points into live further into the buffer.
	#[must_use]
	pub fn get(&self) -> T {
		// SAFETY: the buffer's first `size_of::<T>()` bytes are `T`'s inline image,
		// established by the matching `size_tail`/`slice_tail` pass that produced
		// this handle; `read_unaligned` does not require the source to be aligned.
		unsafe { ptr::read_unaligned(self.buffer.as_ptr().cast::<T>()) }
	}

	/// Resolves a [`Dynamic<E>`] field previously read out of this handle's value
	/// against this handle's buffer.
	#[inline]
	#[must_use]
	pub fn resolve<E: Layout>(&self, field: Dynamic<E>) -> ArrayView<'_, E> {
		field.get(&self.buffer)
	}
}

impl<T: Layout + core::fmt::Debug> core::fmt::Debug for Contiguous<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
		f.debug_struct("Contiguous").field("value", &self.get()).finish_non_exhaustive()
	}
}

#[cfg(test)]
mod test;

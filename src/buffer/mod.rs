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

//! The owned, contiguous byte buffer that backs a deserialised value and every
//! [`Dynamic`](crate::Dynamic) field reachable from it.

use alloc::vec::Vec;

/// An owned, contiguous byte buffer.
///
/// A `Buffer` holds both a value's own inline image and the tail region appended
/// after it -- dynamic array payloads, and, for branched arrays, the materialised
/// slice headers. All of [`Contiguous<T>`](crate::Contiguous)'s [`Dynamic<E>`]
/// fields resolve against the same `Buffer`.
///
/// [`Dynamic<E>`]: crate::Dynamic
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Buffer {
	data: Vec<u8>,
}

impl Buffer {
	/// Takes ownership of `data` as-is, without resizing it.
	#[inline]
	#[must_use]
	pub const fn from_vec(data: Vec<u8>) -> Self { Self { data } }

	/// Copies `bytes` into a newly-allocated buffer.
	#[inline]
	#[must_use]
	pub fn copy_from_slice(bytes: &[u8]) -> Self { Self { data: bytes.to_vec() } }

	/// Consumes the buffer, returning the underlying storage.
	#[inline]
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> { self.data }

	/// The number of bytes currently held.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.data.len() }

	/// Returns `true` if the buffer holds no bytes.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.data.is_empty() }

	/// Borrows the buffer's contents.
	#[inline]
	#[must_use]
	pub fn as_slice(&self) -> &[u8] { &self.data }

	/// Mutably borrows the buffer's contents.
	#[inline]
	#[must_use]
	pub fn as_mut_slice(&mut self) -> &mut [u8] { &mut self.data }

	/// A raw pointer to the first byte.
	#[inline]
	#[must_use]
	pub fn as_ptr(&self) -> *const u8 { self.data.as_ptr() }

	/// A raw mutable pointer to the first byte.
	#[inline]
	#[must_use]
	pub fn as_mut_ptr(&mut self) -> *mut u8 { self.data.as_mut_ptr() }

	/// Grows the buffer to exactly `new_len` bytes, without zero-initialising the
	/// newly-added tail.
	///
	/// The tail region this uncovers is only ever *written* before it is read (the
	/// branching slicer fills every byte of the header region it reserves, and
	/// dynamic array payloads are always copied in before their bytes are exposed
	/// to callers), so leaving it uninitialised avoids a memset proportional to the
	/// size of every dynamic array's header region on every call.
	///
	/// Shrinks are rejected: callers only ever grow a freshly-sized buffer.
	///
	/// # Panics
	///
	/// Panics if `new_len < self.len()`.
	pub fn grow_uninit(&mut self, new_len: usize) {
		assert!(new_len >= self.data.len(), "Buffer::grow_uninit cannot shrink a buffer");

		let additional = new_len - self.data.len();
		self.data.reserve(additional);

		// SAFETY: `u8` has no validity invariant, so any bit pattern -- including
		// uninitialised memory -- is a valid `u8`. `reserve` above guarantees
		// capacity for `new_len` elements.
		unsafe {
			self.data.set_len(new_len);
		}
	}
}

impl From<Vec<u8>> for Buffer {
	#[inline]
	fn from(data: Vec<u8>) -> Self { Self::from_vec(data) }
}

impl From<Buffer> for Vec<u8> {
	#[inline]
	fn from(buffer: Buffer) -> Self { buffer.into_vec() }
}

impl AsRef<[u8]> for Buffer {
	#[inline]
	fn as_ref(&self) -> &[u8] { self.as_slice() }
}

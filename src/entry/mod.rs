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

//! The two public façades: in-place and copy deserialisation, plus the
//! `required_size` family that drives both.

use crate::buffer::Buffer;
use crate::contiguous::Contiguous;
use crate::error::{enforce_input_size, DeserializationError, Limits};
use crate::layout::Layout;

use core::cmp::min;
use core::mem::size_of;

/// Pass 1, run to completion: the number of bytes `input`'s inline image consumes,
/// accumulating bytes required for branched-array headers into `extra` rather than
/// returning them.
///
/// This is the two-arity form of the size calculator: it reports `data_len` alone,
/// letting a caller that already knows `extra_len` avoid recomputing it.
///
/// # Errors
///
/// Returns [`DeserializationError`] if `input` is shorter than `T`'s own image, or
/// if any nested `size_tail` call does (see [`Layout::size_tail`]).
pub fn required_size_with_extra<T: Layout>(
	input: &[u8],
	extra: &mut usize,
) -> Result<usize, DeserializationError> {
	tracing::trace!(type_name = T::TYPE_NAME, input_len = input.len(), "computing required size");
	required_size_tail::<T>(input, extra, Limits::default())
}

/// Like [`required_size`], but applying `limits` instead of [`Limits::default`].
///
/// # Errors
///
/// Returns [`DeserializationError`] under the same conditions as
/// [`required_size`], in addition to rejecting any dynamic array whose encoded
/// length exceeds `limits.max_length`.
pub fn required_size_with_limits<T: Layout>(
	input:  &[u8],
	limits: Limits,
) -> Result<usize, DeserializationError> {
	tracing::trace!(
		type_name  = T::TYPE_NAME,
		input_len  = input.len(),
		max_length = limits.max_length,
		"computing required size with limits",
	);

	let mut extra = 0usize;
	let data_len = required_size_tail::<T>(input, &mut extra, limits)?;

	Ok(data_len + extra)
}

/// Pass 1 (size calculator): returns `data_len + extra_len`, the total number of
/// bytes a buffer must hold to deserialise a `T` out of `input`.
///
/// This is the entry point [`deserialize_in_place`] and [`deserialize_copy`] use
/// internally; calling it ahead of time lets a caller pre-size a buffer exactly
/// once instead of relying on [`Buffer::grow_uninit`]'s own reservation.
///
/// # Errors
///
/// Returns [`DeserializationError::InputTooShort`] if `input` is shorter than
/// `size_of::<T>()`, than a dynamic array's length word, or than its element
/// payload. Returns [`DeserializationError::LengthExceeded`] if any dynamic
/// array's encoded length exceeds [`Limits::default`]'s ceiling.
pub fn required_size<T: Layout>(input: &[u8]) -> Result<usize, DeserializationError> {
	required_size_with_limits::<T>(input, Limits::default())
}

/// Shared core of the `required_size*` family: returns `data_len`, the bytes
/// `T`'s own image plus its tail consume, accumulating branched-header bytes into
/// `extra`.
fn required_size_tail<T: Layout>(
	input:  &[u8],
	extra:  &mut usize,
	limits: Limits,
) -> Result<usize, DeserializationError> {
	let header = size_of::<T>();
	enforce_input_size::<T>(input.len(), header)?;

	let tail = T::size_tail(&input[header..], extra, limits)?;

	Ok(header + tail)
}

/// In-place deserialisation: reconstructs a `T` from `buffer`'s own bytes,
/// growing it in place if its current length falls short of what `T` requires.
///
/// On success, the returned [`Contiguous<T>`]'s underlying buffer is the same
/// allocation as `buffer` -- its pointer is unchanged.
///
/// # Errors
///
/// Returns the originating [`DeserializationError`] together with `buffer`, handed
/// back so the caller may reuse or discard its allocation. The buffer may already
/// have been partially written by the failed call; treat it as undefined and either
/// discard it or overwrite it before reading from it again.
#[inline]
pub fn deserialize_in_place<T: Layout>(
	buffer: Buffer,
) -> Result<Contiguous<T>, (DeserializationError, Buffer)> {
	deserialize_in_place_with_limits(buffer, Limits::default())
}

/// Like [`deserialize_in_place`], but applying `limits` instead of
/// [`Limits::default`].
///
/// # Errors
///
/// See [`deserialize_in_place`].
pub fn deserialize_in_place_with_limits<T: Layout>(
	mut buffer: Buffer,
	limits:     Limits,
) -> Result<Contiguous<T>, (DeserializationError, Buffer)> {
	tracing::debug!(type_name = T::TYPE_NAME, buffer_len = buffer.len(), "deserialising in place");

	let mut extra = 0usize;

	let data_len = match required_size_tail::<T>(buffer.as_slice(), &mut extra, limits) {
		Ok(data_len) => data_len,
		Err(e) => {
			tracing::debug!(type_name = T::TYPE_NAME, error = %e, "in-place deserialisation failed sizing");
			return Err((e, buffer));
		}
	};

	let total = data_len + extra;

	if buffer.len() < total {
		buffer.grow_uninit(total);
	}

	let buf_base = buffer.as_mut_ptr();
	let self_ptr = buf_base.cast::<T>();

	let mut payload_pos = size_of::<T>();
	let mut header_pos  = data_len;

	// SAFETY: `buf_base` is valid for `total` bytes, of which `self_ptr` claims the
	// first `size_of::<T>()`; the cursors start exactly where the `size_tail` call
	// above assumed (just past `T`'s own image, and at the start of the header
	// region it sized).
	let result = unsafe { T::slice_tail(buf_base, self_ptr, &mut payload_pos, &mut header_pos) };

	match result {
		Ok(()) => Ok(Contiguous::new(buffer)),
		Err(e) => {
			tracing::debug!(type_name = T::TYPE_NAME, error = %e, "in-place deserialisation failed slicing");
			Err((e, buffer))
		}
	}
}

/// Copy deserialisation: reconstructs a `T` out of `input` into `destination`'s
/// buffer, growing that buffer if required and leaving `input` untouched.
///
/// `destination`'s buffer is first marked reusable without zero-initialisation
/// ([`Buffer::grow_uninit`]), then the first `min(input.len(), data_len + extra_len)`
/// bytes of `input` are copied in, and any remaining destination bytes are
/// zero-filled -- regardless of whether `destination` was already larger than the
/// required total, so a caller can never observe stale bytes left over from a
/// larger destination buffer.
///
/// # Errors
///
/// Returns the originating [`DeserializationError`] together with `destination`,
/// so the caller may reuse its allocation.
#[inline]
pub fn deserialize_copy<T: Layout>(
	input:       &[u8],
	destination: Contiguous<T>,
) -> Result<Contiguous<T>, (DeserializationError, Contiguous<T>)> {
	deserialize_copy_with_limits(input, destination, Limits::default())
}

/// Like [`deserialize_copy`], but applying `limits` instead of
/// [`Limits::default`].
///
/// # Errors
///
/// See [`deserialize_copy`].
pub fn deserialize_copy_with_limits<T: Layout>(
	input:           &[u8],
	mut destination: Contiguous<T>,
	limits:          Limits,
) -> Result<Contiguous<T>, (DeserializationError, Contiguous<T>)> {
	tracing::debug!(type_name = T::TYPE_NAME, input_len = input.len(), "deserialising by copy");

	let header = size_of::<T>();

	if let Err(e) = enforce_input_size::<T>(input.len(), header) {
		return Err((e, destination));
	}

	let mut extra = 0usize;

	let data_len = match required_size_tail::<T>(input, &mut extra, limits) {
		Ok(data_len) => data_len,
		Err(e) => {
			tracing::debug!(type_name = T::TYPE_NAME, error = %e, "copy deserialisation failed sizing");
			return Err((e, destination));
		}
	};

	let total = data_len + extra;

	let buffer = destination.buffer_mut();

	if buffer.len() < total {
		buffer.grow_uninit(total);
	}

	let copy_len = min(input.len(), total);

	buffer.as_mut_slice()[..copy_len].copy_from_slice(&input[..copy_len]);

	for byte in &mut buffer.as_mut_slice()[copy_len..] {
		*byte = 0;
	}

	let buf_base = buffer.as_mut_ptr();
	let self_ptr = buf_base.cast::<T>();

	let mut payload_pos = header;
	let mut header_pos  = data_len;

	// SAFETY: same reasoning as `deserialize_in_place_with_limits`: `buf_base` is
	// valid for at least `total` bytes, and the cursors match what `size_tail`
	// assumed.
	let result = unsafe { T::slice_tail(buf_base, self_ptr, &mut payload_pos, &mut header_pos) };

	match result {
		Ok(()) => Ok(destination),
		Err(e) => Err((e, destination)),
	}
}

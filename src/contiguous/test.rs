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

use crate::buffer::Buffer;
use crate::contiguous::Contiguous;
use crate::dynamic::Dynamic;
use crate::error::{DeserializationError, Limits};
use crate::layout::Layout;

#[test]
fn get_reads_back_a_trivial_scalar() {
	let buffer = Buffer::from_vec(7u32.to_ne_bytes().to_vec());
	let handle = Contiguous::<u32>::new(buffer);

	assert_eq!(handle.get(), 7);
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
struct Row {
	id:     u32,
	values: Dynamic<u32>,
}

// SAFETY: `id` carries no indirections; `values` is the sole source of them, and
// `size_tail`/`slice_tail` delegate to it exactly once, past `Row`'s own inline image.
unsafe impl Layout for Row {
	const HAS_INDIRECTIONS: bool = true;
	const TYPE_NAME: &'static str = "Row";

	fn size_tail(
		input:  &[u8],
		extra:  &mut usize,
		limits: Limits,
	) -> Result<usize, DeserializationError> {
		Dynamic::<u32>::size_tail(input, extra, limits)
	}

	unsafe fn slice_tail(
		buf_base:    *mut u8,
		self_ptr:    *mut Self,
		payload_pos: &mut usize,
		header_pos:  &mut usize,
	) -> Result<(), DeserializationError> {
		// SAFETY: `self_ptr` is valid for writes of `size_of::<Row>()` bytes, so the
		// `values` field is in bounds; cursors are forwarded unchanged.
		let field_ptr = unsafe { core::ptr::addr_of_mut!((*self_ptr).values) };

		// SAFETY: cursors remain within the bounds the matching `size_tail` call
		// established.
		unsafe { Dynamic::<u32>::slice_tail(buf_base, field_ptr, payload_pos, header_pos) }
	}
}

#[test]
fn resolve_reads_a_dynamic_field_through_the_handle() {
	let mut wire = 99u32.to_ne_bytes().to_vec();
	wire.extend(3u64.to_ne_bytes());
	wire.extend_from_slice(&1u32.to_ne_bytes());
	wire.extend_from_slice(&2u32.to_ne_bytes());
	wire.extend_from_slice(&3u32.to_ne_bytes());

	let inline_len = core::mem::size_of::<Row>();
	let mut extra = 0usize;
	let tail_len =
		Row::size_tail(&wire[inline_len..], &mut extra, Limits::default()).unwrap();

	let mut buffer = Buffer::from_vec(wire[..inline_len + tail_len].to_vec());
	buffer.grow_uninit(inline_len + tail_len + extra);

	let mut payload_pos = inline_len;
	let mut header_pos = inline_len + tail_len;

	let buf_base = buffer.as_mut_ptr();
	let row_ptr = buf_base.cast::<Row>();

	// SAFETY: `row_ptr` is valid for writes of `size_of::<Row>()` bytes (the buffer
	// holds at least that many), and the cursors start where the `size_tail` call
	// above assumed.
	unsafe {
		Row::slice_tail(buf_base, row_ptr, &mut payload_pos, &mut header_pos).unwrap();
	}

	let handle = Contiguous::<Row>::new(buffer);
	let row = handle.get();

	assert_eq!(row.id, 99);

	let view = handle.resolve(row.values);
	assert_eq!(view.iter().collect::<alloc::vec::Vec<u32>>(), alloc::vec![1, 2, 3]);
}

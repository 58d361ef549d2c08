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

use crate::error::Limits;
use crate::layout::Layout;

#[test]
fn scalars_have_no_indirections() {
	assert!(!u32::HAS_INDIRECTIONS);
	assert!(!f64::HAS_INDIRECTIONS);
	assert_eq!(u32::TYPE_NAME, "u32");
}

#[test]
fn scalar_size_tail_is_a_no_op() {
	let mut extra = 0usize;

	let consumed = u32::size_tail(&[], &mut extra, Limits::default()).unwrap();

	assert_eq!(consumed, 0);
	assert_eq!(extra, 0);
}

#[test]
fn scalar_slice_tail_is_a_no_op() {
	let mut value = 42u32;
	let mut payload_pos = 7usize;
	let mut header_pos = 11usize;

	// SAFETY: `&mut value` is valid for writes of `size_of::<u32>()` bytes, and a
	// scalar's `slice_tail` never dereferences `buf_base` or advances the cursors.
	unsafe {
		u32::slice_tail(core::ptr::null_mut(), &mut value, &mut payload_pos, &mut header_pos)
			.unwrap();
	}

	assert_eq!(value, 42);
	assert_eq!(payload_pos, 7);
	assert_eq!(header_pos, 11);
}

#[test]
fn static_array_of_indirection_free_elements_has_none_of_its_own() {
	assert!(!<[u32; 4] as Layout>::HAS_INDIRECTIONS);

	let mut extra = 0usize;
	let consumed = <[u32; 4]>::size_tail(&[], &mut extra, Limits::default()).unwrap();

	assert_eq!(consumed, 0);
	assert_eq!(extra, 0);
}

#[test]
fn static_array_type_name_is_its_elements() {
	assert_eq!(<[u16; 3] as Layout>::TYPE_NAME, "u16");
}

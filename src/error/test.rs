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

use crate::error::{enforce_input_size, enforce_size_limit, DeserializationError, Limits};

#[test]
fn default_limits_allow_any_length() {
	assert_eq!(Limits::default().max_length, u64::MAX);
}

#[test]
#[cfg(feature = "alloc")]
fn input_too_short_message_names_type_and_quantities() {
	use alloc::string::ToString;

	let err = enforce_input_size::<u32>(2, 4).unwrap_err();

	assert_eq!(
		err,
		DeserializationError::InputTooShort { type_name: "u32", len: 2, required: 4 },
	);

	let message = err.to_string();
	assert!(message.contains("u32"));
	assert!(message.contains('2'));
	assert!(message.contains('4'));
}

#[test]
fn sufficient_input_passes() {
	assert!(enforce_input_size::<u32>(4, 4).is_ok());
	assert!(enforce_input_size::<u32>(8, 4).is_ok());
}

#[test]
#[cfg(feature = "alloc")]
fn length_exceeded_message_names_type_and_quantities() {
	use alloc::string::ToString;

	let err = enforce_size_limit::<u32>(100, 10).unwrap_err();

	assert_eq!(
		err,
		DeserializationError::LengthExceeded { type_name: "u32", len: 100, max: 10 },
	);

	let message = err.to_string();
	assert!(message.contains("u32"));
	assert!(message.contains("100"));
	assert!(message.contains("10"));
}

#[test]
fn length_within_limit_passes() {
	assert!(enforce_size_limit::<u32>(10, 10).is_ok());
	assert!(enforce_size_limit::<u32>(0, 10).is_ok());
}

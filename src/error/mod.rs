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

//! Error and configuration types.

use core::fmt::{self, Display, Formatter};

/// Denotes a failure of the size calculator or branching slicer.
///
/// This is the crate's single error kind, carrying the context spec-ed out by the
/// original design's two guarded predicates rather than a single opaque message.
///
/// Per the crate's concurrency model, this is an ordinary owned value returned from
/// every fallible call -- there is no process-wide shared error instance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub enum DeserializationError {
	/// The input (or destination, for `required_size`'s own prefix check) was shorter
	/// than a record's declared image, or too short to hold a dynamic array's length
	/// word or element payload.
	InputTooShort {
		/// The name of the record or field type that required the bytes.
		type_name: &'static str,

		/// The number of bytes actually available.
		len: usize,

		/// The number of bytes required.
		required: usize,
	},

	/// A dynamic array's encoded length exceeded [`Limits::max_length`].
	LengthExceeded {
		/// The name of the record or field type whose array length was checked.
		type_name: &'static str,

		/// The encoded length.
		len: u64,

		/// The configured ceiling.
		max: u64,
	},
}

impl Display for DeserializationError {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match *self {
			Self::InputTooShort { type_name, len, required } => write!(
				f,
				"input data length ({len}) is less than required ({required}) for `{type_name}`",
			),

			Self::LengthExceeded { type_name, len, max } => write!(
				f,
				"length ({len}) exceeds limit ({max}) for `{type_name}`",
			),
		}
	}
}

impl core::error::Error for DeserializationError { }

/// Runtime configuration for a deserialisation call.
///
/// Currently the only knob is [`max_length`](Self::max_length), the hard ceiling
/// applied to every dynamic array's encoded length, at every nesting depth.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Limits {
	/// The largest length any single dynamic array may declare.
	pub max_length: u64,
}

impl Default for Limits {
	/// The default ceiling is the maximum value representable by the wire length word.
	#[inline]
	fn default() -> Self {
		Self { max_length: u64::MAX }
	}
}

/// Raises [`DeserializationError::InputTooShort`] if `len < required`.
#[inline]
pub(crate) fn enforce_input_size<T: crate::Layout>(
	len:      usize,
	required: usize,
) -> Result<(), DeserializationError> {
	if len < required {
		Err(DeserializationError::InputTooShort { type_name: T::TYPE_NAME, len, required })
	} else {
		Ok(())
	}
}

/// Raises [`DeserializationError::LengthExceeded`] if `len > max`.
#[inline]
pub(crate) fn enforce_size_limit<T: crate::Layout>(
	len: u64,
	max: u64,
) -> Result<(), DeserializationError> {
	if len > max {
		Err(DeserializationError::LengthExceeded { type_name: T::TYPE_NAME, len, max })
	} else {
		Ok(())
	}
}

#[cfg(test)]
mod test;

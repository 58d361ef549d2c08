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

//! contiguous deserialises a statically-typed record out of a single flat byte
//! buffer, such that the record and every array transitively reachable from it end
//! up living inside that one buffer.
//!
//! A matching serialiser (out of scope for this crate) is assumed to have produced
//! the input bytes: a record's own inline image, followed by a `<length><elements>`
//! block for each dynamic array encountered in declared-field order. No heap
//! allocation happens per field -- the routines here only ever grow the one backing
//! buffer, never allocate per array.
//!
//! # Data model
//!
//! A record implements [`Layout`], usually via `#[derive(Layout)]`. Fields are one
//! of:
//!
//! * a scalar, or a nested record composed (transitively) only of scalars,
//! * a static array `[E; N]`,
//! * a dynamic array [`Dynamic<E>`], resolved through a [`Buffer`] into an
//!   [`ArrayView`].
//!
//! The hard case is a *branched* array: a dynamic array whose element is itself a
//! dynamic array (or a record containing only dynamic arrays). Its element slice
//! headers do not exist on the wire and cannot be restored in place, since a
//! `Dynamic<E>` header is twice the size of the length word the wire actually
//! stores for it. Deserialising one therefore happens in two passes:
//!
//! 1. [`required_size`] walks the type against the input once, returning how many
//!    bytes the in-stream payload occupies (`data_len`) and how many additional
//!    bytes are needed to materialise branched headers (`extra_len`), accumulated
//!    separately.
//! 2. [`deserialize_in_place`]/[`deserialize_copy`] grow the destination to
//!    `data_len + extra_len`, then walk the type a second time, writing
//!    [`Dynamic`] headers into the payload region and bump-allocating branched
//!    headers out of the tail region reserved for them in step 1.
//!
//! # Usage
//!
//! ```
//! use contiguous::{deserialize_in_place, Buffer, Dynamic, Layout};
//!
//! #[derive(Clone, Copy, Debug, Layout)]
//! #[repr(C)]
//! struct Row {
//!     id:     u32,
//!     values: Dynamic<u32>,
//! }
//!
//! // `Row`'s own inline image (its `id` field plus `values`' ignored on-wire
//! // header, with whatever padding the platform inserts between them):
//! let mut wire = vec![0u8; std::mem::size_of::<Row>()];
//! wire[..4].copy_from_slice(&7u32.to_ne_bytes());
//!
//! // Followed by `values`' length-prefixed element data:
//! wire.extend(3u64.to_ne_bytes()); // length
//! wire.extend_from_slice(&1u32.to_ne_bytes());
//! wire.extend_from_slice(&2u32.to_ne_bytes());
//! wire.extend_from_slice(&3u32.to_ne_bytes());
//!
//! let handle = deserialize_in_place::<Row>(Buffer::from_vec(wire)).unwrap();
//! let row = handle.get();
//!
//! assert_eq!(row.id, 7);
//! assert_eq!(handle.resolve(row.values).iter().collect::<Vec<_>>(), [1, 2, 3]);
//! ```
//!
//! # Feature flags
//!
//! contiguous defines the following, default features:
//!
//! * `alloc`: enables [`Buffer`], [`Contiguous`], and the public entry points --
//!   everything that needs to own or grow a byte buffer.
//! * `derive`: pulls `#[derive(Layout)]` from the [`contiguous-macros`](contiguous_macros)
//!   crate.
//! * `std`: links `std` in addition to `alloc`. [`DeserializationError`] implements
//!   [`core::error::Error`] unconditionally, so this feature currently exists to let
//!   downstream crates opt into linking `std` explicitly rather than relying on
//!   `alloc` alone.
//!
//! # Copyright & Licence
//!
//! Copyright 2024 Gabriel Bjørnager Jensen.
//!
//! This program is free software: you can redistribute it and/or modify it under
//! the terms of the GNU Lesser General Public License as published by the Free
//! Software Foundation, either version 3 of the License, or (at your option) any
//! later version.
//!
//! This program is distributed in the hope that it will be useful, but WITHOUT ANY
//! WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
//! PARTICULAR PURPOSE. See the GNU Lesser General Public License for more details.
//!
//! You should have received a copy of the GNU Lesser General Public License along
//! with this program. If not, see <https://www.gnu.org/licenses/>.

#![no_std]

#![warn(missing_docs)]
#![cfg_attr(doc, allow(internal_features))]
#![cfg_attr(doc, feature(doc_cfg, rustdoc_internals))]

// For use in macros:
extern crate self as contiguous;

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

macro_rules! use_mod {
	($vis:vis $name:ident$(,)?) => {
		mod $name;
		$vis use $name::*;
	};
}
pub(crate) use use_mod;

use_mod!(pub error);
use_mod!(pub layout);

#[cfg(feature = "alloc")]
use_mod!(pub buffer);

#[cfg(feature = "alloc")]
use_mod!(pub dynamic);

#[cfg(feature = "alloc")]
use_mod!(pub contiguous);

#[cfg(feature = "alloc")]
use_mod!(pub entry);

/// Derives [`Layout`] for a `struct` with named or unnamed fields.
///
/// See the [`contiguous-macros`](contiguous_macros) crate for details.
#[cfg(feature = "derive")]
#[cfg_attr(doc, doc(cfg(feature = "derive")))]
#[doc(inline)]
pub use contiguous_macros::Layout;

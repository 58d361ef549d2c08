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

//! Procedural macros backing the `contiguous` crate.
//!
//! This crate implements `#[derive(Layout)]`, which generates the compile-time
//! type descriptor and the two-pass size/slice recursion for a record type.
//! It has no use outside of `contiguous` and is re-exported from there.

extern crate self as contiguous_macros;

macro_rules! use_mod {
	($vis:vis $name:ident) => {
		mod $name;
		$vis use $name::*;
	};
}
pub(crate) use use_mod;

use_mod!(fields);

mod impls;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives [`Layout`](https://docs.rs/contiguous/latest/contiguous/trait.Layout.html) for a
/// `struct` with named or unnamed fields.
///
/// Each field is visited in declaration order. Fields are required to be plain,
/// owned types -- a field written as a reference (`&T`/`&mut T`) is rejected at
/// compile time, standing in for the "reject-qualifier guard" of the original
/// design (Rust has no top-level immutability qualifier to mirror directly).
///
/// Unions and enumerations are not supported, matching the crate's non-goals.
#[proc_macro_derive(Layout)]
pub fn derive_layout(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	impls::derive_layout(input).into()
}

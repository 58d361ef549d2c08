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

use syn::{Field, Fields, Type};

/// A field together with the token stream used to name it on both sides of a pattern
/// (`self.foo` / `foo: Type`).
pub struct NamedField {
	pub ident: syn::Member,
	pub ty:    Type,
}

/// Flattens named and unnamed fields into a uniform, order-preserving list.
///
/// # Panics
///
/// Panics (as a compile error via `syn`) if a field carries a reference type --
/// the "reject-qualifier guard" mentioned in the crate's design notes.
#[must_use]
pub fn flatten_fields(fields: Fields) -> Vec<NamedField> {
	let reject_qualifier = |field: &Field| {
		if matches!(field.ty, Type::Reference(..)) {
			let name = field
				.ident
				.as_ref()
				.map_or_else(|| "<unnamed>".to_string(), ToString::to_string);

			panic!("field `{name}` cannot be a reference: `Layout` types must own their fields");
		}
	};

	match fields {
		Fields::Unit => Vec::new(),

		Fields::Unnamed(fields) => fields
			.unnamed
			.into_iter()
			.enumerate()
			.map(|(index, field)| {
				reject_qualifier(&field);

				NamedField { ident: syn::Member::Unnamed(index.into()), ty: field.ty }
			})
			.collect(),

		Fields::Named(fields) => fields
			.named
			.into_iter()
			.map(|field| {
				reject_qualifier(&field);

				let ident = field.ident.clone().expect("named field must have an identifier");

				NamedField { ident: syn::Member::Named(ident), ty: field.ty }
			})
			.collect(),
	}
}

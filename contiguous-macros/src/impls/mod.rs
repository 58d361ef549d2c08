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

use crate::flatten_fields;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Type};

/// Best-effort syntactic classification of a field's shape, used only to populate the
/// descriptor array (`Layout::FIELDS`) for introspection/diagnostics. The actual
/// deserialisation algorithm never consults this -- it dispatches purely through the
/// `Layout` trait, so a wrong guess here cannot affect correctness.
fn classify(ty: &Type) -> TokenStream {
	match ty {
		Type::Array(array) => {
			let len = &array.len;

			quote! { ::contiguous::FieldKind::StaticArray(#len) }
		}

		Type::Path(path) => {
			let is_dynamic = path
				.path
				.segments
				.last()
				.is_some_and(|segment| segment.ident == "Dynamic");

			if is_dynamic {
				quote! { ::contiguous::FieldKind::DynamicArray }
			} else {
				quote! { ::contiguous::FieldKind::Record }
			}
		}

		_ => quote! { ::contiguous::FieldKind::Record },
	}
}

#[must_use]
pub fn derive_layout(input: DeriveInput) -> TokenStream {
	let self_name = &input.ident;

	let data = match input.data {
		Data::Struct(data) => data,

		Data::Enum(..) => panic!("`Layout` cannot be derived for enumerations"),
		Data::Union(..) => panic!("`Layout` cannot be derived for unions"),
	};

	let fields = flatten_fields(data.fields);

	let field_idents: Vec<_> = fields.iter().map(|field| &field.ident).collect();
	let field_tys:    Vec<_> = fields.iter().map(|field| &field.ty).collect();

	let field_names: Vec<_> = field_idents
		.iter()
		.map(|ident| match ident {
			syn::Member::Named(ident) => ident.to_string(),
			syn::Member::Unnamed(index) => index.index.to_string(),
		})
		.collect();

	let field_kinds: Vec<_> = field_tys.iter().map(|ty| classify(ty)).collect();

	let generic_params = &input.generics.params;
	let generic_where  = &input.generics.where_clause;

	quote! {
		#[automatically_derived]
		unsafe impl<#generic_params> ::contiguous::Layout for #self_name<#generic_params>
		#generic_where
		{
			const HAS_INDIRECTIONS: bool = false #(
				|| <#field_tys as ::contiguous::Layout>::HAS_INDIRECTIONS
			)*;

			const TYPE_NAME: &'static str = ::core::stringify!(#self_name);

			const FIELDS: &'static [::contiguous::FieldDescriptor] = &[
				#(
					::contiguous::FieldDescriptor { name: #field_names, kind: #field_kinds },
				)*
			];

			#[inline]
			fn size_tail(
				input:  &[u8],
				extra:  &mut usize,
				limits: ::contiguous::Limits,
			) -> ::core::result::Result<usize, ::contiguous::DeserializationError> {
				let mut pos: usize = 0;

				#(
					if <#field_tys as ::contiguous::Layout>::HAS_INDIRECTIONS {
						pos += <#field_tys as ::contiguous::Layout>::size_tail(&input[pos..], extra, limits)?;
					}
				)*

				::core::result::Result::Ok(pos)
			}

			#[inline]
			unsafe fn slice_tail(
				buf_base:    *mut u8,
				self_ptr:    *mut Self,
				payload_pos: &mut usize,
				header_pos:  &mut usize,
			) -> ::core::result::Result<(), ::contiguous::DeserializationError> {
				#(
					if <#field_tys as ::contiguous::Layout>::HAS_INDIRECTIONS {
						let field_ptr = ::core::ptr::addr_of_mut!((*self_ptr).#field_idents);

						<#field_tys as ::contiguous::Layout>::slice_tail(
							buf_base,
							field_ptr,
							payload_pos,
							header_pos,
						)?;
					}
				)*

				::core::result::Result::Ok(())
			}
		}
	}
}

use proc_macro2::TokenStream;
use syn::ext::IdentExt;

use crate::attrs::parse_field_attributes;

struct Eligible<'a> {
    ident: &'a syn::Ident,
    ty: &'a syn::Type,
    order: Option<u32>,
}

pub fn derive(input: proc_macro::TokenStream) -> syn::Result<TokenStream> {
    let input = syn::parse::<syn::DeriveInput>(input)?;
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Record cannot be derived for generic types",
        ));
    }

    let data = match &input.data {
        syn::Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Record cannot be derived for unions",
            ))
        }
        syn::Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "Record cannot be derived for enums, derive `Ordinal` for field-less enums",
            ))
        }
        syn::Data::Struct(data) => data,
    };

    let fields = match &data.fields {
        syn::Fields::Named(fields) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                data.struct_token,
                "Record can be derived only for structures with named fields",
            ))
        }
    };

    let mut eligible = Vec::new();
    let mut skipped = Vec::new();
    let mut orders: Vec<u32> = Vec::new();

    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "field must be named"));
        };
        let attrs = parse_field_attributes(&field.attrs)?;

        if attrs.skip.is_some() {
            skipped.push(field_ident);
            continue;
        }

        let order = attrs.order_value()?;
        if let (Some(order), Some(lit)) = (order, &attrs.order) {
            if orders.contains(&order) {
                return Err(syn::Error::new_spanned(
                    lit,
                    "explicit order is used by more than one field",
                ));
            }
            orders.push(order);
        }

        eligible.push(Eligible {
            ident: field_ident,
            ty: &field.ty,
            order,
        });
    }

    if eligible.is_empty() {
        return Err(syn::Error::new_spanned(
            ident,
            "Record must have at least one field that is not skipped",
        ));
    }

    let count = eligible.len();
    let indices: Vec<usize> = (0..count).collect();
    let names: Vec<&syn::Ident> = eligible.iter().map(|field| field.ident).collect();
    let types: Vec<&syn::Type> = eligible.iter().map(|field| field.ty).collect();

    let descriptors = eligible.iter().map(|field| {
        let name = field.ident.unraw().to_string();
        let ty = field.ty;
        let order = match field.order {
            Some(order) => quote::quote!(::flatline::private::Some(#order)),
            None => quote::quote!(::flatline::private::None),
        };

        quote::quote! {
            ::flatline::private::Field {
                name: #name,
                order: #order,
                kind: <#ty as ::flatline::private::Element>::KIND,
            }
        }
    });

    let schema_name = ident.unraw().to_string();

    Ok(quote::quote! {
        impl #ident {
            #[doc(hidden)]
            const __FLATLINE_FIELDS: [::flatline::private::Field; #count] = [#(#descriptors,)*];

            #[doc(hidden)]
            const __FLATLINE_ORDER: [::core::primitive::usize; #count] =
                ::flatline::private::resolve_order(&Self::__FLATLINE_FIELDS);
        }

        impl ::flatline::private::Record for #ident {
            const SCHEMA: ::flatline::private::Schema = ::flatline::private::Schema::new(
                #schema_name,
                &Self::__FLATLINE_FIELDS,
                &Self::__FLATLINE_ORDER,
            );

            fn encode_field(
                &self,
                index: ::core::primitive::usize,
                encoder: &mut ::flatline::private::Encoder,
            ) {
                match index {
                    #(
                        #indices => ::flatline::private::Element::encode(&self.#names, encoder),
                    )*
                    _ => ::core::debug_assert!(false, "field index out of range"),
                }
            }

            fn decode_field(
                &mut self,
                index: ::core::primitive::usize,
                decoder: &mut ::flatline::private::Decoder<'_>,
            ) -> ::flatline::private::Result<(), ::flatline::private::DecodeError> {
                match index {
                    #(
                        #indices => self.#names = decoder.read::<#types>()?,
                    )*
                    _ => ::core::debug_assert!(false, "field index out of range"),
                }
                ::flatline::private::Ok(())
            }
        }

        impl ::flatline::private::Element for #ident {
            const KIND: ::flatline::private::Kind = ::flatline::private::Kind::Record(
                &<Self as ::flatline::private::Record>::SCHEMA,
            );

            #[inline]
            fn absent() -> Self {
                #ident {
                    #(
                        #names: <#types as ::flatline::private::Element>::absent(),
                    )*
                    #(
                        #skipped: ::flatline::private::Default::default(),
                    )*
                }
            }

            #[inline]
            fn encode(&self, encoder: &mut ::flatline::private::Encoder) {
                ::flatline::private::encode_record(self, encoder)
            }

            #[inline]
            fn decode(
                decoder: &mut ::flatline::private::Decoder<'_>,
            ) -> ::flatline::private::Result<Self, ::flatline::private::DecodeError> {
                ::flatline::private::decode_record(decoder)
            }
        }
    })
}

use proc_macro2::TokenStream;
use syn::ext::IdentExt;

pub fn derive(input: proc_macro::TokenStream) -> syn::Result<TokenStream> {
    let input = syn::parse::<syn::DeriveInput>(input)?;
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Ordinal cannot be derived for generic types",
        ));
    }

    let data = match &input.data {
        syn::Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Ordinal cannot be derived for unions",
            ))
        }
        syn::Data::Struct(data) => {
            return Err(syn::Error::new_spanned(
                data.struct_token,
                "Ordinal cannot be derived for structures, derive `Record` instead",
            ))
        }
        syn::Data::Enum(data) => data,
    };

    if let Some(variant) = data
        .variants
        .iter()
        .find(|variant| !matches!(variant.fields, syn::Fields::Unit))
    {
        return Err(syn::Error::new_spanned(
            &variant.fields,
            "Ordinal variants cannot have fields",
        ));
    }

    let variants: Vec<&syn::Ident> = data.variants.iter().map(|variant| &variant.ident).collect();
    let first = match variants.first() {
        Some(first) => *first,
        None => {
            return Err(syn::Error::new_spanned(
                ident,
                "Ordinal cannot be derived for enums without variants",
            ))
        }
    };

    let indices: Vec<usize> = (0..variants.len()).collect();
    let names: Vec<String> = variants
        .iter()
        .map(|variant| variant.unraw().to_string())
        .collect();

    Ok(quote::quote! {
        impl ::flatline::private::Ordinal for #ident {
            const VARIANTS: &'static [&'static str] = &[#(#names,)*];

            #[inline]
            fn ordinal(&self) -> ::core::primitive::usize {
                match self {
                    #(#ident::#variants => #indices,)*
                }
            }

            #[inline]
            fn from_ordinal(ordinal: ::core::primitive::usize) -> ::flatline::private::Option<Self> {
                match ordinal {
                    #(#indices => ::flatline::private::Some(#ident::#variants),)*
                    _ => ::flatline::private::None,
                }
            }
        }

        impl ::flatline::private::Element for #ident {
            const KIND: ::flatline::private::Kind =
                ::flatline::private::Kind::Enum(<Self as ::flatline::private::Ordinal>::VARIANTS);

            #[inline(always)]
            fn absent() -> Self {
                #ident::#first
            }

            #[inline]
            fn encode(&self, encoder: &mut ::flatline::private::Encoder) {
                ::flatline::private::encode_ordinal(self, encoder)
            }

            #[inline]
            fn decode(
                decoder: &mut ::flatline::private::Decoder<'_>,
            ) -> ::flatline::private::Result<Self, ::flatline::private::DecodeError> {
                ::flatline::private::decode_ordinal(decoder)
            }
        }
    })
}

//! `#[derive(Routable)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, GenericParam, parse_quote};

/// Options read from `#[routable(...)]` attributes.
#[derive(Default)]
struct RoutableArgs {
    yields: bool,
}

impl RoutableArgs {
    fn from_attributes(input: &DeriveInput) -> syn::Result<Self> {
        let mut args = RoutableArgs::default();

        for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("routable")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("yields") {
                    args.yields = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown routable option, expected `yields`"))
                }
            })?;
        }

        Ok(args)
    }
}

pub(crate) fn derive_routable_impl(mut input: DeriveInput) -> syn::Result<TokenStream> {
    let args = RoutableArgs::from_attributes(&input)?;
    let name = input.ident.clone();

    let type_params: Vec<_> = input
        .generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(param) => Some(param.ident.clone()),
            _ => None,
        })
        .collect();

    let where_clause = input.generics.make_where_clause();
    for param in &type_params {
        where_clause.predicates.push(parse_quote! {
            #param: ::core::cmp::PartialEq
                + ::core::fmt::Debug
                + ::core::marker::Send
                + ::core::marker::Sync
                + 'static
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Yielding types still implement `YieldsRoutable` themselves.
    let as_yielding = args.yields.then(|| {
        quote! {
            fn as_yielding(
                &self,
            ) -> ::core::option::Option<&dyn ::routeway::YieldsRoutable> {
                ::core::option::Option::Some(self)
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::routeway::Routable for #name #ty_generics #where_clause {
            #as_yielding
        }
    })
}

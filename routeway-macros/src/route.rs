//! Route-related macros.
//!
//! This module contains:
//! - `#[route]` - Attribute macro turning a function into a `Route`

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    FnArg, Ident, ItemFn, LitStr, ReturnType, Token, Type,
    parse::{Parse, ParseStream},
};

/// Arguments for the `#[route]` macro.
pub(crate) struct RouteArgs {
    pub name: Option<String>,
}

impl Parse for RouteArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    let lit: LitStr = input.parse()?;
                    name = Some(lit.value());
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(RouteArgs { name })
    }
}

/// Implementation of the `#[route]` macro.
pub(crate) fn route_impl(args: RouteArgs, input: ItemFn) -> syn::Result<TokenStream> {
    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;
    let fn_attrs = &input.attrs;

    if let Some(asyncness) = &input.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "Route functions must be synchronous",
        ));
    }

    if let ReturnType::Type(_, ty) = &input.sig.output {
        return Err(syn::Error::new_spanned(
            ty,
            "Route functions must not return a value",
        ));
    }

    let inputs = &input.sig.inputs;
    if inputs.len() != 1 {
        return Err(syn::Error::new_spanned(
            inputs,
            "Route function must take exactly one argument: fn(content: &Content)",
        ));
    }

    let (param_pat, param_type) = match inputs.first() {
        Some(FnArg::Typed(pat_type)) => match &*pat_type.ty {
            Type::Reference(type_ref) if type_ref.mutability.is_none() => {
                (&pat_type.pat, &type_ref.elem)
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    &pat_type.ty,
                    "Route argument must be a shared reference (&Content)",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                inputs,
                "Route function must take a content argument: fn(content: &Content)",
            ));
        }
    };

    let struct_name = match &args.name {
        Some(custom_name) => Ident::new(custom_name, fn_name.span()),
        None => fn_name.clone(),
    };

    Ok(quote! {
        #(#fn_attrs)*
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default)]
        #[doc = concat!("Route generated by `#[routeway::route]` on `", stringify!(#fn_name), "`")]
        #fn_vis struct #struct_name;

        impl ::routeway::Route for #struct_name {
            type Parameter = #param_type;

            fn route(&self, #param_pat: &#param_type) #fn_block
        }
    })
}

//! Derive macro implementation used by `mensura-core`.
//!
//! `mensura-derive` is an implementation detail of this workspace. The `Kind` derive expands in terms of
//! `crate::Kind`, `crate::QuantityKind` and `crate::Measure`, so it is intended to be used by `mensura-core` (or by
//! crates that expose an identical crate-root API).
//!
//! Most users should depend on `mensura` instead and use the predefined quantity kinds.
//!
//! # Generated items
//!
//! For a kind marker type `MyKind`, the derive emits:
//!
//! - a `static` descriptor of type `crate::QuantityKind`, named by the `descriptor` attribute
//! - `crate::Kind for MyKind`, whose `descriptor()` returns that static
//! - `core::fmt::Display for crate::Measure<MyKind>` (formats as `<amount> <standard symbol>`)
//!
//! # Attributes
//!
//! The derive reads a required `#[kind(...)]` attribute:
//!
//! - `name = "Length"`: display name (defaults to the type name)
//! - `descriptor = LENGTH`: identifier of the generated descriptor static
//! - `dimension = DimensionVector::LENGTH`: constant expression for the dimensional signature
//! - `unit = "m"`: symbol of the standard unit (may be empty for dimensionless kinds)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Kind`, the kind's descriptor static and a `Display` impl for `crate::Measure<ThisKind>`.
///
/// The derive must be paired with a `#[kind(...)]` attribute providing `descriptor`, `dimension` and `unit`.
///
/// This macro is intended for use by `mensura-core`.
#[proc_macro_derive(Kind, attributes(kind))]
pub fn derive_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_kind_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_kind_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let vis = &input.vis;

    let kind_attr = parse_kind_attribute(&input.attrs)?;

    let name = kind_attr
        .name
        .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));
    let descriptor = &kind_attr.descriptor;
    let dimension = &kind_attr.dimension;
    let unit = &kind_attr.unit;

    let doc = format!("Descriptor of the {} quantity kind.", name.value());

    let display_body = if unit.value().is_empty() {
        quote! { write!(f, "{}", self.amount()) }
    } else {
        quote! { write!(f, "{} {}", self.amount(), #unit) }
    };

    let expanded = quote! {
        #[doc = #doc]
        #vis static #descriptor: crate::QuantityKind = <#ident as crate::Kind>::KIND;

        impl crate::Kind for #ident {
            const KIND: crate::QuantityKind = crate::QuantityKind::new(#name, #dimension, #unit);

            #[inline]
            fn descriptor() -> &'static crate::QuantityKind {
                &#descriptor
            }
        }

        impl ::core::fmt::Display for crate::Measure<#ident> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #display_body
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[kind(...)]` attribute.
struct KindAttribute {
    name: Option<LitStr>,
    descriptor: Ident,
    dimension: Expr,
    unit: LitStr,
}

impl Parse for KindAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut descriptor: Option<Ident> = None;
        let mut dimension: Option<Expr> = None;
        let mut unit: Option<LitStr> = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match key.to_string().as_str() {
                "name" => name = Some(input.parse()?),
                "descriptor" => descriptor = Some(input.parse()?),
                "dimension" => dimension = Some(input.parse()?),
                "unit" => unit = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let descriptor = descriptor.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `descriptor`")
        })?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let unit = unit
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `unit`"))?;

        Ok(KindAttribute {
            name,
            descriptor,
            dimension,
            unit,
        })
    }
}

fn parse_kind_attribute(attrs: &[Attribute]) -> syn::Result<KindAttribute> {
    for attr in attrs {
        if attr.path().is_ident("kind") {
            return attr.parse_args::<KindAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[kind(...)] attribute",
    ))
}

//! Procedural macros for abi-codec.
//!
//! - `#[derive(Read, Write, EncodeSize)]` generates the record codec: every field in declaration
//!   order, with nothing else on the wire. Fields marked `#[codec(skip)]` are neither read nor
//!   written.
//! - `#[test_traced]` runs a test with a `tracing` subscriber that writes to the test output.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, parse_quote, spanned::Spanned, AttributeArgs, Data, DeriveInput, Field,
    Fields, GenericParam, Generics, Ident, Index, ItemFn, Lit, Meta, NestedMeta,
};

const LEVELS: [&str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

/// Derives `abi_codec::Read` for a struct.
///
/// Fields are decoded in declaration order, one nesting level below the record itself.
#[proc_macro_derive(Read, attributes(codec))]
pub fn derive_read(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_read(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Derives `abi_codec::Write` for a struct.
#[proc_macro_derive(Write, attributes(codec))]
pub fn derive_write(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_write(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Derives `abi_codec::EncodeSize` for a struct.
#[proc_macro_derive(EncodeSize, attributes(codec))]
pub fn derive_encode_size(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_encode_size(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Run a test function with a `tracing` subscriber installed.
///
/// Takes an optional `level` (`TRACE`, `DEBUG`, `INFO`, `WARN` or `ERROR`), defaulting to
/// `DEBUG`. Events are written through the test harness, so they are only shown for failing
/// tests (or with `--nocapture`). The crate using the attribute must depend on `tracing` and
/// `tracing-subscriber`.
///
/// # Example
/// ```rust,ignore
/// use abi_codec_macros::test_traced;
/// use tracing::{debug, info};
///
/// #[test_traced(level = "INFO")]
/// fn test_info_level() {
///     info!("shown");
///     debug!("filtered out");
/// }
/// ```
#[proc_macro_attribute]
pub fn test_traced(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as AttributeArgs);
    let input = parse_macro_input!(item as ItemFn);

    let level = match parse_level(&args) {
        Ok(level) => level,
        Err(err) => return err.to_compile_error().into(),
    };
    let level = format_ident!("{}", level);

    let name = &input.sig.ident;
    let output = &input.sig.output;
    let attrs = &input.attrs;
    let vis = &input.vis;
    let block = &input.block;

    let expanded = quote! {
        #[test]
        #(#attrs)*
        #vis fn #name() #output {
            let subscriber = ::tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(::tracing::Level::#level)
                .finish();
            ::tracing::subscriber::with_default(subscriber, || #block)
        }
    };
    TokenStream::from(expanded)
}

fn parse_level(args: &[NestedMeta]) -> Result<String, syn::Error> {
    let mut level = String::from("DEBUG");
    for arg in args {
        match arg {
            NestedMeta::Meta(Meta::NameValue(nv)) if nv.path.is_ident("level") => {
                let Lit::Str(lit) = &nv.lit else {
                    return Err(syn::Error::new(nv.lit.span(), "level must be a string"));
                };
                let value = lit.value().to_uppercase();
                if !LEVELS.contains(&value.as_str()) {
                    return Err(syn::Error::new(
                        lit.span(),
                        format!("invalid level `{}`, expected one of {:?}", value, LEVELS),
                    ));
                }
                level = value;
            }
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "unknown argument, expected `level = \"...\"`",
                ))
            }
        }
    }
    Ok(level)
}

/// Returns the `self.field` expressions of every field on the wire, in declaration order.
fn wire_fields(input: &DeriveInput) -> Result<Vec<TokenStream2>, syn::Error> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) => {
            return Err(syn::Error::new(
                input.ident.span(),
                "unsupported type: enums have no wire representation",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new(
                input.ident.span(),
                "unsupported type: unions have no wire representation",
            ))
        }
    };

    let mut out = Vec::new();
    match fields {
        Fields::Named(named) => {
            for field in &named.named {
                if is_skipped(field)? {
                    continue;
                }
                let ident = &field.ident;
                out.push(quote!(self.#ident));
            }
        }
        Fields::Unnamed(unnamed) => {
            for (i, field) in unnamed.unnamed.iter().enumerate() {
                if is_skipped(field)? {
                    continue;
                }
                let index = Index::from(i);
                out.push(quote!(self.#index));
            }
        }
        Fields::Unit => {}
    }
    Ok(out)
}

fn is_skipped(field: &Field) -> Result<bool, syn::Error> {
    let mut skip = false;
    for attr in &field.attrs {
        if !attr.path.is_ident("codec") {
            continue;
        }
        let arg: Ident = attr.parse_args()?;
        if arg != "skip" {
            return Err(syn::Error::new(
                arg.span(),
                format!("unknown codec attribute `{}`, expected `skip`", arg),
            ));
        }
        skip = true;
    }
    Ok(skip)
}

fn add_bounds(mut generics: Generics, bounds: &[TokenStream2]) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            for bound in bounds {
                ty.bounds.push(parse_quote!(#bound));
            }
        }
    }
    generics
}

fn expand_read(input: DeriveInput) -> Result<TokenStream2, syn::Error> {
    let fields = wire_fields(&input)?;
    let name = &input.ident;
    let generics = add_bounds(
        input.generics.clone(),
        &[quote!(::abi_codec::Read), quote!(::core::default::Default)],
    );
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body = if fields.is_empty() {
        quote! {
            let _ = decoder;
            ::core::result::Result::Ok(())
        }
    } else {
        quote! {
            decoder.nested(|decoder| {
                #( ::abi_codec::Read::read_into(&mut #fields, decoder)?; )*
                ::core::result::Result::Ok(())
            })
        }
    };

    Ok(quote! {
        impl #impl_generics ::abi_codec::Read for #name #ty_generics #where_clause {
            fn read_into(
                &mut self,
                decoder: &mut ::abi_codec::Decoder<'_>,
            ) -> ::core::result::Result<(), ::abi_codec::Error> {
                #body
            }
        }
    })
}

fn expand_write(input: DeriveInput) -> Result<TokenStream2, syn::Error> {
    let fields = wire_fields(&input)?;
    let name = &input.ident;
    let generics = add_bounds(input.generics.clone(), &[quote!(::abi_codec::Write)]);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::abi_codec::Write for #name #ty_generics #where_clause {
            fn write(
                &self,
                encoder: &mut ::abi_codec::Encoder,
            ) -> ::core::result::Result<(), ::abi_codec::Error> {
                let _ = &encoder;
                #( ::abi_codec::Write::write(&#fields, encoder)?; )*
                ::core::result::Result::Ok(())
            }
        }
    })
}

fn expand_encode_size(input: DeriveInput) -> Result<TokenStream2, syn::Error> {
    let fields = wire_fields(&input)?;
    let name = &input.ident;
    let generics = add_bounds(input.generics.clone(), &[quote!(::abi_codec::EncodeSize)]);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::abi_codec::EncodeSize for #name #ty_generics #where_clause {
            fn encode_size(&self) -> usize {
                0 #( + ::abi_codec::EncodeSize::encode_size(&#fields) )*
            }
        }
    })
}

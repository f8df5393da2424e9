use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod builder;
mod deref;
mod fields;

/// Forward `Deref`/`DerefMut` to the field marked with `#[deref]`.
#[proc_macro_derive(Deref, attributes(deref))]
pub fn deref(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    deref::macro_deref(input)
}

/// Generate `{Name}Builder` with one chainable setter per field.
///
/// * `#[default = expr]` overrides `Default::default()` for a field
#[proc_macro_derive(Builder, attributes(default))]
pub fn builder(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    builder::macro_builder(input)
}

/// Generate field readers.
///
/// * `#[r]` reader, `#[r(copy)]` returns by value, `#[r(vis(pub(crate)))]` overrides visibility
#[proc_macro_derive(Fields, attributes(r))]
pub fn fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    fields::macro_fields(input)
}

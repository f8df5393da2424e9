use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, Member};

pub fn macro_deref(input: DeriveInput) -> TokenStream {
    let ident = input.ident;
    let generics = input.generics;
    let Data::Struct(data) = input.data else {
        return syn::Error::new(ident.span(), "Deref can only be applied to structs")
            .into_compile_error()
            .into();
    };

    // a newtype `struct A(T)` derefs to its only field without an attribute
    let single_unnamed = matches!(&data.fields, Fields::Unnamed(fields) if fields.unnamed.len() == 1);

    let target = data
        .fields
        .iter()
        .enumerate()
        .find(|(_, field)| {
            single_unnamed || field.attrs.iter().any(|attr| attr.path().is_ident("deref"))
        })
        .map(|(i, field)| {
            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(Index::from(i)),
            };
            (member, field.ty.clone())
        });

    let Some((member, target_ty)) = target else {
        return syn::Error::new(
            ident.span(),
            "must set one deref field when use Deref macro",
        )
        .into_compile_error()
        .into();
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote!(
        impl #impl_generics core::ops::Deref for #ident #ty_generics #where_clause {
            type Target = #target_ty;
            fn deref(&self) -> &Self::Target {
                &self.#member
            }
        }

        impl #impl_generics core::ops::DerefMut for #ident #ty_generics #where_clause {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.#member
            }
        }
    )
    .into()
}

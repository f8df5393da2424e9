use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Ident, Meta};

fn default_expr(field: &Field) -> Option<syn::Expr> {
    field
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("default"))
        .and_then(|attr| match &attr.meta {
            Meta::Path(_) => None,
            Meta::NameValue(meta) => Some(meta.value.clone()),
            Meta::List(list) => list.parse_args().ok(),
        })
}

pub fn macro_builder(input: DeriveInput) -> TokenStream {
    let origin_ident = input.ident;
    let vis = input.vis;

    if !input.generics.params.is_empty() {
        return syn::Error::new(origin_ident.span(), "Builder doesn't support generic structs")
            .into_compile_error()
            .into();
    }

    let Data::Struct(data) = input.data else {
        return syn::Error::new(origin_ident.span(), "Builder can only be applied to structs")
            .into_compile_error()
            .into();
    };

    let ident = Ident::new(&format!("{}Builder", origin_ident), origin_ident.span());

    let mut fields = Vec::new();
    let mut default_fields = Vec::new();
    let mut build_fields = Vec::new();
    let mut property_methods = Vec::new();

    for field in data.fields.iter() {
        let field_ident = &field.ident;
        let ty = &field.ty;

        fields.push(quote!(#field_ident: #ty,));

        default_fields.push(match default_expr(field) {
            Some(expr) => quote!(#field_ident: #expr,),
            None => quote!(#field_ident: Default::default(),),
        });

        build_fields.push(quote!(#field_ident: value.#field_ident,));

        property_methods.push(quote!(
            pub fn #field_ident(mut self, value: impl Into<#ty>) -> Self {
                self.#field_ident = value.into();
                self
            }
        ));
    }

    quote!(
        #[derive(Clone, Debug)]
        #vis struct #ident {
            #(#fields)*
        }

        impl Default for #ident {
            fn default() -> Self {
                Self {
                    #(#default_fields)*
                }
            }
        }

        impl Default for #origin_ident {
            fn default() -> Self {
                #ident::default().build()
            }
        }

        impl From<#ident> for #origin_ident {
            fn from(value: #ident) -> Self {
                value.build()
            }
        }

        impl #ident {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn build(self) -> #origin_ident {
                let value = self;
                #origin_ident {
                    #(#build_fields)*
                }
            }

            #(#property_methods)*
        }
    )
    .into()
}

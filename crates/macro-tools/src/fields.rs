use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{parenthesized, Attribute, Data, DeriveInput, Type, Visibility};

// types read by value without `#[r(copy)]`
const COPY_TYPES: [&str; 16] = [
    "bool", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128",
    "isize", "f32", "f64", "FloatNum",
];

#[derive(Clone)]
struct ReadAttr {
    vis: Visibility,
    copy: bool,
}

fn find_attr<'a>(attrs: &'a [Attribute], ident: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(ident))
}

fn parse_read(attrs: &[Attribute], input_vis: &Visibility) -> syn::Result<Option<ReadAttr>> {
    let Some(attr) = find_attr(attrs, "r") else {
        return Ok(None);
    };
    let mut read = ReadAttr {
        vis: input_vis.clone(),
        copy: false,
    };
    if matches!(attr.meta, syn::Meta::List(_)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("vis") {
                let content;
                parenthesized!(content in meta.input);
                read.vis = content.parse()?;
            } else if meta.path.is_ident("copy") {
                read.copy = true;
            }
            Ok(())
        })?;
    }
    Ok(Some(read))
}

fn is_copy_type(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => {
            let t = path.into_token_stream().to_string();
            COPY_TYPES.iter().any(|copy_type| copy_type == &t)
        }
        _ => false,
    }
}

pub fn macro_fields(input: DeriveInput) -> TokenStream {
    expand(input).unwrap_or_else(|err| err.into_compile_error().into())
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let ident = input.ident;
    let input_vis = input.vis;

    let global_read = parse_read(&input.attrs, &input_vis)?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = input.data else {
        return Err(syn::Error::new(
            ident.span(),
            "Fields can only be applied to structs",
        ));
    };

    let mut methods = Vec::new();

    for field in data.fields.iter() {
        let Some(field_ident) = field.ident.clone() else {
            return Err(syn::Error::new(
                ident.span(),
                "Fields requires named fields",
            ));
        };
        let ty = &field.ty;

        let read = parse_read(&field.attrs, &input_vis)?.or_else(|| global_read.clone());

        if let Some(ReadAttr { vis, copy }) = read {
            methods.push(if copy || is_copy_type(ty) {
                quote!(
                    #vis fn #field_ident(&self) -> #ty {
                        self.#field_ident
                    }
                )
            } else {
                quote!(
                    #vis fn #field_ident(&self) -> &#ty {
                        &self.#field_ident
                    }
                )
            });
        }
    }

    Ok(quote!(
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    )
    .into())
}

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{parse_quote, Data, DeriveInput, Fields, Ident, Member};

use crate::common::{ContainerOpts, FieldOpts};

/// `#[derive(Render)]` for structs and enums.
pub fn expand_derive_render(input: DeriveInput) -> syn::Result<TokenStream2> {
    let opts = ContainerOpts::from_attrs(&input.attrs)?;
    let name = &input.ident;

    let body = match &input.data {
        Data::Struct(data) if opts.transparent => render_transparent(name, &data.fields)?,
        Data::Struct(data) => render_struct(name, &data.fields)?,
        Data::Enum(_) if opts.transparent => {
            return Err(syn::Error::new_spanned(
                name,
                "`#[render(transparent)]` is only supported on structs",
            ));
        }
        Data::Enum(data) if data.variants.is_empty() => quote! { match *self {} },
        Data::Enum(data) => {
            let arms = data
                .variants
                .iter()
                .map(|variant| render_variant(&variant.ident, &variant.fields))
                .collect::<syn::Result<Vec<_>>>()?;
            quote! {
                match self {
                    #(#arms)*
                }
            }
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input,
                "`Render` cannot be derived for unions",
            ));
        }
    };

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::tola_prims::Render));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::tola_prims::Render for #name #ty_generics #where_clause {
            fn render(&self, sink: &mut dyn ::tola_prims::TextSink) {
                #body
            }
        }
    })
}

// =============================================================================
// Shapes
// =============================================================================

/// A field that takes part in rendering: its label (named fields only) and
/// the expression yielding a reference to it.
struct Shown {
    label: Option<String>,
    value: TokenStream2,
}

fn render_struct(name: &Ident, fields: &Fields) -> syn::Result<TokenStream2> {
    let mut shown = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        if FieldOpts::from_field(field)?.skip {
            continue;
        }
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::from(index),
        };
        shown.push(Shown {
            label: field.ident.as_ref().map(ident_label),
            value: quote! { &self.#member },
        });
    }
    Ok(render_shape(&name.to_string(), fields, &shown))
}

fn render_transparent(name: &Ident, fields: &Fields) -> syn::Result<TokenStream2> {
    let mut kept = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        if !FieldOpts::from_field(field)?.skip {
            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::from(index),
            };
            kept.push(member);
        }
    }
    match kept.as_slice() {
        [member] => Ok(quote! {
            ::tola_prims::Render::render(&self.#member, &mut *sink);
        }),
        _ => Err(syn::Error::new_spanned(
            name,
            "`#[render(transparent)]` requires exactly one rendered field",
        )),
    }
}

fn render_variant(variant: &Ident, fields: &Fields) -> syn::Result<TokenStream2> {
    let mut patterns = Vec::new();
    let mut shown = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let skip = FieldOpts::from_field(field)?.skip;
        let binding = format_ident!("__field{}", index);
        let bind = if skip { quote! { _ } } else { quote! { #binding } };
        patterns.push(match &field.ident {
            Some(ident) => quote! { #ident: #bind },
            None => bind,
        });
        if !skip {
            shown.push(Shown {
                label: field.ident.as_ref().map(ident_label),
                value: quote! { #binding },
            });
        }
    }

    let pattern = match fields {
        Fields::Named(_) => quote! { Self::#variant { #(#patterns),* } },
        Fields::Unnamed(_) => quote! { Self::#variant ( #(#patterns),* ) },
        Fields::Unit => quote! { Self::#variant },
    };
    let body = render_shape(&variant.to_string(), fields, &shown);
    Ok(quote! {
        #pattern => { #body }
    })
}

/// Emit the sink calls for `Name { a: .., b: .. }`, `Name(.., ..)` or `Name`.
fn render_shape(name: &str, fields: &Fields, shown: &[Shown]) -> TokenStream2 {
    let (open, close) = match fields {
        Fields::Named(_) => (" { ", " }"),
        Fields::Unnamed(_) => ("(", ")"),
        Fields::Unit => ("", ""),
    };

    if shown.is_empty() {
        return put_str(name);
    }

    let mut stmts = vec![put_str(name), put_str(open)];
    for (i, field) in shown.iter().enumerate() {
        if i > 0 {
            stmts.push(put_str(", "));
        }
        if let Some(label) = &field.label {
            stmts.push(put_str(&format!("{label}: ")));
        }
        let value = &field.value;
        stmts.push(quote! {
            ::tola_prims::Render::render(#value, &mut *sink);
        });
    }
    stmts.push(put_str(close));
    quote! { #(#stmts)* }
}

fn put_str(text: &str) -> TokenStream2 {
    quote! { ::tola_prims::TextSink::put_str(&mut *sink, #text); }
}

/// Field label with any raw-identifier prefix removed.
fn ident_label(ident: &Ident) -> String {
    ident.unraw().to_string()
}

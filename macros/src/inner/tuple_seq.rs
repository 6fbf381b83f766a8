//! Tuple impls of `IntoFixedSeq`.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{parse::Parse, parse::ParseStream, LitInt};

pub struct TupleSeqInput {
    pub max: usize,
}

impl Parse for TupleSeqInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max == 0 {
            return Err(syn::Error::new(lit.span(), "maximum arity must be at least 1"));
        }
        Ok(TupleSeqInput { max })
    }
}

/// For arity k:
///
/// ```ignore
/// impl<CT, A0: Into<CT>, .., Ak: Into<CT>> IntoFixedSeq<CT> for (A0, .., Ak,) {
///     const LEN: usize = k;
///     type Output = [CT; k];
///     fn into_fixed_seq(self) -> [CT; k] {
///         let (a0, .., ak,) = self;
///         [a0.into(), .., ak.into()]
///     }
/// }
/// ```
pub fn expand_tuple_seq_impls(input: TupleSeqInput) -> TokenStream {
    let impls = (1..=input.max).map(|arity| {
        let params: Vec<_> = (0..arity).map(|i| format_ident!("A{}", i)).collect();
        let values: Vec<_> = (0..arity).map(|i| format_ident!("a{}", i)).collect();
        let len = LitInt::new(&arity.to_string(), Span::call_site());

        quote! {
            impl<CT, #(#params: ::core::convert::Into<CT>),*> IntoFixedSeq<CT> for (#(#params,)*) {
                const LEN: usize = #len;
                type Output = [CT; #len];

                #[inline]
                fn into_fixed_seq(self) -> [CT; #len] {
                    let (#(#values,)*) = self;
                    [#(::core::convert::Into::<CT>::into(#values)),*]
                }
            }
        }
    });

    quote! { #(#impls)* }
}

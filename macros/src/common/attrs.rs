//! `#[render(...)]` attribute parsing.

use syn::{Attribute, Field};

/// Options on the deriving type.
#[derive(Default)]
pub struct ContainerOpts {
    pub transparent: bool,
}

/// Options on a single field.
#[derive(Default)]
pub struct FieldOpts {
    pub skip: bool,
}

impl ContainerOpts {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut opts = ContainerOpts::default();
        for attr in render_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("transparent") {
                    opts.transparent = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown container option, expected `transparent`"))
                }
            })?;
        }
        Ok(opts)
    }
}

impl FieldOpts {
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut opts = FieldOpts::default();
        for attr in render_attrs(&field.attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    opts.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown field option, expected `skip`"))
                }
            })?;
        }
        Ok(opts)
    }
}

fn render_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("render"))
}

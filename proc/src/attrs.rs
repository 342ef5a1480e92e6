pub struct FieldAttrs {
    pub order: Option<syn::LitInt>,
    pub skip: Option<syn::Ident>,
}

impl FieldAttrs {
    pub fn order_value(&self) -> syn::Result<Option<u32>> {
        match &self.order {
            None => Ok(None),
            Some(lit) => lit.base10_parse().map(Some),
        }
    }
}

pub fn parse_field_attributes(attrs: &[syn::Attribute]) -> syn::Result<FieldAttrs> {
    let mut order: Option<syn::LitInt> = None;
    let mut skip: Option<syn::Ident> = None;

    for attr in attrs {
        if !attr.path().is_ident("flatline") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("order") {
                let lit: syn::LitInt = meta.value()?.parse()?;
                if order.is_some() {
                    return Err(syn::Error::new_spanned(lit, "`order` is specified twice"));
                }
                order = Some(lit);
                Ok(())
            } else if meta.path.is_ident("skip") {
                if skip.is_some() {
                    return Err(meta.error("`skip` is specified twice"));
                }
                skip = meta.path.get_ident().cloned();
                Ok(())
            } else {
                Err(meta.error("expected `order = N` or `skip`"))
            }
        })?;
    }

    if let (Some(lit), Some(_)) = (&order, &skip) {
        return Err(syn::Error::new_spanned(
            lit,
            "skipped field cannot have explicit order",
        ));
    }

    Ok(FieldAttrs { order, skip })
}

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Field, Ident, ItemFn};

/// Generates a `<Name>Patch` struct with one `PatchValue` per field that is
/// not marked `#[no_patch]`.
#[proc_macro_derive(Patch, attributes(no_patch))]
pub fn derive_patch(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let vis = input.vis;
    let ident = input.ident;
    let patch_ident = Ident::new(&format!("{ident}Patch"), ident.span());

    let syn::Data::Struct(data) = input.data else {
        return quote! { ::core::compile_error!("Patch can only be derived for structs"); }.into();
    };

    let syn::Fields::Named(fields) = data.fields else {
        return quote! { ::core::compile_error!("Patch can only be derived for structs with named fields"); }.into();
    };

    fn is_no_patch(field: &Field) -> bool {
        field
            .attrs
            .iter()
            .any(|x| x.path().get_ident().is_some_and(|x| x == "no_patch"))
    }

    let patched = fields
        .named
        .iter()
        .filter(|x| !is_no_patch(x))
        .collect::<Vec<_>>();

    let patch_fields = patched.iter().map(|field| {
        let vis = &field.vis;
        let ident = &field.ident;
        let ty = &field.ty;
        quote! { #vis #ident: ::jobboard_utils::patch::PatchValue<#ty> }
    });

    let apply_fields = fields.named.iter().map(|field| {
        let ident = &field.ident;
        if is_no_patch(field) {
            quote! { #ident: self.#ident }
        } else {
            quote! { #ident: patch.#ident.update(self.#ident) }
        }
    });

    let builder_methods = patched.iter().map(|field| {
        let ident = field.ident.as_ref().unwrap();
        let update_ident = Ident::new(&format!("update_{ident}"), ident.span());
        let ty = &field.ty;
        quote! {
            #vis fn #update_ident(mut self, #ident: #ty) -> Self {
                self.#ident = ::jobboard_utils::patch::PatchValue::Update(#ident);
                self
            }
        }
    });

    let minimize_fields = patched.iter().map(|field| {
        let ident = &field.ident;
        quote! { #ident: self.#ident.minimize(&current.#ident) }
    });

    let is_update_fields = patched.iter().map(|field| {
        let ident = &field.ident;
        quote! { || self.#ident.is_update() }
    });

    quote! {
        #[derive(::core::fmt::Debug, ::core::clone::Clone, ::core::default::Default, ::core::cmp::PartialEq)]
        #vis struct #patch_ident {
            #(#patch_fields),*
        }

        impl ::jobboard_utils::patch::Patch for #ident {
            type Patch = #patch_ident;

            fn update(self, patch: Self::Patch) -> Self {
                Self { #(#apply_fields),* }
            }
        }

        impl #patch_ident {
            #vis fn new() -> Self {
                Self::default()
            }

            #(#builder_methods)*

            /// Drops every update that would not change `current`.
            #vis fn minimize(self, current: &#ident) -> Self {
                Self { #(#minimize_fields),* }
            }

            #vis fn is_update(&self) -> bool {
                false #(#is_update_fields)*
            }

            #vis fn is_unchanged(&self) -> bool {
                !self.is_update()
            }
        }
    }
    .into()
}

#[proc_macro_attribute]
pub fn trace_instrument(meta: TokenStream, input: TokenStream) -> TokenStream {
    let meta = proc_macro2::TokenStream::from(meta);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(input as ItemFn);

    quote! {
        #[::tracing::instrument(ret(level = "trace"), #meta)]
        #(#attrs)*
        #vis #sig {
            ::tracing::trace!("call");
            #block
        }
    }
    .into()
}

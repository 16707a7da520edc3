/// Declares a provider struct and a `new` constructor taking its root values.
///
/// Every root field's type can be built from the provider by cloning it.
/// Types listed in a `..field: Base { ... }` block are delegated to the
/// nested provider stored in `field`.
#[macro_export]
macro_rules! provider {
    ($(#[doc=$doc:literal])* $vis:vis $ident:ident {
        $( $field:ident: $ty:ty, )*
        $( .. $nested:ident: $base:ty { $($delegated:ty,)* $(,)? } )*
    }) => {
        $(#[doc=$doc])*
        $vis struct $ident {
            built: $crate::BuildCache,
            $( $field: $ty, )*
            $( $nested: $base, )*
        }

        impl $ident {
            $vis fn new($( $field: $ty, )* $( $nested: $base, )*) -> Self {
                Self {
                    built: ::core::default::Default::default(),
                    $( $field, )*
                    $( $nested, )*
                }
            }
        }

        impl $crate::Provider for $ident {
            fn cache(&mut self) -> &mut $crate::BuildCache {
                &mut self.built
            }
        }

        $(
            impl $crate::Build<$ident> for $ty {
                fn build(provider: &mut $ident) -> Self {
                    ::core::clone::Clone::clone(&provider.$field)
                }
            }
        )*

        $($(
            impl $crate::Build<$ident> for $delegated {
                fn build(provider: &mut $ident) -> Self {
                    $crate::Provide::provide(&mut provider.$nested)
                }
            }
        )*)*
    };
}

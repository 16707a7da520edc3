pub use jobboard_di_derive::Build;
pub use cache::BuildCache;

mod cache;
mod macros;

/// A source of already constructed values, used to resolve the dependencies
/// of types implementing [`Build`].
pub trait Provider: Sized {
    /// Values built so far. Each type is built at most once per provider.
    fn cache(&mut self) -> &mut BuildCache;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}

//! Minimal compile-time dependency injection.
//!
//! A [`Provider`] owns the leaf dependencies of the application (config
//! values, connections, clients). Every other service derives [`Build`] and is
//! assembled from the provider on demand. Built values are cached by type, so
//! each service is constructed at most once per provider.

extern crate self as elevate_di;

pub use elevate_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provides: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provides for P {}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct Greeting(&'static str);

    #[derive(Debug, Clone, Default)]
    struct Counter(Arc<AtomicUsize>);

    #[derive(Debug, Clone, Build)]
    struct Greeter {
        greeting: Greeting,
        #[state]
        counter: Counter,
    }

    crate::provider! {
        TestProvider {
            greeting: Greeting,
        }
    }

    #[test]
    fn build_from_provider() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            greeting: Greeting("hello"),
        };

        let greeter: Greeter = provider.provide();

        assert_eq!(greeter.greeting.0, "hello");
    }

    #[test]
    fn built_values_are_cached() {
        let mut provider = TestProvider {
            _cache: Default::default(),
            greeting: Greeting("hello"),
        };

        let a: Greeter = provider.provide();
        a.counter.0.fetch_add(1, Ordering::Relaxed);
        let b: Greeter = provider.provide();

        assert_eq!(b.counter.0.load(Ordering::Relaxed), 1);
    }
}

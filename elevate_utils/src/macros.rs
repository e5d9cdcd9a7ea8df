/// Asserts that an expression matches a pattern, with an optional guard,
/// printing the value otherwise.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
        match $expr {
            $pat $(if $guard)? => {}
            val => ::core::panic!(
                "{} does not match {}: {val:?}",
                ::core::stringify!($expr),
                ::core::stringify!($pat $(if $guard)?),
            ),
        }
    };
}

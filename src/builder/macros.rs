//! Macros for ergonomic state declaration.

/// Declare a closed enum of states, each bound to a behavior function.
///
/// Every handler has the signature `fn(&mut Next<Enum>)`. The generated
/// enum derives `Clone`, `Copy`, `PartialEq`, `Eq` and `Debug`, and its
/// `State::name` is the variant name.
///
/// # Example
///
/// ```
/// use stateful_loop::core::{Next, State};
/// use stateful_loop::state_enum;
///
/// state_enum! {
///     pub enum Beacon {
///         Dark => dark,
///         Flash => flash,
///     }
/// }
///
/// fn dark(next: &mut Next<Beacon>) {
///     next.after(Beacon::Flash, 900);
/// }
///
/// fn flash(next: &mut Next<Beacon>) {
///     next.after(Beacon::Dark, 100);
/// }
///
/// assert_eq!(Beacon::Flash.name(), "Flash");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $handler:path
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn run(&self, next: &mut $crate::core::Next<Self>) {
                match self {
                    $(Self::$variant => $handler(next)),*
                }
            }
        }
    };
}

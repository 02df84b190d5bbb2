//! Macros for ergonomic identifier declarations.

/// Declare an identifier enum usable as a machine state or event type.
///
/// Expands to a plain enum with the derives the [`crate::State`] and
/// [`crate::Event`] traits expect (`Clone`, `Copy`, `PartialEq`, `Eq`,
/// `Hash`, `Debug`).
///
/// # Example
///
/// ```
/// use switchboard::id_enum;
///
/// id_enum! {
///     pub enum Phase {
///         Begin,
///         Middle,
///         End,
///     }
/// }
///
/// id_enum! {
///     enum Signal {
///         SetupDone,
///         WorkComplete,
///     }
/// }
///
/// assert_ne!(Phase::Begin, Phase::End);
/// ```
#[macro_export]
macro_rules! id_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }
    };
}

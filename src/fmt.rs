//! Diagnostic logging shim.
//!
//! The host link has no error channel, so anomalies are reported through
//! `defmt` when the `defmt` feature is enabled. Without it, `diag!` still
//! borrows its arguments (keeping builds warning-free) but emits nothing.

macro_rules! diag {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        {
            $( let _ = &$arg; )*
        }
    }};
}

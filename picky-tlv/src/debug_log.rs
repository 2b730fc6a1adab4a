//! `debug_log!` traces decoding decisions when the `debug_log` feature is enabled.
//!
//! The macro is exported (hidden) so that crates built on top of this one share
//! the same switch: enabling `picky-tlv/debug_log` turns tracing on everywhere.

#[cfg(not(feature = "debug_log"))]
#[doc(hidden)]
#[macro_export]
macro_rules! debug_log {
    () => {};
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug_log")]
#[doc(hidden)]
#[macro_export]
macro_rules! debug_log {
    () => {
        $crate::__private::tracing::debug!("| debug |")
    };
    ($($arg:tt)*) => {
        $crate::__private::tracing::debug!($($arg)*)
    };
}

//! Provides macros used to conditionally compile code dependent on the `tracing` feature.

/// Emits an event describing a call to a builtin function. Without the `tracing` feature, the
/// arguments are only evaluated.
#[macro_export]
#[doc(hidden)]
macro_rules! builtin_event {
    ($level:ident, $function:expr, $message:literal $(, $field:ident = $value:expr)*) => {
        #[cfg(feature = "tracing")]
        tracing::$level!(
            target: "simdjs::builtins",
            simd_type = %$function.simd_type(),
            builtin = %$function.name(),
            $($field = %$value,)*
            $message
        );

        #[cfg(not(feature = "tracing"))]
        let _ = (&$function, $(&$value,)*);
    };
}

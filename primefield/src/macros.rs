//! Macros for field element types.

/// Emit `core::ops` wrappers over references for an inherent arithmetic method.
///
/// Only `&T op &T` is implemented: field elements are heap-backed and not `Copy`, so by-value
/// operands would silently move out of their bindings.
#[macro_export]
macro_rules! field_op {
    ($fe:path, $op:tt, $func:ident, $inner_func:ident) => {
        impl ::core::ops::$op<&$fe> for &$fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: &$fe) -> $fe {
                <$fe>::$inner_func(self, rhs)
            }
        }
    };
}

/// Implement `Add`, `Sub`, `Mul` and `Neg` over references for a field element type with
/// inherent `add`, `subtract`, `multiply` and `negate` methods.
#[macro_export]
macro_rules! impl_field_ops {
    ($fe:path) => {
        $crate::field_op!($fe, Add, add, add);
        $crate::field_op!($fe, Sub, sub, subtract);
        $crate::field_op!($fe, Mul, mul, multiply);

        impl ::core::ops::Neg for &$fe {
            type Output = $fe;

            #[inline]
            fn neg(self) -> $fe {
                <$fe>::negate(self)
            }
        }
    };
}

//! Operator forwarding shared by the polynomial types.

/// Implements a `std::ops` binary operator for owned and borrowed operands
/// by forwarding to the type's inherent `fn(&self, &Self) -> Self`.
macro_rules! forward_binop {
    ($ty:ty, $trait:ident, $method:ident) => {
        impl std::ops::$trait for $ty {
            type Output = $ty;

            fn $method(self, rhs: Self) -> Self::Output {
                <$ty>::$method(&self, &rhs)
            }
        }

        impl std::ops::$trait<&$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> Self::Output {
                <$ty>::$method(&self, rhs)
            }
        }

        impl std::ops::$trait for &$ty {
            type Output = $ty;

            fn $method(self, rhs: Self) -> Self::Output {
                <$ty>::$method(self, rhs)
            }
        }
    };
}

/// Implements `Neg` for owned and borrowed operands via `minus`.
macro_rules! forward_neg {
    ($ty:ty) => {
        impl std::ops::Neg for $ty {
            type Output = $ty;

            fn neg(self) -> Self::Output {
                self.minus()
            }
        }

        impl std::ops::Neg for &$ty {
            type Output = $ty;

            fn neg(self) -> Self::Output {
                self.minus()
            }
        }
    };
}

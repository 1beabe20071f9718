//! Utility macros for implementing operators and comparison traits.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements the arithmetic shared by every component-wise vector type:
/// addition, subtraction, scaling (from both sides), negation, their
/// assigning forms and division by a scalar. Division forwards to the
/// fallible `div_scalar` and panics with its error message.
macro_rules! impl_vector_arithmetic {
    ($t:ty) => {
        impl_binop!(Add, add, $t, $t, $t, |a, b| { <$t>::wrap(a.inner + b.inner) });

        impl_binop!(Sub, sub, $t, $t, $t, |a, b| { <$t>::wrap(a.inner - b.inner) });

        impl_binop!(Mul, mul, $t, f32, $t, |a, b| { <$t>::wrap(a.inner * *b) });

        impl_binop!(Mul, mul, f32, $t, $t, |a, b| { <$t>::wrap(b.inner * *a) });

        impl_binop!(Div, div, $t, f32, $t, |a, b| {
            match a.div_scalar(*b) {
                Ok(quotient) => quotient,
                Err(err) => panic!("{err}"),
            }
        });

        impl_binop_assign!(AddAssign, add_assign, $t, $t, |a, b| {
            a.inner += b.inner;
        });

        impl_binop_assign!(SubAssign, sub_assign, $t, $t, |a, b| {
            a.inner -= b.inner;
        });

        impl_binop_assign!(MulAssign, mul_assign, $t, f32, |a, b| {
            a.inner *= *b;
        });

        impl_binop_assign!(DivAssign, div_assign, $t, f32, |a, b| {
            if let Err(err) = a.div_scalar_mut(*b) {
                panic!("{err}");
            }
        });

        impl_unary_op!(Neg, neg, $t, $t, |val| { <$t>::wrap(-val.inner) });
    };
}

/// Implements `Index`/`IndexMut` by forwarding to the checked component
/// accessors. An out-of-range index panics with the accessor's error.
macro_rules! impl_checked_index {
    ($t:ty) => {
        impl ::std::ops::Index<usize> for $t {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                match self.component_ref(index) {
                    Ok(component) => component,
                    Err(err) => panic!("{err}"),
                }
            }
        }

        impl ::std::ops::IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match self.component_mut(index) {
                    Ok(component) => component,
                    Err(err) => panic!("{err}"),
                }
            }
        }
    };
}

/// Implements bit-exact `PartialEq`, `Eq` and a matching `Hash` in terms of
/// the type's `to_array` method.
macro_rules! impl_exact_eq_and_hash {
    ($t:ty) => {
        impl PartialEq for $t {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array().iter())
                    .all(|(a, b)| a.to_bits() == b.to_bits())
            }
        }

        impl Eq for $t {}

        impl ::std::hash::Hash for $t {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                for component in self.to_array() {
                    ::std::hash::Hash::hash(&component.to_bits(), state);
                }
            }
        }
    };
}

/// Implements `approx::AbsDiffEq` and `approx::RelativeEq` component-wise,
/// with [`EPSILON`](crate::num::EPSILON) as the default tolerance.
macro_rules! impl_tolerance_eq {
    ($t:ty) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> Self::Epsilon {
                $crate::num::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array().iter())
                    .all(|(a, b)| ::approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                $crate::num::EPSILON
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array().iter())
                    .all(|(a, b)| ::approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
            }
        }
    };
}

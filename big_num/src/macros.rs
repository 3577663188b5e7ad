/// Implements a binary operator and its assigning form for every
/// owned/borrowed operand combination, all funnelled into one `&self, &rhs`
/// method so no combination clones more than it has to.
macro_rules! forward_binop {
    ($t: ty, $imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $inner: ident) => {
        impl $imp<&$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: &$t) -> Self::Output {
                self.$inner(rhs)
            }
        }

        impl $imp<$t> for $t {
            type Output = $t;

            fn $method(self, rhs: $t) -> Self::Output {
                (&self).$inner(&rhs)
            }
        }

        impl $imp<&$t> for $t {
            type Output = $t;

            fn $method(self, rhs: &$t) -> Self::Output {
                (&self).$inner(rhs)
            }
        }

        impl $imp<$t> for &$t {
            type Output = $t;

            fn $method(self, rhs: $t) -> Self::Output {
                self.$inner(&rhs)
            }
        }

        impl $assign_imp<$t> for $t {
            fn $assign_method(&mut self, rhs: $t) {
                *self = (&*self).$inner(&rhs);
            }
        }

        impl $assign_imp<&$t> for $t {
            fn $assign_method(&mut self, rhs: &$t) {
                *self = (&*self).$inner(rhs);
            }
        }
    };
}

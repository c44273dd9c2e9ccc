// Forward `lhs op rhs` to the `lhs op &rhs` implementation.
//
// Operators are only implemented for owned left operands. An impl on `&Type<T>` makes the
// `for<'r> &'r T: RefNum<T>` bounds recurse through `Type<Type<..>>` during inference.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident for $ty:ident) => {
        impl<T: RingBase> $imp<$ty<T>> for $ty<T>
        where
            for<'r> &'r T: RefNum<T>,
        {
            type Output = $ty<T>;
            #[inline]
            fn $method(self, rhs: $ty<T>) -> $ty<T> {
                $imp::$method(self, &rhs)
            }
        }
    };
}

// Implement `lhs op= rhs` as `lhs = lhs op &rhs`, moving the old value out of `lhs`
macro_rules! forward_assign {
    (impl $imp:ident, $method:ident, $op:ident :: $op_method:ident for $ty:ident) => {
        impl<T: RingBase> $imp<$ty<T>> for $ty<T>
        where
            for<'r> &'r T: RefNum<T>,
        {
            #[inline]
            fn $method(&mut self, rhs: $ty<T>) {
                $imp::$method(self, &rhs)
            }
        }

        impl<'a, T: RingBase> $imp<&'a $ty<T>> for $ty<T>
        where
            for<'r> &'r T: RefNum<T>,
        {
            #[inline]
            fn $method(&mut self, rhs: &'a $ty<T>) {
                let lhs = core::mem::replace(self, <$ty<T> as Zero>::zero());
                *self = $op::$op_method(lhs, rhs);
            }
        }
    };
}

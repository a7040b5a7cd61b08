//! Arena range types.
//!
//! Compact `(start, len)` handles into the arena's side tables.

/// Define range types for arena-allocated side tables.
///
/// Each generated type has `start: u32` and `len: u16` fields, an `EMPTY`
/// constant, `new()`, `is_empty()`, `len()`, and a `Debug` impl showing
/// `TypeName(start..end)`.
macro_rules! define_range {
    ($($name:ident),* $(,)?) => { $(
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u16,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                Self { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let end = self.start + u32::from(self.len);
                write!(f, "{}({}..{})", stringify!($name), self.start, end)
            }
        }
    )* };
}

define_range!(ExprRange, KeywordRange, ComprehensionRange, ParamRange, ComparatorRange);

#[cfg(target_pointer_width = "64")]
crate::static_assert_size!(ExprRange, 8);

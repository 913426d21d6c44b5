//! The [`Element`] marker trait for fixed-width numeric slot types.

use std::fmt;

/// A fixed-width numeric type that can fill a buffer slot.
///
/// Implemented for the ten primitive numeric kinds: 8/16/32/64-bit signed
/// and unsigned integers plus 32/64-bit floats. The element kind is picked
/// at the type level — one buffer instantiation per width — rather than per
/// call, so heterogeneous buffers are not expressible.
///
/// `Default` supplies the fill value for freshly allocated slots. Those
/// slots are contractually unspecified: callers must not depend on the
/// fill, only on slots below the buffer's length.
pub trait Element: Copy + Default + PartialEq + fmt::Debug {
    /// Width of one slot in bytes.
    const WIDTH: usize;
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();
            }
        )*
    };
}

impl_element!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_match_size_of() {
        assert_eq!(<i8 as Element>::WIDTH, 1);
        assert_eq!(<u16 as Element>::WIDTH, 2);
        assert_eq!(<f32 as Element>::WIDTH, 4);
        assert_eq!(<u64 as Element>::WIDTH, 8);
        assert_eq!(<f64 as Element>::WIDTH, 8);
    }
}

//! Byte-order selection and fixed-width value marshalling.
//!
//! Only integral values have a meaningful byte order. Non-integral
//! fixed-width values (floats) are transferred as an exact raw byte copy and
//! the requested order is ignored; the two categories are deliberately kept
//! as separate impl groups rather than collapsed into one path.

/// Byte order requested for a single register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// The byte order of the host this crate was compiled for.
    pub const NATIVE: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };

    #[inline]
    pub fn is_native(self) -> bool {
        self == Self::NATIVE
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::NATIVE
    }
}

/// A fixed-width value that can back a bound or constant register.
///
/// Implementations touch exactly [`WIDTH`](Self::WIDTH) bytes; callers are
/// responsible for checking `buf.len() >= WIDTH` before calling.
pub trait RegValue: Copy {
    /// Byte width of the value on the wire.
    const WIDTH: usize;

    /// Decodes a value from the first `WIDTH` bytes of `src`.
    fn load(src: &[u8], order: ByteOrder) -> Self;

    /// Encodes the value into the first `WIDTH` bytes of `dst`.
    fn store(self, dst: &mut [u8], order: ByteOrder);
}

/// Integral values: native order is a raw copy, the other order byte-swaps.
macro_rules! integral_reg_value {
    ($($ty:ty),* $(,)?) => {$(
        impl RegValue for $ty {
            const WIDTH: usize = core::mem::size_of::<$ty>();

            fn load(src: &[u8], order: ByteOrder) -> Self {
                let mut raw = [0u8; core::mem::size_of::<$ty>()];
                raw.copy_from_slice(&src[..core::mem::size_of::<$ty>()]);
                match order {
                    ByteOrder::Little => <$ty>::from_le_bytes(raw),
                    ByteOrder::Big => <$ty>::from_be_bytes(raw),
                }
            }

            fn store(self, dst: &mut [u8], order: ByteOrder) {
                let raw = match order {
                    ByteOrder::Little => self.to_le_bytes(),
                    ByteOrder::Big => self.to_be_bytes(),
                };
                dst[..raw.len()].copy_from_slice(&raw);
            }
        }
    )*};
}

integral_reg_value!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Non-integral values: exact raw copy, order ignored.
macro_rules! raw_reg_value {
    ($($ty:ty),* $(,)?) => {$(
        impl RegValue for $ty {
            const WIDTH: usize = core::mem::size_of::<$ty>();

            fn load(src: &[u8], _order: ByteOrder) -> Self {
                let mut raw = [0u8; core::mem::size_of::<$ty>()];
                raw.copy_from_slice(&src[..core::mem::size_of::<$ty>()]);
                <$ty>::from_ne_bytes(raw)
            }

            fn store(self, dst: &mut [u8], _order: ByteOrder) {
                let raw = self.to_ne_bytes();
                dst[..raw.len()].copy_from_slice(&raw);
            }
        }
    )*};
}

raw_reg_value!(f32, f64);

use crate::BitError;
use crate::common::sign_extend64;

/// a value category the bit reader and writer can move as one raw group of
/// bits: unsigned and signed integers at any width up to their storage
/// size, floats at exactly their storage size, and enums declared through
/// [`bit_enum!`](crate::bit_enum).
///
/// widths passed to read/write must lie in `[MIN_BITS, MAX_BITS]`. that is
/// a caller contract checked with debug assertions, not a recoverable
/// error.
pub trait BitField: Sized {
    const MIN_BITS: usize;
    const MAX_BITS: usize;

    /// reinterprets the low `bits` bits of `raw` as a value. fallible so
    /// that types with invalid bit patterns (enums) fit the same seam.
    fn from_raw(raw: u64, bits: usize) -> Result<Self, BitError>;

    /// the raw bit pattern of the value, right-aligned.
    fn into_raw(self) -> u64;
}

macro_rules! impl_unsigned_field {
    ($($ty:ty),+) => {$(
        impl BitField for $ty {
            const MIN_BITS: usize = 0;
            const MAX_BITS: usize = <$ty>::BITS as usize;

            #[inline(always)]
            fn from_raw(raw: u64, _bits: usize) -> Result<Self, BitError> {
                Ok(raw as $ty)
            }

            #[inline(always)]
            fn into_raw(self) -> u64 {
                self as u64
            }
        }
    )+};
}

macro_rules! impl_signed_field {
    ($($ty:ty),+) => {$(
        impl BitField for $ty {
            const MIN_BITS: usize = 0;
            const MAX_BITS: usize = <$ty>::BITS as usize;

            #[inline(always)]
            fn from_raw(raw: u64, bits: usize) -> Result<Self, BitError> {
                Ok(sign_extend64(raw, bits) as $ty)
            }

            // `as` sign-extends to the full register; the writer masks the
            // requested width back out.
            #[inline(always)]
            fn into_raw(self) -> u64 {
                self as u64
            }
        }
    )+};
}

impl_unsigned_field!(u8, u16, u32, u64);
impl_signed_field!(i8, i16, i32, i64);

impl BitField for f32 {
    const MIN_BITS: usize = 32;
    const MAX_BITS: usize = 32;

    #[inline(always)]
    fn from_raw(raw: u64, _bits: usize) -> Result<Self, BitError> {
        Ok(f32::from_bits(raw as u32))
    }

    #[inline(always)]
    fn into_raw(self) -> u64 {
        u64::from(self.to_bits())
    }
}

impl BitField for f64 {
    const MIN_BITS: usize = 64;
    const MAX_BITS: usize = 64;

    #[inline(always)]
    fn from_raw(raw: u64, _bits: usize) -> Result<Self, BitError> {
        Ok(f64::from_bits(raw))
    }

    #[inline(always)]
    fn into_raw(self) -> u64 {
        self.to_bits()
    }
}

/// declares a fieldless enum with explicit discriminants and implements
/// [`BitField`] for it over the underlying integer type.
///
/// reading a value that is not a declared discriminant reports
/// [`BitError::InvalidDiscriminant`].
///
/// ```
/// bitgrain_bitio::bit_enum! {
///     pub enum FrameKind: u8 {
///         Key = 0,
///         Delta = 1,
///         Filler = 3,
///     }
/// }
/// ```
#[macro_export]
macro_rules! bit_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ty {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr($repr)]
        $vis enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $crate::BitField for $name {
            const MIN_BITS: usize = 0;
            const MAX_BITS: usize = <$repr as $crate::BitField>::MAX_BITS;

            fn from_raw(raw: u64, _bits: usize) -> ::core::result::Result<Self, $crate::BitError> {
                match raw {
                    $(v if v == ($value) as u64 => ::core::result::Result::Ok($name::$variant),)+
                    other => ::core::result::Result::Err($crate::BitError::InvalidDiscriminant(other)),
                }
            }

            fn into_raw(self) -> u64 {
                self as $repr as u64
            }
        }
    };
}

//! Element types storable in a [`DynamicArray`](crate::DynamicArray) and
//! usable with the bitwise operations.
//!
//! Every element is a fixed-width integer: the bit printer relies on the width
//! being 8, 16, 32 or 64 bits, and the random fill relies on a checked
//! conversion from `i64`.

use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Fixed-width integer element.
pub trait Element:
    Copy
    + Default
    + PartialEq
    + Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Width of the type in bits (`8 * size_of::<Self>()`).
    const BITS: usize;

    /// Raw two's-complement bits, zero-extended to 64 bits.
    fn to_raw_bits(self) -> u64;

    /// Convert from `i64`, or `None` if the value is not representable.
    fn from_i64(value: i64) -> Option<Self>;

    /// Text form used by element listings.
    fn display_value(self) -> String;
}

macro_rules! implement_element {
    // Byte-wide types are listed as characters.
    (char $int_type:ty) => {
        impl Element for $int_type {
            const BITS: usize = <$int_type>::BITS as usize;

            #[inline]
            fn to_raw_bits(self) -> u64 {
                self as u8 as u64
            }

            #[inline]
            fn from_i64(value: i64) -> Option<Self> {
                <$int_type>::try_from(value).ok()
            }

            fn display_value(self) -> String {
                char::from(self as u8).to_string()
            }
        }
    };
    ($int_type:ty, $unsigned:ty) => {
        impl Element for $int_type {
            const BITS: usize = <$int_type>::BITS as usize;

            #[inline]
            fn to_raw_bits(self) -> u64 {
                self as $unsigned as u64
            }

            #[inline]
            fn from_i64(value: i64) -> Option<Self> {
                <$int_type>::try_from(value).ok()
            }

            fn display_value(self) -> String {
                self.to_string()
            }
        }
    };
}

implement_element!(char i8);
implement_element!(char u8);
implement_element!(i16, u16);
implement_element!(u16, u16);
implement_element!(i32, u32);
implement_element!(u32, u32);
implement_element!(i64, u64);
implement_element!(u64, u64);

//! Bit-pattern and element rendering.
//!
//! Elements are rendered as their fixed-width two's-complement bit pattern,
//! most significant bit first, grouped into bytes:
//!
//! ```
//! use vecbits::render::{bit_string, group_bits};
//!
//! assert_eq!(bit_string(5i8), "00000101");
//! assert_eq!(group_bits(&bit_string(-2i16)), "11111111 11111110");
//! ```

use crate::dynamic_array::DynamicArray;
use crate::element::Element;
use crate::error::{Result, VecbitsError};
use bitvec::prelude::*;
use itertools::Itertools;
use std::io::{self, Write};

/// Number of bits shown per group.
pub const BITS_PER_GROUP: usize = 8;

/// Format `value` as exactly `T::BITS` '0'/'1' characters, MSB first.
pub fn bit_string<T: Element>(value: T) -> String {
    format!("{:0width$b}", value.to_raw_bits(), width = T::BITS)
}

/// Format `value` like [`bit_string`], reading the bits through `bitvec`.
pub fn bit_string_bitvec<T: Element>(value: T) -> String {
    let raw = value.to_raw_bits();
    let bits = raw.view_bits::<Msb0>();
    bits[u64::BITS as usize - T::BITS..]
        .iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

/// Split a bit string into byte-sized groups separated by single spaces.
pub fn group_bits(bits: &str) -> String {
    let chunks = bits.chars().chunks(BITS_PER_GROUP);
    let grouped = (&chunks)
        .into_iter()
        .map(|chunk| chunk.collect::<String>())
        .join(" ");
    grouped
}

/// Check that `bits` has the width of `T`.
pub fn check_width<T: Element>(index: usize, bits: &str) -> Result<()> {
    if bits.len() != T::BITS {
        return Err(VecbitsError::BitStringLengthMismatch {
            index,
            expected: T::BITS,
            actual: bits.len(),
        });
    }
    Ok(())
}

/// Render every element of `array` as a grouped bit pattern.
pub fn render_bits<T: Element>(array: &DynamicArray<T>) -> Result<Vec<String>> {
    render_bits_with(array, bit_string)
}

/// Render every element with `format`, stopping at the first element whose
/// string fails [`check_width`].
pub fn render_bits_with<T, F>(array: &DynamicArray<T>, format: F) -> Result<Vec<String>>
where
    T: Element,
    F: Fn(T) -> String,
{
    let mut lines = Vec::with_capacity(array.len());
    for (i, &value) in array.as_slice().iter().enumerate() {
        let bits = format(value);
        check_width::<T>(i, &bits)?;
        lines.push(group_bits(&bits));
    }
    Ok(lines)
}

/// Render the element listing, each element followed by a space.
pub fn render_elements<T: Element>(array: &DynamicArray<T>) -> String {
    array
        .as_slice()
        .iter()
        .map(|value| format!("{} ", value.display_value()))
        .collect()
}

/// Write `Vector elements: ...` for `array`.
pub fn write_elements<T: Element, W: Write>(out: &mut W, array: &DynamicArray<T>) -> io::Result<()> {
    writeln!(out, "Vector elements: {}", render_elements(array))
}

/// Write the bit patterns of `array`, one element per line.
///
/// A width failure is reported to `diag` and ends the listing early.
pub fn write_bits<T: Element, W: Write, E: Write>(
    out: &mut W,
    diag: &mut E,
    array: &DynamicArray<T>,
) -> io::Result<()> {
    write_bits_with(out, diag, array, bit_string)
}

/// [`write_bits`] with a caller-supplied formatter.
pub fn write_bits_with<T, W, E, F>(
    out: &mut W,
    diag: &mut E,
    array: &DynamicArray<T>,
    format: F,
) -> io::Result<()>
where
    T: Element,
    W: Write,
    E: Write,
    F: Fn(T) -> String,
{
    writeln!(out, "Vector elements in bits: ")?;
    for (i, &value) in array.as_slice().iter().enumerate() {
        let bits = format(value);
        if let Err(err) = check_width::<T>(i, &bits) {
            writeln!(diag, "Error: {}", err)?;
            return Ok(());
        }
        for group in group_bits(&bits).split(' ') {
            write!(out, "{} ", group)?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}

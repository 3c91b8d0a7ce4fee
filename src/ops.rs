//! Element-wise bitwise operations over [`DynamicArray`]s.
//!
//! Each output element depends only on the input elements at the same index;
//! nothing carries between elements.
//!
//! # Examples
//!
//! ```
//! use vecbits::{apply, BitwiseOp, DynamicArray};
//!
//! let a = DynamicArray::from_slice(&[0b1100u8, 0b1010]);
//! let b = DynamicArray::from_slice(&[0b1010u8, 0b0110]);
//!
//! let xor = apply(&a, &b, BitwiseOp::Xor).unwrap();
//! assert_eq!(xor.as_slice(), &[0b0110, 0b1100]);
//! ```

use crate::dynamic_array::DynamicArray;
use crate::element::Element;
use crate::error::{Result, VecbitsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

/// Binary bitwise operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
}

impl BitwiseOp {
    /// All binary operators in display order.
    pub const ALL: [BitwiseOp; 3] = [BitwiseOp::And, BitwiseOp::Or, BitwiseOp::Xor];

    /// Apply the operator to a single pair of elements.
    #[inline]
    pub fn eval<T: Element>(self, a: T, b: T) -> T {
        match self {
            BitwiseOp::And => a & b,
            BitwiseOp::Or => a | b,
            BitwiseOp::Xor => a ^ b,
        }
    }

    /// Upper-case operator name.
    pub fn name(self) -> &'static str {
        match self {
            BitwiseOp::And => "AND",
            BitwiseOp::Or => "OR",
            BitwiseOp::Xor => "XOR",
        }
    }
}

impl fmt::Display for BitwiseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BitwiseOp {
    type Err = VecbitsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" => Ok(BitwiseOp::And),
            "or" => Ok(BitwiseOp::Or),
            "xor" => Ok(BitwiseOp::Xor),
            other => Err(VecbitsError::InvalidParameter(format!(
                "unknown bitwise operation '{}' (expected and, or, xor)",
                other
            ))),
        }
    }
}

/// Unary bitwise operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryOp {
    Not,
}

impl UnaryOp {
    /// Apply the operator to a single element.
    #[inline]
    pub fn eval<T: Element>(self, a: T) -> T {
        match self {
            UnaryOp::Not => !a,
        }
    }

    /// Upper-case operator name.
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Not => "NOT",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply `op` to every pair `(a[i], b[i])`.
///
/// # Errors
///
/// Returns [`VecbitsError::SizeMismatch`] if the arrays differ in length.
pub fn apply<T: Element>(
    a: &DynamicArray<T>,
    b: &DynamicArray<T>,
    op: BitwiseOp,
) -> Result<DynamicArray<T>> {
    if a.len() != b.len() {
        return Err(VecbitsError::SizeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut result = DynamicArray::with_len(a.len());
    for i in 0..a.len() {
        *result.get_mut(i) = op.eval(*a.get(i), *b.get(i));
    }
    Ok(result)
}

/// Apply `op` element-wise, reporting a size mismatch to `diag` and returning
/// an empty array instead of failing.
pub fn apply_or_empty<T: Element, W: Write>(
    a: &DynamicArray<T>,
    b: &DynamicArray<T>,
    op: BitwiseOp,
    diag: &mut W,
) -> DynamicArray<T> {
    match apply(a, b, op) {
        Ok(result) => result,
        Err(err) => {
            // Nothing useful to do if the diagnostic stream itself fails.
            let _ = writeln!(diag, "{}", err);
            DynamicArray::new()
        }
    }
}

/// Apply a unary operator to every element.
pub fn apply_unary<T: Element>(a: &DynamicArray<T>, op: UnaryOp) -> DynamicArray<T> {
    let mut result = DynamicArray::with_len(a.len());
    for i in 0..a.len() {
        *result.get_mut(i) = op.eval(*a.get(i));
    }
    result
}

// =============================================================================
// Bitwise Operators
// =============================================================================

impl<T: Element> BitAnd for &DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        apply_or_empty(self, rhs, BitwiseOp::And, &mut std::io::stderr())
    }
}

impl<T: Element> BitAnd for DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        &self & &rhs
    }
}

impl<T: Element> BitOr for &DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        apply_or_empty(self, rhs, BitwiseOp::Or, &mut std::io::stderr())
    }
}

impl<T: Element> BitOr for DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        &self | &rhs
    }
}

impl<T: Element> BitXor for &DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        apply_or_empty(self, rhs, BitwiseOp::Xor, &mut std::io::stderr())
    }
}

impl<T: Element> BitXor for DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        &self ^ &rhs
    }
}

impl<T: Element> Not for &DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn not(self) -> Self::Output {
        apply_unary(self, UnaryOp::Not)
    }
}

impl<T: Element> Not for DynamicArray<T> {
    type Output = DynamicArray<T>;

    fn not(self) -> Self::Output {
        !&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval() {
        assert_eq!(BitwiseOp::And.eval(0b1100u8, 0b1010), 0b1000);
        assert_eq!(BitwiseOp::Or.eval(0b1100u8, 0b1010), 0b1110);
        assert_eq!(BitwiseOp::Xor.eval(0b1100u8, 0b1010), 0b0110);
        assert_eq!(UnaryOp::Not.eval(0u8), 0xFF);
        assert_eq!(UnaryOp::Not.eval(0i32), -1);
    }

    #[test]
    fn test_apply_char_scenario() {
        let a = DynamicArray::from_slice(&[65i8, 66, 67]);
        let b = DynamicArray::from_slice(&[1i8, 1, 1]);

        assert_eq!(apply(&a, &b, BitwiseOp::And).unwrap().as_slice(), &[1, 0, 1]);
        assert_eq!(apply(&a, &b, BitwiseOp::Or).unwrap().as_slice(), &[65, 67, 67]);
        assert_eq!(apply(&a, &b, BitwiseOp::Xor).unwrap().as_slice(), &[64, 67, 66]);
    }

    #[test]
    fn test_apply_size_mismatch() {
        let a: DynamicArray<i32> = DynamicArray::with_len(3);
        let b: DynamicArray<i32> = DynamicArray::with_len(5);

        assert!(matches!(
            apply(&a, &b, BitwiseOp::And),
            Err(VecbitsError::SizeMismatch { left: 3, right: 5 })
        ));
    }

    #[test]
    fn test_apply_or_empty_reports() {
        let a = DynamicArray::from_slice(&[1u8, 2, 3]);
        let b = DynamicArray::from_slice(&[1u8]);
        let mut diag = Vec::new();

        let result = apply_or_empty(&a, &b, BitwiseOp::Or, &mut diag);
        assert!(result.is_empty());
        let text = String::from_utf8(diag).unwrap();
        assert!(text.starts_with("Vectors are of different sizes"));
    }

    #[test]
    fn test_apply_unary() {
        let a = DynamicArray::from_slice(&[0i8, -1, 5]);
        let result = apply_unary(&a, UnaryOp::Not);
        assert_eq!(result.as_slice(), &[-1, 0, -6]);
    }

    #[test]
    fn test_operators() {
        let a = DynamicArray::from_slice(&[0b0011u16, 0b0101]);
        let b = DynamicArray::from_slice(&[0b0101u16, 0b0011]);

        assert_eq!((&a & &b).as_slice(), &[0b0001, 0b0001]);
        assert_eq!((&a | &b).as_slice(), &[0b0111, 0b0111]);
        assert_eq!((&a ^ &b).as_slice(), &[0b0110, 0b0110]);
        assert_eq!((!&a).as_slice(), &[!0b0011u16, !0b0101u16]);
        assert_eq!((a.clone() ^ a).as_slice(), &[0, 0]);
    }

    #[test]
    fn test_op_parse_and_display() {
        assert_eq!("AND".parse::<BitwiseOp>().unwrap(), BitwiseOp::And);
        assert_eq!(" xor ".parse::<BitwiseOp>().unwrap(), BitwiseOp::Xor);
        assert!("nand".parse::<BitwiseOp>().is_err());
        assert_eq!(BitwiseOp::Or.to_string(), "OR");
        assert_eq!(UnaryOp::Not.to_string(), "NOT");
    }
}

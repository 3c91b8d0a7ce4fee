//! vecbits - Element-wise bitwise operations on a minimal dynamic array
//!
//! vecbits pairs a small owning container, [`DynamicArray`], with element-wise
//! bitwise operations (AND, OR, XOR and unary NOT) and a printer that renders
//! each element as its fixed-width two's-complement bit pattern.
//!
//! # Architecture
//!
//! - **DynamicArray**: contiguous owned buffer that keeps no spare capacity
//! - **Element**: fixed-width integer types the array and operations accept
//! - **Operations**: `apply`, `apply_or_empty` and `apply_unary`, plus the
//!   `&`, `|`, `^` and `!` operators
//! - **Rendering**: bit strings grouped into bytes, and element listings
//! - **Demo**: the console flow behind the `vecbits` binary
//!
//! # Examples
//!
//! ## Bitwise Operations
//!
//! ```
//! use vecbits::{apply, BitwiseOp, DynamicArray};
//!
//! let a = DynamicArray::from_slice(&[65i8, 66, 67]);
//! let b = DynamicArray::from_slice(&[1i8, 1, 1]);
//!
//! let or = apply(&a, &b, BitwiseOp::Or).unwrap();
//! assert_eq!(or.as_slice(), &[65, 67, 67]);
//!
//! // The operators yield an empty array on a size mismatch
//! let and = &a & &b;
//! assert_eq!(and.as_slice(), &[1, 0, 1]);
//! ```
//!
//! ## Random Fill and Bit Rendering
//!
//! ```
//! use vecbits::random::{fill_random, seeded_rng};
//! use vecbits::render::render_bits;
//! use vecbits::DynamicArray;
//!
//! let mut rng = seeded_rng(42);
//! let mut arr: DynamicArray<i32> = DynamicArray::new();
//! fill_random(&mut arr, 4, 0, 100, &mut rng).unwrap();
//!
//! let lines = render_bits(&arr).unwrap();
//! assert_eq!(lines.len(), 4);
//! assert_eq!(lines[0].len(), 35); // 32 bits + 3 separators
//! ```
//!
//! # Safety
//!
//! Element access uses `debug_assert!` for descriptive bounds messages in
//! debug builds; release builds still panic on an out-of-bounds index through
//! slice indexing.

pub mod cli;
pub mod config;
pub mod demo;
pub mod dynamic_array;
pub mod element;
pub mod error;
pub mod ops;
pub mod random;
pub mod render;

// Re-exports for convenient access
pub use config::{DemoConfig, ValueRange};
pub use dynamic_array::DynamicArray;
pub use element::Element;
pub use error::{Result, VecbitsError};
pub use ops::{apply, apply_or_empty, apply_unary, BitwiseOp, UnaryOp};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "vecbits";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}

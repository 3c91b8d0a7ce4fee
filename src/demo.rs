//! Console demo: fill char and int arrays with random values, print them, and
//! print the results of the configured bitwise operations on each pair.
//!
//! The driver is written against generic readers and writers so the whole
//! flow can run in tests over in-memory buffers.

use crate::config::{DemoConfig, ValueRange};
use crate::dynamic_array::DynamicArray;
use crate::element::Element;
use crate::error::{Result, VecbitsError};
use crate::ops::{apply_or_empty, BitwiseOp};
use crate::random::{fill_random, seeded_rng};
use crate::render::{write_bits, write_elements};
use rand::Rng;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Element type of the char arrays.
pub type CharElement = i8;

/// Element type of the int arrays.
pub type IntElement = i32;

/// Whitespace-separated token reader over a `BufRead`.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Read an array size, rejecting negative, unparsable and oversized values.
    pub fn next_size(&mut self, what: &'static str, max_len: usize) -> Result<usize> {
        let token = self
            .next_token()?
            .ok_or(VecbitsError::MissingInput(what))?;
        let size: i64 = token
            .parse()
            .map_err(|_| VecbitsError::InvalidSize(format!("'{}' is not an integer", token)))?;
        if size < 0 {
            return Err(VecbitsError::InvalidSize(format!(
                "{} must not be negative, got {}",
                what, size
            )));
        }
        let size = size as u64;
        if size > max_len as u64 {
            return Err(VecbitsError::InvalidSize(format!(
                "{} {} exceeds the limit of {}",
                what, size, max_len
            )));
        }
        Ok(size as usize)
    }
}

/// Fill two fresh arrays with `len` values each from `range`.
fn random_pair<T: Element, G: Rng>(
    len: usize,
    range: ValueRange,
    rng: &mut G,
) -> Result<(DynamicArray<T>, DynamicArray<T>)> {
    let mut first = DynamicArray::new();
    let mut second = DynamicArray::new();
    fill_random(&mut first, len, range.min, range.max, rng)?;
    fill_random(&mut second, len, range.min, range.max, rng)?;
    Ok((first, second))
}

/// Write a label followed by the listing and bit patterns of `array`.
fn write_section<T: Element, W: Write, E: Write>(
    out: &mut W,
    diag: &mut E,
    label: &str,
    array: &DynamicArray<T>,
) -> Result<()> {
    writeln!(out, "{}", label)?;
    write_elements(out, array)?;
    write_bits(out, diag, array)?;
    Ok(())
}

/// Apply every configured operation to `(a, b)` and write each result.
fn write_results<T: Element, W: Write, E: Write>(
    out: &mut W,
    diag: &mut E,
    kind: &str,
    a: &DynamicArray<T>,
    b: &DynamicArray<T>,
    ops: &[BitwiseOp],
) -> Result<()> {
    let results: Vec<(BitwiseOp, DynamicArray<T>)> = ops
        .iter()
        .map(|&op| (op, apply_or_empty(a, b, op, diag)))
        .collect();

    writeln!(out)?;
    writeln!(out, "Results of bitwise operations for {} vectors:", kind)?;
    for (op, result) in &results {
        write_section(out, diag, &format!("{} operation:", op), result)?;
    }
    Ok(())
}

/// Run the demo: read two sizes from `input`, write listings to `out` and
/// diagnostics to `diag`.
pub fn run<R: BufRead, W: Write, E: Write>(
    config: &DemoConfig,
    input: R,
    out: &mut W,
    diag: &mut E,
) -> Result<()> {
    config.validate()?;
    let mut rng = seeded_rng(config.seed);
    let mut tokens = Tokens::new(input);

    writeln!(out, "Enter size for the char vectors:")?;
    out.flush()?;
    let char_len = tokens.next_size("char vector size", config.max_len)?;
    let (chars1, chars2) = random_pair::<CharElement, _>(char_len, config.char_range, &mut rng)?;
    write_section(out, diag, "Char vector 1:", &chars1)?;
    write_section(out, diag, "Char vector 2:", &chars2)?;

    writeln!(out, "Enter size for the int vectors:")?;
    out.flush()?;
    let int_len = tokens.next_size("int vector size", config.max_len)?;
    let (ints1, ints2) = random_pair::<IntElement, _>(int_len, config.int_range, &mut rng)?;
    write_section(out, diag, "Int vector 1:", &ints1)?;
    write_section(out, diag, "Int vector 2:", &ints2)?;

    write_results(out, diag, "char", &chars1, &chars2, &config.ops)?;
    write_results(out, diag, "int", &ints1, &ints2, &config.ops)?;
    out.flush()?;
    Ok(())
}

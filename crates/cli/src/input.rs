//! Validated input prompts.
//!
//! Every helper loops until the user supplies an acceptable value, so
//! nothing out of range ever reaches the core. Generic over
//! `BufRead`/`Write` so the loops can be driven by a `Cursor` in tests.

use anyhow::{bail, Result};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line.trim().to_string())
}

/// Prompt until a non-empty line comes in.
pub fn prompt_string<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    loop {
        let line = read_line(input, output, prompt)?;
        if !line.is_empty() {
            return Ok(line);
        }
        writeln!(output, "Invalid input. Please enter a non-empty string.")?;
    }
}

/// Prompt until an integer within the closed range comes in.
pub fn prompt_u32<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    range: &RangeInclusive<u32>,
) -> Result<u32> {
    loop {
        let line = read_line(input, output, prompt)?;
        if let Ok(value) = u32::from_str(&line) {
            if range.contains(&value) {
                return Ok(value);
            }
        }
        writeln!(
            output,
            "Invalid input. Please enter a value between {} and {}.",
            range.start(),
            range.end()
        )?;
    }
}

/// Prompt until a decimal within the closed range, with at most two
/// decimal places, comes in.
pub fn prompt_decimal<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: Decimal,
    max: Decimal,
) -> Result<Decimal> {
    loop {
        let line = read_line(input, output, prompt)?;
        if let Ok(value) = Decimal::from_str(&line) {
            if value >= min && value <= max && value.normalize().scale() <= 2 {
                return Ok(value);
            }
        }
        writeln!(
            output,
            "Invalid input. Please enter a value between {min:.2} and {max:.2} with at most 2 decimal places.",
        )?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    #[test]
    fn string_retries_until_non_empty() {
        let mut input = Cursor::new("\n\nFirst National\n");
        let mut output = Vec::new();
        let value = prompt_string(&mut input, &mut output, "Enter bank name: ").unwrap();
        assert_eq!(value, "First National");
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("non-empty").count(), 2);
    }

    #[test]
    fn u32_rejects_out_of_range_and_garbage() {
        let mut input = Cursor::new("abc\n0\n121\n36\n");
        let mut output = Vec::new();
        let value = prompt_u32(&mut input, &mut output, "Enter age: ", &(16..=120)).unwrap();
        assert_eq!(value, 36);
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("between 16 and 120").count(), 3);
    }

    #[test]
    fn decimal_enforces_range_and_scale() {
        let mut input = Cursor::new("12.345\n0.50\n75.25\n");
        let mut output = Vec::new();
        let value = prompt_decimal(
            &mut input,
            &mut output,
            "Enter amount: ",
            dec!(1.00),
            dec!(10000.00),
        )
        .unwrap();
        assert_eq!(value, dec!(75.25));
    }

    #[test]
    fn trailing_zeros_do_not_fail_the_scale_check() {
        let mut input = Cursor::new("50.0000\n");
        let mut output = Vec::new();
        let value = prompt_decimal(
            &mut input,
            &mut output,
            "Enter amount: ",
            dec!(1.00),
            dec!(10000.00),
        )
        .unwrap();
        assert_eq!(value, dec!(50.00));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(prompt_string(&mut input, &mut output, "> ").is_err());
    }
}

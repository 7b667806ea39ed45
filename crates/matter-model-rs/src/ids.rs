// crates/matter-model-rs/src/ids.rs

//! Hex identifier helpers.
//!
//! The specification dump writes numeric identifiers both as JSON numbers and
//! as `"0x..."` strings; these helpers parse the string form.

use core::num::ParseIntError;

/// Parses a "0x..." or "..." hex string into a u64.
pub fn parse_hex_u64(s: &str) -> Result<u64, ParseIntError> {
    let trimmed = s.strip_prefix("0x").unwrap_or(s);
    u64::from_str_radix(trimmed, 16)
}

/// Parses a "0x..." or "..." hex string into a u32.
pub fn parse_hex_u32(s: &str) -> Result<u32, ParseIntError> {
    let trimmed = s.strip_prefix("0x").unwrap_or(s);
    u32::from_str_radix(trimmed, 16)
}

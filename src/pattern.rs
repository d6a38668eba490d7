// BIN Pattern - wildcard template for card number expansion

use anyhow::{bail, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default BIN template offered when the caller supplies none.
pub const DEFAULT_BIN: &str = "552461xxxxxxxxxx";

/// Longest accepted pattern (longest real card number length).
pub const MAX_PATTERN_LEN: usize = 19;

/// Length patterns are padded up to when sanitizing short input.
const STANDARD_PATTERN_LEN: usize = 16;

// ============================================================================
// PATTERN
// ============================================================================

/// A BIN template: literal digits fixed by the issuer prefix, `x`/`X`
/// wildcards for positions to randomize. Any other character passes through
/// the expander as a literal, so callers wanting strict input should go
/// through [`BinPattern::sanitize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinPattern(String);

impl BinPattern {
    /// Accept a pattern as-is. Rejects patterns shorter than 2 characters:
    /// there must be room for at least one generated digit plus the check
    /// digit.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.chars().count() < 2 {
            bail!("BIN pattern must be at least 2 characters, got {raw:?}");
        }
        Ok(BinPattern(raw.to_string()))
    }

    /// Normalize free-form user input: uppercase, strip everything outside
    /// digits and `X`, cap at 19 characters. Short inputs keep their literal
    /// digits and are refilled with wildcards up to the standard 16-digit
    /// length.
    pub fn sanitize(raw: &str) -> Result<Self> {
        let mut value: String = raw
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == 'X')
            .collect();
        value.truncate(MAX_PATTERN_LEN);

        if !value.is_empty() && value.len() < STANDARD_PATTERN_LEN {
            let digits: String = value.chars().filter(char::is_ascii_digit).collect();
            let wildcards = STANDARD_PATTERN_LEN.saturating_sub(digits.len());
            value = digits;
            value.extend(std::iter::repeat('X').take(wildcards));
        }

        Self::parse(&value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expand every position except the last: wildcards become uniform
    /// random digits, anything else passes through unchanged. The final
    /// position is never consulted - it is reserved for a check digit
    /// chosen by the caller.
    pub fn expand_partial<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let len = self.len();
        self.0
            .chars()
            .take(len.saturating_sub(1))
            .map(|c| fill(c, rng))
            .collect()
    }

    /// Expand the whole template, final position included. The last digit
    /// carries no checksum guarantee in this mode.
    pub fn expand_full<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.0.chars().map(|c| fill(c, rng)).collect()
    }
}

impl fmt::Display for BinPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn fill<R: Rng + ?Sized>(c: char, rng: &mut R) -> char {
    if c == 'x' || c == 'X' {
        (b'0' + rng.random_range(0u8..10)) as char
    } else {
        c
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Business tax id (14 digits, two mod-11 check digits).

use serde::{Deserialize, Serialize};

use crate::constants::{
    TAX_ID_LENGTH, TAX_ID_PUNCTUATION, TAX_ID_WEIGHTS_FIRST, TAX_ID_WEIGHTS_SECOND,
};
use crate::error::{DomainError, DomainResult};

const INVALID_TAX_ID: &str = "Please inform a valid tax id.";

/// Validated tax id.
///
/// Stored as the unmasked 14-digit string; `Display` renders the
/// punctuated `NN.NNN.NNN/NNNN-NN` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaxId(String);

impl TaxId {
    /// Parse a masked or unmasked tax id.
    ///
    /// Punctuation (`.`, `/`, `-`) is stripped and shorter inputs are
    /// left-padded with zeros. Every failure yields the same message.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let digits: String = raw
            .chars()
            .filter(|c| !TAX_ID_PUNCTUATION.contains(c))
            .collect();

        if digits.is_empty()
            || digits.len() > TAX_ID_LENGTH
            || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let padded = format!("{:0>width$}", digits, width = TAX_ID_LENGTH);
        let values: Vec<u32> = padded.chars().filter_map(|c| c.to_digit(10)).collect();

        if values.iter().all(|d| *d == values[0]) {
            return Err(invalid());
        }

        if check_digit(&values[..12], &TAX_ID_WEIGHTS_FIRST) != values[12]
            || check_digit(&values[..13], &TAX_ID_WEIGHTS_SECOND) != values[13]
        {
            return Err(invalid());
        }

        Ok(Self(padded))
    }

    /// Unmasked digits, used for comparison and lookups.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Punctuated display form.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!(
            "{}.{}.{}/{}-{}",
            &d[0..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..14]
        )
    }
}

fn invalid() -> DomainError {
    DomainError::validation(INVALID_TAX_ID)
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for TaxId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TaxId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaxId> for String {
    fn from(tax_id: TaxId) -> Self {
        tax_id.0
    }
}

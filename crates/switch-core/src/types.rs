//! Identifier types for switchboards and lines
//!
//! Area codes and line numbers are kept as validated digit strings rather
//! than integers so that leading zeros survive parsing, display, and
//! persistence (`011` and `11` are different area codes).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SwitchError, SwitchResult};

/// Separator between area code and line number in the `AAA-NNNNNNN` form
pub const ENDPOINT_SEPARATOR: char = '-';

/// Validation policy for area codes
///
/// The digit width is configuration, not a hardcoded invariant; the
/// conventional North American width of 3 is only the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCodePolicy {
    /// Exact number of digits an area code must have
    pub digits: u8,
}

impl Default for AreaCodePolicy {
    fn default() -> Self {
        Self { digits: 3 }
    }
}

impl AreaCodePolicy {
    /// Create a policy requiring exactly `digits` digits
    pub fn new(digits: u8) -> Self {
        Self { digits }
    }

    /// Validate a raw string against this policy and produce an [`AreaCode`]
    pub fn parse(&self, raw: &str) -> SwitchResult<AreaCode> {
        if raw.len() != self.digits as usize || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(SwitchError::InvalidAreaCode {
                code: raw.to_string(),
                expected_digits: self.digits,
            });
        }
        Ok(AreaCode(raw.to_string()))
    }
}

/// Area code identifying a switchboard
///
/// Only constructed through [`AreaCodePolicy::parse`], so a value of this
/// type is always well-formed for the policy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaCode(String);

impl AreaCode {
    /// The digit string of this area code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Local line number, unique within its owning switchboard
///
/// Numbers need not be unique across switchboards; the globally unique
/// identity of a line is the [`Endpoint`] pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineNumber(String);

impl LineNumber {
    /// Parse a line number from a digit string
    pub fn parse(raw: &str) -> SwitchResult<Self> {
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(SwitchError::InvalidLineNumber {
                number: raw.to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    /// The digit string of this line number
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fully qualified line address: switchboard area code plus local number
///
/// Displays in the `AAA-NNNNNNN` hyphen form used on the command surface,
/// e.g. `301-6457671`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    pub area: AreaCode,
    pub number: LineNumber,
}

impl Endpoint {
    pub fn new(area: AreaCode, number: LineNumber) -> Self {
        Self { area, number }
    }

    /// Parse `AAA-NNNNNNN` against an area code policy
    ///
    /// Digits after the first hyphen are joined, so `301-645-7671` and
    /// `301-6457671` name the same endpoint.
    pub fn parse(raw: &str, policy: AreaCodePolicy) -> SwitchResult<Self> {
        let mut parts = raw.split(ENDPOINT_SEPARATOR);
        let area = policy.parse(parts.next().unwrap_or_default())?;
        let number = LineNumber::parse(&parts.collect::<Vec<_>>().concat())?;
        Ok(Self { area, number })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.area, ENDPOINT_SEPARATOR, self.number)
    }
}

impl FromStr for Endpoint {
    type Err = SwitchError;

    /// Parses with the default 3-digit area code policy
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, AreaCodePolicy::default())
    }
}

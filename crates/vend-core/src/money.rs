//! # Money Module
//!
//! Provides the `Money` amount type and the closed `Denomination` set.
//!
//! ## Why a closed set?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The machine only ever sees eight kinds of coins and notes:            │
//! │                                                                         │
//! │    1 kr   5 kr   10 kr   20 kr   50 kr   100 kr   500 kr   1000 kr     │
//! │                                                                         │
//! │  Modelling them as an enum (not a bare u32) means:                     │
//! │    • a 7 kr coin cannot be constructed                                 │
//! │    • every `match` over denominations is checked for exhaustiveness   │
//! │    • the pool can be a fixed array indexed by denomination             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vend_core::money::{Denomination, Money};
//!
//! let price = Money::from_kr(20);
//! let paid = Denomination::HundredKr.amount();
//!
//! assert_eq!(paid.checked_sub(price), Some(Money::from_kr(80)));
//! assert_eq!(price.to_string(), "20 kr");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative amount in whole kronor.
///
/// ## Design Decisions
/// - **u64 (unsigned)**: the machine never holds a negative balance
/// - **Single field tuple struct**: zero-cost abstraction over u64
/// - **No `Sub` impl**: subtraction goes through [`Money::checked_sub`] so an
///   overdraft is a visible `None`, never a wrap-around
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Creates an amount from whole kronor.
    #[inline]
    pub const fn from_kr(kr: u64) -> Self {
        Money(kr)
    }

    /// Returns the amount in whole kronor.
    #[inline]
    pub const fn kr(&self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtracts `other`, returning `None` if the result would be negative.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::money::Money;
    ///
    /// let credit = Money::from_kr(50);
    /// assert_eq!(credit.checked_sub(Money::from_kr(50)), Some(Money::zero()));
    /// assert_eq!(credit.checked_sub(Money::from_kr(51)), None);
    /// ```
    #[inline]
    pub const fn checked_sub(self, other: Money) -> Option<Money> {
        match self.0.checked_sub(other.0) {
            Some(kr) => Some(Money(kr)),
            None => None,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kr", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by a note count.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        Money(self.0 * u64::from(count))
    }
}

// =============================================================================
// Denomination
// =============================================================================

/// A coin or note the machine accepts.
///
/// Discriminants are the face value in kronor, so `d as u32` is the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Denomination {
    OneKr = 1,
    FiveKr = 5,
    TenKr = 10,
    TwentyKr = 20,
    FiftyKr = 50,
    HundredKr = 100,
    FiveHundredKr = 500,
    ThousandKr = 1000,
}

impl Denomination {
    /// Every denomination, in ascending value order.
    pub const ALL: [Denomination; 8] = [
        Denomination::OneKr,
        Denomination::FiveKr,
        Denomination::TenKr,
        Denomination::TwentyKr,
        Denomination::FiftyKr,
        Denomination::HundredKr,
        Denomination::FiveHundredKr,
        Denomination::ThousandKr,
    ];

    /// Number of denominations (size of the money pool).
    pub const COUNT: usize = Self::ALL.len();

    /// Face value in kronor.
    #[inline]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Face value as a `Money` amount.
    #[inline]
    pub const fn amount(self) -> Money {
        Money::from_kr(self as u64)
    }

    /// Position of this denomination in [`Denomination::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Denomination::OneKr => 0,
            Denomination::FiveKr => 1,
            Denomination::TenKr => 2,
            Denomination::TwentyKr => 3,
            Denomination::FiftyKr => 4,
            Denomination::HundredKr => 5,
            Denomination::FiveHundredKr => 6,
            Denomination::ThousandKr => 7,
        }
    }

    /// Variant name, e.g. `"HundredKr"`.
    pub const fn name(self) -> &'static str {
        match self {
            Denomination::OneKr => "OneKr",
            Denomination::FiveKr => "FiveKr",
            Denomination::TenKr => "TenKr",
            Denomination::TwentyKr => "TwentyKr",
            Denomination::FiftyKr => "FiftyKr",
            Denomination::HundredKr => "HundredKr",
            Denomination::FiveHundredKr => "FiveHundredKr",
            Denomination::ThousandKr => "ThousandKr",
        }
    }

    /// Iterates from the largest denomination down to the smallest.
    pub fn descending() -> impl Iterator<Item = Denomination> {
        Self::ALL.into_iter().rev()
    }

    /// The menu shown to customers: `"1kr, 5kr, …, 1000kr"`.
    pub fn menu() -> String {
        Self::ALL
            .iter()
            .map(|d| format!("{}kr", d.value()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kr", self.value())
    }
}

impl From<Denomination> for u32 {
    fn from(d: Denomination) -> Self {
        d.value()
    }
}

impl TryFrom<u32> for Denomination {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|d| d.value() == value)
            .ok_or_else(denomination_not_allowed)
    }
}

/// Parses customer input.
///
/// Accepts a face value (`"100"`, `"100kr"`, `"100 KR"`) or a variant name
/// (`"HundredKr"`), case-insensitive and surrounding whitespace ignored.
impl FromStr for Denomination {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();

        if let Some(d) = Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(&input))
        {
            return Ok(d);
        }

        let digits = input
            .strip_suffix("kr")
            .map(str::trim_end)
            .unwrap_or(&input);

        digits
            .parse::<u32>()
            .map_err(|_| denomination_not_allowed())
            .and_then(Denomination::try_from)
    }
}

fn denomination_not_allowed() -> ValidationError {
    ValidationError::NotAllowed {
        field: "denomination".to_string(),
        allowed: Denomination::ALL
            .iter()
            .map(|d| d.value().to_string())
            .collect(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

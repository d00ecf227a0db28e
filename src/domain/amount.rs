use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Сколько знаков после запятой у токена.
pub const DECIMALS: u32 = 9;

/// Сумма в базовых единицах (10^-9 токена). Обёртка над u64,
/// чтобы не путать деньги с индексами и счётчиками.
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Amount(pub u64);

/// Ошибки разбора десятичной записи суммы ("0.02").
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("пустая строка вместо суммы")]
    Empty,

    #[error("недопустимый символ в сумме: {0:?}")]
    InvalidDigit(char),

    #[error("слишком много знаков после запятой (максимум 9)")]
    TooManyDecimals,

    #[error("сумма не помещается в u64 базовых единиц")]
    Overflow,
}

impl Amount {
    pub const ZERO: Amount = Amount(0);
    pub const MAX: Amount = Amount(u64::MAX);

    /// Один целый токен.
    pub const UNIT: Amount = Amount(10u64.pow(DECIMALS));

    pub fn new(base_units: u64) -> Self {
        Amount(base_units)
    }

    /// `n` целых токенов (с насыщением).
    pub fn from_tokens(n: u64) -> Self {
        Amount(n.saturating_mul(Self::UNIT.0))
    }

    /// Сотые доли токена: `from_cents(2)` = 0.02.
    pub fn from_cents(cents: u64) -> Self {
        Amount(cents.saturating_mul(Self::UNIT.0 / 100))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Безопасное вычитание, не даёт уйти в минус.
    pub fn saturating_sub(self, other: Amount) -> Amount {
        Amount(self.0.saturating_sub(other.0))
    }

    /// Разобрать десятичную запись в токенах: "1", "0.02", ".5".
    pub fn parse_tokens(s: &str) -> Result<Amount, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(AmountParseError::Empty);
        }
        if frac.len() > DECIMALS as usize {
            return Err(AmountParseError::TooManyDecimals);
        }

        let whole_units = parse_digits(whole)?
            .checked_mul(Self::UNIT.0)
            .ok_or(AmountParseError::Overflow)?;

        // "02" → 02 * 10^(9-2)
        let frac_units = parse_digits(frac)?
            .checked_mul(10u64.pow(DECIMALS - frac.len() as u32))
            .ok_or(AmountParseError::Overflow)?;

        whole_units
            .checked_add(frac_units)
            .map(Amount)
            .ok_or(AmountParseError::Overflow)
    }
}

fn parse_digits(s: &str) -> Result<u64, AmountParseError> {
    let mut acc: u64 = 0;
    for c in s.chars() {
        let d = c.to_digit(10).ok_or(AmountParseError::InvalidDigit(c))?;
        acc = acc
            .checked_mul(10)
            .and_then(|v| v.checked_add(d as u64))
            .ok_or(AmountParseError::Overflow)?;
    }
    Ok(acc)
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse_tokens(s)
    }
}

/// Печатаем в токенах, без хвостовых нулей: 20_000_000 → "0.02".
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::UNIT.0;
        let frac = self.0 % Self::UNIT.0;
        if frac == 0 {
            return write!(f, "{}", whole);
        }
        let digits = format!("{:0width$}", frac, width = DECIMALS as usize);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Self::Output {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Self::Output {
        Amount(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}


use crate::error::AmountError;
use smol_str::SmolStr;
use std::{
    collections::BTreeMap,
    fmt,
    ops::{AddAssign, SubAssign},
};
use uuid::Uuid;

/// Identifies the group-expense context (one chat channel).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(SmolStr);

impl EventId {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(SmolStr::new(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty id means the transport could not tell us where the message came from.
    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a participant within one event.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PayerId(SmolStr);

impl PayerId {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(SmolStr::new(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaymentId(Uuid);

impl PaymentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse_str(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value).map(Self)
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative count of the smallest currency unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Yen(i64);

impl Yen {
    pub const ZERO: Self = Self(0);

    pub fn new(amount: i64) -> Result<Self, AmountError> {
        if amount < 0 {
            return Err(AmountError::Negative(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn multiply_by(self, multiplier: i64) -> Result<Self, AmountError> {
        if multiplier < 0 {
            return Err(AmountError::NegativeMultiplier(multiplier));
        }
        self.0
            .checked_mul(multiplier)
            .map(Self)
            .ok_or(AmountError::Overflow)
    }

    /// Divides rounding up, so `divisor` shares never sum to less than `self`.
    pub fn ceil_divide_by(self, divisor: i64) -> Result<Self, AmountError> {
        if divisor <= 0 {
            return Err(AmountError::NonPositiveDivisor(divisor));
        }
        Ok(Self(self.0 / divisor + i64::from(self.0 % divisor != 0)))
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, AmountError> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(AmountError::Overflow)
    }
}

impl TryFrom<u64> for Yen {
    type Error = AmountError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map(Self)
            .map_err(|_| AmountError::Overflow)
    }
}

impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Net position of a participant for one settlement run.
///
/// Positive: owes the group. Negative: the group owes them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Balance(i64);

impl Balance {
    pub const ZERO: Self = Self(0);

    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn signum(self) -> i64 {
        self.0.signum()
    }

    pub fn checked_add(self, amount: Yen) -> Option<Self> {
        self.0.checked_add(amount.amount()).map(Self)
    }

    pub fn checked_sub(self, amount: Yen) -> Option<Self> {
        self.0.checked_sub(amount.amount()).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AddAssign<Yen> for Balance {
    fn add_assign(&mut self, rhs: Yen) {
        self.0 += rhs.amount();
    }
}

impl SubAssign<Yen> for Balance {
    fn sub_assign(&mut self, rhs: Yen) {
        self.0 -= rhs.amount();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payer {
    pub id: PayerId,
    pub event_id: EventId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payment {
    pub id: PaymentId,
    pub event_id: EventId,
    pub payer_id: PayerId,
    pub amount: Yen,
}

impl Payment {
    pub fn new(event_id: EventId, payer_id: PayerId, amount: Yen) -> Self {
        Self {
            id: PaymentId::new(),
            event_id,
            payer_id,
            amount,
        }
    }
}

/// Ordered by payer id, which makes greedy tie-breaks deterministic.
pub type MemberBalances = BTreeMap<PayerId, Balance>;

/// `from` pays `to` this amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: PayerId,
    pub to: PayerId,
    pub amount: Yen,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub total: Yen,
    pub instructions: Vec<Transfer>,
}

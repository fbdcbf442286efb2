//! Bill denominations available in the dispenser.

use rust_decimal::Decimal;

/// A bill face value, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Denomination {
    face_value: u32,
}

impl Denomination {
    /// 10 currency units.
    pub const TEN: Self = Self::new(10);
    /// 20 currency units.
    pub const TWENTY: Self = Self::new(20);
    /// 50 currency units.
    pub const FIFTY: Self = Self::new(50);
    /// 100 currency units.
    pub const HUNDRED: Self = Self::new(100);

    /// Every denomination, strictly descending by face value.
    ///
    /// The greedy decomposition walks this array front to back.
    pub const DESCENDING: [Self; 4] = [Self::HUNDRED, Self::FIFTY, Self::TWENTY, Self::TEN];

    const fn new(face_value: u32) -> Self {
        Self { face_value }
    }

    /// The smallest bill; every dispensable amount is a multiple of it.
    #[must_use]
    pub const fn smallest() -> Self {
        Self::DESCENDING[Self::DESCENDING.len() - 1]
    }

    /// Returns the face value in whole currency units.
    #[must_use]
    pub const fn face_value(self) -> u32 {
        self.face_value
    }

    /// Returns the face value as an exact decimal.
    #[must_use]
    pub fn value(self) -> Decimal {
        Decimal::from(self.face_value)
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.face_value)
    }
}

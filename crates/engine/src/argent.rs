use std::{
    fmt,
    ops::{Add, AddAssign},
    str::FromStr,
};

use crate::EngineError;

/// Monetary amount represented as **integer cents**.
///
/// Use this type for every montant the client touches (operation headers,
/// detail lines, budgets) so no floating point ever reaches the wire.
///
/// # Examples
///
/// ```rust
/// use engine::Centimes;
///
/// let montant = Centimes::new(12_50);
/// assert_eq!(montant.centimes(), 1250);
/// assert_eq!(montant.to_euros_string(), "12.50");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator,
/// rejects signs and more than 2 decimals):
///
/// ```rust
/// use engine::Centimes;
///
/// assert_eq!("12,50".parse::<Centimes>().unwrap().centimes(), 1250);
/// assert_eq!("10".parse::<Centimes>().unwrap().centimes(), 1000);
/// assert!("12.345".parse::<Centimes>().is_err());
/// assert!("abc".parse::<Centimes>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Centimes(i64);

impl Centimes {
    pub const ZERO: Centimes = Centimes(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(centimes: i64) -> Self {
        Self(centimes)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn centimes(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is strictly positive, which is what
    /// every submittable montant must be.
    #[must_use]
    pub const fn est_positif(self) -> bool {
        self.0 > 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Centimes) -> Option<Centimes> {
        self.0.checked_add(rhs.0).map(Centimes)
    }

    /// Renders the amount as a plain euros string (`1250` -> `"12.50"`).
    ///
    /// Parsing the result back yields the same value, so loading a stored
    /// montant into a form field and submitting it unchanged is lossless.
    #[must_use]
    pub fn to_euros_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{sign}{}.{:02}", abs / 100, abs % 100)
    }

    /// Parses an optional form field: blank means absent, anything else
    /// must be a valid amount.
    pub fn parse_opt(input: &str) -> Result<Option<Centimes>, EngineError> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        input.parse().map(Some)
    }
}

impl fmt::Display for Centimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{},{:02} €", abs / 100, abs % 100)
    }
}

impl From<i64> for Centimes {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Centimes> for i64 {
    fn from(value: Centimes) -> Self {
        value.0
    }
}

impl Add for Centimes {
    type Output = Centimes;

    fn add(self, rhs: Centimes) -> Self::Output {
        Centimes(self.0 + rhs.0)
    }
}

impl AddAssign for Centimes {
    fn add_assign(&mut self, rhs: Centimes) {
        self.0 += rhs.0;
    }
}

impl FromStr for Centimes {
    type Err = EngineError;

    /// Parses a decimal euros string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator. Rejects empty strings,
    /// signs, letters, and more than 2 fractional digits. This mirrors the
    /// amount inputs of the screens, which strip everything but digits and
    /// separators as the user types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalide = || EngineError::MontantInvalide(s.trim().to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EngineError::MontantInvalide("montant vide".to_string()));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return Err(invalide());
        }

        let normalise = trimmed.replace(',', ".");
        let mut parts = normalise.split('.');
        let euros_str = parts.next().ok_or_else(invalide)?;
        let centimes_str = parts.next();
        if parts.next().is_some() {
            return Err(invalide());
        }

        if euros_str.is_empty() {
            return Err(invalide());
        }
        let euros: i64 = euros_str.parse().map_err(|_| invalide())?;

        let centimes: i64 = match centimes_str {
            None | Some("") => 0,
            Some(frac) if frac.len() == 1 => frac.parse::<i64>().map_err(|_| invalide())? * 10,
            Some(frac) if frac.len() == 2 => frac.parse::<i64>().map_err(|_| invalide())?,
            Some(_) => {
                return Err(EngineError::MontantInvalide(
                    "plus de deux décimales".to_string(),
                ));
            }
        };

        let total = euros
            .checked_mul(100)
            .and_then(|v| v.checked_add(centimes))
            .ok_or_else(|| EngineError::MontantInvalide("montant trop grand".to_string()))?;

        Ok(Centimes(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepte_point_ou_virgule() {
        assert_eq!("12,50".parse::<Centimes>().unwrap().centimes(), 1250);
        assert_eq!("12.50".parse::<Centimes>().unwrap().centimes(), 1250);
        assert_eq!("10".parse::<Centimes>().unwrap().centimes(), 1000);
        assert_eq!("10.5".parse::<Centimes>().unwrap().centimes(), 1050);
        assert_eq!("  2.30 ".parse::<Centimes>().unwrap().centimes(), 230);
        assert_eq!("0,01".parse::<Centimes>().unwrap().centimes(), 1);
        // Trailing separator tolerated, like an input still being typed.
        assert_eq!("12,".parse::<Centimes>().unwrap().centimes(), 1200);
    }

    #[test]
    fn parse_rejette_entrees_invalides() {
        assert!("".parse::<Centimes>().is_err());
        assert!("abc".parse::<Centimes>().is_err());
        assert!("12.345".parse::<Centimes>().is_err());
        assert!("-5".parse::<Centimes>().is_err());
        assert!("+5".parse::<Centimes>().is_err());
        assert!("1.2.3".parse::<Centimes>().is_err());
        assert!("1 000".parse::<Centimes>().is_err());
    }

    #[test]
    fn euros_string_round_trip() {
        for cents in [0, 1, 10, 99, 100, 1250, 3500, 123_456_789] {
            let montant = Centimes::new(cents);
            let texte = montant.to_euros_string();
            assert_eq!(texte.parse::<Centimes>().unwrap(), montant, "{texte}");
        }
    }

    #[test]
    fn parse_opt_traite_le_blanc_comme_absent() {
        assert_eq!(Centimes::parse_opt("   ").unwrap(), None);
        assert_eq!(
            Centimes::parse_opt("12,50").unwrap(),
            Some(Centimes::new(1250))
        );
        assert!(Centimes::parse_opt("abc").is_err());
    }

    #[test]
    fn display_format_francais() {
        assert_eq!(Centimes::new(1250).to_string(), "12,50 €");
        assert_eq!(Centimes::new(5).to_string(), "0,05 €");
    }
}

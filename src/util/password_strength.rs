//! Password strength meter scoring.

#[cfg(test)]
#[path = "password_strength_test.rs"]
mod password_strength_test;

use crate::util::validation::MIN_PASSWORD_LEN;

pub const MAX_SCORE: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Self::Weak,
            2 | 3 => Self::Medium,
            _ => Self::Strong,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }

    /// Bar and text color.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Weak => "#dc2626",
            Self::Medium => "#ca8a04",
            Self::Strong => "#16a34a",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub level: StrengthLevel,
}

impl PasswordStrength {
    /// Width of the fill bar in percent.
    #[must_use]
    pub fn fill_percent(self) -> u32 {
        u32::from(self.score) * 100 / u32::from(MAX_SCORE)
    }
}

/// Score `password`; `None` for an empty value, which hides the meter.
///
/// One point each for length, lowercase, uppercase, digit, and any other
/// character.
#[must_use]
pub fn evaluate(password: &str) -> Option<PasswordStrength> {
    if password.is_empty() {
        return None;
    }
    let checks = [
        password.chars().count() >= MIN_PASSWORD_LEN,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().filter(|passed| **passed).count();
    let score = u8::try_from(score).unwrap_or(MAX_SCORE);
    Some(PasswordStrength {
        score,
        level: StrengthLevel::from_score(score),
    })
}

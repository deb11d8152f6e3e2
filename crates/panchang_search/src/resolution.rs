//! Authoritative vs. fallback results of bounded searches.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A bounded search ran out of steps without meeting its stop condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[error("{search} exhausted its budget of {budget} steps")]
pub struct SearchExhausted {
    pub search: &'static str,
    pub budget: u32,
}

/// Outcome of a bounded search.
///
/// `Fallback` carries a documented substitute value together with the
/// exhausted search that produced it, so callers and renderers can tell an
/// approximation from a located value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Resolution<T> {
    Found(T),
    Fallback { value: T, cause: SearchExhausted },
}

impl<T> Resolution<T> {
    pub fn fallback(value: T, search: &'static str, budget: u32) -> Self {
        Self::Fallback {
            value,
            cause: SearchExhausted { search, budget },
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Found(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Found(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Self::Found(value) => Resolution::Found(f(value)),
            Self::Fallback { value, cause } => Resolution::Fallback {
                value: f(value),
                cause,
            },
        }
    }
}

impl<T: Copy> Resolution<T> {
    pub fn get(&self) -> T {
        *self.value()
    }
}

impl<T: fmt::Display> fmt::Display for Resolution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(value) => fmt::Display::fmt(value, f),
            Self::Fallback { value, .. } => write!(f, "{value} (approx.)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_keeps_value_and_cause() {
        let r = Resolution::fallback(7u8, "lunar month", 140);
        assert!(r.is_fallback());
        assert_eq!(r.get(), 7);
        assert_eq!(
            r.map(u32::from),
            Resolution::Fallback {
                value: 7u32,
                cause: SearchExhausted {
                    search: "lunar month",
                    budget: 140
                }
            }
        );
    }

    #[test]
    fn display_marks_approximation() {
        assert_eq!(Resolution::Found("Chaitra").to_string(), "Chaitra");
        assert_eq!(
            Resolution::fallback("Chaitra", "lunar month", 1).to_string(),
            "Chaitra (approx.)"
        );
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    Primes,
    Fibo,
    Even,
    Rand,
}

impl NumberKind {
    pub const ALL: [NumberKind; 4] = [Self::Primes, Self::Fibo, Self::Even, Self::Rand];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primes => "primes",
            Self::Fibo => "fibo",
            Self::Even => "even",
            Self::Rand => "rand",
        }
    }

    /// Endpoint path relative to the service base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Primes => "/primes",
            Self::Fibo => "/fibo",
            Self::Even => "/even",
            Self::Rand => "/rand",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Primes => "Prime Numbers",
            Self::Fibo => "Fibonacci Numbers",
            Self::Even => "Even Numbers",
            Self::Rand => "Random Numbers",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberKind {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| FetchError::InvalidArgument(s.to_string()))
    }
}

//! hc_core — Core types for the hemiciclo engine.
//!
//! This crate is **I/O-free**. It defines stable types/APIs used across the
//! engine (`hc_fetch`, `hc_algo`, `hc_pipeline`, `hc_report`, `hc_cli`).
//!
//! - Registry tokens: `Acronym`, `TerritoryKey`
//! - Party/region model: `PartyStanding`, `RegionSnapshot`
//! - Static district roster + reserved national key
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod errors {
    use std::fmt;

    /// Minimal error set for core-domain validation & parsing.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        InvalidAcronym,
        InvalidTerritoryKey,
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::InvalidAcronym => write!(f, "invalid party acronym"),
                CoreError::InvalidTerritoryKey => write!(f, "invalid territory key"),
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub mod tokens {
    //! Token newtypes for party acronyms and territory keys, with strict charsets.

    use crate::errors::CoreError;
    use std::fmt;
    use std::str::FromStr;

    #[cfg(feature = "serde")]
    use serde::{Deserialize, Serialize};

    /// Party acronyms as published upstream, e.g. `PS`, `B.E.`, `PPD/PSD.CDS-PP`.
    fn is_acronym(s: &str) -> bool {
        (1..=64).contains(&s.len())
            && s.bytes().all(|b| {
                matches!(b,
                    b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' |
                    b'_' | b'-' | b':' | b'.' | b'/'
                )
            })
    }

    /// Opaque territory identifiers, e.g. `LOCAL-110000` or the reserved `TOTAL`.
    fn is_territory_key(s: &str) -> bool {
        (1..=64).contains(&s.len())
            && s.bytes()
                .all(|b| matches!(b, b'A'..=b'Z' | b'0'..=b'9' | b'-'))
    }

    macro_rules! def_token {
        ($name:ident, $check:ident, $err:expr) => {
            #[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
            #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
            #[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
            pub struct $name(String);

            impl $name {
                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl FromStr for $name {
                type Err = CoreError;
                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    if $check(s) {
                        Ok(Self(s.to_string()))
                    } else {
                        Err($err)
                    }
                }
            }

            impl TryFrom<String> for $name {
                type Error = CoreError;
                fn try_from(s: String) -> Result<Self, Self::Error> {
                    s.parse()
                }
            }

            impl From<$name> for String {
                fn from(t: $name) -> String {
                    t.0
                }
            }
        };
    }

    def_token!(Acronym, is_acronym, CoreError::InvalidAcronym);
    def_token!(TerritoryKey, is_territory_key, CoreError::InvalidTerritoryKey);

}

pub mod model;
pub mod roster;

// Commonly used items (stable symbols used across the workspace)
pub use errors::CoreError;
pub use model::{PartyStanding, RegionSnapshot};
pub use roster::{district_roster, find_region, RegionSpec, NATIONAL_KEY};
pub use tokens::{Acronym, TerritoryKey};

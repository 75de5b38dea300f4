//! Lattice geometry tag.

use std::fmt;
use std::str::FromStr;
use strata_core::ConfigError;

/// Which lattice geometry to build.
///
/// Selected once at configuration time; [`crate::build`] dispatches on it.
///
/// # Examples
///
/// ```
/// use strata_lattice::LatticeKind;
///
/// let kind: LatticeKind = "BCC".parse().unwrap();
/// assert_eq!(kind, LatticeKind::Bcc);
/// assert!("hcp".parse::<LatticeKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LatticeKind {
    /// Body-centred cubic (100) surface.
    Bcc,
}

impl fmt::Display for LatticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bcc => write!(f, "BCC"),
        }
    }
}

impl FromStr for LatticeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BCC" => Ok(Self::Bcc),
            _ => Err(ConfigError::UnknownLatticeKind {
                name: s.to_string(),
            }),
        }
    }
}

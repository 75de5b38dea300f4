//! Global physical conditions shared by every rate law.

use crate::error::ConfigError;

/// Boltzmann constant [J/K].
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// Avogadro constant [1/mol].
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// Process conditions and the physical constants rate laws are expressed in.
///
/// The constants are configurable so that decks written against other
/// unit conventions evaluate identically.
#[derive(Clone, Debug, PartialEq)]
pub struct Conditions {
    /// Substrate temperature [K]. Default: 500.
    pub temperature: f64,
    /// Gas-phase pressure [Pa]. Default: 101325.
    pub pressure: f64,
    /// Boltzmann constant [J/K].
    pub boltzmann: f64,
    /// Avogadro constant [1/mol].
    pub avogadro: f64,
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            temperature: 500.0,
            pressure: 101_325.0,
            boltzmann: BOLTZMANN,
            avogadro: AVOGADRO,
        }
    }
}

impl Conditions {
    /// Conditions at the given temperature with default pressure and constants.
    pub fn at_temperature(temperature: f64) -> Self {
        Self {
            temperature,
            ..Self::default()
        }
    }

    /// Check that every value is physically meaningful.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("temperature", self.temperature),
            ("boltzmann", self.boltzmann),
            ("avogadro", self.avogadro),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidConditions {
                    reason: format!("{name} must be finite and > 0, got {value}"),
                });
            }
        }
        if !self.pressure.is_finite() || self.pressure < 0.0 {
            return Err(ConfigError::InvalidConditions {
                reason: format!("pressure must be finite and >= 0, got {}", self.pressure),
            });
        }
        Ok(())
    }
}

//! Rate laws.
//!
//! Three kinds are supported:
//! - **constant**: `k * N_sites`, a site-count-scaled global propensity
//! - **arrhenius**: `v0 * exp(-(Ea / N_A) / (k_B * T))`, with the
//!   activation energy given per mole and evaluated per entity
//! - **simple** (Hertz–Knudsen adsorption flux):
//!   `s0 * y * P / (C_tot * sqrt(2π * m * k_B * T))` with `m = MW / N_A`
//!
//! Parameter lists use the input-deck convention of a keyword followed by
//! its numeric arguments, e.g. `["arrhenius", "1e13", "80000"]`.

use std::f64::consts::PI;
use strata_core::{ConfigError, Conditions};

/// A rate law and its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RateLaw {
    /// Fixed per-site rate [1/s].
    Constant {
        /// Rate constant.
        rate: f64,
    },
    /// Thermally activated rate.
    Arrhenius {
        /// Pre-exponential factor `v0` [1/s].
        prefactor: f64,
        /// Activation energy `Ea` [J/mol].
        activation_energy: f64,
    },
    /// Kinetic-theory impingement flux times a sticking coefficient.
    HertzKnudsen {
        /// Sticking coefficient `s0` [-].
        sticking: f64,
        /// Gas-phase molar fraction `y` [-].
        molar_fraction: f64,
        /// Surface site concentration `C_tot` [sites/m^2].
        site_density: f64,
        /// Molecular weight `MW` [kg/mol].
        molecular_weight: f64,
    },
}

impl RateLaw {
    /// Parse a deck-style parameter list for process `process`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnsupportedRateLaw`] for an unknown or missing keyword
    /// - [`ConfigError::InvalidRateParameter`] for wrong arity or a value
    ///   that is not a finite non-negative number
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_process::RateLaw;
    ///
    /// let law = RateLaw::from_params("Reaction", &["constant", "2.5"]).unwrap();
    /// assert_eq!(law, RateLaw::Constant { rate: 2.5 });
    /// assert!(RateLaw::from_params("Reaction", &["eyring", "1"]).is_err());
    /// ```
    pub fn from_params(process: &str, params: &[&str]) -> Result<Self, ConfigError> {
        let Some((keyword, args)) = params.split_first() else {
            return Err(ConfigError::UnsupportedRateLaw {
                process: process.to_string(),
                keyword: String::new(),
            });
        };
        let keyword = keyword.trim().to_ascii_lowercase();
        let law = match keyword.as_str() {
            "constant" => {
                let [rate] = numbers::<1>(process, &keyword, args)?;
                Self::Constant { rate }
            }
            "arrhenius" => {
                let [prefactor, activation_energy] = numbers::<2>(process, &keyword, args)?;
                Self::Arrhenius {
                    prefactor,
                    activation_energy,
                }
            }
            "simple" => {
                let [sticking, molar_fraction, site_density, molecular_weight] =
                    numbers::<4>(process, &keyword, args)?;
                Self::HertzKnudsen {
                    sticking,
                    molar_fraction,
                    site_density,
                    molecular_weight,
                }
            }
            _ => {
                return Err(ConfigError::UnsupportedRateLaw {
                    process: process.to_string(),
                    keyword,
                })
            }
        };
        law.validate(process)?;
        Ok(law)
    }

    /// Check parameter ranges.
    pub fn validate(&self, process: &str) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidRateParameter {
            process: process.to_string(),
            reason,
        };
        let values: Vec<(&str, f64)> = match self {
            Self::Constant { rate } => vec![("rate", *rate)],
            Self::Arrhenius {
                prefactor,
                activation_energy,
            } => vec![
                ("prefactor", *prefactor),
                ("activation energy", *activation_energy),
            ],
            Self::HertzKnudsen {
                sticking,
                molar_fraction,
                site_density,
                molecular_weight,
            } => vec![
                ("sticking coefficient", *sticking),
                ("molar fraction", *molar_fraction),
                ("site density", *site_density),
                ("molecular weight", *molecular_weight),
            ],
        };
        for (name, v) in values {
            if !v.is_finite() || v < 0.0 {
                return Err(invalid(format!("{name} must be finite and >= 0, got {v}")));
            }
        }
        if let Self::HertzKnudsen {
            sticking,
            molar_fraction,
            site_density,
            molecular_weight,
        } = self
        {
            if *sticking > 1.0 || *molar_fraction > 1.0 {
                return Err(invalid(
                    "sticking coefficient and molar fraction must be <= 1".into(),
                ));
            }
            if *site_density == 0.0 || *molecular_weight == 0.0 {
                return Err(invalid(
                    "site density and molecular weight must be > 0".into(),
                ));
            }
        }
        Ok(())
    }

    /// Evaluate the law.
    pub fn probability(&self, site_count: usize, conditions: &Conditions) -> f64 {
        self.probability_scaled(1.0, site_count, conditions)
    }

    /// Evaluate the law with the activation energy multiplied by
    /// `energy_scale` (bond counting for coordination-keyed processes).
    /// Only the Arrhenius law is affected.
    pub fn probability_scaled(
        &self,
        energy_scale: f64,
        site_count: usize,
        conditions: &Conditions,
    ) -> f64 {
        match *self {
            Self::Constant { rate } => constant(rate, site_count),
            Self::Arrhenius {
                prefactor,
                activation_energy,
            } => arrhenius(prefactor, activation_energy * energy_scale, conditions),
            Self::HertzKnudsen {
                sticking,
                molar_fraction,
                site_density,
                molecular_weight,
            } => {
                let m = molecular_weight / conditions.avogadro;
                let flux_norm = (2.0 * PI * m * conditions.boltzmann * conditions.temperature).sqrt();
                sticking * molar_fraction * conditions.pressure / (site_density * flux_norm)
            }
        }
    }
}

/// `rate * site_count`.
pub fn constant(rate: f64, site_count: usize) -> f64 {
    rate * site_count as f64
}

/// `v0 * exp(-(Ea / N_A) / (k_B * T))` with `Ea` in J/mol.
pub fn arrhenius(prefactor: f64, activation_energy: f64, conditions: &Conditions) -> f64 {
    let ea = activation_energy / conditions.avogadro;
    prefactor * (-ea / (conditions.boltzmann * conditions.temperature)).exp()
}

fn numbers<const N: usize>(
    process: &str,
    keyword: &str,
    args: &[&str],
) -> Result<[f64; N], ConfigError> {
    if args.len() != N {
        return Err(ConfigError::InvalidRateParameter {
            process: process.to_string(),
            reason: format!("'{keyword}' takes {N} parameter(s), got {}", args.len()),
        });
    }
    let mut out = [0.0; N];
    for (slot, raw) in out.iter_mut().zip(args) {
        *slot = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidRateParameter {
                process: process.to_string(),
                reason: format!("'{raw}' is not a number"),
            })?;
    }
    Ok(out)
}

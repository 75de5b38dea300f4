//! Shared construction for the coordination-keyed families.

use strata_core::{coordination_class, ConfigError, Conditions};
use strata_process::RateLaw;

/// Highest coordination a four-neighbour surface site can have.
pub(crate) const MAX_COORDINATION: usize = 5;

/// Validate `neighbours` and `law`, returning the class name and the
/// bond-counted probability.
pub(crate) fn resolve(
    family: &str,
    neighbours: usize,
    law: RateLaw,
    site_count: usize,
    conditions: &Conditions,
) -> Result<(String, f64), ConfigError> {
    let name = coordination_class(family, neighbours);
    if !(1..=MAX_COORDINATION).contains(&neighbours) {
        return Err(ConfigError::InvalidCoordination {
            process: name,
            neighbours,
        });
    }
    if let RateLaw::HertzKnudsen { .. } = law {
        return Err(ConfigError::UnsupportedRateLaw {
            process: name,
            keyword: "simple".into(),
        });
    }
    law.validate(&name)?;
    let probability = law.probability_scaled(neighbours as f64, site_count, conditions);
    Ok((name, probability))
}

//! The process-classification registry.
//!
//! Maps each process class name (e.g. `"Desorption 3N"`) to the set of
//! sites currently eligible for it. The engine sums class sizes into the
//! total propensity and draws a uniform site inside the chosen class.

use crate::error::RegistryError;
use crate::id::SiteId;
use crate::random::RandomSource;
use indexmap::{IndexMap, IndexSet};

/// Name prefix of adsorption classes. Height reclassification never
/// touches classes with this prefix.
pub const ADSORPTION_PREFIX: &str = "Adsorption";

/// Family name of the coordination-keyed desorption classes.
pub const DESORPTION: &str = "Desorption";

/// Family name of the coordination-keyed diffusion classes.
pub const DIFFUSION: &str = "Diffusion";

/// Class name for a coordination-keyed family, e.g. `"Diffusion 3N"`.
pub fn coordination_class(family: &str, neighbours: usize) -> String {
    format!("{family} {neighbours}N")
}

/// Process class name → eligible site ids.
///
/// Classes must be [`register`](Self::register)ed before use; every
/// operation naming a class fails with [`RegistryError::UnknownClass`]
/// otherwise. Class and member order are insertion order, so iteration
/// is deterministic for a given event history.
#[derive(Clone, Debug, Default)]
pub struct ClassRegistry {
    classes: IndexMap<String, IndexSet<SiteId>>,
}

impl ClassRegistry {
    /// An empty registry with no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a class. Returns `false` if it already existed.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.classes.contains_key(&name) {
            return false;
        }
        self.classes.insert(name, IndexSet::new());
        true
    }

    /// Whether the class has been registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Registered class names in registration order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Add a site to a class.
    pub fn add_to_class(&mut self, name: &str, site: SiteId) -> Result<(), RegistryError> {
        self.class_mut(name)?.insert(site);
        Ok(())
    }

    /// Remove a site from a class. Returns whether it was a member.
    pub fn remove_from_class(&mut self, name: &str, site: SiteId) -> Result<bool, RegistryError> {
        Ok(self.class_mut(name)?.swap_remove(&site))
    }

    /// Remove a site from every class whose name does not start with
    /// `excluded_prefix`. Returns the number of classes it was removed from.
    pub fn remove_from_all_except(&mut self, site: SiteId, excluded_prefix: &str) -> usize {
        let mut removed = 0;
        for (name, members) in self.classes.iter_mut() {
            if !name.starts_with(excluded_prefix) && members.swap_remove(&site) {
                removed += 1;
            }
        }
        removed
    }

    /// Names of every class currently containing `site`.
    pub fn classes_for(&self, site: SiteId) -> Vec<&str> {
        self.classes
            .iter()
            .filter(|(_, members)| members.contains(&site))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Eligible sites of a class.
    pub fn class(&self, name: &str) -> Result<&IndexSet<SiteId>, RegistryError> {
        self.classes
            .get(name)
            .ok_or_else(|| RegistryError::UnknownClass {
                name: name.to_string(),
            })
    }

    /// Number of eligible sites in a class.
    pub fn len(&self, name: &str) -> Result<usize, RegistryError> {
        self.class(name).map(IndexSet::len)
    }

    /// Whether `site` is in the class.
    pub fn contains(&self, name: &str, site: SiteId) -> Result<bool, RegistryError> {
        self.class(name).map(|members| members.contains(&site))
    }

    /// Draw a uniformly random member of a class; `None` if it is empty.
    pub fn pick(
        &self,
        name: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<Option<SiteId>, RegistryError> {
        let members = self.class(name)?;
        if members.is_empty() {
            return Ok(None);
        }
        let i = rng.uniform_int(0, members.len());
        Ok(members.get_index(i).copied())
    }

    fn class_mut(&mut self, name: &str) -> Result<&mut IndexSet<SiteId>, RegistryError> {
        self.classes
            .get_mut(name)
            .ok_or_else(|| RegistryError::UnknownClass {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn registry() -> ClassRegistry {
        let mut r = ClassRegistry::new();
        r.register("Adsorption");
        for n in 1..=5 {
            r.register(coordination_class(DESORPTION, n));
            r.register(coordination_class(DIFFUSION, n));
        }
        r
    }

    #[test]
    fn class_name_format() {
        assert_eq!(coordination_class(DESORPTION, 3), "Desorption 3N");
        assert_eq!(coordination_class(DIFFUSION, 1), "Diffusion 1N");
    }

    #[test]
    fn register_twice_returns_false() {
        let mut r = ClassRegistry::new();
        assert!(r.register("Adsorption"));
        assert!(!r.register("Adsorption"));
        assert_eq!(r.class_names().count(), 1);
    }

    #[test]
    fn unknown_class_fails_loudly() {
        let mut r = registry();
        let err = r.add_to_class("Desorption 9N", SiteId(0)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownClass {
                name: "Desorption 9N".into()
            }
        );
        assert!(r.class("Nope").is_err());
        assert!(r.remove_from_class("Nope", SiteId(0)).is_err());
    }

    #[test]
    fn remove_from_all_except_keeps_adsorption() {
        let mut r = registry();
        let s = SiteId(4);
        r.add_to_class("Adsorption", s).unwrap();
        r.add_to_class("Desorption 2N", s).unwrap();
        r.add_to_class("Diffusion 2N", s).unwrap();

        let removed = r.remove_from_all_except(s, ADSORPTION_PREFIX);
        assert_eq!(removed, 2);
        assert_eq!(r.classes_for(s), vec!["Adsorption"]);
    }

    #[test]
    fn classes_for_lists_all_memberships() {
        let mut r = registry();
        r.add_to_class("Desorption 5N", SiteId(1)).unwrap();
        r.add_to_class("Diffusion 5N", SiteId(1)).unwrap();
        r.add_to_class("Diffusion 4N", SiteId(2)).unwrap();
        assert_eq!(r.classes_for(SiteId(1)), vec!["Desorption 5N", "Diffusion 5N"]);
        assert_eq!(r.classes_for(SiteId(2)), vec!["Diffusion 4N"]);
        assert!(r.classes_for(SiteId(3)).is_empty());
    }

    #[test]
    fn pick_from_empty_class_is_none() {
        let r = registry();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(r.pick("Adsorption", &mut rng).unwrap(), None);
    }

    #[test]
    fn pick_reaches_every_member() {
        let mut r = registry();
        for i in 0..4 {
            r.add_to_class("Adsorption", SiteId(i)).unwrap();
        }
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut seen = IndexSet::new();
        for _ in 0..200 {
            seen.insert(r.pick("Adsorption", &mut rng).unwrap().unwrap());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn len_and_contains_track_membership() {
        let mut r = registry();
        r.add_to_class("Diffusion 3N", SiteId(8)).unwrap();
        r.add_to_class("Diffusion 3N", SiteId(8)).unwrap();
        assert_eq!(r.len("Diffusion 3N").unwrap(), 1);
        assert!(r.contains("Diffusion 3N", SiteId(8)).unwrap());
        assert!(r.remove_from_class("Diffusion 3N", SiteId(8)).unwrap());
        assert!(!r.remove_from_class("Diffusion 3N", SiteId(8)).unwrap());
        assert_eq!(r.len("Diffusion 3N").unwrap(), 0);
    }
}

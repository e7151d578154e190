use log::warn;

/// Key identifying a ballot option, e.g. `"1"`.
pub type CandidateKey = String;

/// One ballot option: the key a vote records and the name a UI displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub key: CandidateKey,
    pub name: String,
}

impl Candidate {
    pub fn new(key: impl Into<CandidateKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// The fixed, ordered set of ballot options, defined once when a booth
/// opens and never changed while it runs. Only [`Catalog::new`] builds
/// one, so the no-duplicate-keys rule always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    candidates: Vec<Candidate>,
}

impl Catalog {
    /// Build a catalog, preserving definition order. A candidate whose key
    /// is already taken is dropped.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let mut unique: Vec<Candidate> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if unique.iter().any(|existing| existing.key == candidate.key) {
                warn!("Duplicate candidate key '{}' dropped from catalog", candidate.key);
                continue;
            }
            unique.push(candidate);
        }
        Self { candidates: unique }
    }

    /// Look up a candidate by key.
    pub fn get(&self, key: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| candidate.key == key)
    }

    /// The candidates in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Catalog {
        pub fn example() -> Self {
            Catalog::new(vec![
                Candidate::new("1", "DMK Party"),
                Candidate::new("2", "ADMK Party"),
                Candidate::new("3", "TVK Party"),
                Candidate::new("4", "BJP Party"),
                Candidate::new("5", "N.O.T.A"),
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_preserves_definition_order() {
        let catalog = Catalog::example();
        let keys = catalog.iter().map(|c| c.key.as_str()).collect::<Vec<_>>();
        assert_eq!(vec!["1", "2", "3", "4", "5"], keys);
    }

    #[test]
    fn duplicate_keys_are_dropped() {
        let catalog = Catalog::new(vec![
            Candidate::new("1", "First"),
            Candidate::new("2", "Second"),
            Candidate::new("1", "Impostor"),
        ]);

        assert_eq!(2, catalog.len());
        assert_eq!(Some("First"), catalog.get("1").map(|c| c.name.as_str()));
    }

    #[test]
    fn unknown_keys_are_absent() {
        assert!(Catalog::example().get("99").is_none());
        assert!(!Catalog::example().is_empty());
    }
}

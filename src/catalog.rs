//! Canonical benchmark-instance names and their resolution.
//!
//! The builtin table is the registered TSPLIB instance set the TSPSuite
//! harness benchmarks against: pure configuration data, looked up but
//! never mutated. Directory names in a result tree are matched against it
//! to decide which benchmark instance a group of runs belongs to.

/// Registry of canonical benchmark-instance names.
///
/// Names are held in a byte-sorted vector so resolution can binary-search
/// the exact-match fast path before falling back to a case-insensitive
/// scan.
#[derive(Debug, Clone)]
pub struct InstanceCatalog {
    names: Vec<String>,
}

impl InstanceCatalog {
    /// Catalogue over the builtin TSPLIB instance set.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_INSTANCES.iter().map(|name| (*name).to_owned()).collect(),
        }
    }

    /// Build a catalogue from arbitrary canonical names.
    ///
    /// Names are sorted and deduplicated; entries differing only by case
    /// are kept as distinct canonical names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    /// Number of registered instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Canonical names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Resolve a raw identifier to its canonical registered name.
    ///
    /// Exact match is the fast path (binary search over the sorted table).
    /// Source files use inconsistent casing, so a miss falls back to a
    /// linear case-insensitive scan, where the first match in sorted order
    /// wins. Entries differing only by case are tolerated; an exact match
    /// keeps precedence over an earlier-sorting cased variant.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        if let Ok(at) = self.names.binary_search_by(|name| name.as_str().cmp(raw)) {
            return Some(&self.names[at]);
        }
        self.names
            .iter()
            .find(|name| name.eq_ignore_ascii_case(raw))
            .map(String::as_str)
    }
}

impl Default for InstanceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builtin TSPLIB instance names, byte-sorted for binary search.
const BUILTIN_INSTANCES: &[&str] = &[
    "a280",
    "ali535",
    "att48",
    "att532",
    "bayg29",
    "bays29",
    "berlin52",
    "bier127",
    "br17",
    "brazil58",
    "brd14051",
    "brg180",
    "burma14",
    "ch130",
    "ch150",
    "d1291",
    "d15112",
    "d1655",
    "d18512",
    "d198",
    "d2103",
    "d493",
    "d657",
    "dantzig42",
    "dsj1000",
    "eil101",
    "eil51",
    "eil76",
    "fl1400",
    "fl1577",
    "fl3795",
    "fl417",
    "fnl4461",
    "fri26",
    "ft53",
    "ft70",
    "ftv170",
    "ftv33",
    "ftv35",
    "ftv38",
    "ftv44",
    "ftv47",
    "ftv55",
    "ftv64",
    "ftv70",
    "gil262",
    "gr120",
    "gr137",
    "gr17",
    "gr202",
    "gr21",
    "gr229",
    "gr24",
    "gr431",
    "gr48",
    "gr666",
    "gr96",
    "hk48",
    "kro124p",
    "kroA100",
    "kroA150",
    "kroA200",
    "kroB100",
    "kroB150",
    "kroB200",
    "kroC100",
    "kroD100",
    "kroE100",
    "lin105",
    "lin318",
    "linhp318",
    "nrw1379",
    "p43",
    "p654",
    "pa561",
    "pcb1173",
    "pcb3038",
    "pcb442",
    "pla33810",
    "pla7397",
    "pla85900",
    "pr1002",
    "pr107",
    "pr124",
    "pr136",
    "pr144",
    "pr152",
    "pr226",
    "pr2392",
    "pr264",
    "pr299",
    "pr439",
    "pr76",
    "rat195",
    "rat575",
    "rat783",
    "rat99",
    "rbg323",
    "rbg358",
    "rbg403",
    "rbg443",
    "rd100",
    "rd400",
    "rl11849",
    "rl1304",
    "rl1323",
    "rl1889",
    "rl5915",
    "rl5934",
    "ry48p",
    "si1032",
    "si175",
    "si535",
    "st70",
    "swiss42",
    "ts225",
    "tsp225",
    "u1060",
    "u1432",
    "u159",
    "u1817",
    "u2152",
    "u2319",
    "u574",
    "u724",
    "usa13509",
    "vm1084",
    "vm1748",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_sorted_and_unique() {
        let catalog = InstanceCatalog::builtin();
        let names: Vec<&str> = catalog.names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_resolve_exact() {
        let catalog = InstanceCatalog::builtin();
        assert_eq!(catalog.resolve("att48"), Some("att48"));
        assert_eq!(catalog.resolve("kroA100"), Some("kroA100"));
    }

    #[test]
    fn test_resolve_case_insensitive_fallback() {
        let catalog = InstanceCatalog::builtin();
        assert_eq!(catalog.resolve("ATT48"), Some("att48"));
        assert_eq!(catalog.resolve("KROA100"), Some("kroA100"));
        assert_eq!(catalog.resolve("Berlin52"), Some("berlin52"));
    }

    #[test]
    fn test_resolve_unknown() {
        let catalog = InstanceCatalog::builtin();
        assert_eq!(catalog.resolve("atlantis1"), None);
        assert_eq!(catalog.resolve(""), None);
    }

    #[test]
    fn test_exact_match_beats_earlier_cased_variant() {
        // "Abc" sorts before "abc"; an exact query for "abc" must not be
        // captured by the case-insensitive scan hitting "Abc" first.
        let catalog = InstanceCatalog::from_names(["Abc", "abc"]);
        assert_eq!(catalog.resolve("abc"), Some("abc"));
        assert_eq!(catalog.resolve("Abc"), Some("Abc"));
        // no exact match: first in sorted order wins, accepted ambiguity
        assert_eq!(catalog.resolve("ABC"), Some("Abc"));
    }

    #[test]
    fn test_from_names_sorts_and_dedups() {
        let catalog = InstanceCatalog::from_names(["beta", "alpha", "beta"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["alpha", "beta"]);
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every builtin name resolves to itself.
            #[test]
            fn prop_builtin_names_resolve_exactly(idx in 0usize..128) {
                let catalog = InstanceCatalog::builtin();
                let name = catalog.names().nth(idx).unwrap().to_owned();
                prop_assert_eq!(catalog.resolve(&name), Some(name.as_str()));
            }

            /// Property: an uppercased builtin name resolves to an entry
            /// equal to it case-insensitively.
            #[test]
            fn prop_uppercased_names_resolve_case_insensitively(idx in 0usize..128) {
                let catalog = InstanceCatalog::builtin();
                let name = catalog.names().nth(idx).unwrap().to_owned();
                let shouted = name.to_ascii_uppercase();
                let resolved = catalog.resolve(&shouted).unwrap();
                prop_assert!(resolved.eq_ignore_ascii_case(&name));
            }
        }
    }
}

//! Static electoral-district roster.
//!
//! The 20 mainland/island districts of the Assembleia da República election,
//! each with the opaque territory key the upstream results feed expects.
//! One reserved key (`TOTAL`) denotes the national view; it is never sent
//! upstream — it triggers aggregation across the whole roster instead.

use crate::tokens::TerritoryKey;

/// Reserved key for the national (aggregated) view.
pub const NATIONAL_KEY: &str = "TOTAL";

/// A configured electoral district: display name + upstream territory key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegionSpec {
    pub name: &'static str,
    pub key: &'static str,
}

impl RegionSpec {
    /// Typed territory key. Roster keys are compile-time constants validated
    /// by `roster_keys_are_well_formed`.
    pub fn territory_key(&self) -> TerritoryKey {
        self.key.parse().expect("roster key is well-formed")
    }
}

const DISTRICTS: &[RegionSpec] = &[
    RegionSpec { name: "Aveiro", key: "LOCAL-010000" },
    RegionSpec { name: "Beja", key: "LOCAL-020000" },
    RegionSpec { name: "Braga", key: "LOCAL-030000" },
    RegionSpec { name: "Bragança", key: "LOCAL-040000" },
    RegionSpec { name: "Castelo Branco", key: "LOCAL-050000" },
    RegionSpec { name: "Coimbra", key: "LOCAL-060000" },
    RegionSpec { name: "Évora", key: "LOCAL-070000" },
    RegionSpec { name: "Faro", key: "LOCAL-080000" },
    RegionSpec { name: "Guarda", key: "LOCAL-090000" },
    RegionSpec { name: "Leiria", key: "LOCAL-100000" },
    RegionSpec { name: "Lisboa", key: "LOCAL-110000" },
    RegionSpec { name: "Portalegre", key: "LOCAL-120000" },
    RegionSpec { name: "Porto", key: "LOCAL-130000" },
    RegionSpec { name: "Santarém", key: "LOCAL-140000" },
    RegionSpec { name: "Setúbal", key: "LOCAL-150000" },
    RegionSpec { name: "Viana do Castelo", key: "LOCAL-160000" },
    RegionSpec { name: "Vila Real", key: "LOCAL-170000" },
    RegionSpec { name: "Viseu", key: "LOCAL-180000" },
    RegionSpec { name: "Madeira", key: "LOCAL-300000" },
    RegionSpec { name: "Açores", key: "LOCAL-400000" },
];

/// The fixed region list, in upstream configuration order.
pub fn district_roster() -> &'static [RegionSpec] {
    DISTRICTS
}

/// Find a district by territory key or (case-insensitive) display name.
pub fn find_region(needle: &str) -> Option<&'static RegionSpec> {
    DISTRICTS.iter().find(|r| {
        r.key == needle || r.name.eq_ignore_ascii_case(needle)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn roster_keys_are_well_formed() {
        assert_eq!(district_roster().len(), 20);
        for spec in district_roster() {
            // must not panic
            let _ = spec.territory_key();
        }
        assert!(NATIONAL_KEY.parse::<TerritoryKey>().is_ok());
    }

    #[test]
    fn roster_keys_are_unique_and_distinct_from_national() {
        let keys: BTreeSet<&str> = district_roster().iter().map(|r| r.key).collect();
        assert_eq!(keys.len(), district_roster().len());
        assert!(!keys.contains(NATIONAL_KEY));
    }

    #[test]
    fn lookup_by_key_or_name() {
        assert_eq!(find_region("LOCAL-110000").map(|r| r.name), Some("Lisboa"));
        assert_eq!(find_region("lisboa").map(|r| r.key), Some("LOCAL-110000"));
        assert!(find_region("Atlantis").is_none());
    }
}

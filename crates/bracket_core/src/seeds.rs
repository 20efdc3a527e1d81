//! The validated seed table and the entrant ordering derived from it.

use std::collections::BTreeMap;

use crate::error::DataError;
use crate::types::{Entrant, Region};

/// Seeds per region.
pub const REGION_SIZE: u8 = 16;

/// Total entrants in a full bracket.
pub const BRACKET_SIZE: usize = 64;

/// Standard single-elimination pairing order within a region: adjacent
/// entries meet in the first round (1 plays 16, 8 plays 9, and so on).
pub const FIRST_ROUND_ORDER: [u8; 16] = [1, 16, 8, 9, 5, 12, 4, 13, 6, 11, 3, 14, 7, 10, 2, 15];

/// A complete mapping of region and seed to entrant name.
///
/// Construction checks that every one of the 4 regions carries all 16
/// seeds, so lookups after that point cannot fail.
#[derive(Debug, Clone)]
pub struct SeedTable {
    entries: BTreeMap<Region, BTreeMap<u8, String>>,
}

impl SeedTable {
    /// Validate a raw mapping into a seed table.
    ///
    /// Returns a [`DataError`] naming the first missing region or
    /// (region, seed) pair.
    pub fn new(entries: BTreeMap<Region, BTreeMap<u8, String>>) -> Result<Self, DataError> {
        for region in Region::ALL {
            let seeds = entries
                .get(&region)
                .ok_or(DataError::MissingRegion(region))?;
            for seed in 1..=REGION_SIZE {
                if !seeds.contains_key(&seed) {
                    return Err(DataError::MissingSeed { region, seed });
                }
            }
        }
        Ok(Self { entries })
    }

    /// Entrant name for a region and seed, if present.
    pub fn name(&self, region: Region, seed: u8) -> Option<&str> {
        self.entries
            .get(&region)
            .and_then(|seeds| seeds.get(&seed))
            .map(String::as_str)
    }
}

/// Flatten a seed table into the 64 entrants in bracket placement order:
/// regions in canonical order, seeds in [`FIRST_ROUND_ORDER`], so adjacent
/// entrants in the result are first-round opponents.
pub fn build_entrants(table: &SeedTable) -> Vec<Entrant> {
    let mut entrants = Vec::with_capacity(BRACKET_SIZE);
    for region in Region::ALL {
        // Completeness is guaranteed by SeedTable construction.
        let seeds = &table.entries[&region];
        for &seed in &FIRST_ROUND_ORDER {
            entrants.push(Entrant::new(seeds[&seed].clone(), seed, region));
        }
    }
    entrants
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn full_table() -> SeedTable {
        let mut entries = BTreeMap::new();
        for region in Region::ALL {
            let mut seeds = BTreeMap::new();
            for seed in 1..=REGION_SIZE {
                seeds.insert(seed, format!("{} {}", region.name(), seed));
            }
            entries.insert(region, seeds);
        }
        SeedTable::new(entries).unwrap()
    }

    #[test]
    fn test_build_entrants_count_and_uniqueness() {
        let entrants = build_entrants(&full_table());
        assert_eq!(entrants.len(), BRACKET_SIZE);

        let slots: HashSet<(Region, u8)> =
            entrants.iter().map(|e| (e.region, e.seed)).collect();
        assert_eq!(slots.len(), BRACKET_SIZE);
    }

    #[test]
    fn test_build_entrants_pairing_order() {
        let entrants = build_entrants(&full_table());

        // First region opens with 1 vs 16, then 8 vs 9.
        assert_eq!(entrants[0].seed, 1);
        assert_eq!(entrants[1].seed, 16);
        assert_eq!(entrants[2].seed, 8);
        assert_eq!(entrants[3].seed, 9);
        assert_eq!(entrants[0].region, Region::South);

        // Region blocks of 16 in canonical order.
        for (i, entrant) in entrants.iter().enumerate() {
            assert_eq!(entrant.region, Region::ALL[i / 16]);
            assert_eq!(entrant.seed, FIRST_ROUND_ORDER[i % 16]);
        }
    }

    #[test]
    fn test_missing_region_rejected() {
        let mut entries = BTreeMap::new();
        for region in [Region::South, Region::West, Region::East] {
            let mut seeds = BTreeMap::new();
            for seed in 1..=REGION_SIZE {
                seeds.insert(seed, format!("{}", seed));
            }
            entries.insert(region, seeds);
        }

        let err = SeedTable::new(entries).unwrap_err();
        assert!(matches!(err, DataError::MissingRegion(Region::Midwest)));
    }

    #[test]
    fn test_missing_seed_rejected() {
        let mut entries = BTreeMap::new();
        for region in Region::ALL {
            let mut seeds = BTreeMap::new();
            for seed in 1..=REGION_SIZE {
                seeds.insert(seed, format!("{}", seed));
            }
            entries.insert(region, seeds);
        }
        entries.get_mut(&Region::West).unwrap().remove(&7);

        let err = SeedTable::new(entries).unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingSeed {
                region: Region::West,
                seed: 7
            }
        ));
    }
}

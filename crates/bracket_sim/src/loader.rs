//! Seed data loading and validation.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use bracket_core::{DataError, Region, SeedTable, REGION_SIZE};
use log::info;
use serde::Deserialize;

/// Raw on-disk shape: region name to seed key to entrant name.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawSeedFile(BTreeMap<String, BTreeMap<String, String>>);

/// Load and validate a seed table from `path`.
///
/// Files with a `.toml` extension are parsed as TOML; anything else is
/// treated as JSON, the shape the original bracket files use. Every region
/// name must be one of the four known regions and every seed key must be
/// `"1"` through `"16"`; completeness of all 4x16 slots is checked before
/// the table is returned.
pub fn load_seed_table(path: &Path) -> Result<SeedTable, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("toml"));
    let raw: RawSeedFile = if is_toml {
        toml::from_str(&text).map_err(|e| DataError::Malformed {
            path: path.to_path_buf(),
            format: "TOML",
            detail: e.to_string(),
        })?
    } else {
        serde_json::from_str(&text).map_err(|e| DataError::Malformed {
            path: path.to_path_buf(),
            format: "JSON",
            detail: e.to_string(),
        })?
    };

    let mut entries = BTreeMap::new();
    for (region_name, seeds) in raw.0 {
        let region =
            Region::parse(&region_name).ok_or(DataError::UnknownRegion(region_name))?;

        let mut by_seed = BTreeMap::new();
        for (key, name) in seeds {
            let seed = match key.parse::<u8>() {
                Ok(seed) if (1..=REGION_SIZE).contains(&seed) => seed,
                _ => return Err(DataError::InvalidSeed { region, key }),
            };
            by_seed.insert(seed, name);
        }
        entries.insert(region, by_seed);
    }

    let table = SeedTable::new(entries)?;
    info!("loaded seed data from {}", path.display());
    Ok(table)
}

use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{CareerAtlas, CareerCategory, Error, Result, SectorGuide, Ship};

pub const SECTORS_FILE: &str = "sectors.yaml";
pub const CAREERS_FILE: &str = "careers.yaml";
pub const SHIPS_FILE: &str = "ships.yaml";

/// Read-only lookup tables over the site content, loaded once at start-up
/// and cheap to clone into every request.
#[derive(Clone, Debug)]
pub struct Catalog {
    inner: Arc<Tables>,
}

#[derive(Debug)]
struct Tables {
    atlas: CareerAtlas,
    ships: Vec<Ship>,
    ships_by_slug: HashMap<String, usize>,
    categories_by_slug: HashMap<String, usize>,
}

impl Catalog {
    pub fn load(directory: &Path) -> Result<Self> {
        let guides: Vec<SectorGuide> = read_yaml(&directory.join(SECTORS_FILE))?;
        let categories: Vec<CareerCategory> = read_yaml(&directory.join(CAREERS_FILE))?;
        let ships: Vec<Ship> = read_yaml(&directory.join(SHIPS_FILE))?;
        let catalog = Self::from_parts(guides, categories, ships)?;
        log::info!(
            "Loaded content from {:?}: {} sector guides, {} career categories, {} ships",
            directory,
            catalog.inner.atlas.guides.len(),
            catalog.inner.atlas.categories.len(),
            catalog.inner.ships.len(),
        );
        Ok(catalog)
    }

    pub fn from_parts(
        guides: Vec<SectorGuide>,
        categories: Vec<CareerCategory>,
        ships: Vec<Ship>,
    ) -> Result<Self> {
        let mut sectors = HashSet::new();
        for guide in &guides {
            if !sectors.insert(guide.sector) {
                return Err(Error::Duplicate {
                    kind: "sector guide",
                    key: String::from(guide.sector.key()),
                });
            }
        }
        let categories_by_slug = index_by_slug("career category", &categories, |c| &c.slug)?;
        let ships_by_slug = index_by_slug("ship", &ships, |s| &s.slug)?;

        Ok(Self {
            inner: Arc::new(Tables {
                atlas: CareerAtlas { guides, categories },
                ships,
                ships_by_slug,
                categories_by_slug,
            }),
        })
    }

    pub fn atlas(&self) -> &CareerAtlas {
        &self.inner.atlas
    }

    pub fn career_category(&self, slug: &str) -> Option<&CareerCategory> {
        self.inner
            .categories_by_slug
            .get(slug)
            .map(|&i| &self.inner.atlas.categories[i])
    }

    pub fn ships(&self) -> &[Ship] {
        &self.inner.ships
    }

    pub fn ship(&self, slug: &str) -> Option<&Ship> {
        self.inner
            .ships_by_slug
            .get(slug)
            .map(|&i| &self.inner.ships[i])
    }
}

fn index_by_slug<T>(
    kind: &'static str,
    entries: &[T],
    slug: impl Fn(&T) -> &String,
) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        if index.insert(slug(entry).clone(), i).is_some() {
            return Err(Error::Duplicate {
                kind,
                key: slug(entry).clone(),
            });
        }
    }
    Ok(index)
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|error| Error::IO {
        error,
        path: PathBuf::from(path),
    })?;
    serde_yml::from_str(&contents).map_err(|error| Error::Deserialize {
        error: error.to_string(),
        path: PathBuf::from(path),
    })
}

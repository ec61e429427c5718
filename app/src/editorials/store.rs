use std::path::{Path, PathBuf};

use super::{Author, AuthorPage, Editorial, Error, FrontMatter, Result, Series};

pub const AUTHORS_FILE: &str = "authors.yaml";
/// Name of the markdown file inside an editorial that is a directory.
pub const EDITORIAL_FILE: &str = "editorial.md";

/// Editorials on disk: `NNNN_title.md` files, or `NNNN_title/` directories
/// holding an `editorial.md` and its assets, next to an `authors.yaml`.
///
/// Nothing is cached, each call goes back to the filesystem.
#[derive(Clone, Debug)]
pub struct EditorialStore {
    path: PathBuf,
    is_running_in_prod: bool,
}

impl EditorialStore {
    pub fn new(path: PathBuf, is_running_in_prod: bool) -> Self {
        Self {
            path,
            is_running_in_prod,
        }
    }

    /// Published editorials, newest first. Outside of production drafts are
    /// listed too, after everything that has a date.
    pub fn index(&self) -> Result<Vec<FrontMatter>> {
        let mut index = vec![];
        for (slug, path) in self.entries()? {
            let source = read(&path)?;
            let (front_matter, _) = FrontMatter::parse(&source, &path, slug)?;
            if self.is_visible(&front_matter) {
                index.push(front_matter);
            }
        }

        index.sort_by(|lhs, rhs| {
            use core::cmp::Ordering;
            match (lhs.metadata.date, rhs.metadata.date) {
                (Some(lhd), Some(rhd)) => rhd.cmp(&lhd),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => lhs.slug.cmp(&rhs.slug),
            }
        });

        Ok(index)
    }

    pub fn get_by_slug(&self, slug: &str) -> Result<Editorial> {
        let not_found = || Error::NotFound {
            kind: "editorial",
            slug: String::from(slug),
        };
        let wanted = slug_key(slug).ok_or_else(not_found)?;
        let (slug, path) = self
            .entries()?
            .into_iter()
            .find(|(candidate, _)| slug_key(candidate).as_ref() == Some(&wanted))
            .ok_or_else(not_found)?;
        log::info!("slug \"{}\" points to file {:?}", slug, path);

        let source = read(&path)?;
        let (front_matter, body) = FrontMatter::parse(&source, &path, slug)?;
        if !self.is_visible(&front_matter) {
            return Err(not_found());
        }
        let (toc, html_body) = super::render(body);
        let author = self.find_author(&front_matter.metadata.author)?;
        if author.is_none() {
            log::warn!(
                "Editorial `{}' names unknown author `{}'",
                front_matter.slug,
                front_matter.metadata.author
            );
        }

        Ok(Editorial {
            front_matter,
            author,
            toc,
            html_body,
        })
    }

    /// All authors; a store without an authors file simply has none.
    pub fn authors(&self) -> Result<Vec<Author>> {
        let path = self.path.join(AUTHORS_FILE);
        if !path.exists() {
            return Ok(vec![]);
        }
        let source = read(&path)?;
        serde_yml::from_str(&source).map_err(|error| Error::Deserialize {
            error: error.to_string(),
            path,
        })
    }

    pub fn author(&self, slug: &str) -> Result<AuthorPage> {
        let author = self.find_author(slug)?.ok_or_else(|| Error::NotFound {
            kind: "author",
            slug: String::from(slug),
        })?;
        let editorials = self
            .index()?
            .into_iter()
            .filter(|front_matter| front_matter.metadata.author == author.slug)
            .collect();
        Ok(AuthorPage { author, editorials })
    }

    pub fn series(&self, slug: &str) -> Result<Series> {
        let mut entries: Vec<FrontMatter> = self
            .index()?
            .into_iter()
            .filter(|front_matter| {
                front_matter
                    .metadata
                    .series
                    .as_ref()
                    .is_some_and(|series| series.slug == slug)
            })
            .collect();
        entries.sort_by_key(|front_matter| {
            front_matter
                .metadata
                .series
                .as_ref()
                .map_or(0, |series| series.part)
        });
        let title = entries
            .first()
            .and_then(|front_matter| front_matter.metadata.series.as_ref())
            .map(|series| series.title.clone())
            .ok_or_else(|| Error::NotFound {
                kind: "series",
                slug: String::from(slug),
            })?;
        Ok(Series {
            slug: String::from(slug),
            title,
            entries,
        })
    }

    fn find_author(&self, slug: &str) -> Result<Option<Author>> {
        Ok(self
            .authors()?
            .into_iter()
            .find(|author| author.slug == slug))
    }

    fn is_visible(&self, front_matter: &FrontMatter) -> bool {
        !self.is_running_in_prod || !front_matter.is_draft()
    }

    /// `(slug, markdown path)` for every editorial in the store.
    fn entries(&self) -> Result<Vec<(String, PathBuf)>> {
        let io_error = |error: std::io::Error| Error::IO {
            error,
            path: self.path.clone(),
        };
        let mut entries = vec![];
        for entry in self.path.read_dir().map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            let is_dir = entry.file_type().map_err(io_error)?.is_dir();
            let Some(file_name) = entry.file_name().to_str().map(String::from) else {
                log::warn!("Invalid utf-8 filename in the store: {:?}", entry.file_name());
                continue;
            };
            let leading_digits = file_name.chars().take_while(char::is_ascii_digit).count();
            if leading_digits < 4 {
                continue;
            }
            let (stem, path) = if is_dir {
                (file_name.as_str(), entry.path().join(EDITORIAL_FILE))
            } else if let Some(stem) = file_name.strip_suffix(".md") {
                (stem, entry.path())
            } else {
                continue;
            };
            entries.push((slug::slugify(stem), path));
        }
        Ok(entries)
    }
}

/// Slugs compare on their number and title, so `1-toc` finds `0001-toc`.
fn slug_key(slug: &str) -> Option<(u32, String)> {
    let (number, title) = slug.split_once('-').unwrap_or((slug, ""));
    let number = number.parse::<u32>().ok()?;
    Some((number, slug::slugify(title)))
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|error| Error::IO {
        error,
        path: PathBuf::from(path),
    })
}

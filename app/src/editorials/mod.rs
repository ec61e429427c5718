//! Articles, their authors and the series they belong to.

#[cfg(feature = "ssr")]
pub mod errors;
mod front_matter;
#[cfg(feature = "ssr")]
mod render;
#[cfg(feature = "ssr")]
mod store;

#[cfg(feature = "ssr")]
pub use errors::{Error, Result};
pub use front_matter::{FrontMatter, Metadata, SeriesRef};
#[cfg(feature = "ssr")]
pub use render::render;
#[cfg(feature = "ssr")]
pub use store::EditorialStore;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Author {
    pub slug: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    pub name: String,
    pub level: u8,
    /// Section number, one counter per heading level.
    pub path: [u16; 6],
    /// The `id` given to the heading in the rendered body.
    pub anchor: String,
}

impl Heading {
    pub fn section_number(&self) -> String {
        self.path[..usize::from(self.level)]
            .iter()
            .map(u16::to_string)
            .collect::<Vec<String>>()
            .join(".")
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Editorial {
    pub front_matter: FrontMatter,
    pub author: Option<Author>,
    pub toc: Vec<Heading>,
    pub html_body: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Series {
    pub slug: String,
    pub title: String,
    /// Ordered by part.
    pub entries: Vec<FrontMatter>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct AuthorPage {
    pub author: Author,
    pub editorials: Vec<FrontMatter>,
}

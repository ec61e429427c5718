use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FrontMatter {
    pub slug: String,
    pub metadata: Metadata,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    /// `None` marks a draft.
    #[serde(
        default,
        deserialize_with = "naive_date_from_str",
        serialize_with = "naive_date_to_str"
    )]
    pub date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub series: Option<SeriesRef>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SeriesRef {
    pub slug: String,
    pub title: String,
    pub part: u16,
}

fn naive_date_from_str<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<chrono::NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    match s.as_deref().map(str::trim) {
        None | Some("") | Some("null") => Ok(None),
        Some(s) => chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn naive_date_to_str<S>(
    date: &Option<chrono::NaiveDate>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
        None => serializer.serialize_none(),
    }
}

impl FrontMatter {
    pub fn is_draft(&self) -> bool {
        self.metadata.date.is_none()
    }
}

#[cfg(feature = "ssr")]
mod parse {
    use std::path::{Path, PathBuf};

    use super::{FrontMatter, Metadata};
    use crate::editorials::{Error, Result};

    const BOUNDARY: &str = "---";

    /// Splits `source` into its YAML front matter and the markdown after it.
    ///
    /// The front matter sits between two `---` lines at the very top of the
    /// file; trailing whitespace on those lines is tolerated.
    fn split(source: &str) -> Option<(&str, &str)> {
        let mut lines = source.split_inclusive('\n');
        let first = lines.next()?;
        if first.trim_end() != BOUNDARY {
            return None;
        }
        let start = first.len();
        let mut offset = start;
        for line in lines {
            if line.trim_end() == BOUNDARY {
                let yaml = &source[start..offset];
                if yaml.trim().is_empty() {
                    return None;
                }
                return Some((yaml, &source[offset + line.len()..]));
            }
            offset += line.len();
        }
        None
    }

    impl FrontMatter {
        /// Parses the front matter of the editorial at `path`, returning it
        /// along with the markdown body.
        pub fn parse<'a>(source: &'a str, path: &Path, slug: String) -> Result<(Self, &'a str)> {
            let (yaml, body) = split(source).ok_or_else(|| Error::Deserialize {
                error: String::from("front matter is missing"),
                path: PathBuf::from(path),
            })?;
            let metadata: Metadata =
                serde_yml::from_str(yaml).map_err(|error| Error::Deserialize {
                    error: format!("front matter is not valid YAML: {}", error),
                    path: PathBuf::from(path),
                })?;
            Ok((Self { slug, metadata }, body))
        }
    }

}

const BASE_URL: &str = "https://www.civsail.org";

pub const EDITORIALS_PATH: &str = "/editorials";
pub const COPYRIGHT: &str = "CC BY-SA 4.0";
pub const DESCRIPTION: &str = "Field notes from civilian mariners: life aboard, careers and money at sea.";
pub const LANGUAGE: &str = "en";
pub const TITLE: &str = "CivSail :: Editorials";

pub fn link(path: &str) -> String {
    String::from(BASE_URL) + path
}

/// Absolute URL of the editorials index, or of one editorial.
pub fn editorial_link(slug: Option<&str>) -> String {
    match slug {
        Some(slug) => link(&format!("{}/{}", EDITORIALS_PATH, slug)),
        None => link(EDITORIALS_PATH),
    }
}

pub fn feed_link(name: &str) -> String {
    link(&format!("{}/feed.{}", EDITORIALS_PATH, name))
}

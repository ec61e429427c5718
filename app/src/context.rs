use leptos::prelude::*;
use std::path::PathBuf;

use crate::{content, editorials};

pub const CONTENT_PATH_VAR: &str = "CIVSAIL_CONTENT_PATH";
pub const EDITORIALS_PATH_VAR: &str = "CIVSAIL_EDITORIALS_PATH";

/// Where the site content lives on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub content_path: PathBuf,
    pub editorials_path: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Editorials default to an `editorials` directory inside the content.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let content_path = lookup(CONTENT_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("content"));
        let editorials_path = lookup(EDITORIALS_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| content_path.join("editorials"));
        Self {
            content_path,
            editorials_path,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Context { // Could be called "AppState"
    pub leptos_options: LeptosOptions,
    pub catalog: content::Catalog,
    pub editorials: editorials::EditorialStore,
}

impl Context {
    pub fn new(leptos_options: LeptosOptions, settings: &Settings) -> content::Result<Self> {
        let is_running_in_prod = leptos_options.env == leptos::config::Env::PROD;
        Ok(Self {
            leptos_options,
            catalog: content::Catalog::load(&settings.content_path)?,
            editorials: editorials::EditorialStore::new(
                settings.editorials_path.clone(),
                is_running_in_prod,
            ),
        })
    }

    /// Makes the catalog and the store reachable from server functions.
    pub fn provide(&self) {
        provide_context(self.catalog.clone());
        provide_context(self.editorials.clone());
    }
}

// Looks like we could use `derive(FromRef)` on `Context` if we enabled the macros feature on axum.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}

pub fn catalog() -> Result<content::Catalog, ServerFnError> {
    use_context::<content::Catalog>().ok_or_else(|| {
        ServerFnError::ServerError(String::from("the content catalog is not available"))
    })
}

pub fn editorial_store() -> Result<editorials::EditorialStore, ServerFnError> {
    use_context::<editorials::EditorialStore>().ok_or_else(|| {
        ServerFnError::ServerError(String::from("the editorial store is not available"))
    })
}

pub mod components;
pub mod content;
#[cfg(feature = "ssr")]
pub mod context;
pub mod editorials;
pub mod lead;
pub mod pages;
pub mod state;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, SsrMode, StaticSegment,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="CivSail explains civilian mariner careers: the jobs aboard, the ships of the fleet, and the money side of a life at sea."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body id="top">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/civsail.css"/>

        <Title formatter=|text: String| {
            if text.is_empty() {
                String::from("CivSail")
            } else {
                format!("{} - CivSail", text)
            }
        }/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                // The catalog pages are static content, render them entirely
                // on the server.
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::Async
                />
                <Route
                    path=(StaticSegment("maritime-101"), StaticSegment("careers-and-sectors"))
                    view=pages::careers::CareersAndSectors
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment("ships")
                    view=pages::ships::Index
                    ssr=SsrMode::Async
                />
                <Route
                    path=(StaticSegment("ships"), ParamSegment("slug"))
                    view=pages::ships::Profile
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment("financial")
                    view=pages::financial::Index
                />
                <Route
                    path=StaticSegment("editorials")
                    view=pages::editorials::Index
                    ssr=SsrMode::PartiallyBlocked
                />
                <Route
                    path=(StaticSegment("editorials"), StaticSegment("series"), ParamSegment("slug"))
                    view=pages::editorials::SeriesPage
                    ssr=SsrMode::PartiallyBlocked
                />
                <Route
                    path=(StaticSegment("editorials"), StaticSegment("authors"), ParamSegment("slug"))
                    view=pages::editorials::AuthorPage
                    ssr=SsrMode::PartiallyBlocked
                />
                <Route
                    path=(StaticSegment("editorials"), ParamSegment("slug"))
                    view=pages::editorials::Article
                    ssr=SsrMode::PartiallyBlocked
                />
            </Routes>
        </Router>
    }
}

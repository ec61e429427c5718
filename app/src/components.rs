use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::Ship;
use crate::state::Popup;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <ul>
                <li><A href="/">"CivSail"</A></li>
                <li><A href="/maritime-101/careers-and-sectors">"Careers & Sectors"</A></li>
                <li><A href="/ships">"Ships"</A></li>
                <li><A href="/editorials">"Editorials"</A></li>
                <li><A href="/financial">"Financial Planning"</A></li>
            </ul>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>
                <a href="#top"><small>{"\u{2191}"} " CivSail \u{b7} Civilian mariner careers, explained " {"\u{2191}"}</small></a>
            </p>
            <p>
                <small>"CivSail is an independent guide and is not affiliated with the Military Sealift Command."</small>
            </p>
        </footer>
    }
}

/// One step of a breadcrumb trail; the last one is the current page and is
/// not linked.
#[derive(Clone, Debug)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

impl Crumb {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[component]
pub fn Breadcrumbs(trail: Vec<Crumb>) -> impl IntoView {
    let last = trail.len().saturating_sub(1);
    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <ol>
                {trail
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        if i == last {
                            Either::Left(view! { <li aria-current="page">{crumb.label}</li> })
                        } else {
                            Either::Right(view! { <li><A href=crumb.href>{crumb.label}</A></li> })
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}

#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(optional, into)] href: Option<String>,
    children: Children,
) -> impl IntoView {
    let heading = match href {
        Some(href) => Either::Left(view! { <A href=href>{title}</A> }),
        None => Either::Right(title),
    };
    view! {
        <article class="card">
            <h3 class="card-title">{heading}</h3>
            <div class="card-body">{children()}</div>
        </article>
    }
}

#[component]
pub fn Badge(#[prop(into)] label: String) -> impl IntoView {
    view! { <span class="badge">{label}</span> }
}

#[component]
pub fn Separator() -> impl IntoView {
    view! { <hr class="separator"/> }
}

/// A "read next" box pointing to another page of the site.
#[component]
pub fn RelatedCallout(
    #[prop(into)] title: String,
    #[prop(into)] href: String,
    #[prop(into)] blurb: String,
) -> impl IntoView {
    view! {
        <aside class="related">
            <span class="related-kicker">"Related"</span>
            <A href=href>{title}</A>
            <p>{blurb}</p>
        </aside>
    }
}

/// Details of the ship the popup was last opened with, over a backdrop that
/// closes it when clicked.
#[component]
pub fn ShipPopup(popup: RwSignal<Popup<Ship>>) -> impl IntoView {
    let close = move |_: leptos::ev::MouseEvent| popup.update(Popup::close);
    move || {
        popup.with(|popup| popup.visible().cloned()).map(|ship| {
            let image = ship.image_path().to_string();
            let profile = format!("/ships/{}", ship.slug);
            let alt = ship.name.clone();
            view! {
                <div class="popup-backdrop" on:click=close>
                    <div
                        class="popup"
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                    >
                        <button class="popup-close" aria-label="Close" on:click=close>
                            {"\u{d7}"}
                        </button>
                        <img src=image alt=alt/>
                        <h2>{ship.name} " " <small>{ship.hull_number}</small></h2>
                        <p class="popup-kind">{ship.class} " \u{b7} " {ship.kind}</p>
                        <p>{ship.summary}</p>
                        <ul class="popup-news">
                            {ship
                                .news
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a href=item.url target="_blank" rel="noopener">
                                                {item.headline}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="popup-actions">
                            <A href=profile>"Full profile"</A>
                            {ship
                                .news_url
                                .map(|url| {
                                    view! {
                                        <a href=url target="_blank" rel="noopener">
                                            "View ship news"
                                        </a>
                                    }
                                })}
                        </div>
                    </div>
                </div>
            }
        })
    }
}

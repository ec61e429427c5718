use leptos::either::{EitherOf3, EitherOf4};
use leptos::prelude::*;

use crate::components::{Breadcrumbs, Crumb, Footer, NavBar, RelatedCallout, Separator, ShipPopup};
use crate::content::{Ship, ShipSection};
use crate::state::{Popup, ScopedSelector, SectionKey};

#[component]
pub fn Index() -> impl IntoView {
    let ships = Resource::new_blocking(|| (), move |_| async { get_ships().await });
    let popup = RwSignal::new(Popup::<Ship>::default());

    view! {
        <NavBar />
        <main class="ships">
            <Breadcrumbs trail=vec![Crumb::new("Home", "/"), Crumb::new("Ships", "/ships")] />
            <h1>"The fleet"</h1>
            {move || match ships.get() {
                None => EitherOf3::A(view! { <p>"Loading…"</p> }),
                Some(Ok(ships)) => EitherOf3::B(view! {
                    <ul class="ship-grid">
                        {ships
                            .into_iter()
                            .map(|ship| {
                                let image = ship.image_path().to_string();
                                let alt = ship.name.clone();
                                let name = ship.name.clone();
                                let kind = ship.kind.clone();
                                view! {
                                    <li>
                                        <button
                                            class="ship-tile"
                                            on:click=move |_| popup.update(|p| p.open(ship.clone()))
                                        >
                                            <img src=image alt=alt />
                                            <span class="ship-name">{name}</span>
                                            <span class="ship-kind">{kind}</span>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }),
                Some(Err(err)) => EitherOf3::C(view! {
                    <p class="error">{format!("Could not load ships: {}", err)}</p>
                }),
            }}
            <ShipPopup popup=popup />
        </main>
        <Footer />
    }
}

#[component]
pub fn Profile() -> impl IntoView {
    let params = leptos_router::hooks::use_params_map();

    let ship = Resource::new_blocking(
        move || params.read().get("slug").unwrap_or_default(),
        move |slug| async move {
            if slug.is_empty() {
                return Err(ServerFnError::MissingArg(String::from("empty slug")));
            }
            get_ship(slug).await
        },
    );
    // One selector for the page, remembering which ship its tab belongs to.
    let tabs = RwSignal::new(ScopedSelector::<ShipSection>::default());

    view! {
        <NavBar />
        <main class="ship-profile">
            {move || match ship.get() {
                None => EitherOf3::A(view! { <p>{"Loading…"}</p> }),
                Some(Ok(ship)) => EitherOf3::B(view! { <ShipProfile ship=ship tabs=tabs /> }),
                Some(Err(err)) => EitherOf3::C(view! {
                    <p class="error">{format!("Could not load ship: {}", err)}</p>
                }),
            }}
        </main>
        <Footer />
    }
}

#[component]
fn ShipProfile(ship: Ship, tabs: RwSignal<ScopedSelector<ShipSection>>) -> impl IntoView {
    let trail = vec![
        Crumb::new("Home", "/"),
        Crumb::new("Ships", "/ships"),
        Crumb::new(ship.name.clone(), format!("/ships/{}", ship.slug)),
    ];
    let image = ship.image_path().to_string();
    let alt = ship.name.clone();
    let heading = format!("{} ({})", ship.name, ship.hull_number);
    let subtitle = format!("{} \u{b7} {}", ship.class, ship.kind);
    let slug = ship.slug.clone();

    view! {
        <Breadcrumbs trail=trail />
        <header class="ship-header">
            <img src=image alt=alt />
            <h1>{heading}</h1>
            <p class="ship-subtitle">{subtitle}</p>
        </header>
        <nav class="tabs" role="tablist">
            {ShipSection::ALL
                .iter()
                .copied()
                .map(|section| {
                    let (selected, active, click) = (slug.clone(), slug.clone(), slug.clone());
                    view! {
                        <button
                            role="tab"
                            aria-selected=move || tabs.with(|t| t.is_active(&selected, section)).to_string()
                            class:active=move || tabs.with(|t| t.is_active(&active, section))
                            on:click=move |_| {
                                tabs.maybe_update(|t| t.select(&click, section));
                            }
                        >
                            {section.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
        <Separator />
        <section class="tab-panel" role="tabpanel">
            {move || section_view(&ship, tabs.with(|t| t.active(&ship.slug)))}
        </section>
        <RelatedCallout
            title="What jobs are there aboard?"
            href="/maritime-101/careers-and-sectors"
            blurb="Deck, engineering, supply and specialized roles, explained."
        />
    }
}

/// Only the active section is built; the others do not exist in the DOM.
fn section_view(ship: &Ship, section: ShipSection) -> impl IntoView {
    match section {
        ShipSection::Overview => EitherOf4::A(view! {
            <p>{ship.summary.clone()}</p>
            <p>{ship.overview.clone()}</p>
        }),
        ShipSection::Specifications => EitherOf4::B(view! {
            <dl class="specs">
                {ship
                    .specs
                    .iter()
                    .map(|spec| {
                        view! {
                            <dt>{spec.label.clone()}</dt>
                            <dd>{spec.value.clone()}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        }),
        ShipSection::Missions => EitherOf4::C(view! {
            <ul class="missions">
                {ship
                    .missions
                    .iter()
                    .map(|mission| view! { <li>{mission.clone()}</li> })
                    .collect_view()}
            </ul>
            {ship
                .news_url
                .clone()
                .map(|url| {
                    view! {
                        <a href=url target="_blank" rel="noopener">
                            "Latest news about this ship"
                        </a>
                    }
                })}
        }),
        ShipSection::LifeAboard => EitherOf4::D(view! { <p>{ship.life_aboard.clone()}</p> }),
    }
}

#[server(GetShips, "/site/api", "GetJson", "ships")]
pub async fn get_ships() -> Result<Vec<Ship>, ServerFnError> {
    let catalog = crate::context::catalog()?;
    Ok(catalog.ships().to_vec())
}

#[server(GetShip, "/site/api", "GetJson", "ship")]
pub async fn get_ship(slug: String) -> Result<Ship, ServerFnError> {
    let catalog = crate::context::catalog()?;
    catalog
        .ship(&slug)
        .cloned()
        .ok_or_else(|| ServerFnError::ServerError(format!("Could not find ship `{}'", slug)))
}

use leptos::either::EitherOf3;
use leptos::prelude::*;

use crate::components::{Badge, Breadcrumbs, Card, Crumb, Footer, NavBar, RelatedCallout};
use crate::content::{CareerAtlas, Sector};
use crate::state::{SectionKey, SectionSelector};

/// The careers compass: one sector at a time, picked from the compass rose
/// or by turning it.
#[component]
pub fn CareersAndSectors() -> impl IntoView {
    let atlas = Resource::new_blocking(|| (), move |_| async { get_career_atlas().await });
    let compass = RwSignal::new(SectionSelector::new(Sector::Deck));

    view! {
        <NavBar />
        <main class="careers">
            <Breadcrumbs trail=vec![
                Crumb::new("Home", "/"),
                Crumb::new("Maritime 101", "/maritime-101/careers-and-sectors"),
                Crumb::new("Careers & Sectors", "/maritime-101/careers-and-sectors"),
            ] />
            <h1>"Careers & Sectors"</h1>
            <p class="lede">
                "Every ship runs on four departments. Turn the compass to see what each one does and which jobs it offers."
            </p>
            <Compass selector=compass />
            {move || match atlas.get() {
                None => EitherOf3::A(view! { <p>"Loading…"</p> }),
                Some(Ok(atlas)) => {
                    let sector = compass.with(SectionSelector::active);
                    EitherOf3::B(view! { <SectorPanel atlas=atlas sector=sector /> })
                }
                Some(Err(err)) => EitherOf3::C(view! {
                    <p class="error">{format!("Could not load careers: {}", err)}</p>
                }),
            }}
            <RelatedCallout
                title="Which ships would you sail on?"
                href="/ships"
                blurb="Browse the fleet, from dry cargo ships to hospital ships."
            />
        </main>
        <Footer />
    }
}

#[component]
fn Compass(selector: RwSignal<SectionSelector<Sector>>) -> impl IntoView {
    view! {
        <div class="compass">
            <button
                class="compass-turn"
                aria-label="Previous sector"
                on:click=move |_| {
                    selector.maybe_update(SectionSelector::previous);
                }
            >
                {"\u{21ba}"}
            </button>
            <div
                class="compass-needle"
                style=move || {
                    format!(
                        "transform: rotate({}deg)",
                        selector.with(|s| s.active().bearing().degrees()),
                    )
                }
            ></div>
            <ul class="compass-rose">
                {Sector::ALL
                    .iter()
                    .copied()
                    .map(|sector| {
                        view! {
                            <li class=format!("compass-point compass-{}", sector.key())>
                                <button
                                    class:active=move || selector.with(|s| s.is_active(sector))
                                    on:click=move |_| {
                                        selector.maybe_update(|s| s.select(sector));
                                    }
                                >
                                    <span class="bearing">{sector.bearing().abbreviation()}</span>
                                    " "
                                    {sector.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button
                class="compass-turn"
                aria-label="Next sector"
                on:click=move |_| {
                    selector.maybe_update(SectionSelector::next);
                }
            >
                {"\u{21bb}"}
            </button>
        </div>
    }
}

#[component]
fn SectorPanel(atlas: CareerAtlas, sector: Sector) -> impl IntoView {
    let guide = atlas.guide(sector).cloned();
    let categories = atlas.categories_in(sector).cloned().collect::<Vec<_>>();

    view! {
        <section class="sector" id=sector.key()>
            {guide
                .map(|guide| {
                    view! {
                        <header>
                            <h2>{guide.title}</h2>
                            <p class="tagline">{guide.tagline}</p>
                            <p>{guide.summary}</p>
                            <ul class="highlights">
                                {guide
                                    .highlights
                                    .into_iter()
                                    .map(|highlight| view! { <li>{highlight}</li> })
                                    .collect_view()}
                            </ul>
                        </header>
                    }
                })}
            <div class="card-grid">
                {categories
                    .into_iter()
                    .map(|category| {
                        view! {
                            <Card title=category.title>
                                <p>{category.summary}</p>
                                <ul class="roles">
                                    {category
                                        .roles
                                        .into_iter()
                                        .map(|role| {
                                            view! {
                                                <li>
                                                    <strong>{role.title}</strong>
                                                    <p>{role.summary}</p>
                                                    {role
                                                        .credentials
                                                        .into_iter()
                                                        .map(|credential| view! { <Badge label=credential /> })
                                                        .collect_view()}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[server(GetCareerAtlas, "/site/api", "GetJson", "careers")]
pub async fn get_career_atlas() -> Result<CareerAtlas, ServerFnError> {
    let catalog = crate::context::catalog()?;
    Ok(catalog.atlas().clone())
}

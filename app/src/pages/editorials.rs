use leptos::either::{Either, EitherOf3};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{Badge, Breadcrumbs, Crumb, Footer, NavBar, RelatedCallout};
use crate::editorials::{AuthorPage as AuthorListing, Editorial, FrontMatter, Heading, Series};

fn editorials_crumbs() -> Vec<Crumb> {
    vec![Crumb::new("Home", "/"), Crumb::new("Editorials", "/editorials")]
}

fn slug_param(name: &'static str) -> impl Fn() -> String + Copy {
    let params = leptos_router::hooks::use_params_map();
    move || params.read().get(name).unwrap_or_default()
}

#[component]
pub fn Index() -> impl IntoView {
    let index = Resource::new_blocking(|| (), move |_| async { get_editorials().await });

    view! {
        <NavBar />
        <main class="editorials">
            <Breadcrumbs trail=editorials_crumbs() />
            <h1>"Editorials"</h1>
            <p class="lede">
                "Field notes from mariners: what life aboard is really like, and how to get there."
            </p>
            <p class="feeds">
                <a href="/editorials/feed.rss">"RSS"</a>
                " \u{b7} "
                <a href="/editorials/feed.json">"JSON Feed"</a>
            </p>
            {move || match index.get() {
                None => EitherOf3::A(view! { <p>"Loading…"</p> }),
                Some(Ok(list)) => EitherOf3::B(view! { <EditorialList entries=list /> }),
                Some(Err(err)) => EitherOf3::C(view! {
                    <p class="error">{format!("Could not load index: {}", err)}</p>
                }),
            }}
        </main>
        <Footer />
    }
}

#[component]
fn EditorialList(entries: Vec<FrontMatter>) -> impl IntoView {
    view! {
        <ul class="editorial-list">
            {entries
                .into_iter()
                .map(|item| {
                    let url = format!("/editorials/{}", item.slug);
                    let date = item
                        .metadata
                        .date
                        .map(|date| date.format("%B %-d, %Y").to_string())
                        .unwrap_or_else(|| String::from("Draft"));
                    view! {
                        <li>
                            <A href=url>{item.metadata.title}</A>
                            " "
                            <small class="date">{date}</small>
                            {item.metadata.summary.map(|summary| view! { <p>{summary}</p> })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn Article() -> impl IntoView {
    let slug = slug_param("slug");
    let editorial = Resource::new_blocking(slug, move |slug| async move {
        if slug.is_empty() {
            return Err(ServerFnError::MissingArg(String::from("empty slug")));
        }
        get_editorial(slug).await
    });

    view! {
        <NavBar />
        <main class="editorial">
            {move || match editorial.get() {
                None => EitherOf3::A(view! { <p>{"Loading…"}</p> }),
                Some(Ok(editorial)) => EitherOf3::B(view! { <EditorialView editorial=editorial /> }),
                Some(Err(err)) => EitherOf3::C(view! {
                    <p class="error">{format!("Could not load editorial: {}", err)}</p>
                }),
            }}
        </main>
        <Footer />
    }
}

#[component]
fn EditorialView(editorial: Editorial) -> impl IntoView {
    let Editorial {
        front_matter,
        author,
        toc,
        html_body,
    } = editorial;
    let FrontMatter { slug, metadata } = front_matter;
    let mut trail = editorials_crumbs();
    trail.push(Crumb::new(metadata.title.clone(), format!("/editorials/{}", slug)));
    let byline = author.map(|author| {
        let href = format!("/editorials/authors/{}", author.slug);
        view! {
            <p class="byline">
                "By " <A href=href>{author.name}</A> ", " <span class="role">{author.role}</span>
            </p>
        }
    });
    let series = metadata.series.map(|series| {
        let href = format!("/editorials/series/{}", series.slug);
        view! {
            <p class="series-note">
                {format!("Part {} of ", series.part)} <A href=href>{series.title}</A>
            </p>
        }
    });
    let date = metadata.date.map(|date| date.format("%B %-d, %Y").to_string());
    let title = metadata.title;
    let tags = metadata.tags;

    view! {
        <Breadcrumbs trail=trail />
        <article>
            <header>
                <h1>{title}</h1>
                {byline}
                {date.map(|date| view! { <time>{date}</time> })}
                {series}
                <p class="tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <Badge label=tag /> })
                        .collect_view()}
                </p>
            </header>
            <TableOfContents toc=toc />
            <div class="editorial-body" inner_html=html_body></div>
        </article>
        <RelatedCallout
            title="Thinking about your finances at sea?"
            href="/financial"
            blurb="Get a free consultation with an advisor who works with mariners."
        />
    }
}

#[component]
fn TableOfContents(toc: Vec<Heading>) -> impl IntoView {
    if toc.is_empty() {
        return Either::Left(());
    }
    Either::Right(view! {
        <nav class="toc" aria-label="Table of contents">
            <ol>
                {toc
                    .into_iter()
                    .map(|heading| {
                        let class = format!("toc-level-{}", heading.level);
                        let href = format!("#{}", heading.anchor);
                        let number = heading.section_number();
                        view! {
                            <li class=class>
                                <a href=href>
                                    <span class="section-number">{number}</span>
                                    " "
                                    {heading.name}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    })
}

#[component]
pub fn SeriesPage() -> impl IntoView {
    let slug = slug_param("slug");
    let series = Resource::new_blocking(slug, move |slug| async move { get_series(slug).await });

    view! {
        <NavBar />
        <main class="series">
            {move || match series.get() {
                None => EitherOf3::A(view! { <p>"Loading…"</p> }),
                Some(Ok(Series { slug, title, entries })) => {
                    let mut trail = editorials_crumbs();
                    trail.push(Crumb::new(title.clone(), format!("/editorials/series/{}", slug)));
                    EitherOf3::B(view! {
                        <Breadcrumbs trail=trail />
                        <h1>{title}</h1>
                        <EditorialList entries=entries />
                    })
                }
                Some(Err(err)) => EitherOf3::C(view! {
                    <p class="error">{format!("Could not load series: {}", err)}</p>
                }),
            }}
        </main>
        <Footer />
    }
}

#[component]
pub fn AuthorPage() -> impl IntoView {
    let slug = slug_param("slug");
    let page = Resource::new_blocking(slug, move |slug| async move { get_author(slug).await });

    view! {
        <NavBar />
        <main class="author">
            {move || match page.get() {
                None => EitherOf3::A(view! { <p>"Loading…"</p> }),
                Some(Ok(AuthorListing { author, editorials })) => {
                    let mut trail = editorials_crumbs();
                    trail.push(Crumb::new(
                        author.name.clone(),
                        format!("/editorials/authors/{}", author.slug),
                    ));
                    EitherOf3::B(view! {
                        <Breadcrumbs trail=trail />
                        <header class="author-header">
                            {author.avatar.map(|src| {
                                view! { <img class="avatar" src=src alt="" /> }
                            })}
                            <h1>{author.name}</h1>
                            <p class="role">{author.role}</p>
                            <p>{author.bio}</p>
                        </header>
                        <h2>"Editorials"</h2>
                        <EditorialList entries=editorials />
                    })
                }
                Some(Err(err)) => EitherOf3::C(view! {
                    <p class="error">{format!("Could not load author: {}", err)}</p>
                }),
            }}
        </main>
        <Footer />
    }
}

#[server(GetEditorials, "/site/api", "GetJson", "editorials")]
pub async fn get_editorials() -> Result<Vec<FrontMatter>, ServerFnError> {
    crate::context::editorial_store()?
        .index()
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

#[server(GetEditorial, "/site/api", "GetJson", "editorial")]
pub async fn get_editorial(slug: String) -> Result<Editorial, ServerFnError> {
    crate::context::editorial_store()?
        .get_by_slug(&slug)
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

#[server(GetSeries, "/site/api", "GetJson", "series")]
pub async fn get_series(slug: String) -> Result<Series, ServerFnError> {
    crate::context::editorial_store()?
        .series(&slug)
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

#[server(GetAuthor, "/site/api", "GetJson", "author")]
pub async fn get_author(slug: String) -> Result<AuthorListing, ServerFnError> {
    crate::context::editorial_store()?
        .author(&slug)
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

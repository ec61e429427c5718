use axum::response::IntoResponse;

use super::metadata::{editorial_link, COPYRIGHT, DESCRIPTION, LANGUAGE, TITLE};

pub const URL_PATH: &str = "/editorials/feed.rss";

pub async fn handler(
    axum::extract::State(ctx): axum::extract::State<civsail::context::Context>,
) -> Result<axum::response::Response, civsail::editorials::Error> {
    let mut items: Vec<rss::Item> = vec![];
    for front_matter in ctx.editorials.index()? {
        let mut entry = rss::Item::default();
        let slug = &front_matter.slug;
        let editorial = ctx.editorials.get_by_slug(slug)?;
        entry.set_title(front_matter.metadata.title.to_string());
        entry.set_link(editorial_link(Some(slug)));
        entry.set_description(front_matter.metadata.summary);
        entry.set_author(editorial.author.map(|author| author.name));
        if let Some(date) = front_matter.metadata.date {
            entry.set_pub_date(date.format("%Y-%m-%d").to_string());
        }
        entry.set_categories(
            front_matter
                .metadata
                .tags
                .into_iter()
                .map(|name| rss::Category { name, domain: None })
                .collect::<Vec<rss::Category>>(),
        );
        entry.set_content(editorial.html_body);
        items.push(entry);
    }

    let channel = rss::ChannelBuilder::default()
        .title(TITLE)
        .link(editorial_link(None))
        .description(DESCRIPTION)
        .language(String::from(LANGUAGE))
        .copyright(String::from(COPYRIGHT))
        .items(items)
        .build();
    let response = (
        axum::http::StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "application/rss+xml")],
        channel.to_string(),
    )
        .into_response();
    Ok(response)
}

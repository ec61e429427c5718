use super::metadata::{editorial_link, feed_link, DESCRIPTION, LANGUAGE, TITLE};

pub const FEED_NAME: &str = "json";
pub const URL_PATH: &str = "/editorials/feed.json";

pub async fn handler(
    axum::extract::State(ctx): axum::extract::State<civsail::context::Context>,
) -> Result<axum::Json<json_feed_model::Feed>, civsail::editorials::Error> {
    let mut feed = json_feed_model::Feed::new();
    feed.set_title(TITLE);
    feed.set_home_page_url(editorial_link(None));
    feed.set_feed_url(feed_link(FEED_NAME));
    feed.set_description(DESCRIPTION);
    feed.set_language(LANGUAGE);
    let mut items: Vec<json_feed_model::Item> = vec![];
    for front_matter in ctx.editorials.index()? {
        let mut entry = json_feed_model::Item::new();
        let slug = &front_matter.slug;
        let editorial = ctx.editorials.get_by_slug(slug)?;
        entry.set_id(slug);
        entry.set_url(editorial_link(Some(slug)));
        entry.set_title(&front_matter.metadata.title);
        entry.set_content_html(editorial.html_body);
        if let Some(summary) = front_matter.metadata.summary {
            entry.set_summary(summary);
        }
        if let Some(date) = front_matter.metadata.date {
            entry.set_date_published(date.format("%Y-%m-%d"));
        }
        if let Some(author) = editorial.author {
            let mut feed_author = json_feed_model::Author::new();
            feed_author.set_name(author.name);
            entry.set_authors(vec![feed_author]);
        }
        entry.set_tags(front_matter.metadata.tags);
        items.push(entry);
    }
    feed.set_items(items);

    Ok(axum::Json(feed))
}

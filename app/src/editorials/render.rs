use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use super::Heading;

/// Renders an editorial body to HTML, numbering its headings and giving each
/// one an anchor so the table of contents can link to it.
pub fn render(markdown: &str) -> (Vec<Heading>, String) {
    let events: Vec<Event> = Parser::new_ext(markdown, Options::all()).collect();
    let toc = table_of_contents(&events);

    let mut headings = toc.iter();
    let mut anchor: Option<String> = None;
    let mut output = Vec::with_capacity(events.len() + toc.len() * 2);
    for event in events {
        match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => {
                // The ToC already took any explicit `{#id}` as its anchor.
                let id = headings
                    .next()
                    .map(|heading| CowStr::from(heading.anchor.clone()))
                    .or(id);
                anchor = id.as_ref().map(|id| id.to_string());
                output.push(Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                }));
            }
            Event::End(TagEnd::Heading(level)) => {
                if let Some(id) = anchor.take() {
                    output.push(Event::Text(CowStr::from(" ")));
                    output.push(Event::Html(CowStr::from(format!(
                        "<a href=\"#{}\"><span class=\"heading-anchor\">#</span></a>",
                        id
                    ))));
                }
                output.push(Event::End(TagEnd::Heading(level)));
            }
            other => output.push(other),
        }
    }

    let mut html = String::with_capacity(markdown.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, output.into_iter());
    (toc, html)
}

fn table_of_contents(events: &[Event]) -> Vec<Heading> {
    let mut toc = vec![];
    let mut path = [0u16; 6];
    let mut name: Option<String> = None;
    let mut explicit_id: Option<String> = None;
    for event in events {
        match event {
            Event::Start(Tag::Heading { id, .. }) => {
                name = Some(String::new());
                explicit_id = id.as_ref().map(|id| id.to_string());
            }
            Event::End(TagEnd::Heading(level)) => {
                let name = String::from(name.take().unwrap_or_default().trim());
                let depth = heading_depth(*level);
                path[depth - 1] = path[depth - 1].saturating_add(1);
                path[depth..].fill(0);
                let mut heading = Heading {
                    name,
                    level: depth as u8,
                    path,
                    anchor: String::new(),
                };
                heading.anchor = explicit_id.take().unwrap_or_else(|| {
                    slug::slugify(format!("{} {}", heading.section_number(), heading.name))
                });
                log::debug!("{} {}", heading.section_number(), heading.name);
                toc.push(heading);
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(name) = name.as_mut() {
                    name.push_str(text);
                }
            }
            _ => (),
        }
    }
    toc
}

fn heading_depth(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

//! Markdown rendering for recipe instructions.
//!
//! The AI writes instructions as markdown that usually repeats the recipe
//! title as a heading and sometimes embeds a hero image; both duplicate what
//! the detail page already shows, so they are dropped before rendering. The
//! processing is block-structured over the parser's event stream — never
//! text patterns over the raw markdown.
//!
//! Raw HTML events are dropped everywhere, which is the sanitization step:
//! the rendered output can only contain markup generated by the renderer
//! itself.

use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

fn sanitized_events(source: &str) -> Vec<Event<'_>> {
    Parser::new_ext(source, parser_options())
        .filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)))
        .collect()
}

fn render(events: Vec<Event<'_>>) -> String {
    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

/// Full sanitized render of a markdown body.
pub fn instructions_html(source: &str) -> String {
    render(sanitized_events(source))
}

#[derive(PartialEq)]
enum Dropping {
    Heading,
    Image,
}

/// Drop the first heading block and the first image, wherever they appear.
fn strip_lead_heading_and_image(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    let mut heading_dropped = false;
    let mut image_dropped = false;
    let mut dropping: Option<Dropping> = None;

    for event in events {
        if let Some(kind) = &dropping {
            match (&event, kind) {
                (Event::End(TagEnd::Heading(_)), Dropping::Heading)
                | (Event::End(TagEnd::Image), Dropping::Image) => dropping = None,
                _ => {}
            }
            continue;
        }
        match &event {
            Event::Start(Tag::Heading { .. }) if !heading_dropped => {
                heading_dropped = true;
                dropping = Some(Dropping::Heading);
            }
            Event::Start(Tag::Image { .. }) if !image_dropped => {
                image_dropped = true;
                dropping = Some(Dropping::Image);
            }
            _ => out.push(event),
        }
    }
    out
}

/// When a level-3 "Preparación" heading exists, cut the document to start
/// there (everything before it repeats the summary shown above the body).
fn cut_to_preparation(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    for (index, event) in events.iter().enumerate() {
        if let Event::Start(Tag::Heading {
            level: HeadingLevel::H3,
            ..
        }) = event
        {
            let mut text = String::new();
            for inner in &events[index + 1..] {
                match inner {
                    Event::End(TagEnd::Heading(_)) => break,
                    Event::Text(t) => text.push_str(t),
                    _ => {}
                }
            }
            if text.trim().starts_with("Preparación") {
                return events[index..].to_vec();
            }
        }
    }
    events
}

/// Render for the recipe detail page: no duplicate title/hero image, cut to
/// the "Preparación" section when one exists.
pub fn detail_html(source: &str) -> String {
    let events = strip_lead_heading_and_image(sanitized_events(source));
    render(cut_to_preparation(events))
}

/// Sanitized render truncated at a character budget, for compact previews.
/// Open blocks are closed properly after the cut.
pub fn preview_html(source: &str, max_chars: usize) -> String {
    let mut taken: Vec<Event<'_>> = Vec::new();
    let mut open: Vec<TagEnd> = Vec::new();
    let mut budget = max_chars;

    for event in sanitized_events(source) {
        match &event {
            Event::Start(tag) => {
                open.push(tag.to_end());
                taken.push(event);
            }
            Event::End(_) => {
                open.pop();
                taken.push(event);
            }
            Event::Text(text) => {
                let len = text.chars().count();
                if len <= budget {
                    budget -= len;
                    taken.push(event);
                } else {
                    let cut: String = text.chars().take(budget).collect();
                    budget = 0;
                    taken.push(Event::Text(format!("{cut}…").into()));
                }
            }
            _ => taken.push(event),
        }
        if budget == 0 {
            break;
        }
    }

    while let Some(end) = open.pop() {
        taken.push(Event::End(end));
    }
    render(taken)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "# Sopa de tomate\n\n\
        ![foto](https://cdn.example/sopa.jpg)\n\n\
        Resumen breve de la receta.\n\n\
        ### Preparación\n\n\
        1. Lavar los tomates\n2. Cocinar a fuego lento\n";

    #[test]
    fn test_detail_strips_title_and_image() {
        let html = detail_html("# Título\n\n![img](x.jpg)\n\nCuerpo del texto.");
        assert!(!html.contains("<h1"));
        assert!(!html.contains("<img"));
        assert!(html.contains("Cuerpo del texto."));
    }

    #[test]
    fn test_detail_strips_only_the_first_heading() {
        let html = detail_html("# Uno\n\n## Dos\n\nTexto.");
        assert!(!html.contains("Uno"));
        assert!(html.contains("<h2>Dos</h2>"));
    }

    #[test]
    fn test_detail_cuts_to_preparation() {
        let html = detail_html(DOC);
        assert!(!html.contains("Resumen breve"));
        assert!(html.contains("Preparación"));
        assert!(html.contains("Lavar los tomates"));
    }

    #[test]
    fn test_raw_html_never_passes_through() {
        let html = instructions_html("Hola <script>alert(1)</script> mundo\n\n<div>x</div>");
        assert!(!html.contains("<script"));
        assert!(!html.contains("<div>"));
        assert!(html.contains("Hola"));
    }

    #[test]
    fn test_preview_respects_char_budget() {
        let html = preview_html("Un párrafo bastante largo para recortar.", 10);
        assert!(html.contains("Un párrafo…"));
        assert!(!html.contains("recortar"));
        // The paragraph is still closed.
        assert!(html.trim_end().ends_with("</p>"));
    }

    #[test]
    fn test_preview_keeps_short_documents_whole() {
        let html = preview_html("Corto.", 100);
        assert!(html.contains("Corto."));
        assert!(!html.contains('…'));
    }
}

//! Atom feed parsing for the arXiv export API.
//!
//! Only the fields the service needs are extracted. Element names are matched
//! on their local part so namespace prefixes (`atom:`, `arxiv:`) don't matter.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::FeedEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextField {
    Id,
    Title,
    Summary,
    Published,
    AuthorName,
}

impl TextField {
    fn local_name(self) -> &'static [u8] {
        match self {
            Self::Id => b"id",
            Self::Title => b"title",
            Self::Summary => b"summary",
            Self::Published => b"published",
            Self::AuthorName => b"name",
        }
    }
}

/// Parse an Atom document into raw feed entries, in document order.
///
/// Fails if the document is not well-formed XML or has no `<feed>` root.
pub fn parse_atom_feed(xml: &str) -> DomainResult<Vec<FeedEntry>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();

    let mut saw_feed = false;
    let mut entries = Vec::new();
    let mut current: Option<FeedEntry> = None;
    let mut in_author = false;
    let mut has_alternate = false;
    let mut field: Option<TextField> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"feed" => saw_feed = true,
                b"entry" => {
                    current = Some(FeedEntry::default());
                    in_author = false;
                    has_alternate = false;
                    field = None;
                }
                b"author" if current.is_some() => in_author = true,
                b"link" => {
                    if let Some(entry) = current.as_mut() {
                        apply_link(entry, &mut has_alternate, &e);
                    }
                }
                name if current.is_some() => {
                    field = match name {
                        b"id" => Some(TextField::Id),
                        b"title" => Some(TextField::Title),
                        b"summary" => Some(TextField::Summary),
                        b"published" => Some(TextField::Published),
                        b"name" if in_author => Some(TextField::AuthorName),
                        _ => None,
                    };
                    text.clear();
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"link" {
                    if let Some(entry) = current.as_mut() {
                        apply_link(entry, &mut has_alternate, &e);
                    }
                }
            }
            Ok(Event::Text(t)) => {
                if field.is_some() {
                    let unescaped = t
                        .unescape()
                        .map_err(|e| DomainError::UpstreamUnavailable(format!("XML parse error: {e}")))?;
                    text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(c)) => {
                if field.is_some() {
                    text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Ok(Event::End(e)) => {
                let name = e.local_name();
                let name = name.as_ref();
                if name == b"entry" {
                    if let Some(entry) = current.take() {
                        entries.push(entry);
                    }
                    field = None;
                } else if name == b"author" {
                    in_author = false;
                } else if let (Some(f), Some(entry)) = (field, current.as_mut()) {
                    if f.local_name() == name {
                        store_text(entry, f, std::mem::take(&mut text));
                        field = None;
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DomainError::UpstreamUnavailable(format!(
                    "XML parse error at position {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    if !saw_feed {
        return Err(DomainError::UpstreamUnavailable(
            "response is not an Atom feed".to_string(),
        ));
    }
    Ok(entries)
}

fn store_text(entry: &mut FeedEntry, field: TextField, raw: String) {
    match field {
        TextField::Id => entry.id = Some(raw.trim().to_string()),
        TextField::Title => entry.title = Some(collapse_whitespace(&raw)),
        TextField::Summary => entry.summary = Some(raw.trim().to_string()),
        TextField::Published => entry.published = Some(raw.trim().to_string()),
        TextField::AuthorName => {
            let name = collapse_whitespace(&raw);
            if !name.is_empty() {
                entry.authors.push(name);
            }
        }
    }
}

/// The entry link is the first `rel="alternate"` href, falling back to the
/// first link of any kind when no alternate is present.
fn apply_link(entry: &mut FeedEntry, has_alternate: &mut bool, e: &BytesStart<'_>) {
    let mut rel: Option<String> = None;
    let mut href: Option<String> = None;
    for attr in e.attributes().flatten() {
        let Ok(value) = attr.unescape_value() else {
            continue;
        };
        match attr.key.local_name().as_ref() {
            b"rel" => rel = Some(value.into_owned()),
            b"href" => href = Some(value.into_owned()),
            _ => {}
        }
    }

    let Some(href) = href else { return };
    // Atom treats a link without rel as alternate.
    let is_alternate = rel.as_deref().is_none_or(|r| r == "alternate");
    if is_alternate && !*has_alternate {
        entry.link = Some(href);
        *has_alternate = true;
    } else if entry.link.is_none() {
        entry.link = Some(href);
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

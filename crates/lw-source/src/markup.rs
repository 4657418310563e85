//! Fragment scanning over raw schedule-page HTML.
//!
//! Only `<h2>` (headings) and `<p>` (details) elements are of interest. The
//! scanner walks the document in order, so the fragment sequence mirrors the
//! page layout. It is not a general HTML parser: nested `<h2>`/`<p>` and
//! unclosed elements are handled on a best-effort basis.

use lw_core::entities::Fragment;

/// Scan `html` for headings and paragraphs in document order.
///
/// Text is tag-stripped, entity-decoded and whitespace-collapsed; elements
/// whose text ends up empty are dropped. Headings carry their `id`
/// attribute as the anchor.
#[must_use]
pub fn scan_fragments(html: &str) -> Vec<Fragment> {
    let lower = html.to_ascii_lowercase();
    let mut fragments = Vec::new();
    let mut pos = 0;

    while let Some(rel) = lower[pos..].find('<') {
        let start = pos + rel;
        let Some(element) = element_at(&lower, start) else {
            pos = start + 1;
            continue;
        };
        let Some(open_end) = lower[start..].find('>').map(|i| start + i + 1) else {
            break;
        };

        let close_tag = element.close_tag();
        let (inner_end, next) = lower[open_end..]
            .find(close_tag)
            .map_or((html.len(), html.len()), |i| {
                (open_end + i, open_end + i + close_tag.len())
            });

        let text = clean_text(&html[open_end..inner_end]);
        if !text.is_empty() {
            fragments.push(match element {
                Element::Heading => {
                    Fragment::heading(text, id_attribute(&html[start..open_end]).as_deref())
                }
                Element::Paragraph => Fragment::detail(text),
            });
        }
        pos = next;
    }

    tracing::debug!(fragments = fragments.len(), "scanned schedule markup");
    fragments
}

#[derive(Debug, Clone, Copy)]
enum Element {
    Heading,
    Paragraph,
}

impl Element {
    const fn close_tag(self) -> &'static str {
        match self {
            Self::Heading => "</h2",
            Self::Paragraph => "</p",
        }
    }
}

/// Identify an `<h2 ...>` or `<p ...>` open tag starting at `start`.
fn element_at(lower: &str, start: usize) -> Option<Element> {
    let rest = &lower[start + 1..];
    let (element, name_len) = if rest.starts_with("h2") {
        (Element::Heading, 2)
    } else if rest.starts_with('p') {
        (Element::Paragraph, 1)
    } else {
        return None;
    };
    match rest[name_len..].chars().next() {
        Some(c) if c == '>' || c == '/' || c.is_ascii_whitespace() => Some(element),
        _ => None,
    }
}

/// Value of the `id` attribute in an open tag, if present and non-empty.
fn id_attribute(open_tag: &str) -> Option<String> {
    let lower = open_tag.to_ascii_lowercase();
    let mut search = 0;
    while let Some(rel) = lower[search..].find("id") {
        let at = search + rel;
        search = at + 2;
        let preceded_by_space = lower[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_whitespace());
        let after = lower[at + 2..].trim_start();
        if !preceded_by_space || !after.starts_with('=') {
            continue;
        }
        let value_start = open_tag.len() - after.len() + 1;
        let value = open_tag[value_start..].trim_start();
        let id = match value.chars().next() {
            Some(quote @ ('"' | '\'')) => value[1..].split(quote).next().unwrap_or_default(),
            _ => value
                .split(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                .next()
                .unwrap_or_default(),
        };
        return (!id.is_empty()).then(|| decode_entities(id));
    }
    None
}

/// Strip tags, decode entities and collapse whitespace.
fn clean_text(inner: &str) -> String {
    normalize_ws(&decode_entities(&strip_tags(inner)))
}

fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Decode the named entities the page uses plus any numeric reference.
/// En and em dashes become ASCII hyphens so headings keep their separator.
fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail.find(';').filter(|&end| end <= 10) {
            Some(end) => match decode_entity(&tail[1..end]) {
                Some(ch) => {
                    out.push(ch);
                    rest = &tail[end + 1..];
                }
                None => {
                    out.push('&');
                    rest = &tail[1..];
                }
            },
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out.chars().map(normalize_dash).collect()
}

fn decode_entity(name: &str) -> Option<char> {
    let named = match name {
        "nbsp" => Some(' '),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "ndash" | "mdash" => Some('-'),
        "rsquo" | "lsquo" => Some('\''),
        _ => None,
    };
    if named.is_some() {
        return named;
    }
    let number = name.strip_prefix('#')?;
    let code = match number.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => number.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

const fn normalize_dash(ch: char) -> char {
    match ch {
        '\u{2013}' | '\u{2014}' => '-',
        '\u{a0}' => ' ',
        other => other,
    }
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

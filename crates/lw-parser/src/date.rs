//! Date-phrase normalization for mission headings.
//!
//! A heading reads `<date phrase> - <title>`. Four phrase dialects occur on
//! the schedule page:
//!
//! ```text
//! January 3, 2023 - SpaceX Falcon 9, Transporter 6      exact
//! March 2023 - SpaceX Falcon 9, Polaris Dawn            month only (day = month end)
//! NET March 2, 2023 - Boeing Starliner, CFT             no earlier than
//! Quarter 3, 2023 - ULA Vulcan, Dream Chaser            quarter (fixed quarter-end date)
//! ```
//!
//! Headings that do not start with a month, `NET` or `Quarter` are not
//! missions (section titles, adverts) and normalize to `Ok(None)`. Headings
//! that do start with one of them but fail to parse are hard errors: the page
//! format changed in a way these grammars do not cover.

use lw_core::entities::CalendarDate;
use lw_core::enums::Classification;

use crate::error::ParserError;

/// Month name, ordinal, and the day used when a phrase omits the day.
///
/// February is always 28; month-only phrases are estimates and the default
/// only has to land inside the month.
const MONTHS: [(&str, u32, u32); 12] = [
    ("january", 1, 31),
    ("february", 2, 28),
    ("march", 3, 31),
    ("april", 4, 30),
    ("may", 5, 31),
    ("june", 6, 30),
    ("july", 7, 31),
    ("august", 8, 31),
    ("september", 9, 30),
    ("october", 10, 31),
    ("november", 11, 30),
    ("december", 12, 31),
];

/// Representative (month, day) for each quarter: the last day of the quarter.
const QUARTER_ENDS: [(u32, u32); 4] = [(3, 31), (6, 30), (9, 30), (12, 31)];

const NET_TOKEN: &str = "net";
const QUARTER_KEYWORD: &str = "quarter";

/// A heading whose date phrase resolved to a concrete day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedHeading {
    pub date: CalendarDate,
    /// Date phrase as written (commas kept, `NET` prefix dropped).
    pub human_label: String,
    pub title: String,
    pub classification: Classification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grammar {
    Month,
    Quarter,
}

/// Normalize one heading text.
///
/// Returns `Ok(None)` when the text is not a dated mission heading.
///
/// # Errors
///
/// Returns [`ParserError::DateGrammar`] when the text starts with a month,
/// `NET` or `Quarter` but the phrase is structurally invalid (wrong token
/// count, unknown month, bad day/year/quarter, missing title).
pub fn normalize_heading(text: &str) -> Result<Option<NormalizedHeading>, ParserError> {
    let collapsed = collapse_whitespace(text);
    let (rest, net) = strip_net_prefix(&collapsed);

    let Some(grammar) = detect_grammar(rest) else {
        if net {
            return Err(ParserError::grammar(
                &collapsed,
                "NET is not followed by a month or quarter",
            ));
        }
        return Ok(None);
    };

    let Some((date_part, title_part)) = rest.split_once('-') else {
        return Err(ParserError::grammar(
            &collapsed,
            "missing '-' between date and title",
        ));
    };
    let human_label = date_part.trim().to_string();
    let title = title_part.trim();
    if title.is_empty() {
        return Err(ParserError::grammar(&collapsed, "empty mission title"));
    }

    // Commas separate date parts inconsistently ("January 3, 2023",
    // "January, 2023", "January 3,2023"); they carry no position.
    let decomma = human_label.replace(',', " ");
    let tokens: Vec<&str> = decomma.split_whitespace().collect();

    let (date, classification, title) = match grammar {
        Grammar::Month => {
            let (date, classification) = resolve_month_phrase(&collapsed, &tokens)?;
            (date, classification, title.to_string())
        }
        Grammar::Quarter => {
            let (date, quarter) = resolve_quarter_phrase(&collapsed, &tokens)?;
            let annotated = format!(
                "{title} (Q{quarter} {}: date allocated to quarter end)",
                date.year()
            );
            (date, Classification::QuarterAllocated, annotated)
        }
    };

    let classification = if net {
        Classification::NetEstimate
    } else {
        classification
    };

    tracing::trace!(%date, %classification, label = %human_label, "normalized heading");

    Ok(Some(NormalizedHeading {
        date,
        human_label,
        title,
        classification,
    }))
}

/// `[Month, Day, Year]` or `[Month, Year]`.
fn resolve_month_phrase(
    phrase: &str,
    tokens: &[&str],
) -> Result<(CalendarDate, Classification), ParserError> {
    match *tokens {
        [month, day, year] => {
            let (month_ordinal, _) = month_ordinal(phrase, month)?;
            let year = parse_year(phrase, year)?;
            let day: u32 = day
                .parse()
                .map_err(|_| ParserError::grammar(phrase, format!("day '{day}' is not a number")))?;
            let date = CalendarDate::from_ymd(year, month_ordinal, day).ok_or_else(|| {
                ParserError::grammar(
                    phrase,
                    format!("day {day} does not exist in {month} {year}"),
                )
            })?;
            Ok((date, Classification::Exact))
        }
        [month, year] => {
            let (month_ordinal, month_end) = month_ordinal(phrase, month)?;
            let year = parse_year(phrase, year)?;
            let date = CalendarDate::from_ymd(year, month_ordinal, month_end).ok_or_else(|| {
                ParserError::grammar(phrase, format!("cannot resolve month end of {month} {year}"))
            })?;
            Ok((date, Classification::MonthOnly))
        }
        _ => Err(ParserError::grammar(
            phrase,
            format!("expected 2 or 3 date tokens, found {}", tokens.len()),
        )),
    }
}

/// `[Quarter, N, Year]`, returning the quarter-end date and N.
fn resolve_quarter_phrase(
    phrase: &str,
    tokens: &[&str],
) -> Result<(CalendarDate, u32), ParserError> {
    let [_, quarter, year] = *tokens else {
        return Err(ParserError::grammar(
            phrase,
            format!("expected 'Quarter N YYYY', found {} tokens", tokens.len()),
        ));
    };
    let quarter: u32 = quarter
        .parse()
        .ok()
        .filter(|q| (1..=4).contains(q))
        .ok_or_else(|| ParserError::grammar(phrase, format!("invalid quarter '{quarter}'")))?;
    let year = parse_year(phrase, year)?;
    let (month, day) = QUARTER_ENDS[(quarter - 1) as usize];
    let date = CalendarDate::from_ymd(year, month, day)
        .ok_or_else(|| ParserError::grammar(phrase, format!("cannot resolve Q{quarter} {year}")))?;
    Ok((date, quarter))
}

/// Look up a month by full name or three-letter abbreviation, case-insensitively.
fn month_ordinal(phrase: &str, token: &str) -> Result<(u32, u32), ParserError> {
    let lower = token.to_ascii_lowercase();
    MONTHS
        .iter()
        .find(|(name, _, _)| *name == lower || (lower.len() == 3 && name.starts_with(&lower)))
        .map(|&(_, ordinal, month_end)| (ordinal, month_end))
        .ok_or_else(|| ParserError::grammar(phrase, format!("unknown month '{token}'")))
}

fn parse_year(phrase: &str, token: &str) -> Result<i32, ParserError> {
    if token.len() != 4 || !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParserError::grammar(
            phrase,
            format!("year '{token}' is not a 4-digit number"),
        ));
    }
    token
        .parse()
        .map_err(|_| ParserError::grammar(phrase, format!("year '{token}' is not a number")))
}

/// Strip a leading `NET` token, returning the remainder and whether it was present.
fn strip_net_prefix(text: &str) -> (&str, bool) {
    match text.split_once(' ') {
        Some((first, rest)) if first.eq_ignore_ascii_case(NET_TOKEN) => (rest.trim_start(), true),
        _ => (text, false),
    }
}

fn detect_grammar(text: &str) -> Option<Grammar> {
    let starts_with_ci = |prefix: &str| {
        text.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };

    if starts_with_ci(QUARTER_KEYWORD) {
        return Some(Grammar::Quarter);
    }
    MONTHS
        .iter()
        .any(|(name, _, _)| starts_with_ci(&name[..3]))
        .then_some(Grammar::Month)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

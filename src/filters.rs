//! Noise-filter predicate battery.
//!
//! Headings are rare; almost everything on a page is something else. Each
//! predicate here recognizes one structural shape that is never a heading:
//! form-field boilerplate, decoration and dot leaders, URLs, bare numbers,
//! numbered prose lists, revision tables, wrapped body text. The engine
//! evaluates them as an ordered short-circuit cascade over immutable line
//! text; each predicate is pure and independent of the others.
//!
//! Lengths are measured in Unicode scalar values throughout.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Tabular form-field vocabulary (names, dates, signatures,
    /// travel-concession boilerplate, currency/amount phrasing).
    static ref RE_FORM_FIELD: Regex = Regex::new(
        r"(?i)Name|Date|Age|Signature|Designation|Relationship|Service Book|advance required|PAY|permanent|temporary|Home Town|LTC|block|fare|bus|rail|S\.No|Persons in respect|undertake|declare|tickets|refund|sum|receipt|amount|Rs\.|India|place to be visited|Block for which to be availed|headquarters|route|availing|entitled|employed|wife|husband|concession|visiting|so whether entitled|produce the tickets|cancellation|journey|above are true|correct to the best|knowledge|one lump sum"
    ).unwrap();

    /// Pure decoration: dashes, underscores, dots, whitespace.
    static ref RE_DECORATION: Regex = Regex::new(r"^[-_\s.]+$").unwrap();

    /// No ASCII alphanumeric content at all.
    static ref RE_NO_ALNUM: Regex = Regex::new(r"^[^a-zA-Z0-9]+$").unwrap();

    /// URL markers.
    static ref RE_URL: Regex = Regex::new(r"(?i)www\.|https?://").unwrap();

    /// Bare integer (years included), optional trailing period.
    static ref RE_BARE_NUMBER: Regex = Regex::new(r"^[0-9]+\.?$").unwrap();

    /// `<integer>. <rest>` shape shared by headings and prose lists.
    static ref RE_NUMBERED_ITEM: Regex = Regex::new(r"^([0-9]+)\.\s+(.+)").unwrap();

    /// Narrative continuations that mark a numbered line as prose, not a
    /// heading caption.
    static ref RE_NARRATIVE: Regex = Regex::new(
        r"(?i)professionals|testers|testing|who are|have achieved|relatively new|experienced"
    ).unwrap();

    /// Revision-history row: `<major>.<minor> <day> <month abbreviation>`.
    static ref RE_REVISION_ROW: Regex = Regex::new(
        r"(?i)^[0-9]+\.[0-9]+\s+[0-9]+\s+(JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)"
    ).unwrap();

    /// Tabular row: two 4-digit numbers, or a version-history header.
    static ref RE_TABLE_ROW: Regex = Regex::new(
        r"(?i)[0-9]{4}.*[0-9]{4}|Version.*Date.*Remarks"
    ).unwrap();

    /// Lowercase line start.
    static ref RE_LOWER_START: Regex = Regex::new(r"^[a-z]").unwrap();

    /// Interrogative openers that legitimize a lowercase start.
    static ref RE_INTERROGATIVE: Regex = Regex::new(r"(?i)^(who|what|when|where|why|how)").unwrap();

    /// Mid-sentence continuation openers (conjunctions, articles,
    /// prepositions).
    static ref RE_CONTINUATION: Regex = Regex::new(
        r"^(who wants|and|or|the|of|in|on|at|for|with|by)"
    ).unwrap();

    /// Any run of four digits (years, form numbers).
    static ref RE_FOUR_DIGIT_RUN: Regex = Regex::new(r"[0-9]{4}").unwrap();
}

/// Tabular form-field boilerplate (case-insensitive keyword match).
pub fn is_form_field(text: &str) -> bool {
    RE_FORM_FIELD.is_match(text)
}

/// Decoration or table-of-contents dot leaders.
///
/// A line is junk when it is composed entirely of punctuation, whitespace
/// and dashes (no ASCII alphanumerics at all), or when it carries more than
/// 10 periods that also make up over 30% of its length.
pub fn is_junk(text: &str) -> bool {
    if RE_DECORATION.is_match(text) || RE_NO_ALNUM.is_match(text) {
        return true;
    }
    let dots = text.chars().filter(|&c| c == '.').count();
    dots > 10 && dots as f32 > text.chars().count() as f32 * 0.3
}

/// Bare URL.
pub fn is_url(text: &str) -> bool {
    RE_URL.is_match(text)
}

/// Bare year or bare integer, optionally period-terminated.
pub fn is_bare_number(text: &str) -> bool {
    RE_BARE_NUMBER.is_match(text)
}

/// Enumerated prose-list body, as opposed to a numbered heading caption.
///
/// A `<integer>. <rest>` line is a list item rather than a heading when the
/// integer exceeds 10 (section numbering rarely does), the remainder runs
/// past 80 characters, or the remainder reads as narrative continuation.
pub fn is_enumerated_list_body(text: &str) -> bool {
    let Some(caps) = RE_NUMBERED_ITEM.captures(text) else {
        return false;
    };
    // Overlong digit runs won't parse; they are certainly not 1..=10.
    let number_in_range = caps[1].parse::<u64>().map_or(false, |n| n <= 10);
    if !number_in_range {
        return true;
    }
    let content = caps[2].trim();
    content.chars().count() > 80 || RE_NARRATIVE.is_match(content)
}

/// Revision/version-history row (`1.2 14 MAR ...`).
pub fn is_revision_row(text: &str) -> bool {
    RE_REVISION_ROW.is_match(text)
}

/// Tabular row: two 4-digit numbers, or the literal `Version ... Date ...
/// Remarks` header.
pub fn is_table_row(text: &str) -> bool {
    RE_TABLE_ROW.is_match(text)
}

/// Wrapped body-text fragment split mid-sentence by layout.
///
/// Short lines, lowercase starts without an interrogative lead, and lines
/// opening with conjunctions/articles/prepositions are continuations of a
/// sentence, not headings. Latin-tuned: non-Latin scripts have no lowercase
/// and fall through to the numbering and font-tier rules instead.
pub fn is_wrapped_fragment(text: &str) -> bool {
    if text.chars().count() < 10 {
        return true;
    }
    if RE_LOWER_START.is_match(text) && !RE_INTERROGATIVE.is_match(text) {
        return true;
    }
    RE_CONTINUATION.is_match(text)
}

/// Any four consecutive digits (years, document numbers); used to bar
/// candidates from the font-tier fallback.
pub fn contains_four_digit_run(text: &str) -> bool {
    RE_FOUR_DIGIT_RUN.is_match(text)
}

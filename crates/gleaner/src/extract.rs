// ABOUTME: Locator-driven extraction of title/link records from parsed HTML.
// ABOUTME: Matches elements by tag plus class token or id, then reads the first descendant anchor.

//! Structural extraction from a parsed document tree.
//!
//! Key behaviors:
//! - Class matching is token membership on the whitespace-split class list,
//!   never substring matching; id matching is exact string equality.
//! - Matched elements without a descendant anchor carrying an `href` are
//!   skipped silently; heterogeneous pages are expected.
//! - Zero matches is a valid empty result, not an error.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;
use crate::locator::{Locator, Target};
use crate::record::Record;

static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Extract all records matching `locator` from `markup`, in document order.
///
/// The parser is permissive: malformed markup degrades gracefully rather
/// than failing. Empty (or whitespace-only) input is the one case treated
/// as an Extract error, since there is no document to parse.
pub fn extract(markup: &str, locator: &Locator) -> Result<Vec<Record>, ScrapeError> {
    if markup.trim().is_empty() {
        return Err(ScrapeError::extract(
            locator.tag(),
            "Extract",
            Some(anyhow::anyhow!("empty document")),
        ));
    }

    // Locator::new already validated the tag; a parse failure here would
    // mean the locator bypassed construction.
    let tag_selector = Selector::parse(locator.tag()).map_err(|e| {
        ScrapeError::config(
            locator.tag(),
            "Extract",
            Some(anyhow::anyhow!("invalid tag selector: {}", e)),
        )
    })?;

    let doc = Html::parse_document(markup);

    let mut records = Vec::new();
    for element in doc.select(&tag_selector) {
        if !matches_target(&element, locator.target()) {
            continue;
        }
        if let Some(record) = first_anchor_record(&element) {
            records.push(record);
        }
    }
    Ok(records)
}

/// Test whether an element's attributes satisfy the locator target.
fn matches_target(element: &ElementRef, target: &Target) -> bool {
    match target {
        Target::Class(value) => element.value().classes().any(|class| class == value),
        Target::Id(value) => element.value().id() == Some(value.as_str()),
    }
}

/// Build a record from the first descendant anchor that carries an `href`.
///
/// Anchors without an `href` are passed over; if no usable anchor exists
/// the element contributes no record.
fn first_anchor_record(element: &ElementRef) -> Option<Record> {
    element.select(&ANCHOR).find_map(|anchor| {
        anchor.value().attr("href").map(|href| Record {
            title: anchor.text().collect::<String>().trim().to_string(),
            link: href.to_string(),
        })
    })
}

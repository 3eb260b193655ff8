// ABOUTME: Record type holding one extracted title/link pair.
// ABOUTME: Field order (title, link) is the serialized key/column order for JSON and CSV.

use serde::{Deserialize, Serialize};

/// One extracted item: the trimmed text of a matched element's anchor and
/// the anchor's href value. The link may be relative or absolute; it is
/// not validated as a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub link: String,
}

impl Record {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

// ABOUTME: Locator type describing which document elements are treated as records.
// ABOUTME: Enforces the tag + exactly-one-of-class/id invariant at construction time.

use scraper::Selector;

use crate::error::ScrapeError;

/// The attribute a locator matches on: a class token or an element id.
///
/// Modeled as a tagged union so the invalid "both set" and "neither set"
/// states cannot be represented once a `Locator` exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Class(String),
    Id(String),
}

impl Target {
    /// The class or id value this target carries.
    pub fn value(&self) -> &str {
        match self {
            Target::Class(v) => v,
            Target::Id(v) => v,
        }
    }
}

/// A validated rule identifying which elements are extractable records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    tag: String,
    target: Target,
}

impl Locator {
    /// Create a locator, validating the tag and target value.
    ///
    /// The tag must be non-empty and parse as an element selector; the
    /// target value must be non-empty. Violations are Config errors raised
    /// here, before any fetch or parse work runs.
    pub fn new(tag: impl Into<String>, target: Target) -> Result<Self, ScrapeError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(ScrapeError::config(
                tag,
                "Locator",
                Some(anyhow::anyhow!("tag must be non-empty")),
            ));
        }
        if Selector::parse(&tag).is_err() {
            return Err(ScrapeError::config(
                tag.as_str(),
                "Locator",
                Some(anyhow::anyhow!("tag is not a valid element selector")),
            ));
        }
        if target.value().is_empty() {
            return Err(ScrapeError::config(
                tag.as_str(),
                "Locator",
                Some(anyhow::anyhow!("class/id value must be non-empty")),
            ));
        }
        Ok(Self { tag, target })
    }

    /// Build a locator from optional class and id inputs, as supplied by a
    /// CLI front end. Exactly one of the two must be present.
    pub fn from_args(
        tag: impl Into<String>,
        class: Option<String>,
        id: Option<String>,
    ) -> Result<Self, ScrapeError> {
        let tag = tag.into();
        match (class, id) {
            (Some(class), None) => Self::new(tag, Target::Class(class)),
            (None, Some(id)) => Self::new(tag, Target::Id(id)),
            (Some(_), Some(_)) => Err(ScrapeError::config(
                tag,
                "Locator",
                Some(anyhow::anyhow!("class and id are mutually exclusive")),
            )),
            (None, None) => Err(ScrapeError::config(
                tag,
                "Locator",
                Some(anyhow::anyhow!("either class or id must be supplied")),
            )),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_class_target() {
        let locator = Locator::new("span", Target::Class("titleline".to_string())).unwrap();
        assert_eq!(locator.tag(), "span");
        assert_eq!(locator.target(), &Target::Class("titleline".to_string()));
    }

    #[test]
    fn new_rejects_empty_tag() {
        let err = Locator::new("", Target::Class("x".to_string())).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn new_rejects_invalid_tag_selector() {
        let err = Locator::new("[[[nope", Target::Id("x".to_string())).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn new_rejects_empty_target_value() {
        let err = Locator::new("div", Target::Class(String::new())).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn from_args_rejects_both() {
        let err = Locator::from_args(
            "span",
            Some("titleline".to_string()),
            Some("main".to_string()),
        )
        .unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn from_args_rejects_neither() {
        let err = Locator::from_args("span", None, None).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn from_args_builds_id_target() {
        let locator = Locator::from_args("div", None, Some("scores".to_string())).unwrap();
        assert_eq!(locator.target(), &Target::Id("scores".to_string()));
    }
}

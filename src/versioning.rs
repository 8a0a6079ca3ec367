//! Git tag to Python package version conversion.
//!
//! Tags look like `v1.2.3` or `v1.2.3-rc.1`; the resulting version follows
//! PEP 440 public identifiers (`1.2.3`, `1.2.3rc1`).

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

const TAG_PATTERN: &str =
    r"^v(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)(?:-(?P<kind>alpha|beta|rc)\.?(?P<number>\d+))?$";

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TAG_PATTERN).expect("tag pattern is a valid regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    #[error("Invalid tag: `{tag}` does not match pattern `{pattern}`")]
    Invalid { tag: String, pattern: &'static str },
}

impl TagError {
    fn invalid(tag: &str) -> Self {
        Self::Invalid {
            tag: tag.to_owned(),
            pattern: TAG_PATTERN,
        }
    }
}

pub fn process_tag(tag: &str) -> Result<String, TagError> {
    let caps = TAG_RE.captures(tag).ok_or_else(|| TagError::invalid(tag))?;

    let number = |name: &str| -> Result<u64, TagError> {
        caps[name].parse().map_err(|_| TagError::invalid(tag))
    };

    let major = number("major")?;
    let minor = number("minor")?;
    let patch = number("patch")?;

    let suffix = match caps.name("kind").map(|m| m.as_str()) {
        Some(kind) => {
            let marker = match kind {
                "alpha" => "a",
                "beta" => "b",
                _ => "rc",
            };
            format!("{}{}", marker, number("number")?)
        }
        None => String::new(),
    };

    Ok(format!("{}.{}.{}{}", major, minor, patch, suffix))
}

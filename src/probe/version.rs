//! Version extraction and comparison.
//!
//! Tool output is rarely just a version number (`Xcode 15.2\nBuild version
//! 15C500b`, `openjdk 17.0.2 2022-01-18`), so parsing picks the first dotted
//! numeric run out of arbitrary text.

use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// First dotted numeric run, e.g. `15.2` or `1.13.0`.
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)*").expect("VERSION_REGEX must compile"));

/// A dotted numeric version. Missing components compare as zero, so
/// `15` equals `15.0.0`.
#[derive(Debug, Clone, Serialize)]
#[serde(into = "String")]
pub struct Version {
    parts: Vec<u64>,
}

impl Version {
    /// Build a version from explicit components.
    pub fn new(parts: Vec<u64>) -> Self {
        Self { parts }
    }

    /// Extract the first version found in `text`.
    pub fn parse(text: &str) -> Option<Self> {
        let found = VERSION_REGEX.find(text)?;
        let parts = found
            .as_str()
            .split('.')
            .map(str::parse)
            .collect::<Result<Vec<u64>, _>>()
            .ok()?;
        Some(Self { parts })
    }

    /// Whether this version meets or exceeds `floor`.
    pub fn meets(&self, floor: &Version) -> bool {
        self >= floor
    }

    fn component(&self, index: usize) -> u64 {
        self.parts.get(index).copied().unwrap_or(0)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: Vec<String> = self.parts.iter().map(u64::to_string).collect();
        f.write_str(&text.join("."))
    }
}

impl FromStr for Version {
    type Err = String;

    /// Strict parse: the whole string must be a version.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match Self::parse(trimmed) {
            Some(v) if v.to_string().len() == trimmed.len() => Ok(v),
            _ => Err(format!("invalid version: '{}'", s)),
        }
    }
}

/// Accepts `"15.2"` and bare integers like `17`. Bare floats are rejected:
/// YAML reads `1.10` as the number 1.1, which would silently lower a floor.
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(VersionVisitor)
    }
}

struct VersionVisitor;

impl Visitor<'_> for VersionVisitor {
    type Value = Version;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a quoted version string such as \"1.13.0\" or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Version, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Version, E> {
        Ok(Version::new(vec![v]))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Version, E> {
        u64::try_from(v)
            .map(|n| Version::new(vec![n]))
            .map_err(|_| E::custom(format!("invalid version: {}", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Version, E> {
        Err(E::custom(format!(
            "version {} must be quoted (for example \"{}\") so no digits are lost",
            v, v
        )))
    }
}

impl From<Version> for String {
    fn from(value: Version) -> Self {
        value.to_string()
    }
}

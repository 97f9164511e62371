use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// A product classifier. Catalog sources are inconsistent about tag shape:
/// some encode plain strings, others objects carrying a `title` and/or
/// `name`. Both forms participate in tag search; anything else found in a
/// `tags` array is dropped during decoding and can therefore never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// Plain textual tag, e.g. `"abstract"`.
    Text(String),
    /// Structured tag, e.g. `{ "title": "Abstract Art" }`. Only
    /// string-valued `title`/`name` fields are retained.
    Named {
        title: Option<String>,
        name: Option<String>,
    },
}

impl Tag {
    /// Whether this tag matches a search term. `term` must already be
    /// trimmed and lowercased (the controller normalizes once per search).
    pub fn matches(&self, term: &str) -> bool {
        match self {
            Tag::Text(text) => text.to_lowercase().contains(term),
            Tag::Named { title, name } => {
                title
                    .as_deref()
                    .is_some_and(|t| t.to_lowercase().contains(term))
                    || name
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(term))
            }
        }
    }

    /// Display label for the tag, if it carries any usable text.
    pub fn label(&self) -> Option<&str> {
        match self {
            Tag::Text(text) => Some(text.as_str()),
            Tag::Named { title, name } => title.as_deref().or(name.as_deref()),
        }
    }

    /// Decode a single tag from a JSON value. Returns `None` for shapes
    /// that carry no tag semantics (numbers, null, nested arrays).
    pub fn from_value(value: &Value) -> Option<Tag> {
        match value {
            Value::String(s) => Some(Tag::Text(s.clone())),
            Value::Object(map) => Some(Tag::Named {
                title: map.get("title").and_then(Value::as_str).map(str::to_owned),
                name: map.get("name").and_then(Value::as_str).map(str::to_owned),
            }),
            _ => None,
        }
    }
}

/// Decode a `tags` field leniently: missing, `null`, or non-array values
/// become the empty tag list rather than a decode error.
pub fn tags_from_value(value: &Value) -> Vec<Tag> {
    match value {
        Value::Array(items) => items.iter().filter_map(Tag::from_value).collect(),
        _ => Vec::new(),
    }
}

/// One catalog entry. Products are read-only for the whole application;
/// the controller only ever re-slices the collection it was given.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Product {
    /// Identifier, unique within a catalog. Sources encode it as a string
    /// or a number; numbers are kept in decimal form.
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "de_tags")]
    pub tags: Vec<Tag>,
}

impl Product {
    /// Whether any tag on this product matches the (normalized) term.
    /// Products without tags never match.
    pub fn matches_tag(&self, term: &str) -> bool {
        self.tags.iter().any(|tag| tag.matches(term))
    }
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "product id must be a string or number, got {other}"
        ))),
    }
}

fn de_tags<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(tags_from_value(&value))
}

//! Library catalog records
//!
//! Wire types for the `stats/`, `books/`, `borrow/` and `return/` endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::fmt::Display;
use std::str::FromStr;

/// Identifier of a book as issued by the backend.
///
/// Echoed back verbatim in borrow/return requests, so a numeric id stays numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookId {
    Number(u64),
    Text(String),
}

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookId::Number(n) => write!(f, "{}", n),
            BookId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for BookId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<u64>() {
            Ok(n) => BookId::Number(n),
            Err(_) => BookId::Text(s.to_string()),
        })
    }
}

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        BookId::Number(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub isbn: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub available: Option<bool>,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.available.unwrap_or(false)
    }

    pub fn display_title(&self) -> &str {
        non_empty_or(&self.title, "N/A")
    }

    pub fn display_author(&self) -> &str {
        non_empty_or(&self.author, "Unknown")
    }

    pub fn display_isbn(&self) -> &str {
        non_empty_or(&self.isbn, "N/A")
    }
}

fn non_empty_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => fallback,
    }
}

/// Text cells take whatever scalar the backend sends. Null stays missing.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Availability by truthiness: `1`, `"yes"` and `true` are available; `0`, `""` and `false` are not.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Bool(b) => Some(b),
        Value::Number(n) => Some(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => Some(!s.is_empty()),
        Value::Array(_) | Value::Object(_) => Some(true),
    })
}

/// Counters accept any JSON number, or a numeric string. Anything else counts as missing.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => Some(n),
        Value::String(s) => s.trim().parse::<Number>().ok(),
        _ => None,
    })
}

/// Integral values print without a fractional part, so `10.0` shows as `10`.
fn count_text(value: &Option<Number>) -> String {
    let Some(n) = value else {
        return "0".to_string();
    };
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// Aggregate counters reported by the backend. Absent or null fields count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_books: Option<Number>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub available_books: Option<Number>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub borrowed_books: Option<Number>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub overdue_books: Option<Number>,
}

impl Stats {
    pub fn new(total: i64, available: i64, borrowed: i64, overdue: i64) -> Self {
        Self {
            total_books: Some(total.into()),
            available_books: Some(available.into()),
            borrowed_books: Some(borrowed.into()),
            overdue_books: Some(overdue.into()),
        }
    }

    pub fn total(&self) -> String {
        count_text(&self.total_books)
    }

    pub fn available(&self) -> String {
        count_text(&self.available_books)
    }

    pub fn borrowed(&self) -> String {
        count_text(&self.borrowed_books)
    }

    pub fn overdue(&self) -> String {
        count_text(&self.overdue_books)
    }
}

/// Response of a successful `borrow/` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowReceipt {
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Body of `borrow/` and `return/` requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CirculationRequest<'a> {
    pub book_id: &'a BookId,
}

//! Array-vs-page payload unwrapping.
//!
//! Listing endpoints return either a bare JSON array or a page object
//! `{content, pageNumber, pageSize, totalElements, totalPages, last}` with
//! any of the metadata fields possibly missing.

use serde::de::{DeserializeOwned, Error as _};
use serde::Deserialize;
use serde_json::Value;

use crate::types::Page;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPage {
    #[serde(default)]
    content: Option<Vec<Value>>,
    page_number: Option<u64>,
    page_size: Option<u64>,
    total_elements: Option<u64>,
    total_pages: Option<u64>,
    last: Option<bool>,
}

/// Items of a listing, whichever shape it came in.
///
/// `null` yields an empty list.
///
/// # Errors
/// Returns a serde error if the payload is neither an array nor a page, or if
/// an item does not match `T`.
pub fn unwrap_items<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>, serde_json::Error> {
    match payload {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => decode_items(items),
        Value::Object(_) => {
            let raw: RawPage = serde_json::from_value(payload)?;
            match raw.content {
                Some(items) => decode_items(items),
                None => Err(serde_json::Error::custom("expected a list or a page with `content`")),
            }
        }
        other => Err(serde_json::Error::custom(format!("expected a list, got {other}"))),
    }
}

/// Fully populated page for any listing shape.
///
/// Missing numeric fields default from the content length, `last` defaults to
/// `true`, and `null` yields [`Page::empty`].
///
/// # Errors
/// Same conditions as [`unwrap_items`].
pub fn unwrap_page<T: DeserializeOwned>(payload: Value) -> Result<Page<T>, serde_json::Error> {
    match payload {
        Value::Null => Ok(Page::empty()),
        Value::Array(items) => Ok(Page::from_items(decode_items(items)?)),
        Value::Object(_) => {
            let raw: RawPage = serde_json::from_value(payload)?;
            let content: Vec<T> = match raw.content {
                Some(items) => decode_items(items)?,
                None => {
                    return Err(serde_json::Error::custom(
                        "expected a list or a page with `content`",
                    ))
                }
            };
            let len = content.len() as u64;
            Ok(Page {
                content,
                page_number: raw.page_number.unwrap_or(0),
                page_size: raw.page_size.unwrap_or(len),
                total_elements: raw.total_elements.unwrap_or(len),
                total_pages: raw.total_pages.unwrap_or(u64::from(len > 0)),
                last: raw.last.unwrap_or(true),
            })
        }
        other => Err(serde_json::Error::custom(format!("expected a list, got {other}"))),
    }
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>, serde_json::Error> {
    items.into_iter().map(serde_json::from_value).collect()
}

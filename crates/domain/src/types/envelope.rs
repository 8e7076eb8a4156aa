//! Response wrappers used by the backend

use serde::{Deserialize, Serialize};

/// `{ success, message, data }` wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// Paginated listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: u64,
    pub page_size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub last: bool,
}

impl<T> Page<T> {
    /// The all-zero page returned for absent payloads
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            page_number: 0,
            page_size: 0,
            total_elements: 0,
            total_pages: 0,
            last: true,
        }
    }

    /// Single page holding every item
    pub fn from_items(content: Vec<T>) -> Self {
        let len = content.len() as u64;
        Self {
            content,
            page_number: 0,
            page_size: len,
            total_elements: len,
            total_pages: u64::from(len > 0),
            last: true,
        }
    }

    /// Transform every item, keeping the pagination metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            last: self.last,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

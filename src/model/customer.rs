use serde::Deserialize;

/// Form body submitted by the new and edit customer forms.
///
/// Every field defaults to an empty string so that a missing field reaches
/// validation instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFormDto {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

/// Query string for `GET /search/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQueryDto {
    pub q: Option<String>,
}

/// Query string for `GET /best-customers/`.
///
/// Kept as a raw string so that non-numeric input falls back to the default
/// list size rather than being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BestCustomersQueryDto {
    pub size: Option<String>,
}

/// Customer as shown on the detail and edit pages.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub phone: String,
    pub notes: String,
}

/// Row of a customer list page.
///
/// `reservation_count` is only present on ranked lists.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerListItemDto {
    pub id: i32,
    pub full_name: String,
    pub phone: String,
    pub reservation_count: Option<u64>,
}

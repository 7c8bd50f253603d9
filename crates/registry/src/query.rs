use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

use crate::identifier::CompanyIdentifier;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Score,
    CreationDate,
    Name,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Score => "score",
            SortBy::CreationDate => "creation_date",
            SortBy::Name => "name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Arguments of a company search, as received from the `search-company` tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub naf_code: Option<String>,
    #[serde(default)]
    pub creation_date_min: Option<String>,
    #[serde(default)]
    pub creation_date_max: Option<String>,
    #[serde(default)]
    pub legal_status: Option<String>,
    #[serde(default)]
    pub employee_range: Option<String>,
    #[serde(default)]
    pub company_category: Option<String>,
    #[serde(default)]
    pub sort_by: Option<SortBy>,
    #[serde(default)]
    pub sort_order: Option<SortOrder>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn effective_page(&self) -> u32 {
        self.page.filter(|page| *page > 0).unwrap_or(DEFAULT_PAGE)
    }

    pub fn effective_per_page(&self) -> u32 {
        self.per_page
            .filter(|per_page| *per_page > 0)
            .unwrap_or(DEFAULT_PER_PAGE)
    }
}

// JSON clients may send whole numbers as floats (`2.0`).
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let count = match number.as_u64() {
        Some(value) => u32::try_from(value).ok(),
        None => number
            .as_f64()
            .filter(|value| {
                value.fract() == 0.0 && *value >= 0.0 && *value <= f64::from(u32::MAX)
            })
            .map(|value| value as u32),
    };

    count
        .map(Some)
        .ok_or_else(|| {
            D::Error::custom(format!("expected a non-negative whole number, got {number}"))
        })
}

/// Builds the query strings sent to the registry `/search` endpoint.
pub struct QueryBuilder {
    pairs: Vec<(&'static str, String)>,
}

impl QueryBuilder {
    fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    fn push(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key, value.into()));
        self
    }

    // Absent and empty filters are left out of the query.
    fn push_optional(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    fn finish(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn search_query(request: &SearchRequest) -> String {
        let mut builder = Self::new();
        builder
            .push("q", request.query.as_str())
            .push("page", request.effective_page().to_string())
            .push("per_page", request.effective_per_page().to_string())
            .push_optional("postal_code", request.postal_code.as_deref())
            .push_optional("naf_code", request.naf_code.as_deref())
            .push_optional("creation_date_min", request.creation_date_min.as_deref())
            .push_optional("creation_date_max", request.creation_date_max.as_deref())
            .push_optional("legal_status", request.legal_status.as_deref())
            .push_optional("employee_range", request.employee_range.as_deref())
            .push_optional("company_category", request.company_category.as_deref())
            .push_optional("sort_by", request.sort_by.as_ref().map(SortBy::as_str))
            .push_optional(
                "sort_order",
                request.sort_order.as_ref().map(SortOrder::as_str),
            );
        builder.finish()
    }

    /// Query fetching the single best match for an identifier.
    pub fn identifier_query(identifier: &CompanyIdentifier) -> String {
        let mut builder = Self::new();
        builder
            .push("q", identifier.as_str())
            .push("page", "1")
            .push("per_page", "1");
        builder.finish()
    }
}

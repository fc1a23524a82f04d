//! List query parameters and pagination metadata
//!
//! `GET /employees` takes `search`, `department`, `page` and `limit` as
//! query-string values. [`ListParams`] is the raw wire form; it is checked
//! once at the boundary and turned into an [`EmployeeQuery`].

use crate::error::{AppError, AppResult};
use crate::filter::EmployeeFilter;
use crate::models::Department;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Raw query-string parameters of the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListParams {
    pub search: Option<String>,
    pub department: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Validated list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeQuery {
    pub filter: EmployeeFilter,
    pub page: u32,
    pub limit: u32,
}

impl Default for EmployeeQuery {
    fn default() -> Self {
        Self {
            filter: EmployeeFilter::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl EmployeeQuery {
    pub fn new(filter: EmployeeFilter, page: u32, limit: u32) -> Self {
        Self {
            filter,
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Rows skipped before the requested page
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// Query-string pairs for this query, omitting absent filters
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);
        if let Some(search) = self.filter.search() {
            params.push(("search", search.to_string()));
        }
        if let Some(department) = self.filter.department {
            params.push(("department", department.as_str().to_string()));
        }
        params.push(("page", self.page.to_string()));
        params.push(("limit", self.limit.to_string()));
        params
    }
}

impl TryFrom<ListParams> for EmployeeQuery {
    type Error = AppError;

    fn try_from(params: ListParams) -> AppResult<Self> {
        let department = params
            .department
            .map(|raw| raw.parse::<Department>())
            .transpose()
            .map_err(|e| AppError::invalid_field("department", e.to_string()))?;

        let page = match params.page {
            Some(raw) => parse_bounded("page", &raw, 1, u32::MAX)?,
            None => DEFAULT_PAGE,
        };
        let limit = match params.limit {
            Some(raw) => parse_bounded("limit", &raw, 1, MAX_LIMIT)?,
            None => DEFAULT_LIMIT,
        };

        Ok(Self {
            filter: EmployeeFilter::new(params.search, department),
            page,
            limit,
        })
    }
}

fn parse_bounded(field: &str, raw: &str, min: u32, max: u32) -> AppResult<u32> {
    let value: i64 = raw
        .parse()
        .map_err(|_| AppError::invalid_field(field, format!("{field} must be an integer")))?;
    if value < i64::from(min) {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must not be less than {min}"),
        ));
    }
    if value > i64::from(max) {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must not be greater than {max}"),
        ));
    }
    Ok(value as u32)
}

/// Pagination metadata for one page of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Records matching the filter, ignoring pagination
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    /// `ceil(total / limit)`, 0 when nothing matches
    pub total_pages: u32,
}

impl PageMeta {
    pub fn new(total: u64, page: u32, limit: u32) -> Self {
        let total_pages = total.div_ceil(u64::from(limit.max(1)));
        Self {
            total,
            page,
            limit,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        }
    }
}

/// One page of records plus metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

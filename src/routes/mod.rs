pub mod health;
pub mod leagues;
pub mod performances;
pub mod players;

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::models::Page;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate the paging parameters every list endpoint accepts
pub(crate) fn page(
    skip: Option<i64>,
    limit: Option<i64>,
    minimum_last_changed_date: Option<&str>,
) -> Result<Page, ApiError> {
    let defaults = Page::default();

    let skip = skip.unwrap_or(defaults.skip);
    if skip < 0 {
        return Err(ApiError::BadRequest("skip must not be negative".to_string()));
    }

    let limit = limit.unwrap_or(defaults.limit);
    if limit < 0 {
        return Err(ApiError::BadRequest("limit must not be negative".to_string()));
    }

    // Normalized so the string comparison in SQL orders correctly
    let min_last_changed_date = minimum_last_changed_date
        .map(|raw| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map(|date| date.format(DATE_FORMAT).to_string())
                .map_err(|_| {
                    ApiError::BadRequest(format!(
                        "minimum_last_changed_date must be YYYY-MM-DD, got {raw:?}"
                    ))
                })
        })
        .transpose()?;

    Ok(Page {
        skip,
        limit,
        min_last_changed_date,
    })
}

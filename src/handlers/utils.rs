// handlers/utils.rs - Request parsing shared by the protected handlers

use serde::Deserialize;

use crate::error::ApiError;
use crate::types::Pagination;

/// Raw `?limit=&offset=` query. Both must be given together; omitting both
/// reads from the start with the configured page size.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PageQuery {
    pub fn resolve(&self, max_limit: u64) -> Result<Pagination, ApiError> {
        if self.limit.is_none() && self.offset.is_none() {
            return Ok(Pagination::new(max_limit, 0));
        }

        Pagination::from_query(self.limit.as_deref(), self.offset.as_deref())
            .map(|page| page.capped(max_limit))
            .ok_or_else(|| {
                ApiError::bad_request("limit and offset must be given together, with limit >= 1 and offset >= 0")
            })
    }
}

use serde::Deserialize;

use errors::Error;

pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<i64>,
}

impl PageQuery {
    /// The requested 1-based page; 1 when the parameter is absent.
    pub fn page(&self) -> Result<usize, Error> {
        match self.page {
            None => Ok(1),
            Some(page) if page >= 1 => Ok(page as usize),
            Some(page) => Err(Error::BadRequest(format!("Invalid page {}", page))),
        }
    }
}

/// Returns `items[(page - 1) * 10 .. page * 10]`, empty once the page runs
/// past the end.
pub fn paginate<T>(page: usize, items: &[T]) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());

    &items[start..end]
}

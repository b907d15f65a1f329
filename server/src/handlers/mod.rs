use actix_web::web::{block, Data};
use serde::{Deserialize, Serialize};

use db::TriviaStore;
use errors::Error;

mod pagination;
mod quiz;

pub use self::pagination::*;
pub use self::quiz::*;

/// Runs a blocking store call on the blocking thread pool.
pub async fn with_store<F, T>(store: &Data<dyn TriviaStore>, f: F) -> Result<T, Error>
where
    F: FnOnce(&dyn TriviaStore) -> Result<T, Error> + Send + 'static,
    T: Send + 'static,
{
    let store = store.clone().into_inner();
    block(move || f(&*store)).await?
}

/// A category reference as clients send it: the id as a number or as text.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(i64),
    Text(String),
}

impl CategoryRef {
    /// The form stored in `questions.category`.
    pub fn as_text(&self) -> String {
        match self {
            CategoryRef::Id(id) => id.to_string(),
            CategoryRef::Text(text) => text.clone(),
        }
    }

    /// False for `0` and `""`.
    pub fn is_present(&self) -> bool {
        match self {
            CategoryRef::Id(id) => *id != 0,
            CategoryRef::Text(text) => !text.is_empty(),
        }
    }
}

use actix_web::{
    web::{Data, Json},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{
    models::{Category, CategoryMap},
    TriviaStore,
};
use errors::Error;

use crate::handlers::with_store;

#[derive(Debug, Deserialize, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

pub async fn get_all(store: Data<dyn TriviaStore>) -> Result<Json<CategoriesResponse>, Error> {
    let categories = with_store(&store, |store| store.categories_by_type())
        .await
        .map_err(|err| err.masked_as(Error::NotFound))?;

    if categories.is_empty() {
        return Err(Error::NotFound("No categories".into()));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: Category::to_map(&categories),
    }))
}

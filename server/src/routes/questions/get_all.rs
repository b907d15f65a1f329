use actix_web::{
    web::{Data, Json, Query},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{
    models::{Category, CategoryMap, Question},
    TriviaStore,
};
use errors::Error;

use crate::handlers::{paginate, with_store, PageQuery};

#[derive(Debug, Deserialize, Serialize)]
pub struct QuestionsPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

pub async fn get_all(
    store: Data<dyn TriviaStore>,
    query: Query<PageQuery>,
) -> Result<Json<QuestionsPage>, Error> {
    let page = query.page()?;

    let (questions, categories) = with_store(&store, |store| {
        Ok((store.questions()?, store.categories()?))
    })
    .await
    .map_err(|err| err.masked_as(Error::BadRequest))?;

    let current_questions = paginate(page, &questions);
    if current_questions.is_empty() {
        return Err(Error::NotFound(format!("No questions on page {}", page)));
    }

    Ok(Json(QuestionsPage {
        success: true,
        questions: current_questions.to_vec(),
        total_questions: questions.len(),
        categories: Category::to_map(&categories),
    }))
}

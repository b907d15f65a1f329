use actix_web::{
    web::{Data, Json, Path, Query},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{models::Question, TriviaStore};
use errors::Error;

use crate::handlers::{paginate, with_store, PageQuery};

#[derive(Debug, Deserialize, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

pub async fn questions(
    store: Data<dyn TriviaStore>,
    category_id: Path<i32>,
    query: Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponse>, Error> {
    let category_id = category_id.into_inner();
    let page = query.page()?;

    let (category, questions) = with_store(&store, move |store| {
        let category = store.find_category(category_id)?;
        let questions = store.questions_in_category(&category_id.to_string())?;
        Ok((category, questions))
    })
    .await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(page, &questions).to_vec(),
        total_questions: questions.len(),
        current_category: category.kind,
    }))
}

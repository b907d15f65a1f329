use actix_web::{
    web::{Data, Json},
    Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::{models::NewQuestion, TriviaStore};
use errors::Error;

use crate::handlers::{with_store, CategoryRef};
use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct AddQuestionRequest {
    #[validate(required, length(min = 1))]
    pub question: Option<String>,
    #[validate(required, length(min = 1))]
    pub answer: Option<String>,
    #[validate(required)]
    pub difficulty: Option<i32>,
    #[validate(required)]
    pub category: Option<CategoryRef>,
}

impl AddQuestionRequest {
    fn into_new_question(self) -> Result<NewQuestion, Error> {
        match (self.question, self.answer, self.difficulty, self.category) {
            (Some(question), Some(answer), Some(difficulty), Some(category))
                if difficulty != 0 && category.is_present() =>
            {
                Ok(NewQuestion {
                    question,
                    answer,
                    category: category.as_text(),
                    difficulty,
                })
            }
            _ => Err(Error::UnprocessableEntity(
                "difficulty and category must be non-zero".into(),
            )),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub created: i32,
}

pub async fn create(
    store: Data<dyn TriviaStore>,
    params: Json<AddQuestionRequest>,
) -> Result<Json<CreateResponse>, Error> {
    validate(&params)?;
    let new_question = params.into_inner().into_new_question()?;

    let question = with_store(&store, move |store| store.create_question(new_question))
        .await
        .map_err(|err| err.masked_as(Error::UnprocessableEntity))?;

    info!("Created question {}", question.id);

    Ok(Json(CreateResponse {
        success: true,
        created: question.id,
    }))
}

use actix_web::{
    web::{Data, Json},
    Result,
};
use serde::{Deserialize, Deserializer, Serialize};

use db::{models::Question, TriviaStore};
use errors::Error;

use crate::handlers::{choose_question, with_store, QuizCategory};

// `None` when the key is absent, `Some(None)` when it is sent as null
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuizRequest {
    #[serde(default, deserialize_with = "present")]
    pub previous_questions: Option<Option<Vec<i32>>>,
    #[serde(default, deserialize_with = "present")]
    pub quiz_category: Option<Option<QuizCategory>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

pub async fn next(
    store: Data<dyn TriviaStore>,
    params: Json<QuizRequest>,
) -> Result<Json<QuizResponse>, Error> {
    let params = params.into_inner();
    let (previous_questions, quiz_category) =
        match (params.previous_questions, params.quiz_category) {
            (Some(Some(previous_questions)), Some(Some(quiz_category))) => {
                (previous_questions, quiz_category)
            }
            (Some(_), Some(_)) => {
                return Err(Error::BadRequest(
                    "quiz_category and previous_questions must not be null".into(),
                ))
            }
            _ => {
                return Err(Error::UnprocessableEntity(
                    "quiz_category and previous_questions are required".into(),
                ))
            }
        };
    let category = quiz_category.filter()?;

    let candidates = with_store(&store, move |store| {
        store.quiz_candidates(category.as_deref(), &previous_questions)
    })
    .await
    .map_err(|err| err.masked_as(Error::BadRequest))?;

    let question = choose_question(&candidates, &mut rand::thread_rng());
    if question.is_none() {
        debug!("No questions left for quiz category {}", quiz_category.kind);
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

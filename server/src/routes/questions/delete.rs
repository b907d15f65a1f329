use actix_web::{
    web::{Data, Json, Path},
    Result,
};
use serde::{Deserialize, Serialize};

use db::TriviaStore;
use errors::Error;

use crate::handlers::with_store;

#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: i32,
}

pub async fn delete(
    store: Data<dyn TriviaStore>,
    question_id: Path<i32>,
) -> Result<Json<DeleteResponse>, Error> {
    let question_id = question_id.into_inner();

    with_store(&store, move |store| {
        store.find_question(question_id)?;
        match store.delete_question(question_id)? {
            0 => Err(Error::NotFound(format!("Question {} already deleted", question_id))),
            _ => Ok(()),
        }
    })
    .await
    .map_err(|err| err.masked_as(Error::NotFound))?;

    info!("Deleted question {}", question_id);

    Ok(Json(DeleteResponse {
        success: true,
        deleted: question_id,
    }))
}

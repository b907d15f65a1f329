use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use db::models::Question;
use errors::Error;

use super::CategoryRef;

/// Category type the client sends to play across every category.
pub const ALL_CATEGORIES: &str = "click";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuizCategory {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Option<CategoryRef>,
}

impl QuizCategory {
    /// The category text to filter on, or `None` to draw from every category.
    pub fn filter(&self) -> Result<Option<String>, Error> {
        if self.kind == ALL_CATEGORIES {
            return Ok(None);
        }
        match &self.id {
            Some(id) => Ok(Some(id.as_text())),
            None => Err(Error::BadRequest(format!(
                "Quiz category {} has no id",
                self.kind
            ))),
        }
    }
}

/// Picks one remaining question uniformly at random; `None` ends the quiz.
pub fn choose_question<R>(candidates: &[Question], rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng).cloned()
}

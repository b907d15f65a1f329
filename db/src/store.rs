use errors::Error;

use crate::models::{Category, NewQuestion, Question};
use crate::{get_conn, PgPool};

/// Everything the routes need from the data store. Methods block, so callers
/// on the async side run them through `web::block`.
pub trait TriviaStore: Send + Sync {
    /// All categories, ordered by their display name.
    fn categories_by_type(&self) -> Result<Vec<Category>, Error>;

    /// All categories, ordered by id.
    fn categories(&self) -> Result<Vec<Category>, Error>;

    /// Fails with `Error::NotFound` when no category has this id.
    fn find_category(&self, id: i32) -> Result<Category, Error>;

    /// All questions, ordered by id.
    fn questions(&self) -> Result<Vec<Question>, Error>;

    fn questions_in_category(&self, category: &str) -> Result<Vec<Question>, Error>;

    /// Case-insensitive substring match on the question text.
    fn search_questions(&self, term: &str) -> Result<Vec<Question>, Error>;

    /// Fails with `Error::NotFound` when no question has this id.
    fn find_question(&self, id: i32) -> Result<Question, Error>;

    fn create_question(&self, new_question: NewQuestion) -> Result<Question, Error>;

    /// Returns the number of rows removed.
    fn delete_question(&self, id: i32) -> Result<usize, Error>;

    /// Questions in `category` (every category when `None`) whose id is not in
    /// `exclude`, ordered by id.
    fn quiz_candidates(&self, category: Option<&str>, exclude: &[i32])
        -> Result<Vec<Question>, Error>;
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

impl TriviaStore for PgStore {
    fn categories_by_type(&self) -> Result<Vec<Category>, Error> {
        let conn = get_conn(&self.pool)?;
        Category::get_all_by_type(&conn)
    }

    fn categories(&self) -> Result<Vec<Category>, Error> {
        let conn = get_conn(&self.pool)?;
        Category::get_all(&conn)
    }

    fn find_category(&self, id: i32) -> Result<Category, Error> {
        let conn = get_conn(&self.pool)?;
        Category::find_by_id(&conn, id)
    }

    fn questions(&self) -> Result<Vec<Question>, Error> {
        let conn = get_conn(&self.pool)?;
        Question::get_all(&conn)
    }

    fn questions_in_category(&self, category: &str) -> Result<Vec<Question>, Error> {
        let conn = get_conn(&self.pool)?;
        Question::find_by_category(&conn, category)
    }

    fn search_questions(&self, term: &str) -> Result<Vec<Question>, Error> {
        let conn = get_conn(&self.pool)?;
        Question::search(&conn, term)
    }

    fn find_question(&self, id: i32) -> Result<Question, Error> {
        let conn = get_conn(&self.pool)?;
        Question::find_by_id(&conn, id)
    }

    fn create_question(&self, new_question: NewQuestion) -> Result<Question, Error> {
        let conn = get_conn(&self.pool)?;
        Question::create(&conn, new_question)
    }

    fn delete_question(&self, id: i32) -> Result<usize, Error> {
        let conn = get_conn(&self.pool)?;
        Question::delete(&conn, id)
    }

    fn quiz_candidates(
        &self,
        category: Option<&str>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, Error> {
        let conn = get_conn(&self.pool)?;
        Question::find_quiz_candidates(&conn, category, exclude)
    }
}

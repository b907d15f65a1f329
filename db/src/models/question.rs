use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

#[derive(Clone, Debug, Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

/// Builds an ILIKE pattern that matches `term` anywhere, with LIKE wildcards
/// in the term matched literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl Question {
    pub fn get_all(conn: &PgConnection) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{id, questions};

        let results = questions.order(id.asc()).load::<Question>(conn)?;

        Ok(results)
    }

    pub fn find_by_id(conn: &PgConnection, question_id: i32) -> Result<Question, Error> {
        use crate::schema::questions::dsl::questions;

        let question = questions.find(question_id).first::<Question>(conn)?;

        Ok(question)
    }

    pub fn find_by_category(conn: &PgConnection, category_id: &str) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{category, id, questions};

        let results = questions
            .filter(category.eq(category_id))
            .order(id.asc())
            .load::<Question>(conn)?;

        Ok(results)
    }

    pub fn search(conn: &PgConnection, term: &str) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{id, question, questions};

        let results = questions
            .filter(question.ilike(contains_pattern(term)))
            .order(id.asc())
            .load::<Question>(conn)?;

        Ok(results)
    }

    /// Questions not yet asked in a quiz, optionally limited to one category.
    pub fn find_quiz_candidates(
        conn: &PgConnection,
        category_id: Option<&str>,
        previous_ids: &[i32],
    ) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{category, id, questions};

        let mut query = questions
            .filter(id.ne_all(previous_ids.to_vec()))
            .order(id.asc())
            .into_boxed();
        if let Some(category_id) = category_id {
            query = query.filter(category.eq(category_id.to_string()));
        }

        let results = query.load::<Question>(conn)?;

        Ok(results)
    }

    pub fn create(conn: &PgConnection, new_question: NewQuestion) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(&new_question)
            .get_result(conn)?;

        Ok(question)
    }

    pub fn delete(conn: &PgConnection, question_id: i32) -> Result<usize, Error> {
        use crate::schema::questions::dsl::questions;

        let count = diesel::delete(questions.find(question_id)).execute(conn)?;

        Ok(count)
    }
}

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use errors::Error;

use crate::models::{Category, NewQuestion, Question};
use crate::store::TriviaStore;

#[derive(Default)]
struct State {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i32,
}

/// In-process store with the same ordering and matching rules as `PgStore`.
/// Ids are handed out the way a serial column would: never reused.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn with_data(categories: Vec<Category>, mut questions: Vec<Question>) -> Self {
        questions.sort_by_key(|question| question.id);
        let next_id = questions.iter().map(|question| question.id).max().unwrap_or(0) + 1;

        MemoryStore {
            state: RwLock::new(State {
                categories,
                questions,
                next_id,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, Error> {
        self.state
            .read()
            .map_err(|_| Error::InternalServerError("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, Error> {
        self.state
            .write()
            .map_err(|_| Error::InternalServerError("memory store lock poisoned".into()))
    }
}

impl TriviaStore for MemoryStore {
    fn categories_by_type(&self) -> Result<Vec<Category>, Error> {
        let mut categories = self.read()?.categories.clone();
        categories.sort_by(|a, b| a.kind.cmp(&b.kind));
        Ok(categories)
    }

    fn categories(&self) -> Result<Vec<Category>, Error> {
        let mut categories = self.read()?.categories.clone();
        categories.sort_by_key(|category| category.id);
        Ok(categories)
    }

    fn find_category(&self, id: i32) -> Result<Category, Error> {
        self.read()?
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound("Record not found".into()))
    }

    fn questions(&self) -> Result<Vec<Question>, Error> {
        Ok(self.read()?.questions.clone())
    }

    fn questions_in_category(&self, category: &str) -> Result<Vec<Question>, Error> {
        Ok(self
            .read()?
            .questions
            .iter()
            .filter(|question| question.category == category)
            .cloned()
            .collect())
    }

    fn search_questions(&self, term: &str) -> Result<Vec<Question>, Error> {
        let term = term.to_lowercase();
        Ok(self
            .read()?
            .questions
            .iter()
            .filter(|question| question.question.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    fn find_question(&self, id: i32) -> Result<Question, Error> {
        self.read()?
            .questions
            .iter()
            .find(|question| question.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound("Record not found".into()))
    }

    fn create_question(&self, new_question: NewQuestion) -> Result<Question, Error> {
        let mut state = self.write()?;
        let question = Question {
            id: state.next_id.max(1),
            question: new_question.question,
            answer: new_question.answer,
            category: new_question.category,
            difficulty: new_question.difficulty,
        };
        state.next_id = question.id + 1;
        state.questions.push(question.clone());

        Ok(question)
    }

    fn delete_question(&self, id: i32) -> Result<usize, Error> {
        let mut state = self.write()?;
        let before = state.questions.len();
        state.questions.retain(|question| question.id != id);
        Ok(before - state.questions.len())
    }

    fn quiz_candidates(
        &self,
        category: Option<&str>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, Error> {
        Ok(self
            .read()?
            .questions
            .iter()
            .filter(|question| category.map_or(true, |category| question.category == category))
            .filter(|question| !exclude.contains(&question.id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use errors::Error;

    use super::MemoryStore;
    use crate::models::{Category, NewQuestion, Question};
    use crate::store::TriviaStore;

    fn question(id: i32, text: &str, category: &str) -> Question {
        Question {
            id,
            question: text.to_string(),
            answer: "answer".to_string(),
            category: category.to_string(),
            difficulty: 1,
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::with_data(
            vec![
                Category {
                    id: 1,
                    kind: "Science".to_string(),
                },
                Category {
                    id: 2,
                    kind: "Art".to_string(),
                },
            ],
            vec![
                question(3, "Who painted the Mona Lisa?", "2"),
                question(1, "What is the heaviest organ?", "1"),
                question(2, "What is H2O?", "1"),
            ],
        )
    }

    #[test]
    fn test_orders_categories() {
        let store = store();
        let by_type: Vec<i32> = store
            .categories_by_type()
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(by_type, vec![2, 1]);

        let by_id: Vec<i32> = store.categories().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(by_id, vec![1, 2]);
    }

    #[test]
    fn test_questions_ordered_by_id() {
        let ids: Vec<i32> = store().questions().unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let results = store().search_questions("what IS").unwrap();
        assert_eq!(results.len(), 2);
        assert!(store().search_questions("nothing like it").unwrap().is_empty());
    }

    #[test]
    fn test_create_never_reuses_ids() {
        let store = store();
        assert_eq!(store.delete_question(3).unwrap(), 1);

        let created = store
            .create_question(NewQuestion {
                question: "Which planet is closest to the sun?".to_string(),
                answer: "Mercury".to_string(),
                category: "1".to_string(),
                difficulty: 2,
            })
            .unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(store.find_question(4).unwrap(), created);
    }

    #[test]
    fn test_missing_records_are_not_found() {
        let store = store();
        assert_eq!(store.delete_question(99).unwrap(), 0);
        assert_eq!(
            store.find_question(99),
            Err(Error::NotFound("Record not found".into()))
        );
        assert!(store.find_category(99).is_err());
    }

    #[test]
    fn test_quiz_candidates_exclude_previous() {
        let store = store();
        let all: Vec<i32> = store
            .quiz_candidates(None, &[1])
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(all, vec![2, 3]);

        let science: Vec<i32> = store
            .quiz_candidates(Some("1"), &[2])
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(science, vec![1]);
    }
}

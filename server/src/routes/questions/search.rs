use actix_web::{
    web::{Data, Json},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{models::Question, TriviaStore};
use errors::Error;

use crate::handlers::with_store;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

pub async fn search(
    store: Data<dyn TriviaStore>,
    params: Json<SearchRequest>,
) -> Result<Json<SearchResponse>, Error> {
    let search_term = match params.into_inner().search_term {
        Some(term) if !term.is_empty() => term,
        _ => return Err(Error::NotFound("No search term".into())),
    };

    let questions = with_store(&store, move |store| store.search_questions(&search_term)).await?;

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use errors::ErrorResponse;

    use super::SearchResponse;
    use crate::tests::helpers::tests::{empty_store, seeded_store, test_post};

    #[actix_rt::test]
    async fn test_search() {
        let res: (u16, SearchResponse) =
            test_post("/questions/search", json!({"searchTerm": "title"}), &seeded_store()).await;
        assert_eq!(res.0, 200);

        let body = res.1;
        assert!(body.success);
        assert_eq!(body.total_questions, 2);
        let ids: Vec<i32> = body.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![5, 6]);
        assert_eq!(body.current_category, None);
    }

    #[actix_rt::test]
    async fn test_search_is_case_insensitive() {
        let res: (u16, SearchResponse) =
            test_post("/questions/search", json!({"searchTerm": "WORLD CUP"}), &seeded_store())
                .await;
        assert_eq!(res.0, 200);
        let ids: Vec<i32> = res.1.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[actix_rt::test]
    async fn test_search_without_matches() {
        let res: (u16, SearchResponse) = test_post(
            "/questions/search",
            json!({"searchTerm": "ghghsghshg"}),
            &seeded_store(),
        )
        .await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.total_questions, 0);
        assert!(res.1.questions.is_empty());
    }

    #[actix_rt::test]
    async fn test_search_without_term_is_not_found() {
        for body in vec![json!({}), json!({"searchTerm": ""}), json!({"searchTerm": null})] {
            let res: (u16, ErrorResponse) =
                test_post("/questions/search", body.clone(), &seeded_store()).await;
            assert_eq!(res.0, 404);

            let res: (u16, ErrorResponse) =
                test_post("/questions/search", body, &empty_store()).await;
            assert_eq!(res.0, 404);
        }
    }
}

#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use actix_web::{
        dev::Service,
        http::header::HeaderMap,
        test,
        web::{self, Bytes, Data},
        App,
    };
    use serde::{de::DeserializeOwned, Serialize};

    use db::{seed, MemoryStore, TriviaStore};

    use crate::routes::{access_control_headers, cors, not_found, routes};

    fn into_data(store: MemoryStore) -> Data<dyn TriviaStore> {
        let store: Arc<dyn TriviaStore> = Arc::new(store);
        Data::from(store)
    }

    /// The six standard categories and nineteen questions, ids 2 through 23.
    pub fn seeded_store() -> Data<dyn TriviaStore> {
        into_data(MemoryStore::with_data(seed::categories(), seed::questions()))
    }

    pub fn empty_store() -> Data<dyn TriviaStore> {
        into_data(MemoryStore::new())
    }

    /// Sends one request through the full app and returns the raw response.
    pub async fn call(
        req: test::TestRequest,
        store: &Data<dyn TriviaStore>,
    ) -> (u16, HeaderMap, Bytes) {
        let app = test::init_service(
            App::new()
                .wrap(cors(None))
                .wrap_fn(|req, srv| access_control_headers(srv.call(req)))
                .app_data(store.clone())
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let headers = res.headers().clone();
        let body = test::read_body(res).await;

        (status, headers, body)
    }

    async fn call_json<R>(req: test::TestRequest, store: &Data<dyn TriviaStore>) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let (status, _, body) = call(req, store).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(route: &str, store: &Data<dyn TriviaStore>) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        call_json(test::TestRequest::get().uri(route), store).await
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(
        route: &str,
        params: T,
        store: &Data<dyn TriviaStore>,
    ) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        call_json(test::TestRequest::post().set_json(&params).uri(route), store).await
    }

    /// Helper for HTTP DELETE integration tests
    pub async fn test_delete<R>(route: &str, store: &Data<dyn TriviaStore>) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        call_json(test::TestRequest::delete().uri(route), store).await
    }
}

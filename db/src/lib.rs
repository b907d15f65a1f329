#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

use errors::Error;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type Connection = PooledConnection<ConnectionManager<PgConnection>>;
pub mod memory;
pub mod models;
pub mod schema;
pub mod seed;
pub mod store;

pub use memory::MemoryStore;
pub use store::{PgStore, TriviaStore};

pub fn get_conn(pool: &PgPool) -> Result<Connection, r2d2::Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err
    })
}

pub fn new_pool(database_url: &str, max_size: u32) -> Result<PgPool, Error> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);

    Pool::builder().max_size(max_size).build(manager).map_err(|err| {
        error!("Failed to create db pool - {}", err.to_string());
        err.into()
    })
}

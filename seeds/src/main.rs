#[macro_use]
extern crate log;

use std::env;

use diesel::{self, ExpressionMethods, PgConnection, RunQueryDsl};
use dotenv::dotenv;

use db::{
    get_conn, new_pool,
    schema::{categories, questions},
    seed,
};
use errors::Error;

const CREATE_TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS categories (
        id SERIAL PRIMARY KEY,
        type TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS questions (
        id SERIAL PRIMARY KEY,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        category TEXT NOT NULL,
        difficulty INTEGER NOT NULL
    )",
];

// explicit ids leave the serial sequences behind
const RESET_SEQUENCES: &[&str] = &[
    "SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories))",
    "SELECT setval(pg_get_serial_sequence('questions', 'id'), (SELECT MAX(id) FROM questions))",
];

fn load(conn: &PgConnection) -> Result<(), Error> {
    for statement in CREATE_TABLES {
        diesel::sql_query(*statement).execute(conn)?;
    }

    let mut inserted = 0;
    for category in seed::categories() {
        inserted += diesel::insert_into(categories::table)
            .values((
                categories::dsl::id.eq(category.id),
                categories::dsl::type_.eq(category.kind),
            ))
            .on_conflict_do_nothing()
            .execute(conn)?;
    }
    info!("Inserted {} categories", inserted);

    let mut inserted = 0;
    for question in seed::questions() {
        inserted += diesel::insert_into(questions::table)
            .values((
                questions::dsl::id.eq(question.id),
                questions::dsl::question.eq(question.question),
                questions::dsl::answer.eq(question.answer),
                questions::dsl::category.eq(question.category),
                questions::dsl::difficulty.eq(question.difficulty),
            ))
            .on_conflict_do_nothing()
            .execute(conn)?;
    }
    info!("Inserted {} questions", inserted);

    for statement in RESET_SEQUENCES {
        diesel::sql_query(*statement).execute(conn)?;
    }

    Ok(())
}

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| Error::InternalServerError("DATABASE_URL must be set".into()))?;
    let pool = new_pool(&database_url, 1)?;
    let conn = get_conn(&pool)?;

    load(&conn)
}

use once_cell::sync::OnceCell;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use std::env;

static POOL: OnceCell<PgPool> = OnceCell::new();

pub fn pool() -> &'static PgPool {
    POOL.get_or_init(|| PgPoolOptions::new().connect_lazy_with(connect_options()))
}

fn connect_options() -> PgConnectOptions {
    PgConnectOptions::new()
        .username(&env::var("DATABASE_USER").expect("DATABASE_USER not set"))
        .host(&env::var("DATABASE_HOST").expect("DATABASE_HOST not set"))
        .database(&env::var("DATABASE_NAME").expect("DATABASE_NAME not set"))
        .password(&env::var("DATABASE_PASSWORD").expect("DATABASE_PASSWORD not set"))
        .port(
            env::var("DATABASE_PORT")
                .expect("DATABASE_PORT not set")
                .parse()
                .expect("DATABASE_PORT is not a valid port number"),
        )
}

use std::env;

use once_cell::sync::OnceCell;

static INITIALIZED: OnceCell<()> = OnceCell::new();

const DATABASE_DEFAULTS: &[(&str, &str)] = &[
    ("DATABASE_USER", "postgres"),
    ("DATABASE_HOST", "localhost"),
    ("DATABASE_NAME", "articles_test"),
    ("DATABASE_PASSWORD", "postgres"),
    ("DATABASE_PORT", "5432"),
];

// Loads `.env` once and fills in local defaults for any missing database
// variables so the rocket instance can ignite in tests.
pub fn initialize() {
    if INITIALIZED.set(()).is_ok() {
        let _ = dotenv::dotenv();

        for (name, default) in DATABASE_DEFAULTS {
            if env::var(name).is_err() {
                env::set_var(name, default);
            }
        }
    }
}

pub async fn reset_articles() {
    database::sqlx::query("TRUNCATE TABLE articles RESTART IDENTITY")
        .execute(database::pool())
        .await
        .expect("failed to reset the articles table");
}

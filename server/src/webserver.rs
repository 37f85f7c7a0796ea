use std::env;

use rocket::{fairing::AdHoc, serde::json::Json, Build, Rocket};
use serde::Serialize;

use database::schema::articles::ArticleError;

mod articles;

fn rocket_server() -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", http_port()));

    rocket::custom(figment)
        .attach(AdHoc::on_ignite("articles table", |rocket| async {
            match database::initialize().await {
                Ok(()) => info!("articles table created or already present"),
                Err(err) => error!("error creating the articles table: {:?}", err),
            }

            rocket
        }))
        .mount(
            "/",
            routes![
                articles::home,
                articles::list_articles,
                articles::create_article,
                articles::update_article,
                articles::delete_article,
            ],
        )
}

fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3000)
}

pub async fn main() -> Result<(), rocket::Error> {
    rocket_server().launch().await?;

    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Responder)]
pub enum Failure {
    #[response(status = 400)]
    Validation(Json<ErrorMessage>),
    #[response(status = 404)]
    NotFound(Json<ErrorMessage>),
    #[response(status = 500)]
    Storage(Json<ErrorMessage>),
}

impl From<ArticleError> for Failure {
    fn from(error: ArticleError) -> Self {
        let body = Json(ErrorMessage {
            message: error.to_string(),
        });

        match error {
            ArticleError::Validation(_) => Self::Validation(body),
            ArticleError::NotFound => Self::NotFound(body),
            ArticleError::Storage(sql_error) => {
                error!("unexpected sql error: {:?}", sql_error);
                Self::Storage(body)
            }
        }
    }
}

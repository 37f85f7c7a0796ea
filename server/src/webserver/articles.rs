use rocket::{response::status::Created, serde::json::Json};
use serde::{Deserialize, Serialize};

use database::schema::articles::{Article, ArticleUpdate};

use super::Failure;

#[derive(Debug, Deserialize)]
pub struct NewArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

#[derive(Debug, Serialize)]
pub struct DeletedArticle {
    pub message: String,
    #[serde(rename = "deletedArticle")]
    pub deleted_article: Article,
}

#[get("/")]
pub fn home() -> &'static str {
    "Welcome to the article management API!"
}

#[get("/articles")]
pub async fn list_articles() -> Result<Json<Vec<Article>>, Failure> {
    let articles = Article::all().await?;

    Ok(Json(articles))
}

#[post("/articles", data = "<article>")]
pub async fn create_article(article: Json<NewArticle>) -> Result<Created<Json<Article>>, Failure> {
    let article = Article::create(&article.title, &article.content, &article.author).await?;
    let location = format!("/articles/{}", article.id);

    Ok(Created::new(location).body(Json(article)))
}

#[patch("/articles/<article_id>", data = "<update>")]
pub async fn update_article(
    article_id: i64,
    update: Json<ArticleUpdate>,
) -> Result<Json<Article>, Failure> {
    let article = Article::update(article_id, &update).await?;

    Ok(Json(article))
}

#[delete("/articles/<article_id>")]
pub async fn delete_article(article_id: i64) -> Result<Json<DeletedArticle>, Failure> {
    let article = Article::delete(article_id).await?;

    Ok(Json(DeletedArticle {
        message: String::from("Article deleted successfully."),
        deleted_article: article,
    }))
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

use crate::pool;

#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("{0}")]
    Validation(String),
    #[error("Article not found.")]
    NotFound,
    #[error("Storage error: {0}")]
    Storage(sqlx::Error),
}

impl From<sqlx::Error> for ArticleError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::NotFound,
            other_error => Self::Storage(other_error),
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
}

pub async fn initialize() -> sqlx::Result<()> {
    sqlx::query(
        r#"
            CREATE TABLE IF NOT EXISTS articles (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                author TEXT NOT NULL
            )
        "#,
    )
    .execute(pool())
    .await?;

    Ok(())
}

impl Article {
    pub async fn all() -> Result<Vec<Self>, ArticleError> {
        let articles =
            sqlx::query_as("SELECT id, title, content, author FROM articles ORDER BY id ASC")
                .fetch_all(pool())
                .await?;

        Ok(articles)
    }

    pub async fn create(title: &str, content: &str, author: &str) -> Result<Self, ArticleError> {
        validate_new(title, content, author)?;

        let article = sqlx::query_as(
            "INSERT INTO articles (title, content, author) VALUES ($1, $2, $3) RETURNING id, title, content, author",
        )
        .bind(title)
        .bind(content)
        .bind(author)
        .fetch_one(pool())
        .await?;

        Ok(article)
    }

    pub async fn update(article_id: i64, update: &ArticleUpdate) -> Result<Self, ArticleError> {
        let fields = update.changed_fields();
        if fields.is_empty() {
            return Err(ArticleError::Validation(String::from(
                "No fields to update.",
            )));
        }

        let statement = Self::update_statement(&fields);
        let mut query = sqlx::query_as(&statement);
        for (_, value) in &fields {
            query = query.bind(*value);
        }

        let article = query.bind(article_id).fetch_one(pool()).await?;

        Ok(article)
    }

    fn update_statement(fields: &[(&'static str, &str)]) -> String {
        let assignments = fields
            .iter()
            .enumerate()
            .map(|(index, (column, _))| format!("{} = ${}", column, index + 1))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "UPDATE articles SET {} WHERE id = ${} RETURNING id, title, content, author",
            assignments,
            fields.len() + 1
        )
    }

    pub async fn delete(article_id: i64) -> Result<Self, ArticleError> {
        let article = sqlx::query_as(
            "DELETE FROM articles WHERE id = $1 RETURNING id, title, content, author",
        )
        .bind(article_id)
        .fetch_one(pool())
        .await?;

        Ok(article)
    }
}

fn validate_new(title: &str, content: &str, author: &str) -> Result<(), ArticleError> {
    if title.is_empty() || content.is_empty() || author.is_empty() {
        return Err(ArticleError::Validation(String::from(
            "All fields (title, content, author) are required.",
        )));
    }

    Ok(())
}

#[derive(Debug, Default, Deserialize)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl ArticleUpdate {
    // Supplied fields in column declaration order so the generated
    // statement is reproducible. An empty string counts as absent,
    // matching the presence check applied on creation.
    fn changed_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = Vec::new();
        if let Some(title) = non_empty(&self.title) {
            fields.push(("title", title));
        }
        if let Some(content) = non_empty(&self.content) {
            fields.push(("content", content));
        }
        if let Some(author) = non_empty(&self.author) {
            fields.push(("author", author));
        }
        fields
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_all_fields() {
        assert!(validate_new("title", "content", "author").is_ok());

        for (title, content, author) in [
            ("", "content", "author"),
            ("title", "", "author"),
            ("title", "content", ""),
            ("", "", ""),
        ] {
            assert!(matches!(
                validate_new(title, content, author),
                Err(ArticleError::Validation(_))
            ));
        }
    }

    #[test]
    fn changed_fields_follow_declaration_order() {
        let update = ArticleUpdate {
            author: Some(String::from("new author")),
            title: Some(String::from("new title")),
            content: None,
        };

        assert_eq!(
            update.changed_fields(),
            vec![("title", "new title"), ("author", "new author")]
        );
    }

    #[test]
    fn empty_strings_are_not_changes() {
        let update = ArticleUpdate {
            title: Some(String::new()),
            content: Some(String::from("new content")),
            author: Some(String::new()),
        };

        assert_eq!(update.changed_fields(), vec![("content", "new content")]);

        let update = ArticleUpdate {
            title: Some(String::new()),
            content: None,
            author: None,
        };
        assert!(update.changed_fields().is_empty());
    }

    #[test]
    fn update_statement_binds_fields_in_order() {
        let update = ArticleUpdate {
            title: Some(String::from("a")),
            content: None,
            author: Some(String::from("b")),
        };

        assert_eq!(
            Article::update_statement(&update.changed_fields()),
            "UPDATE articles SET title = $1, author = $2 WHERE id = $3 RETURNING id, title, content, author"
        );
    }

    #[test]
    fn update_statement_touches_only_supplied_fields() {
        let update = ArticleUpdate {
            title: None,
            content: Some(String::from("c")),
            author: None,
        };

        assert_eq!(
            Article::update_statement(&update.changed_fields()),
            "UPDATE articles SET content = $1 WHERE id = $2 RETURNING id, title, content, author"
        );
    }
}

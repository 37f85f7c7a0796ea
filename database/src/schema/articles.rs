mod article;

pub use self::article::{initialize, Article, ArticleError, ArticleUpdate};

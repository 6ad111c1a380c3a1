use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct EndpointsWrapper {
    pub endpoints: serde_json::Value,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TopicWrapper<T> {
    pub topic: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleTopicsWrapper<T> {
    pub topics: Vec<T>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ArticleWrapper<T> {
    pub article: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleArticlesWrapper<T> {
    pub articles: Vec<T>,
    pub article_count: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CommentWrapper<T> {
    pub comment: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleCommentsWrapper<T> {
    pub comments: Vec<T>,
    pub comment_count: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserWrapper<T> {
    pub user: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleUsersWrapper<T> {
    pub users: Vec<T>,
}

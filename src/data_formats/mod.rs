mod request;
mod response;
mod wrapper;

pub use request::*;
pub use response::*;
pub use wrapper::*;

use serde::Deserialize;

/// Raw `GET /api/articles` query string. Every value stays a string until it
/// has been normalized and validated by the handler.
#[derive(Deserialize, Debug)]
pub struct ArticleQueryParams {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

impl ArticleQueryParams {
    /// Case-fold the filter/sort inputs the way the store expects them.
    pub fn normalized(self) -> Self {
        ArticleQueryParams {
            topic: self.topic.map(|topic| topic.to_lowercase()),
            sort_by: self.sort_by.map(|sort_by| sort_by.to_lowercase()),
            order: self.order.map(|order| order.to_uppercase()),
            ..self
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct PageQueryParams {
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}

use serde::{Deserialize, Serialize};

use crate::errors::RequestError;
use crate::validation::require;

// Every field is optional at the type level so that a missing or null value
// reaches `require` and produces the uniform 400 instead of a serde rejection.

// ----------------- Topic Request -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct PostTopicRequest {
    pub slug: Option<String>,
    pub description: Option<String>,
}

// ----------------- Article Request -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct PostArticleRequest {
    pub title: Option<String>,
    pub topic: Option<String>,
    pub author: Option<String>,
    pub body: Option<String>,
    pub article_img_url: Option<String>,
}

/// A `PostArticleRequest` whose required fields are known to be present.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub article_img_url: Option<String>,
}

impl TryFrom<PostArticleRequest> for NewArticle {
    type Error = RequestError;

    fn try_from(
        PostArticleRequest {
            title,
            topic,
            author,
            body,
            article_img_url,
        }: PostArticleRequest,
    ) -> Result<Self, Self::Error> {
        Ok(NewArticle {
            title: require(title)?,
            topic: require(topic)?,
            author: require(author)?,
            body: require(body)?,
            article_img_url,
        })
    }
}

// ----------------- Comment Request -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct PostCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

// ----------------- Votes Request -----------------
/// `inc_votes` is kept as raw JSON so that `"ten"` can be reported as NaN
/// rather than failing deserialization.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct VotesRequest {
    pub inc_votes: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_article_requires_every_field_but_the_image() {
        let request: PostArticleRequest = serde_json::from_value(serde_json::json!({
            "title": "Moustache",
            "topic": "mitch",
            "author": "butter_bridge",
            "body": "Have you seen the size of that thing?"
        }))
        .unwrap();
        let article = NewArticle::try_from(request).unwrap();
        assert_eq!(article.author, "butter_bridge");
        assert!(article.article_img_url.is_none());

        let request: PostArticleRequest = serde_json::from_value(serde_json::json!({
            "title": null,
            "topic": "mitch",
            "author": "butter_bridge",
            "body": "text"
        }))
        .unwrap();
        let err = NewArticle::try_from(request).unwrap_err();
        assert_eq!(err.to_string(), "input can't be null or undefined");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let request: VotesRequest =
            serde_json::from_value(serde_json::json!({ "increase_votes": 10 })).unwrap();
        assert!(request.inc_votes.is_none());
    }
}

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored blog post as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, FromRow)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

/// Body of a create or update request, before validation.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BlogPostRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// A validated post ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlogPost {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

// Empty strings count as missing.
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl BlogPostRequest {
    pub fn validate(self) -> Result<NewBlogPost, ValidationError> {
        let title = required(self.title);
        let url = required(self.url);
        match (title, url) {
            (Some(title), Some(url)) => Ok(NewBlogPost {
                title,
                author: self.author,
                url,
                likes: self.likes.unwrap_or(0),
            }),
            (title, url) => {
                let mut missing = Vec::new();
                if title.is_none() {
                    missing.push("title");
                }
                if url.is_none() {
                    missing.push("url");
                }
                Err(ValidationError { missing })
            }
        }
    }
}

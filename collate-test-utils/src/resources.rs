//! Sample domain resources

use collate_core::Resource;
use std::any::Any;
use std::sync::Arc;

/// A blog post with a model name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Identifier
    pub id: u64,
    /// Title
    pub title: String,
}

impl Post {
    /// Create a post
    pub fn new(id: u64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
        }
    }
}

impl Resource for Post {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_name(&self) -> Option<&str> {
        Some("Post")
    }
}

/// A comment with a model name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Identifier
    pub id: u64,
    /// Body text
    pub body: String,
}

impl Resource for Comment {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_name(&self) -> Option<&str> {
        Some("Comment")
    }
}

/// A resource without a model name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(pub String);

impl Resource for Tag {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// `count` posts with ids `1..=count`
pub fn posts(count: u64) -> Vec<Arc<dyn Resource>> {
    (1..=count)
        .map(|id| Arc::new(Post::new(id, &format!("Post {}", id))) as Arc<dyn Resource>)
        .collect()
}

/// `count` comments with ids `1..=count`
pub fn comments(count: u64) -> Vec<Arc<dyn Resource>> {
    (1..=count)
        .map(|id| {
            Arc::new(Comment {
                id,
                body: format!("Comment {}", id),
            }) as Arc<dyn Resource>
        })
        .collect()
}

//! MongoDB implementation of the blog repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document, Regex};
use mongodb::{Collection, Database};

use crate::domain::entities::BlogPost;
use crate::domain::repositories::{BlogFilter, BlogRepository};
use crate::error::AppError;

/// MongoDB repository over the `blog_posts` collection.
pub struct MongoBlogRepository {
    collection: Collection<BlogPost>,
}

impl MongoBlogRepository {
    /// Creates a repository bound to the `blog_posts` collection.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("blog_posts"),
        }
    }
}

/// Translates a [`BlogFilter`] into a MongoDB filter document.
///
/// The search term is regex-escaped so user input matches literally; the `i`
/// option makes the title/excerpt substring match case-insensitive.
fn filter_document(filter: &BlogFilter) -> Document {
    let mut query = doc! {};

    if let Some(category) = &filter.category {
        query.insert("category", category.as_str());
    }

    if let Some(q) = &filter.q {
        let pattern = Bson::RegularExpression(Regex {
            pattern: regex::escape(q),
            options: "i".to_string(),
        });
        query.insert(
            "$or",
            vec![
                doc! { "title": pattern.clone() },
                doc! { "excerpt": pattern },
            ],
        );
    }

    query
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn list(&self, filter: BlogFilter) -> Result<Vec<BlogPost>, AppError> {
        let query = filter_document(&filter);
        let cursor = self.collection.find(query).limit(filter.limit).await?;
        let posts = cursor.try_collect().await?;
        Ok(posts)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        let post = self.collection.find_one(doc! { "slug": slug }).await?;
        Ok(post)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn insert_many(&self, posts: &[BlogPost]) -> Result<(), AppError> {
        if posts.is_empty() {
            return Ok(());
        }
        self.collection.insert_many(posts).await?;
        Ok(())
    }
}

#![allow(dead_code)]

//! Shared test fixtures: in-memory repository implementations preloaded with
//! the real seed datasets, and a router factory.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::Request;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

use veteran_nexus_api::application::services::{BlogService, CatalogService, ContactService};
use veteran_nexus_api::domain::entities::{BlogPost, Contact, Service};
use veteran_nexus_api::domain::repositories::{
    BlogFilter, BlogRepository, ContactRepository, ServiceRepository,
};
use veteran_nexus_api::error::AppError;
use veteran_nexus_api::seed::data::{seed_blog_posts, seed_services};
use veteran_nexus_api::state::AppState;

/// In-memory stand-in for the `services` collection.
pub struct InMemoryServiceRepository {
    services: Mutex<Vec<Service>>,
}

impl InMemoryServiceRepository {
    pub fn new(services: Vec<Service>) -> Self {
        Self {
            services: Mutex::new(services),
        }
    }

    pub fn snapshot(&self) -> Vec<Service> {
        self.services.lock().unwrap().clone()
    }
}

#[async_trait]
impl ServiceRepository for InMemoryServiceRepository {
    async fn list(&self, limit: i64) -> Result<Vec<Service>, AppError> {
        let services = self.services.lock().unwrap();
        Ok(services.iter().take(limit as usize).cloned().collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Service>, AppError> {
        let services = self.services.lock().unwrap();
        Ok(services.iter().find(|s| s.slug == slug).cloned())
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut services = self.services.lock().unwrap();
        let deleted = services.len() as u64;
        services.clear();
        Ok(deleted)
    }

    async fn insert_many(&self, new: &[Service]) -> Result<(), AppError> {
        self.services.lock().unwrap().extend_from_slice(new);
        Ok(())
    }
}

/// In-memory stand-in for the `blog_posts` collection, mirroring the store's
/// filter semantics: exact category match AND case-insensitive substring
/// match on title or excerpt.
pub struct InMemoryBlogRepository {
    posts: Mutex<Vec<BlogPost>>,
}

impl InMemoryBlogRepository {
    pub fn new(posts: Vec<BlogPost>) -> Self {
        Self {
            posts: Mutex::new(posts),
        }
    }

    pub fn snapshot(&self) -> Vec<BlogPost> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list(&self, filter: BlogFilter) -> Result<Vec<BlogPost>, AppError> {
        let posts = self.posts.lock().unwrap();
        let needle = filter.q.as_deref().map(str::to_lowercase);

        Ok(posts
            .iter()
            .filter(|p| {
                filter
                    .category
                    .as_deref()
                    .is_none_or(|category| p.category == category)
            })
            .filter(|p| {
                needle.as_deref().is_none_or(|needle| {
                    p.title.to_lowercase().contains(needle)
                        || p.excerpt.to_lowercase().contains(needle)
                })
            })
            .take(filter.limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut posts = self.posts.lock().unwrap();
        let deleted = posts.len() as u64;
        posts.clear();
        Ok(deleted)
    }

    async fn insert_many(&self, new: &[BlogPost]) -> Result<(), AppError> {
        self.posts.lock().unwrap().extend_from_slice(new);
        Ok(())
    }
}

/// In-memory stand-in for the write-only `contacts` collection. Tests inspect
/// the captured inserts through [`Self::snapshot`].
#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: Mutex<Vec<Contact>>,
}

impl InMemoryContactRepository {
    pub fn snapshot(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, contact: &Contact) -> Result<(), AppError> {
        self.contacts.lock().unwrap().push(contact.clone());
        Ok(())
    }
}

/// Handles to the backing stores, kept so tests can assert on writes.
pub struct TestRepos {
    pub services: Arc<InMemoryServiceRepository>,
    pub posts: Arc<InMemoryBlogRepository>,
    pub contacts: Arc<InMemoryContactRepository>,
}

/// Builds application state over in-memory repositories preloaded with the
/// real seed datasets.
pub fn create_test_state() -> (AppState, TestRepos) {
    let services = Arc::new(InMemoryServiceRepository::new(seed_services()));
    let posts = Arc::new(InMemoryBlogRepository::new(seed_blog_posts()));
    let contacts = Arc::new(InMemoryContactRepository::default());

    let state = AppState::new(
        Arc::new(CatalogService::new(services.clone())),
        Arc::new(BlogService::new(posts.clone())),
        Arc::new(ContactService::new(contacts.clone())),
    );

    (
        state,
        TestRepos {
            services,
            posts,
            contacts,
        },
    )
}

/// Builds a test server over the full API router, mounted under `/api` and
/// wrapped in the same trailing-slash normalization as production.
pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .nest("/api", veteran_nexus_api::api::routes::routes())
        .with_state(state);
    let app = NormalizePathLayer::trim_trailing_slash().layer(app);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

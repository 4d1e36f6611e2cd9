//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories take the ids of
//! the rows they reference, so create parents first (SQLite enforces foreign keys).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::user::create_editor(&db).await?;
//! let article = factory::article::ArticleFactory::new(&db, author.id)
//!     .status("published")
//!     .tags(&["law"])
//!     .build()
//!     .await?;
//!
//! let (member, plan, subscription) =
//!     factory::helpers::create_subscription_with_dependencies(&db).await?;
//! ```

pub mod article;
pub mod contact;
pub mod gallery;
pub mod helpers;
pub mod order;
pub mod plan;
pub mod publication;
pub mod subscriber;
pub mod subscription;
pub mod tag;
pub mod user;

pub use article::{create_article, create_published_article};
pub use contact::create_contact;
pub use gallery::create_gallery_item;
pub use order::create_order;
pub use plan::create_plan;
pub use publication::create_publication;
pub use subscriber::create_subscriber;
pub use subscription::create_subscription;
pub use user::{create_admin, create_editor, create_user};

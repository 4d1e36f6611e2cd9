//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations. Every
//! resource (articles, publications, contact submissions, newsletter subscribers, plans,
//! subscriptions, orders, members) is listed through the shared machinery in `query/`.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules: ownership, slugs, status transitions
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Query** (`query/`) - Filtering, sorting, paging and lifecycle tables shared by all resources
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, session store and CORS setup
//! - **Router** (`router`) - Route table, OpenAPI document and Swagger UI
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** loads the session and checks the member's role
//! 3. **Controller** converts DTOs to params and calls the service
//! 4. **Service** enforces business rules and calls the data layer
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod query;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

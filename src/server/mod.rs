//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the LevelUp
//! gaming-event tracker: API endpoints, business logic, data access and the
//! infrastructure that wires them together. The backend uses Axum as the web
//! framework and SeaORM over SQLite for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Foreign key resolution, not-found handling and the `joined` flag
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Identity resolution from the `Authorization` header
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database connection)
//! - **Startup** (`startup`) - Database connection, migrations and CORS setup
//! - **Router** (`router`) - Axum route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** resolves the caller through the auth guard when needed and converts DTOs to params
//! 3. **Service** resolves referenced records and calls the repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

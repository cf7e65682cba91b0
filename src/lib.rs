#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Book Queries
//!
//! > **Collection-query operators over two small in-memory datasets.**
//!
//! This crate loads a list of books from a JSON file, pairs it with a fixed
//! list of animals, and answers read-only queries over both: filtering,
//! ordering, take/skip, projection, aggregation, grouping, lookup and joins.
//!
//! ## 🏗️ Design Philosophy
//!
//! - **Load once, read many**: the catalog is parsed at startup and never mutated.
//! - **Borrow, don't copy**: queries hand back `&Book` / `&Animal` unless they project.
//! - **Total queries**: empty input yields empty results or `None`, never an error.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Records ([`model`])
//! - **Role**: [`Book`](model::Book), [`Animal`](model::Animal), the
//!   [`BookSummary`](model::BookSummary) projection and [`Group`](model::Group) buckets.
//!
//! ### 2. The Loader ([`catalog`])
//! - **Role**: reads the JSON catalog with case-insensitive property names.
//! - **Key items**: [`load_books`](catalog::load_books), [`CatalogError`](catalog::CatalogError).
//!
//! ### 3. The Queries ([`queries`])
//! - **Role**: [`Library`](queries::Library) holds both lists and exposes every operator.
//!
//! ### 4. The Output ([`report`])
//! - **Role**: fixed-width console listings.
//!
//! ### 5. The Plumbing ([`runtime`])
//! - **Role**: [`Config`](runtime::Config) from the environment and [`setup_tracing`](runtime::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run against ./books.json
//! cargo run
//!
//! # Another catalog, five books in the listing, with logs
//! BOOKS_PATH=/tmp/books.json QUERY_DEMO_COUNT=5 RUST_LOG=info cargo run
//! ```

pub mod catalog;
pub mod model;
pub mod queries;
pub mod report;
pub mod runtime;

//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter filtered by the
//! `RUST_LOG` environment variable. Nothing is logged unless `RUST_LOG` asks for it,
//! so the fixed-width listings on stdout stay readable.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Loading summary (book count, missing file warnings)
//! RUST_LOG=info cargo run
//!
//! # Result sizes of every instrumented query
//! RUST_LOG=debug cargo run
//!
//! # Only the catalog loader
//! RUST_LOG=book_queries::catalog=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` the query spans show their arguments inline:
//!
//! ```text
//! INFO load_books: Loaded books path=books.json size=12
//! DEBUG books_join{min_pages=500 after_year=2005}: Joined size=3
//! ```

/// Initializes the tracing/logging infrastructure. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries the listings
        .compact()
        .init();
}

//! Gitshelf Catalog Server - storefront product catalog on a versioned blob
//!
//! # Architecture overview
//!
//! The catalog is not kept in a database: it lives as one JSON file in a
//! remote version-controlled repository, and every write presents the
//! content token (`sha`) it last read so the remote store arbitrates
//! concurrent edits. The server is the thin, stateless layer in between:
//!
//! - **Access policy** (`server/access`): CORS origin allow-list and the
//!   admin shared-secret gate for mutations
//! - **Document store** (`store`): read/replace cycle against the GitHub
//!   Contents API with optimistic concurrency
//! - **HTTP API** (`routes`): method-routed catalog endpoint plus health
//!
//! # Module structure
//!
//! ```text
//! catalog-server/src/
//! ├── server/        # config, state, access policy, middleware, bootstrap
//! ├── routes/        # HTTP routes and app assembly
//! ├── store/         # document store adapter
//! └── logger.rs      # tracing setup
//! ```

pub mod logger;
pub mod routes;
pub mod server;
pub mod store;

// Re-export public types
pub use logger::init_logger;
pub use server::{AccessPolicy, Config, GitHubConfig, Server, ServerState};
pub use store::{DocumentStore, GitHubStore};

/// Load `.env` (optional, development convenience) and initialize logging.
///
/// Runs before `Config::from_env` so the dotenv values are visible to it;
/// the log level therefore comes straight from the environment here.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    logger::init_logger(&level)?;

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   _______ __       __         ______
  / ____(_) /______/ /_  ___  / / __/
 / / __/ / __/ ___/ __ \/ _ \/ / /_
/ /_/ / / /_(__  ) / / /  __/ / __/
\____/_/\__/____/_/ /_/\___/_/_/
    "#
    );
}

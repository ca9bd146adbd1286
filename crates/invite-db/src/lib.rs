//! # invite-db
//!
//! Database layer implementing the storage ports with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations of the repository traits
//! defined in `invite-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Aggregate row models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use invite_db::{create_pool, run_migrations, DatabaseConfig, PgInviteStatsRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let stats = PgInviteStatsRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgInviteStatsRepository, PgMemberHistoryRepository};

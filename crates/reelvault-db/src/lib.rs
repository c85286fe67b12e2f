//! Reelvault database library
//!
//! Postgres persistence for video records, behind the [`VideoStore`]
//! collaborator trait the rest of the service depends on.

mod videos;

pub use videos::{VideoRepository, VideoStore};

/// Run pending migrations against the given pool.
pub async fn run_migrations(pool: &sqlx::PgPool) -> Result<(), anyhow::Error> {
    sqlx::migrate!().run(pool).await?;
    Ok(())
}

//! Persistence layer for the course catalog: entities, services, and
//! the connection helper. Schema management lives in the `migration`
//! crate.

pub mod db;
pub mod entities;
pub mod error;
pub mod services;

pub use db::create_connection;
pub use error::ServiceError;

#[cfg(test)]
pub(crate) mod test_util {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};

    /// A migrated, empty in-memory database. Capping the pool at one
    /// connection keeps every query on the same SQLite instance.
    pub async fn fresh_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).sqlx_logging(false);

        let db = Database::connect(options)
            .await
            .expect("in-memory SQLite should connect");
        Migrator::up(&db, None)
            .await
            .expect("schema should migrate cleanly");
        db
    }
}

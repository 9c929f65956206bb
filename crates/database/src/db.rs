use sea_orm::{Database, DatabaseConnection, DbErr};
use std::env;

/// Creates a database connection from `DATABASE_URL`. A `.env` file is
/// loaded first when one is present.
pub async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    dotenvy::dotenv().ok();
    let url = env::var("DATABASE_URL")
        .map_err(|_| DbErr::Custom("DATABASE_URL is not set".to_owned()))?;
    Database::connect(url).await
}

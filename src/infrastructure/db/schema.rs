use sqlx::{Pool, Sqlite};
use tracing::info;

const CREATE_TABLES: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS director (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS genre (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS movie (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(255) NOT NULL,
        description VARCHAR(255),
        trailer VARCHAR(255),
        year INTEGER,
        rating REAL,
        genre_id INTEGER REFERENCES genre (id),
        director_id INTEGER REFERENCES director (id)
    )
    "#,
];

/// Creates the `director`, `genre` and `movie` tables if they are missing.
pub async fn init_schema(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for statement in CREATE_TABLES {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    info!("Database schema ready");
    Ok(())
}

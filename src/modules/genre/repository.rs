use super::model::Genre;
use sqlx::{Pool, Sqlite};

pub struct GenreRepository;

impl GenreRepository {
    pub async fn create(
        pool: &Pool<Sqlite>,
        id: Option<i64>,
        name: &str,
    ) -> Result<Genre, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let genre = sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genre (id, name)
            VALUES (?, ?)
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(genre)
    }

    pub async fn find_all(pool: &Pool<Sqlite>) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name
            FROM genre
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            r#"
            SELECT id, name
            FROM genre
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn update(
        pool: &Pool<Sqlite>,
        id: i64,
        name: &str,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let genre = sqlx::query_as::<_, Genre>(
            r#"
            UPDATE genre
            SET name = ?
            WHERE id = ?
            RETURNING id, name
            "#,
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(genre)
    }

    pub async fn delete(pool: &Pool<Sqlite>, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM genre WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

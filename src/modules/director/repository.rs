use super::model::Director;
use sqlx::{Pool, Sqlite};

pub struct DirectorRepository;

impl DirectorRepository {
    pub async fn create(
        pool: &Pool<Sqlite>,
        id: Option<i64>,
        name: &str,
    ) -> Result<Director, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let director = sqlx::query_as::<_, Director>(
            r#"
            INSERT INTO director (id, name)
            VALUES (?, ?)
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(director)
    }

    pub async fn find_all(pool: &Pool<Sqlite>) -> Result<Vec<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>(
            r#"
            SELECT id, name
            FROM director
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<Option<Director>, sqlx::Error> {
        sqlx::query_as::<_, Director>(
            r#"
            SELECT id, name
            FROM director
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Overwrites the row. `None` means no director has this id.
    pub async fn update(
        pool: &Pool<Sqlite>,
        id: i64,
        name: &str,
    ) -> Result<Option<Director>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let director = sqlx::query_as::<_, Director>(
            r#"
            UPDATE director
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
        Ok(director)
    }

    /// Returns `false` when no director has this id. Movies pointing at the
    /// deleted director keep their `director_id`.
    pub async fn delete(pool: &Pool<Sqlite>, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM director WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

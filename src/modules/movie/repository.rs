use super::model::{Movie, MovieFilter, MovieWithRelations};
use sqlx::{Pool, QueryBuilder, Sqlite};

const SELECT_WITH_RELATIONS: &str = r#"
    SELECT
        m.id, m.title, m.description, m.trailer, m.year, m.rating,
        m.genre_id, m.director_id,
        d.name AS director_name,
        g.name AS genre_name
    FROM movie m
    LEFT JOIN director d ON d.id = m.director_id
    LEFT JOIN genre g ON g.id = m.genre_id
"#;

/// Column values written by create and update.
#[derive(Debug)]
pub struct MovieFields<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub trailer: Option<&'a str>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

pub struct MovieRepository;

impl MovieRepository {
    pub async fn create(
        pool: &Pool<Sqlite>,
        id: Option<i64>,
        fields: MovieFields<'_>,
    ) -> Result<Movie, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let movie = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movie (id, title, description, trailer, year, rating, genre_id, director_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, title, description, trailer, year, rating, genre_id, director_id
            "#,
        )
        .bind(id)
        .bind(fields.title)
        .bind(fields.description)
        .bind(fields.trailer)
        .bind(fields.year)
        .bind(fields.rating)
        .bind(fields.genre_id)
        .bind(fields.director_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(movie)
    }

    pub async fn find_all(
        pool: &Pool<Sqlite>,
        filter: MovieFilter,
    ) -> Result<Vec<MovieWithRelations>, sqlx::Error> {
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_WITH_RELATIONS);
        query.push(" WHERE 1 = 1");

        if let Some(director_id) = filter.director_id {
            query.push(" AND m.director_id = ").push_bind(director_id);
        }
        if let Some(genre_id) = filter.genre_id {
            query.push(" AND m.genre_id = ").push_bind(genre_id);
        }

        query.push(" ORDER BY m.id ASC");

        query
            .build_query_as::<MovieWithRelations>()
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &Pool<Sqlite>,
        id: i64,
    ) -> Result<Option<MovieWithRelations>, sqlx::Error> {
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_WITH_RELATIONS);
        query.push(" WHERE m.id = ").push_bind(id);

        query
            .build_query_as::<MovieWithRelations>()
            .fetch_optional(pool)
            .await
    }

    /// Overwrites every column of the row. `None` means no movie has this id.
    pub async fn update(
        pool: &Pool<Sqlite>,
        id: i64,
        fields: MovieFields<'_>,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let movie = sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movie
            SET
                title = ?,
                description = ?,
                trailer = ?,
                year = ?,
                rating = ?,
                genre_id = ?,
                director_id = ?
            WHERE id = ?
            RETURNING id, title, description, trailer, year, rating, genre_id, director_id
            "#,
        )
        .bind(fields.title)
        .bind(fields.description)
        .bind(fields.trailer)
        .bind(fields.year)
        .bind(fields.rating)
        .bind(fields.genre_id)
        .bind(fields.director_id)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(movie)
    }

    pub async fn delete(pool: &Pool<Sqlite>, id: i64) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM movie WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

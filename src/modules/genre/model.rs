use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Director {
    pub id: i64,
    pub name: String,
}

use sqlx::PgPool;

use crate::database::partial_update::Entity;
use crate::error::Result;

/// Fixed cap for list endpoints; there is no cursor.
pub const LIST_LIMIT: i64 = 100;

/// Most recent rows first, by descending primary key.
pub async fn latest<T: Entity>(pool: &PgPool) -> Result<Vec<T>> {
    let sql = format!(
        "SELECT * FROM {} ORDER BY id DESC LIMIT $1",
        T::SCHEMA.name
    );
    let rows = sqlx::query_as::<_, T>(&sql)
        .bind(LIST_LIMIT)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

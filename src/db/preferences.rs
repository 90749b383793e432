//! Preference database queries.

use crate::Result;

use super::DbPool;

/// Get a preference value by key.
pub async fn get_preference(pool: &DbPool, key: &str) -> Result<Option<String>> {
    let value: Option<(String,)> = sqlx::query_as("SELECT value FROM preferences WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    Ok(value.map(|(v,)| v))
}

/// Insert or replace a preference value.
pub async fn set_preference(pool: &DbPool, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO preferences (key, value, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .bind(chrono::Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    Ok(())
}

//! User queries. Users are created on first OAuth login and never deleted
//! by this subsystem.

use sqlx::{Executor, Postgres};

use crate::models::user::User;

pub struct NewUser<'a> {
    pub email: &'a str,
    pub full_name: &'a str,
    pub avatar: &'a str,
}

pub async fn find_by_email<'e, E>(executor: E, email: &str) -> Result<Option<User>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(executor)
        .await
}

pub async fn insert_user<'e, E>(executor: E, user: &NewUser<'_>) -> Result<User, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        r#"
        INSERT INTO users (email, full_name, avatar)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(user.email)
    .bind(user.full_name)
    .bind(user.avatar)
    .fetch_one(executor)
    .await
}

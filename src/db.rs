use crate::blog_post::{BlogPost, NewBlogPost};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

#[derive(Clone)]
pub struct PostDatabase {
    pool: SqlitePool,
}

impl PostDatabase {
    /// Connects to `database_url`, creating the file if needed, and applies migrations.
    pub async fn create(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;
        Self::migrated(pool).await
    }

    /// A private in-memory database.
    ///
    /// Every SQLite in-memory connection is its own database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::migrated(pool).await
    }

    async fn migrated(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::migrate!().run(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn all_posts(&self) -> Result<Vec<BlogPost>, sqlx::Error> {
        let posts = sqlx::query_as::<_, BlogPost>(
            r#"
                SELECT id, title, author, url, likes
                FROM blogs
                ORDER BY id;
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    pub async fn find_post(&self, id: i64) -> Result<Option<BlogPost>, sqlx::Error> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
                SELECT id, title, author, url, likes
                FROM blogs
                WHERE id = ?;
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    pub async fn insert_post(&self, blog_post: &NewBlogPost) -> Result<BlogPost, sqlx::Error> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
                INSERT INTO blogs(title, author, url, likes)
                VALUES (?, ?, ?, ?)
                RETURNING id, title, author, url, likes
            "#,
        )
        .bind(&blog_post.title)
        .bind(&blog_post.author)
        .bind(&blog_post.url)
        .bind(blog_post.likes)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(id = post.id, "inserted blog post");
        Ok(post)
    }

    pub async fn update_post(
        &self,
        id: i64,
        blog_post: &NewBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
                UPDATE blogs
                SET title = ?, author = ?, url = ?, likes = ?
                WHERE id = ?
                RETURNING id, title, author, url, likes
            "#,
        )
        .bind(&blog_post.title)
        .bind(&blog_post.author)
        .bind(&blog_post.url)
        .bind(blog_post.likes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    /// Returns whether a row was removed.
    pub async fn delete_post(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
                DELETE FROM blogs
                WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blogs")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

//! Fixtures and store accessors shared by the API tests.

use crate::blog_post::{BlogPost, NewBlogPost};
use crate::db::PostDatabase;

fn fixture(title: &str, author: &str, url: &str, likes: i64) -> NewBlogPost {
    NewBlogPost {
        title: String::from(title),
        author: Some(String::from(author)),
        url: String::from(url),
        likes,
    }
}

pub fn initial_blogs() -> Vec<NewBlogPost> {
    vec![
        fixture(
            "React patterns",
            "Michael Chan",
            "https://reactpatterns.com/",
            7,
        ),
        fixture(
            "Go To Statement Considered Harmful",
            "Edsger W. Dijkstra",
            "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html",
            5,
        ),
        fixture(
            "Canonical string reduction",
            "Edsger W. Dijkstra",
            "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html",
            12,
        ),
    ]
}

/// Clears the store and writes the initial fixtures back.
pub async fn reset(db: &PostDatabase) {
    db.delete_all().await.unwrap();
    for blog in initial_blogs() {
        db.insert_post(&blog).await.unwrap();
    }
}

pub async fn seeded_database() -> PostDatabase {
    let db = PostDatabase::in_memory().await.unwrap();
    reset(&db).await;
    db
}

pub async fn blogs_in_db(db: &PostDatabase) -> Vec<BlogPost> {
    db.all_posts().await.unwrap()
}

/// An id that belonged to a post which has since been deleted.
pub async fn non_existing_id(db: &PostDatabase) -> i64 {
    let post = db
        .insert_post(&fixture("willremovethissoon", "nobody", "https://example.com/", 0))
        .await
        .unwrap();
    db.delete_post(post.id).await.unwrap();
    post.id
}

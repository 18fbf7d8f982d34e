use crate::blog_post::BlogPostRequest;
use crate::db::PostDatabase;
use crate::error::{ApiError, BlogError};
use actix_web::{delete, get, post, put, web, HttpResponse};

#[get("/api/blogs")]
pub async fn list_blogs(db: web::Data<PostDatabase>) -> Result<HttpResponse, BlogError> {
    let posts = db.all_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[post("/api/blogs")]
pub async fn create_blog(
    blog_post: web::Json<BlogPostRequest>,
    db: web::Data<PostDatabase>,
) -> Result<HttpResponse, BlogError> {
    let new_post = blog_post.into_inner().validate().map_err(|err| {
        tracing::info!(%err, "rejected blog post");
        err
    })?;
    let post = db.insert_post(&new_post).await?;
    tracing::info!(id = post.id, title = %post.title, "created blog post");
    Ok(HttpResponse::Created().json(post))
}

#[get("/api/blogs/{id}")]
pub async fn get_blog(
    id: web::Path<i64>,
    db: web::Data<PostDatabase>,
) -> Result<HttpResponse, BlogError> {
    let id = id.into_inner();
    match db.find_post(id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(BlogError::NotFound(id)),
    }
}

#[put("/api/blogs/{id}")]
pub async fn update_blog(
    id: web::Path<i64>,
    blog_post: web::Json<BlogPostRequest>,
    db: web::Data<PostDatabase>,
) -> Result<HttpResponse, BlogError> {
    let id = id.into_inner();
    let new_post = blog_post.into_inner().validate()?;
    match db.update_post(id, &new_post).await? {
        Some(post) => {
            tracing::info!(id, "updated blog post");
            Ok(HttpResponse::Ok().json(post))
        }
        None => Err(BlogError::NotFound(id)),
    }
}

#[delete("/api/blogs/{id}")]
pub async fn delete_blog(
    id: web::Path<i64>,
    db: web::Data<PostDatabase>,
) -> Result<HttpResponse, BlogError> {
    let id = id.into_inner();
    if db.delete_post(id).await? {
        tracing::info!(id, "deleted blog post");
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(BlogError::NotFound(id))
    }
}

pub async fn unknown_endpoint() -> HttpResponse {
    HttpResponse::NotFound().json(ApiError::new("unknown endpoint"))
}

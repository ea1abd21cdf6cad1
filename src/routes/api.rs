use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::dto::api::BlogsQuery;
use crate::forms::blog::BlogForm;
use crate::repository::DieselRepository;
use crate::routes::{TOTAL_COUNT_HEADER, service_error_response};
use crate::services::blogs as blogs_service;

#[get("/Blogs")]
/// Lists the whole collection or the `[_start, _end)` window of it.
pub async fn list_blogs(
    params: web::Query<BlogsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match blogs_service::list_blogs(repo.get_ref(), params.into_inner()) {
        Ok(response) => HttpResponse::Ok()
            .insert_header((TOTAL_COUNT_HEADER, response.total.to_string()))
            .json(response.blogs),
        Err(err) => {
            log::error!("Failed to list blogs: {err}");
            service_error_response(err)
        }
    }
}

#[get("/Blogs/{blog_id}")]
pub async fn show_blog(
    blog_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match blogs_service::get_blog(repo.get_ref(), blog_id.into_inner()) {
        Ok(blog) => HttpResponse::Ok().json(blog),
        Err(err) => service_error_response(err),
    }
}

#[post("/Blogs")]
pub async fn create_blog(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BlogForm>,
) -> impl Responder {
    match blogs_service::create_blog(repo.get_ref(), form) {
        Ok(blog) => HttpResponse::Created().json(blog),
        Err(err) => service_error_response(err),
    }
}

#[put("/Blogs/{blog_id}")]
pub async fn update_blog(
    blog_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BlogForm>,
) -> impl Responder {
    match blogs_service::update_blog(repo.get_ref(), blog_id.into_inner(), form) {
        Ok(blog) => HttpResponse::Ok().json(blog),
        Err(err) => service_error_response(err),
    }
}

#[delete("/Blogs/{blog_id}")]
pub async fn delete_blog(
    blog_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match blogs_service::delete_blog(repo.get_ref(), blog_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(json!({})),
        Err(err) => service_error_response(err),
    }
}

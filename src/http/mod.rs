//! HTTP surface for lists and tasks.
//!
//! Pages are server-rendered HTML. Mutating routes answer `303 See Other`
//! with a [`flash::Flash`] cookie; validation failures answer `422` with
//! field messages as JSON.

pub mod error;
pub mod flash;
pub mod identity;
mod lists;
mod tasks;
pub mod views;

pub use error::HttpError;
pub use identity::{CurrentUser, USER_HEADER};
pub use views::Views;

use crate::todo::{
    domain::{ListId, TaskId},
    ports::{ListRepository, TaskRepository},
    services::{ListService, TaskService},
};
use actix_web::{HttpRequest, HttpResponse, http::header::ContentType, web};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Services and views shared by every request handler.
pub struct AppState<S, C>
where
    S: ListRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    lists: ListService<S, S, C>,
    tasks: TaskService<S, S, C>,
    views: Views,
}

impl<S, C> AppState<S, C>
where
    S: ListRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wires list and task services over one `store`.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when the page templates fail to parse.
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Result<Self, minijinja::Error> {
        Ok(Self {
            lists: ListService::new(Arc::clone(&store), Arc::clone(&store), Arc::clone(&clock)),
            tasks: TaskService::new(Arc::clone(&store), store, clock),
            views: Views::new()?,
        })
    }
}

/// Registers every route. The application must provide
/// `web::Data<AppState<S, C>>`.
pub fn configure<S, C>(config: &mut web::ServiceConfig)
where
    S: ListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    config
        .route("/health", web::get().to(health))
        .service(
            web::resource("/lists")
                .route(web::get().to(lists::index::<S, C>))
                .route(web::post().to(lists::create::<S, C>)),
        )
        .service(
            web::resource("/lists/{list_id}")
                .route(web::put().to(lists::rename::<S, C>))
                .route(web::delete().to(lists::delete::<S, C>)),
        )
        .service(
            web::resource("/lists/{list_id}/tasks")
                .route(web::get().to(tasks::show::<S, C>))
                .route(web::post().to(tasks::create::<S, C>)),
        )
        .service(
            web::resource("/lists/{list_id}/tasks/{task_id}")
                .route(web::put().to(tasks::update::<S, C>))
                .route(web::delete().to(tasks::delete::<S, C>)),
        )
        .service(
            web::resource("/lists/{list_id}/tasks/{task_id}/toggle")
                .route(web::patch().to(tasks::toggle::<S, C>)),
        )
        .service(
            web::resource("/lists/{list_id}/tasks/{task_id}/reorder")
                .route(web::patch().to(tasks::reorder::<S, C>)),
        )
        .default_service(web::to(not_found));
}

#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(StatusBody { status: "ok" })
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(StatusBody {
        status: "not found",
    })
}

fn parse_uuid(raw: &str) -> Result<Uuid, HttpError> {
    Uuid::parse_str(raw).map_err(|_| HttpError::NotFound)
}

fn parse_list_id(raw: &str) -> Result<ListId, HttpError> {
    parse_uuid(raw).map(ListId::from_uuid)
}

fn parse_task_id(raw: &str) -> Result<TaskId, HttpError> {
    parse_uuid(raw).map(TaskId::from_uuid)
}

fn render(request: &HttpRequest, html: String) -> HttpResponse {
    let mut response = HttpResponse::Ok();
    response.content_type(ContentType::html());
    if flash::is_set(request) {
        flash::clear(&mut response);
    }
    response.body(html)
}

//! Handlers for `/lists` and `/lists/{list_id}`.

use super::{
    AppState, HttpError,
    flash::{self, Flash},
    identity::CurrentUser,
    parse_list_id, render,
};
use crate::todo::{
    ports::{ListRepository, TaskRepository},
    services::{CreateListRequest, RenameListRequest},
};
use actix_web::{HttpRequest, HttpResponse, web};
use mockable::Clock;
use serde::Deserialize;

const LISTS_PATH: &str = "/lists";

/// Form body for creating or renaming a list.
#[derive(Debug, Deserialize)]
pub(super) struct ListForm {
    #[serde(default)]
    title: String,
}

pub(super) async fn index<S, C>(
    state: web::Data<AppState<S, C>>,
    CurrentUser(user): CurrentUser,
    request: HttpRequest,
) -> Result<HttpResponse, HttpError>
where
    S: ListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let summaries = state.lists.list_for_owner(user).await?;
    let flash = flash::pending(&request);
    Ok(render(&request, state.views.list_index(&summaries, flash)?))
}

pub(super) async fn create<S, C>(
    state: web::Data<AppState<S, C>>,
    CurrentUser(user): CurrentUser,
    form: web::Form<ListForm>,
    request: HttpRequest,
) -> Result<HttpResponse, HttpError>
where
    S: ListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let ListForm { title } = form.into_inner();
    state
        .lists
        .create(user, CreateListRequest::new(title))
        .await?;
    Ok(flash::redirect(&request, LISTS_PATH, Flash::ListCreated))
}

pub(super) async fn rename<S, C>(
    state: web::Data<AppState<S, C>>,
    CurrentUser(user): CurrentUser,
    path: web::Path<String>,
    form: web::Form<ListForm>,
    request: HttpRequest,
) -> Result<HttpResponse, HttpError>
where
    S: ListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let list_id = parse_list_id(&path)?;
    let ListForm { title } = form.into_inner();
    state
        .lists
        .rename(user, list_id, RenameListRequest::new(title))
        .await?;
    Ok(flash::redirect(&request, LISTS_PATH, Flash::ListUpdated))
}

pub(super) async fn delete<S, C>(
    state: web::Data<AppState<S, C>>,
    CurrentUser(user): CurrentUser,
    path: web::Path<String>,
    request: HttpRequest,
) -> Result<HttpResponse, HttpError>
where
    S: ListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let list_id = parse_list_id(&path)?;
    state.lists.delete(user, list_id).await?;
    Ok(flash::redirect(&request, LISTS_PATH, Flash::ListDeleted))
}

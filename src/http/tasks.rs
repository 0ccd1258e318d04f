//! Handlers for `/lists/{list_id}/tasks` and the task routes below it.

use super::{
    AppState, HttpError,
    flash::{self, Flash},
    identity::CurrentUser,
    parse_list_id, parse_task_id, render,
};
use crate::todo::{
    domain::{ListId, StatusTransition},
    ports::{ListRepository, TaskRepository},
    services::TaskDetailsRequest,
};
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::NaiveDate;
use mockable::Clock;
use serde::Deserialize;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Form body for creating or editing a task.
#[derive(Debug, Deserialize)]
pub(super) struct TaskForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
}

impl TaskForm {
    fn into_request(self) -> Result<TaskDetailsRequest, HttpError> {
        let mut request = TaskDetailsRequest::new(self.title);
        if let Some(description) = non_blank(self.description) {
            request = request.with_description(description);
        }
        if let Some(raw) = non_blank(self.due_date) {
            let due_date = NaiveDate::parse_from_str(&raw, DUE_DATE_FORMAT).map_err(|_| {
                HttpError::InvalidField {
                    field: "due_date",
                    message: format!("due_date must be a date in YYYY-MM-DD format, got {raw}"),
                }
            })?;
            request = request.with_due_date(due_date);
        }
        Ok(request)
    }
}

/// Form body for moving a task.
#[derive(Debug, Deserialize)]
pub(super) struct ReorderForm {
    #[serde(default)]
    new_order: String,
}

impl ReorderForm {
    fn new_order(&self) -> Result<i64, HttpError> {
        self.new_order
            .trim()
            .parse()
            .map_err(|_| HttpError::InvalidField {
                field: "new_order",
                message: "new_order must be an integer greater than or equal to 1".to_owned(),
            })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

fn tasks_path(list_id: ListId) -> String {
    format!("/lists/{list_id}/tasks")
}

fn redirect_back(request: &HttpRequest, list_id: ListId, message: Flash) -> HttpResponse {
    flash::redirect(request, &flash::back(request, &tasks_path(list_id)), message)
}

pub(super) async fn show<S, C>(
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
    let overview = state.lists.show_with_tasks(user, list_id).await?;
    let flash = flash::pending(&request);
    Ok(render(&request, state.views.list_show(&overview, flash)?))
}

pub(super) async fn create<S, C>(
    state: web::Data<AppState<S, C>>,
    CurrentUser(user): CurrentUser,
    path: web::Path<String>,
    form: web::Form<TaskForm>,
    request: HttpRequest,
) -> Result<HttpResponse, HttpError>
where
    S: ListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let list_id = parse_list_id(&path)?;
    let details = form.into_inner().into_request()?;
    state.tasks.create(user, list_id, details).await?;
    Ok(redirect_back(&request, list_id, Flash::TaskCreated))
}

pub(super) async fn update<S, C>(
    state: web::Data<AppState<S, C>>,
    CurrentUser(user): CurrentUser,
    path: web::Path<(String, String)>,
    form: web::Form<TaskForm>,
    request: HttpRequest,
) -> Result<HttpResponse, HttpError>
where
    S: ListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let (list_id, task_id) = (parse_list_id(&path.0)?, parse_task_id(&path.1)?);
    let details = form.into_inner().into_request()?;
    state.tasks.update(user, list_id, task_id, details).await?;
    Ok(redirect_back(&request, list_id, Flash::TaskUpdated))
}

pub(super) async fn toggle<S, C>(
    state: web::Data<AppState<S, C>>,
    CurrentUser(user): CurrentUser,
    path: web::Path<(String, String)>,
    request: HttpRequest,
) -> Result<HttpResponse, HttpError>
where
    S: ListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let (list_id, task_id) = (parse_list_id(&path.0)?, parse_task_id(&path.1)?);
    let outcome = state.tasks.toggle(user, list_id, task_id).await?;
    let message = match outcome.transition {
        StatusTransition::Completed => Flash::TaskCompleted,
        StatusTransition::Reopened => Flash::TaskReopened,
    };
    Ok(redirect_back(&request, list_id, message))
}

pub(super) async fn reorder<S, C>(
    state: web::Data<AppState<S, C>>,
    CurrentUser(user): CurrentUser,
    path: web::Path<(String, String)>,
    form: web::Form<ReorderForm>,
    request: HttpRequest,
) -> Result<HttpResponse, HttpError>
where
    S: ListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let (list_id, task_id) = (parse_list_id(&path.0)?, parse_task_id(&path.1)?);
    let new_order = form.new_order()?;
    state
        .tasks
        .reorder(user, list_id, task_id, new_order)
        .await?;
    Ok(redirect_back(&request, list_id, Flash::TaskReordered))
}

pub(super) async fn delete<S, C>(
    state: web::Data<AppState<S, C>>,
    CurrentUser(user): CurrentUser,
    path: web::Path<(String, String)>,
    request: HttpRequest,
) -> Result<HttpResponse, HttpError>
where
    S: ListRepository + TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let (list_id, task_id) = (parse_list_id(&path.0)?, parse_task_id(&path.1)?);
    state.tasks.delete(user, list_id, task_id).await?;
    Ok(redirect_back(&request, list_id, Flash::TaskDeleted))
}

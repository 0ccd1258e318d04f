//! One-shot confirmation messages carried across a redirect.
//!
//! A mutating handler answers `303 See Other` and stores a [`Flash`] code in
//! a cookie; the page it redirects to renders the message and clears the
//! cookie.
//!
//! Forms submitted by the page script carry [`SCRIPT_HEADER`]. They get
//! `204 No Content` with the same `Location` instead, so `fetch` does not
//! follow the redirect and consume the flash before the browser navigates.

use actix_web::{
    HttpRequest, HttpResponse, HttpResponseBuilder,
    cookie::{Cookie, SameSite},
    http::{Uri, header},
};

/// Name of the cookie carrying the pending flash code.
pub const FLASH_COOKIE: &str = "flash";

/// Header the page script sets on the requests it sends.
pub const SCRIPT_HEADER: &str = "x-requested-with";

/// Value of [`SCRIPT_HEADER`] sent by the page script.
pub const SCRIPT_MARKER: &str = "fetch";

const LISTS_PATH: &str = "/lists";

/// Confirmation shown after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    /// A list was created.
    ListCreated,
    /// A list was renamed.
    ListUpdated,
    /// A list and its tasks were deleted.
    ListDeleted,
    /// A task was added.
    TaskCreated,
    /// A task's details changed.
    TaskUpdated,
    /// A task was marked completed.
    TaskCompleted,
    /// A task was marked pending again.
    TaskReopened,
    /// A task was moved.
    TaskReordered,
    /// A task was deleted.
    TaskDeleted,
}

impl Flash {
    const ALL: [Self; 9] = [
        Self::ListCreated,
        Self::ListUpdated,
        Self::ListDeleted,
        Self::TaskCreated,
        Self::TaskUpdated,
        Self::TaskCompleted,
        Self::TaskReopened,
        Self::TaskReordered,
        Self::TaskDeleted,
    ];

    /// Returns the stable cookie code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ListCreated => "list-created",
            Self::ListUpdated => "list-updated",
            Self::ListDeleted => "list-deleted",
            Self::TaskCreated => "task-created",
            Self::TaskUpdated => "task-updated",
            Self::TaskCompleted => "task-completed",
            Self::TaskReopened => "task-reopened",
            Self::TaskReordered => "task-reordered",
            Self::TaskDeleted => "task-deleted",
        }
    }

    /// Returns the text shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ListCreated => "List created successfully.",
            Self::ListUpdated => "List updated successfully.",
            Self::ListDeleted => "List deleted successfully.",
            Self::TaskCreated => "Task created successfully.",
            Self::TaskUpdated => "Task updated successfully.",
            Self::TaskCompleted => "Task completed!",
            Self::TaskReopened => "Task reopened!",
            Self::TaskReordered => "Task order updated.",
            Self::TaskDeleted => "Task deleted successfully.",
        }
    }

    /// Looks a flash up by its cookie code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flash| flash.code() == code)
    }
}

/// Returns the flash pending on `request`, if any.
#[must_use]
pub fn pending(request: &HttpRequest) -> Option<Flash> {
    request
        .cookie(FLASH_COOKIE)
        .and_then(|cookie| Flash::from_code(cookie.value()))
}

/// Returns `true` when `request` carries a flash cookie, readable or not.
#[must_use]
pub fn is_set(request: &HttpRequest) -> bool {
    request.cookie(FLASH_COOKIE).is_some()
}

/// Returns `true` when `request` was sent by the page script.
#[must_use]
pub fn from_script(request: &HttpRequest) -> bool {
    request
        .headers()
        .get(SCRIPT_HEADER)
        .is_some_and(|value| value.as_bytes().eq_ignore_ascii_case(SCRIPT_MARKER.as_bytes()))
}

/// Sends the client to `location` carrying `flash`.
///
/// Answers `303 See Other`, or `204 No Content` with a `Location` header
/// when the request came from the page script.
#[must_use]
pub fn redirect(request: &HttpRequest, location: &str, flash: Flash) -> HttpResponse {
    let cookie = Cookie::build(FLASH_COOKIE, flash.code())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    let mut response = if from_script(request) {
        HttpResponse::NoContent()
    } else {
        HttpResponse::SeeOther()
    };
    response
        .insert_header((header::LOCATION, location))
        .cookie(cookie)
        .finish()
}

/// Expires the flash cookie on `response` once its message is shown.
pub fn clear(response: &mut HttpResponseBuilder) {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    response.cookie(cookie);
}

/// Resolves where a task mutation redirects to.
///
/// Uses the path of the `Referer` header when it names one of the list
/// pages, so the user lands back on the page they acted from; otherwise
/// `fallback`. Only the path and query are kept, never the host.
#[must_use]
pub fn back(request: &HttpRequest, fallback: &str) -> String {
    request
        .headers()
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Uri>().ok())
        .filter(|uri| is_list_page(uri.path()))
        .and_then(|uri| uri.path_and_query().map(|path| path.as_str().to_owned()))
        .unwrap_or_else(|| fallback.to_owned())
}

fn is_list_page(path: &str) -> bool {
    path == LISTS_PATH
        || path
            .strip_prefix(LISTS_PATH)
            .is_some_and(|rest| rest.starts_with('/'))
}

//! HTML pages rendered with templates compiled into the binary.

use super::flash::Flash;
use crate::todo::domain::{ListOverview, ListSummary};
use minijinja::{Environment, context};

const LAYOUT: &str = "layout.html";
const LIST_INDEX: &str = "lists/index.html";
const LIST_SHOW: &str = "lists/show.html";

/// Template environment holding every page.
#[derive(Debug)]
pub struct Views {
    environment: Environment<'static>,
}

impl Views {
    /// Loads the page templates.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when a template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut environment = Environment::new();
        environment.add_template(LAYOUT, include_str!("../../templates/layout.html"))?;
        environment.add_template(LIST_INDEX, include_str!("../../templates/lists/index.html"))?;
        environment.add_template(LIST_SHOW, include_str!("../../templates/lists/show.html"))?;
        Ok(Self { environment })
    }

    /// Renders the caller's lists, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn list_index(
        &self,
        lists: &[ListSummary],
        flash: Option<Flash>,
    ) -> Result<String, minijinja::Error> {
        self.environment.get_template(LIST_INDEX)?.render(context! {
            lists => lists,
            flash => flash.map(Flash::message),
        })
    }

    /// Renders one list with its pending and completed tasks.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn list_show(
        &self,
        overview: &ListOverview,
        flash: Option<Flash>,
    ) -> Result<String, minijinja::Error> {
        self.environment.get_template(LIST_SHOW)?.render(context! {
            list => overview.list(),
            pending => overview.pending(),
            completed => overview.completed(),
            stats => overview.stats(),
            flash => flash.map(Flash::message),
        })
    }
}

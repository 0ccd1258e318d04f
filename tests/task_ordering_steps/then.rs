//! Then steps for task ordering BDD scenarios.

use super::world::{OrderingWorld, run_async};
use rstest_bdd_macros::then;
use tasklist::todo::{
    domain::{ListOverview, Task, TaskStatus},
    services::TodoServiceError,
};

fn overview(world: &OrderingWorld) -> Result<ListOverview, eyre::Report> {
    let list_id = world.list()?.id();
    Ok(run_async(
        world.services.lists.show_with_tasks(world.owner, list_id),
    )?)
}

fn task_titled(world: &OrderingWorld, title: &str) -> Result<Task, eyre::Report> {
    let task_id = world.task_id(title)?;
    let overview = overview(world)?;
    overview
        .pending()
        .iter()
        .chain(overview.completed())
        .find(|task| task.id() == task_id)
        .cloned()
        .ok_or_else(|| eyre::eyre!("task {title:?} is not in the list"))
}

#[then(r#"the task "{title}" has order {order:i32}"#)]
fn task_has_order(world: &OrderingWorld, title: String, order: i32) -> Result<(), eyre::Report> {
    let task = task_titled(world, &title)?;
    eyre::ensure!(
        task.order().value() == order,
        "expected {title:?} at order {order}, found {}",
        task.order()
    );
    Ok(())
}

#[then(r#"the pending tasks read "{titles}""#)]
fn pending_tasks_read(world: &OrderingWorld, titles: String) -> Result<(), eyre::Report> {
    let actual: Vec<String> = overview(world)?
        .pending()
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();
    let expected: Vec<String> = titles.split(", ").map(str::to_owned).collect();
    eyre::ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then(r#"the task "{title}" is "{status}""#)]
fn task_has_status(world: &OrderingWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = task_titled(world, &title)?;
    eyre::ensure!(
        task.status() == expected,
        "expected {title:?} to be {}, found {}",
        expected.as_str(),
        task.status().as_str()
    );
    Ok(())
}

#[then(r#"the list is "{percent}" percent complete"#)]
fn list_percent_complete(world: &OrderingWorld, percent: String) -> Result<(), eyre::Report> {
    let expected: f64 = percent.parse()?;
    let actual = overview(world)?.stats().completion_percentage;
    eyre::ensure!(
        (actual - expected).abs() < f64::EPSILON,
        "expected {expected}% complete, found {actual}%"
    );
    Ok(())
}

#[then(r#"the move is rejected for field "{field}""#)]
fn move_rejected(world: &OrderingWorld, field: String) -> Result<(), eyre::Report> {
    let result = world
        .last_move
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;
    let Err(TodoServiceError::Validation(err)) = result else {
        return Err(eyre::eyre!("expected a validation error, got {result:?}"));
    };
    eyre::ensure!(
        err.field() == field,
        "expected rejection on {field:?}, found {:?}",
        err.field()
    );
    Ok(())
}

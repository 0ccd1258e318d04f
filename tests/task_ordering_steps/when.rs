//! When steps for task ordering BDD scenarios.

use super::world::{OrderingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasklist::todo::services::TaskDetailsRequest;

#[when(r#"the task "{title}" is moved to position {position:i64}"#)]
fn task_moved(
    world: &mut OrderingWorld,
    title: String,
    position: i64,
) -> Result<(), eyre::Report> {
    let list_id = world.list()?.id();
    let task_id = world.task_id(&title)?;
    let result = run_async(
        world
            .services
            .tasks
            .reorder(world.owner, list_id, task_id, position),
    );
    world.last_move = Some(result);
    Ok(())
}

#[when(r#"a task "{title}" is added to the list"#)]
fn task_added(world: &mut OrderingWorld, title: String) -> Result<(), eyre::Report> {
    let list_id = world.list()?.id();
    let task = run_async(world.services.tasks.create(
        world.owner,
        list_id,
        TaskDetailsRequest::new(title.clone()),
    ))
    .wrap_err("add task in ordering scenario")?;
    world.task_ids.insert(title, task.id());
    Ok(())
}

#[when(r#"the task "{title}" is toggled"#)]
fn task_toggled(world: &mut OrderingWorld, title: String) -> Result<(), eyre::Report> {
    let list_id = world.list()?.id();
    let task_id = world.task_id(&title)?;
    run_async(world.services.tasks.toggle(world.owner, list_id, task_id))
        .wrap_err("toggle task in ordering scenario")?;
    Ok(())
}

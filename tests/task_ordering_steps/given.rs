//! Given steps for task ordering BDD scenarios.

use super::world::{OrderingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasklist::todo::services::{CreateListRequest, TaskDetailsRequest};

#[given(r#"a list named "{title}""#)]
fn list_named(world: &mut OrderingWorld, title: String) -> Result<(), eyre::Report> {
    let list = run_async(
        world
            .services
            .lists
            .create(world.owner, CreateListRequest::new(title)),
    )
    .wrap_err("create list for ordering scenario")?;
    world.list = Some(list);
    Ok(())
}

#[given(r#"the list has a task "{title}""#)]
fn list_has_task(world: &mut OrderingWorld, title: String) -> Result<(), eyre::Report> {
    let list_id = world.list()?.id();
    let task = run_async(world.services.tasks.create(
        world.owner,
        list_id,
        TaskDetailsRequest::new(title.clone()),
    ))
    .wrap_err("create task for ordering scenario")?;
    world.task_ids.insert(title, task.id());
    Ok(())
}

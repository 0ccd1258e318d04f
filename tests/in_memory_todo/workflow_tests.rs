//! End-to-end list and task workflows over the in-memory store.

use crate::test_helpers::{Services, in_memory_services};
use rstest::{fixture, rstest};
use tasklist::todo::{
    adapters::memory::InMemoryTodoStore,
    domain::{TaskStatus, UserId},
    services::{CreateListRequest, ErrorKind, RenameListRequest, TaskDetailsRequest},
};

#[fixture]
fn services() -> Services<InMemoryTodoStore> {
    in_memory_services()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_day_of_errands(services: Services<InMemoryTodoStore>) -> Result<(), eyre::Report> {
    let owner = UserId::new();
    let list = services
        .lists
        .create(owner, CreateListRequest::new("Errands"))
        .await?;
    let post = services
        .tasks
        .create(owner, list.id(), TaskDetailsRequest::new("Post office"))
        .await?;
    let bank = services
        .tasks
        .create(owner, list.id(), TaskDetailsRequest::new("Bank"))
        .await?;
    let pharmacy = services
        .tasks
        .create(owner, list.id(), TaskDetailsRequest::new("Pharmacy"))
        .await?;

    services
        .tasks
        .reorder(owner, list.id(), pharmacy.id(), 1)
        .await?;
    services.tasks.toggle(owner, list.id(), bank.id()).await?;
    services
        .lists
        .rename(owner, list.id(), RenameListRequest::new("Saturday errands"))
        .await?;

    let overview = services.lists.show_with_tasks(owner, list.id()).await?;
    let pending: Vec<&str> = overview
        .pending()
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    assert_eq!(overview.list().title().as_str(), "Saturday errands");
    assert_eq!(pending, vec!["Post office", "Pharmacy"]);
    assert_eq!(
        overview.completed().first().map(|task| task.id()),
        Some(bank.id())
    );
    assert_eq!(overview.stats().completion_percentage, 33.3);

    services.tasks.delete(owner, list.id(), post.id()).await?;
    let summaries = services.lists.list_for_owner(owner).await?;
    assert_eq!(
        summaries.first().map(|summary| summary.task_count),
        Some(2)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_never_see_each_others_lists(
    services: Services<InMemoryTodoStore>,
) -> Result<(), eyre::Report> {
    let alice = UserId::new();
    let bob = UserId::new();
    let alice_list = services
        .lists
        .create(alice, CreateListRequest::new("Alice's"))
        .await?;
    let alice_task = services
        .tasks
        .create(alice, alice_list.id(), TaskDetailsRequest::new("Secret"))
        .await?;

    assert!(services.lists.list_for_owner(bob).await?.is_empty());
    let kinds = [
        services
            .lists
            .show_with_tasks(bob, alice_list.id())
            .await
            .map(|_| ())
            .map_err(|err| err.kind()),
        services
            .tasks
            .toggle(bob, alice_list.id(), alice_task.id())
            .await
            .map(|_| ())
            .map_err(|err| err.kind()),
        services
            .tasks
            .update(
                bob,
                alice_list.id(),
                alice_task.id(),
                TaskDetailsRequest::new("Mine"),
            )
            .await
            .map(|_| ())
            .map_err(|err| err.kind()),
        services
            .lists
            .delete(bob, alice_list.id())
            .await
            .map_err(|err| err.kind()),
    ];
    assert!(kinds.iter().all(|kind| *kind == Err(ErrorKind::Forbidden)));

    let untouched = services
        .lists
        .show_with_tasks(alice, alice_list.id())
        .await?;
    let task = untouched.pending().first().cloned();
    assert_eq!(task.as_ref().map(|task| task.title().as_str()), Some("Secret"));
    assert_eq!(task.map(|task| task.status()), Some(TaskStatus::Pending));
    Ok(())
}

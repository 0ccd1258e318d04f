//! Service workflows over `PostgresTodoRepository`.

use super::helpers::repository;
use crate::test_helpers::services;
use tasklist::todo::{
    domain::UserId,
    services::{CreateListRequest, ErrorKind, TaskDetailsRequest},
};

#[tokio::test(flavor = "multi_thread")]
#[ignore = "needs TASKLIST_TEST_DATABASE_URL"]
async fn orders_and_progress_survive_persistence() -> Result<(), eyre::Report> {
    let store = repository().await?;
    let services = services(store);
    let owner = UserId::new();
    let list = services
        .lists
        .create(owner, CreateListRequest::new("Persistent"))
        .await?;

    let mut created = Vec::new();
    for title in ["one", "two", "three"] {
        created.push(
            services
                .tasks
                .create(owner, list.id(), TaskDetailsRequest::new(title))
                .await?,
        );
    }
    let orders: Vec<i32> = created.iter().map(|task| task.order().value()).collect();
    assert_eq!(orders, vec![1, 2, 3]);

    let first = created.first().ok_or_else(|| eyre::eyre!("missing task"))?;
    services.tasks.toggle(owner, list.id(), first.id()).await?;
    let overview = services.lists.show_with_tasks(owner, list.id()).await?;
    assert_eq!(overview.stats().completed, 1);
    assert_eq!(overview.stats().completion_percentage, 33.3);

    let stranger = services
        .lists
        .delete(UserId::new(), list.id())
        .await
        .map_err(|err| err.kind());
    assert_eq!(stranger, Err(ErrorKind::Forbidden));

    services.lists.delete(owner, list.id()).await?;
    let gone = services
        .lists
        .show_with_tasks(owner, list.id())
        .await
        .map(|_| ())
        .map_err(|err| err.kind());
    assert_eq!(gone, Err(ErrorKind::NotFound));
    Ok(())
}

//! Repository contract tests for `InMemoryTodoStore`.

use crate::test_helpers::SteppingClock;
use rstest::{fixture, rstest};
use tasklist::todo::{
    adapters::memory::InMemoryTodoStore,
    domain::{ListTitle, Task, TaskDetails, TaskOrder, TaskTitle, TodoList, UserId},
    ports::{ListRepository, TaskRepository, TodoRepositoryError},
};

struct Fixture {
    store: InMemoryTodoStore,
    clock: SteppingClock,
    owner: UserId,
}

impl Fixture {
    fn list(&self, title: &str) -> TodoList {
        TodoList::new(
            self.owner,
            ListTitle::new(title).expect("valid title"),
            &self.clock,
        )
    }

    fn task(&self, list: &TodoList, title: &str, order: i64) -> Task {
        Task::new(
            list.id(),
            list.owner_id(),
            TaskDetails::new(TaskTitle::new(title).expect("valid title")),
            TaskOrder::new(order).expect("valid order"),
            &self.clock,
        )
    }
}

#[fixture]
fn fixture() -> Fixture {
    Fixture {
        store: InMemoryTodoStore::new(),
        clock: SteppingClock::new(),
        owner: UserId::new(),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_identifiers_are_rejected(fixture: Fixture) -> Result<(), eyre::Report> {
    let list = fixture.list("Groceries");
    fixture.store.store_list(&list).await?;
    let task = fixture.task(&list, "Milk", 1);
    fixture.store.store_task(&task).await?;

    let list_again = fixture.store.store_list(&list).await;
    let task_again = fixture.store.store_task(&task).await;

    eyre::ensure!(
        matches!(list_again, Err(TodoRepositoryError::DuplicateList(id)) if id == list.id()),
        "expected DuplicateList, got {list_again:?}"
    );
    eyre::ensure!(
        matches!(task_again, Err(TodoRepositoryError::DuplicateTask(id)) if id == task.id()),
        "expected DuplicateTask, got {task_again:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_without_parent_list_is_rejected(fixture: Fixture) {
    let unsaved = fixture.list("Never stored");
    let task = fixture.task(&unsaved, "Orphan", 1);

    let result = fixture.store.store_task(&task).await;

    assert!(matches!(
        result,
        Err(TodoRepositoryError::ListNotFound(id)) if id == unsaved.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn max_order_is_scoped_to_one_list(fixture: Fixture) -> Result<(), eyre::Report> {
    let groceries = fixture.list("Groceries");
    let chores = fixture.list("Chores");
    fixture.store.store_list(&groceries).await?;
    fixture.store.store_list(&chores).await?;
    for (title, order) in [("Milk", 3), ("Eggs", 9), ("Bread", 2)] {
        fixture
            .store
            .store_task(&fixture.task(&groceries, title, order))
            .await?;
    }

    let groceries_max = fixture.store.max_task_order(groceries.id()).await?;
    let chores_max = fixture.store.max_task_order(chores.id()).await?;

    assert_eq!(groceries_max.map(TaskOrder::value), Some(9));
    assert_eq!(chores_max, None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summaries_are_newest_first_with_counts(fixture: Fixture) -> Result<(), eyre::Report> {
    let first = fixture.list("First");
    let second = fixture.list("Second");
    let third = fixture.list("Third");
    for list in [&second, &first, &third] {
        fixture.store.store_list(list).await?;
    }
    fixture
        .store
        .store_task(&fixture.task(&first, "One", 1))
        .await?;
    let foreign = TodoList::new(
        UserId::new(),
        ListTitle::new("Foreign").expect("valid title"),
        &fixture.clock,
    );
    fixture.store.store_list(&foreign).await?;

    let summaries = fixture.store.list_summaries(fixture.owner).await?;

    let shape: Vec<(&str, u64)> = summaries
        .iter()
        .map(|summary| (summary.list.title().as_str(), summary.task_count))
        .collect();
    assert_eq!(shape, vec![("Third", 0), ("Second", 0), ("First", 1)]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_come_back_in_display_order(fixture: Fixture) -> Result<(), eyre::Report> {
    let list = fixture.list("Groceries");
    fixture.store.store_list(&list).await?;
    for (title, order) in [("c", 5), ("a", 1), ("b", 1)] {
        fixture.store.store_task(&fixture.task(&list, title, order)).await?;
    }

    let titles: Vec<String> = fixture
        .store
        .tasks_in_list(list.id())
        .await?
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();

    assert_eq!(titles, vec!["a", "b", "c"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_list_removes_only_its_tasks(fixture: Fixture) -> Result<(), eyre::Report> {
    let doomed = fixture.list("Doomed");
    let kept = fixture.list("Kept");
    fixture.store.store_list(&doomed).await?;
    fixture.store.store_list(&kept).await?;
    let doomed_task = fixture.task(&doomed, "Gone", 1);
    let kept_task = fixture.task(&kept, "Stays", 1);
    fixture.store.store_task(&doomed_task).await?;
    fixture.store.store_task(&kept_task).await?;

    fixture.store.delete_list(doomed.id()).await?;

    assert_eq!(fixture.store.find_task(doomed_task.id()).await?, None);
    assert_eq!(
        fixture.store.find_task(kept_task.id()).await?,
        Some(kept_task)
    );
    assert!(matches!(
        fixture.store.delete_list(doomed.id()).await,
        Err(TodoRepositoryError::ListNotFound(_))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_missing_rows_reports_not_found(fixture: Fixture) {
    let list = fixture.list("Ghost");
    let task = fixture.task(&list, "Ghost task", 1);

    assert!(matches!(
        fixture.store.update_list(&list).await,
        Err(TodoRepositoryError::ListNotFound(_))
    ));
    assert!(matches!(
        fixture.store.update_task(&task).await,
        Err(TodoRepositoryError::TaskNotFound(_))
    ));
    assert!(matches!(
        fixture.store.delete_task(task.id()).await,
        Err(TodoRepositoryError::TaskNotFound(_))
    ));
}

use std::cell::RefCell;
use todolist_core::{RepoError, RepoResult, Todo, TodoId, TodoList, TodoRepository};
use uuid::Uuid;

/// In-memory collaborator double that records every persistence request.
#[derive(Default)]
struct RecordingRepo {
    seed: Vec<Todo>,
    created: RefCell<Vec<Todo>>,
    updated: RefCell<Vec<Todo>>,
    fail_query: bool,
    fail_writes: bool,
}

impl RecordingRepo {
    fn seeded(seed: Vec<Todo>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl TodoRepository for &RecordingRepo {
    fn query(&self) -> RepoResult<Vec<Todo>> {
        if self.fail_query {
            return Err(RepoError::InvalidData("injected query failure".to_string()));
        }
        Ok(self.seed.clone())
    }

    fn create(&self, todo: &Todo) -> RepoResult<TodoId> {
        if self.fail_writes {
            return Err(RepoError::InvalidData("injected create failure".to_string()));
        }
        self.created.borrow_mut().push(todo.clone());
        Ok(todo.uuid)
    }

    fn update(&self, todo: &Todo) -> RepoResult<()> {
        if self.fail_writes {
            return Err(RepoError::NotFound(todo.uuid));
        }
        self.updated.borrow_mut().push(todo.clone());
        Ok(())
    }
}

fn item(text: &str, done: bool) -> Todo {
    let mut todo = Todo::new(text);
    todo.done = done;
    todo
}

#[test]
fn load_populates_visible_list_in_collaborator_order() {
    let repo = RecordingRepo::seeded(vec![item("first", false), item("second", true)]);
    let list = TodoList::load(&repo).unwrap();

    let texts: Vec<_> = list.todos().iter().map(|todo| todo.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert_eq!(list.draft(), "");
}

#[test]
fn load_propagates_query_failure() {
    let repo = RecordingRepo {
        fail_query: true,
        ..RecordingRepo::default()
    };

    let err = TodoList::load(&repo).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn remaining_counts_open_items_only() {
    let repo = RecordingRepo::seeded(vec![
        item("open one", false),
        item("closed", true),
        item("open two", false),
    ]);
    let list = TodoList::load(&repo).unwrap();

    assert_eq!(list.remaining(), 2);
}

#[test]
fn remaining_is_zero_for_empty_list() {
    let repo = RecordingRepo::default();
    let list = TodoList::load(&repo).unwrap();

    assert!(list.is_empty());
    assert_eq!(list.remaining(), 0);
}

#[test]
fn add_appends_open_item_issues_create_and_clears_draft() {
    let repo = RecordingRepo::seeded(vec![item("already done", true)]);
    let mut list = TodoList::load(&repo).unwrap();
    list.set_draft("Read book");

    let added_id = list.add("Read book").uuid;

    assert_eq!(list.len(), 2);
    assert_eq!(list.todos()[0].text, "already done");
    assert_eq!(list.todos()[1].text, "Read book");
    assert!(!list.todos()[1].done);
    assert_eq!(list.draft(), "");

    let created = repo.created.borrow();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].uuid, added_id);
    assert!(!created[0].done);
}

#[test]
fn submit_draft_adds_current_draft() {
    let repo = RecordingRepo::default();
    let mut list = TodoList::load(&repo).unwrap();
    list.set_draft("water plants");

    let added = list.submit_draft().expect("non-blank draft should submit");
    assert_eq!(added.text, "water plants");
    assert_eq!(list.draft(), "");
    assert_eq!(list.len(), 1);
}

#[test]
fn submit_blank_draft_is_a_noop() {
    let repo = RecordingRepo::default();
    let mut list = TodoList::load(&repo).unwrap();
    list.set_draft("   ");

    assert!(list.submit_draft().is_none());
    assert!(list.is_empty());
    assert!(repo.created.borrow().is_empty());
}

#[test]
fn archive_keeps_open_subsequence_and_persists_each_done_item_once() {
    let repo = RecordingRepo::seeded(vec![
        item("Buy milk", false),
        item("Pay bills", true),
        item("Walk dog", false),
    ]);
    let mut list = TodoList::load(&repo).unwrap();
    assert_eq!(list.remaining(), 2);

    let archived = list.archive();

    assert_eq!(archived, 1);
    let texts: Vec<_> = list.todos().iter().map(|todo| todo.text.as_str()).collect();
    assert_eq!(texts, vec!["Buy milk", "Walk dog"]);

    let updated = repo.updated.borrow();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].text, "Pay bills");
    assert!(updated[0].done);
}

#[test]
fn archive_twice_is_a_noop_without_intervening_changes() {
    let repo = RecordingRepo::seeded(vec![item("keep", false), item("drop", true)]);
    let mut list = TodoList::load(&repo).unwrap();

    assert_eq!(list.archive(), 1);
    let after_first: Vec<_> = list.todos().to_vec();

    assert_eq!(list.archive(), 0);
    assert_eq!(list.todos(), after_first.as_slice());
    assert_eq!(repo.updated.borrow().len(), 1);
}

#[test]
fn archive_preserves_order_across_multiple_done_items() {
    let repo = RecordingRepo::seeded(vec![
        item("a", true),
        item("b", false),
        item("c", true),
        item("d", false),
        item("e", true),
    ]);
    let mut list = TodoList::load(&repo).unwrap();

    let archived = list.archive();

    assert_eq!(archived, 3);
    let kept: Vec<_> = list.todos().iter().map(|todo| todo.text.as_str()).collect();
    assert_eq!(kept, vec!["b", "d"]);

    let updated = repo.updated.borrow();
    let persisted: Vec<_> = updated.iter().map(|todo| todo.text.as_str()).collect();
    assert_eq!(persisted, vec!["a", "c", "e"]);
}

#[test]
fn add_and_archive_mutate_list_even_when_persistence_fails() {
    let mut failing = RecordingRepo::seeded(vec![item("done already", true)]);
    failing.fail_writes = true;
    let repo = failing;
    let mut list = TodoList::load(&repo).unwrap();

    list.add("still visible");
    assert_eq!(list.len(), 2);
    assert_eq!(list.todos()[1].text, "still visible");

    let archived = list.archive();
    assert_eq!(archived, 1);
    assert_eq!(list.len(), 1);
    assert_eq!(list.todos()[0].text, "still visible");

    assert!(repo.created.borrow().is_empty());
    assert!(repo.updated.borrow().is_empty());
}

#[test]
fn set_done_flags_visible_item_without_persisting() {
    let repo = RecordingRepo::seeded(vec![item("flip me", false)]);
    let mut list = TodoList::load(&repo).unwrap();
    let id = list.todos()[0].uuid;

    assert!(list.set_done(id, true));
    assert!(list.todos()[0].done);
    assert_eq!(list.remaining(), 0);
    assert!(repo.updated.borrow().is_empty());

    assert!(!list.set_done(Uuid::new_v4(), true));
}

#[test]
fn sqlite_backed_list_roundtrip() {
    let conn = todolist_core::db::open_db_in_memory().unwrap();
    let repo = todolist_core::SqliteTodoRepository::try_new(&conn).unwrap();
    let mut list = TodoList::load(repo).unwrap();

    list.add("persisted");
    let id = list.todos()[0].uuid;
    list.set_done(id, true);
    assert_eq!(list.archive(), 1);
    assert!(list.is_empty());

    // The archived item stays in the store with its final state.
    let repo = todolist_core::SqliteTodoRepository::try_new(&conn).unwrap();
    let stored = repo.query().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].uuid, id);
    assert!(stored[0].done);
}

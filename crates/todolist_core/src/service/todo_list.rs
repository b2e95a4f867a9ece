//! To-do list view-model.
//!
//! # Responsibility
//! - Own the visible item list and the pending input draft.
//! - Dispatch persistence requests to the injected collaborator.
//!
//! # Invariants
//! - Every `done` item leaving the visible list has been handed to the
//!   collaborator's `update` exactly once, before removal.
//! - Open items are never persisted or removed by archive.
//! - Persistence outcomes of `add`/`archive` are fire-and-forget: logged,
//!   then discarded; the visible list mutates regardless.

use crate::model::todo::{Todo, TodoId};
use crate::repo::todo_repo::{RepoResult, TodoRepository};
use log::{debug, warn};
use std::fmt;

/// View-model for the to-do list, generic over the injected collaborator.
///
/// Operations run to completion on the caller's thread; the host event
/// model is expected to run one handler at a time.
pub struct TodoList<R: TodoRepository> {
    repo: R,
    todos: Vec<Todo>,
    draft: String,
}

impl<R: TodoRepository> fmt::Debug for TodoList<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoList")
            .field("todos", &self.todos)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

impl<R: TodoRepository> TodoList<R> {
    /// Initializes the view-model from the collaborator's full collection.
    ///
    /// The fetched items become the visible list in insertion order. A
    /// fetch failure is the collaborator's concern and is propagated
    /// unchanged; an empty fetch yields an empty, fully functional list.
    pub fn load(repo: R) -> RepoResult<Self> {
        let todos = repo.query()?;
        debug!(
            "event=todo_load module=service status=ok count={}",
            todos.len()
        );
        Ok(Self {
            repo,
            todos,
            draft: String::new(),
        })
    }

    /// Appends a new open item with the given text.
    ///
    /// The collaborator is asked to persist the item fire-and-forget; the
    /// item joins the visible list either way, so the view reflects it
    /// immediately and independent of persistence confirmation. Clears the
    /// pending draft.
    pub fn add(&mut self, text: impl Into<String>) -> &Todo {
        let todo = Todo::new(text);
        if let Err(err) = self.repo.create(&todo) {
            warn!(
                "event=todo_persist module=service status=error op=create id={} error={err}",
                todo.uuid
            );
        }

        let index = self.todos.len();
        self.todos.push(todo);
        self.draft.clear();
        debug!(
            "event=todo_add module=service status=ok id={} len={}",
            self.todos[index].uuid,
            self.todos.len()
        );
        &self.todos[index]
    }

    /// Submits the pending draft as a new item.
    ///
    /// Returns `None` without side effects when the draft is blank.
    pub fn submit_draft(&mut self) -> Option<&Todo> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        Some(self.add(text))
    }

    /// Counts the items still open. Pure read; 0 for an empty list.
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|todo| todo.is_open()).count()
    }

    /// Persists completed items and removes them from the visible list.
    ///
    /// Single pass, relative order preserved: open items are retained in a
    /// freshly built list; each done item is handed to the collaborator's
    /// `update` exactly once and omitted. The list is replaced by a single
    /// assignment. Returns the number of items archived.
    ///
    /// Persistence failures are logged and discarded; items whose update
    /// fails are not restored to the visible list.
    pub fn archive(&mut self) -> usize {
        let old_todos = std::mem::take(&mut self.todos);
        let mut kept = Vec::with_capacity(old_todos.len());
        let mut archived = 0;

        for todo in old_todos {
            if todo.is_open() {
                kept.push(todo);
                continue;
            }

            if let Err(err) = self.repo.update(&todo) {
                warn!(
                    "event=todo_persist module=service status=error op=update id={} error={err}",
                    todo.uuid
                );
            }
            archived += 1;
        }

        self.todos = kept;
        debug!(
            "event=todo_archive module=service status=ok archived={archived} remaining_len={}",
            self.todos.len()
        );
        archived
    }

    /// Flips the completion flag of a visible item.
    ///
    /// The change is not persisted until the next archive. Returns whether
    /// an item with the given id was found.
    pub fn set_done(&mut self, id: TodoId, done: bool) -> bool {
        match self.todos.iter_mut().find(|todo| todo.uuid == id) {
            Some(todo) => {
                todo.done = done;
                true
            }
            None => false,
        }
    }

    /// Returns the visible list in display order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Returns the pending input draft.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the pending input draft.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Returns the visible list length.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns whether the visible list is empty.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

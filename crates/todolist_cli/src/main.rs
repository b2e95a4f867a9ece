//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todolist_core` wiring end to
//!   end: store bootstrap, load, add, archive.
//! - Keep output deterministic for quick local sanity checks.

use todolist_core::db::open_db_in_memory;
use todolist_core::{SqliteTodoRepository, TodoList};

fn main() {
    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("todolist_core db bootstrap failed: {err}");
            std::process::exit(1);
        }
    };

    let result = SqliteTodoRepository::try_new(&conn)
        .and_then(TodoList::load)
        .map(|mut list| {
            list.add("learn rust");
            let chore = list.add("take out the trash").uuid;
            list.set_done(chore, true);
            let archived = list.archive();
            (archived, list.remaining())
        });

    match result {
        Ok((archived, remaining)) => {
            println!("todolist_core archived={archived} remaining={remaining}");
            println!("todolist_core version={}", todolist_core::core_version());
        }
        Err(err) => {
            eprintln!("todolist_core smoke run failed: {err}");
            std::process::exit(1);
        }
    }
}

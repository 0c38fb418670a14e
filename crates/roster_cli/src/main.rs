//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use roster_core::{InMemoryPersonRepository, PersonStore};

fn main() {
    println!("roster_core version={}", roster_core::core_version());

    // Seed an in-memory store and print the roster to validate core
    // wiring independently from any HTTP runtime setup.
    let store = match PersonStore::try_new(InMemoryPersonRepository::new()) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("failed to construct store: {err}");
            std::process::exit(1);
        }
    };

    match store.list_all() {
        Ok(people) => {
            for person in people {
                println!("person id={} name={}", person.id, person.name);
            }
        }
        Err(err) => {
            eprintln!("failed to list people: {err}");
            std::process::exit(1);
        }
    }
}

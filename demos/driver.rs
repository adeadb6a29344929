//! Demonstration driver for the resource registry.
//!
//! Inserts a few values, prints the registry, erases some entries, then
//! inserts more to show smallest-first id recycling in action.

use handle_registry::ResourceRegistry;

fn print_entries(registry: &ResourceRegistry<i32>) {
    for (id, value) in registry {
        println!("id {id}: {value}");
    }
}

fn main() {
    let mut registry = ResourceRegistry::new();
    println!("registry size is {}", registry.len());

    let a = registry.insert(30);
    let b = registry.insert(72);
    let _c = registry.insert(17);
    println!("registry size is {}", registry.len());
    print_entries(&registry);

    registry.erase(b);
    println!("registry size is {}", registry.len());
    print_entries(&registry);

    registry.erase(a);
    let _d = registry.insert_with(|_| 30);
    let _e = registry.insert_with(|_| 11);
    let _f = registry.insert_with(|_| 21);
    println!("registry size is {}", registry.len());
    print_entries(&registry);
}

//! Fuzz the registry with arbitrary operation sequences.
//!
//! This target exercises insertion, erasure, lookup and clearing against
//! a shadow model of the allocation policy. The registry should never
//! panic on any sequence, and its observable state must track the shadow
//! exactly, including the smallest-first id reuse order.

#![no_main]

use std::collections::BTreeSet;

use arbitrary::Arbitrary;
use handle_registry::{RegistryError, ResourceRegistry};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Op {
    Insert(u8),
    Erase(u8),
    Get(u8),
    Exists(u8),
    Snapshot,
    Clear,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut registry = ResourceRegistry::new();
    let mut live: BTreeSet<usize> = BTreeSet::new();
    let mut free: BTreeSet<usize> = BTreeSet::new();

    for op in ops {
        match op {
            Op::Insert(value) => {
                let expected = free.iter().next().copied().unwrap_or(live.len());
                let id = registry.insert(value);
                assert_eq!(id, expected);
                free.remove(&id);
                assert!(live.insert(id));
            }
            Op::Erase(id) => {
                let id = id as usize;
                let was_empty = live.is_empty();
                registry.erase(id);
                if was_empty {
                    assert_eq!(
                        registry.last_error(),
                        Some(RegistryError::EmptyRegistryRemoval)
                    );
                } else if live.remove(&id) {
                    assert!(free.insert(id));
                }
            }
            Op::Get(id) => {
                let id = id as usize;
                assert_eq!(registry.get(id).is_some(), live.contains(&id));
            }
            Op::Exists(id) => {
                let id = id as usize;
                assert_eq!(registry.exists(id), live.contains(&id));
            }
            Op::Snapshot => {
                let snapshot = registry.snapshot();
                assert_eq!(snapshot.keys().copied().collect::<BTreeSet<_>>(), live);
            }
            Op::Clear => {
                registry.clear();
                live.clear();
                free.clear();
            }
        }

        assert_eq!(registry.len(), live.len());
        // Live and free ids stay disjoint and cover a dense prefix.
        assert!(live.is_disjoint(&free));
        let total = live.len() + free.len();
        assert!(live.union(&free).copied().eq(0..total));
    }
});

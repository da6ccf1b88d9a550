//! Integration tests for interning names from many threads.

use std::{sync::Arc, thread};

use dotnames::prelude::*;

const THREADS: usize = 8;

fn identifiers() -> Vec<String> {
    (0..64)
        .map(|i| {
            format!(
                "[System.Int32, mscorlib, 4.0.0.0] [My.Type{}, A, 1.0.0.0].Field{}",
                i % 16,
                i
            )
        })
        .collect()
}

#[test]
fn test_concurrent_get_yields_one_instance() {
    let pool = NamePool::with_config(NamePoolConfig::high_throughput());
    let identifiers = identifiers();

    let results: Vec<Vec<FieldName>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    identifiers
                        .iter()
                        .map(|id| pool.field(id))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for names in &results[1..] {
        for (a, b) in results[0].iter().zip(names) {
            assert!(FieldName::same_instance(a, b), "{} was interned twice", a);
        }
    }
    assert_eq!(pool.live(), identifiers.len());
}

#[test]
fn test_kinds_do_not_share_entries() {
    let pool = NamePool::new();
    let id = "[V, A] [D, A].X";
    let field = pool.field(id);
    let property = pool.property(id);
    let event = pool.event(id);
    assert_eq!(field.identifier(), property.identifier());
    assert_eq!(property.identifier(), event.identifier());
    assert_eq!(pool.len(), 3);
}

#[test]
fn test_pool_does_not_extend_lifetimes() {
    let pool = NamePool::with_config(NamePoolConfig::minimal());
    {
        let names: Vec<TypeName> = pool.intern_all(&["A.B, X", "A.C, X", "A.D, X"]);
        assert_eq!(names.len(), 3);
        assert_eq!(pool.live(), 3);
    }
    assert_eq!(pool.live(), 0);
    assert_eq!(pool.purge(), 3);
    assert!(pool.is_empty());

    let again = pool.type_name("A.B, X");
    assert_eq!(again.identifier(), "A.B, X");
    assert_eq!(pool.live(), 1);
}

#[test]
fn test_shared_pool_across_owners() {
    let pool = Arc::new(NamePool::new());
    let first = {
        let pool = Arc::clone(&pool);
        thread::spawn(move || pool.method("[V, A] [D, A].M()"))
            .join()
            .unwrap()
    };
    let second = pool.method("[V, A] [D, A].M()");
    assert!(MethodName::same_instance(&first, &second));

    // unknown values are interned under their sentinel
    let a = pool.parameter("not a parameter");
    let b = pool.parameter("[?] ???");
    assert!(a.is_unknown());
    assert!(ParameterName::same_instance(&a, &b));
}

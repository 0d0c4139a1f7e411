use railway::prelude_async::*;
use std::sync::atomic::{AtomicU32, Ordering};

#[tokio::test]
async fn lift_async_runs_when_all_succeed() {
    let add = lift_async(|a: u32, b: u32| async move { a + b });
    let outcome = add.invoke((Outcome::success(1), Outcome::success(2))).await;
    assert_eq!(outcome, Outcome::success(3));
}

#[tokio::test]
async fn lift_async_skips_function_and_accumulates() {
    let calls = AtomicU32::new(0);
    let add = lift_async(|a: u32, b: u32| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move { a + b }
    });

    let outcome = add
        .apply(Outcome::failure("a"))
        .apply(Outcome::failure("b"))
        .invoke(())
        .await;

    assert_eq!(outcome.errors(), ["a", "b"]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn lift_bind_async_passes_outcome_through() {
    let lookup = lift_bind_async(|id: u32| async move {
        if id == 0 {
            Outcome::failure("no such id")
        } else {
            Outcome::success(format!("user-{id}"))
        }
    });

    assert_eq!(
        lookup.invoke((Outcome::success(7),)).await,
        Outcome::success("user-7".to_string())
    );
    assert_eq!(
        lookup.invoke((Outcome::success(0),)).await.errors(),
        ["no such id"]
    );
}

#[tokio::test]
async fn combined_map_async_and_bind_async() {
    let mapped = combine((Outcome::success(2), Outcome::success(3)))
        .map_async(|a, b| async move { a * b })
        .await;
    assert_eq!(mapped, Outcome::success(6));

    let bound = combine((Outcome::success(2), Outcome::<i32>::failure("missing")))
        .bind_async(|a, b| async move { Outcome::success(a + b) })
        .await;
    assert_eq!(bound.errors(), ["missing"]);
}

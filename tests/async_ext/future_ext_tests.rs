//! Tests for FutureOutcomeExt and the async Outcome combinators.

use railway::async_ext::{MapOutcome, SuccessFuture};
use railway::prelude_async::*;
use std::future::Ready;
use std::sync::atomic::{AtomicU32, Ordering};

#[test]
fn outcome_futures_are_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<MapOutcome<Ready<Outcome<u8>>, fn(u8) -> u16>>();
    assert_sync::<MapOutcome<Ready<Outcome<u8>>, fn(u8) -> u16>>();
    assert_send::<SuccessFuture<Ready<u8>>>();
}

#[tokio::test]
async fn map_outcome_transforms_success() {
    let outcome = async { Outcome::success(20) }.map_outcome(|x| x + 1).await;
    assert_eq!(outcome, Outcome::success(21));
}

#[tokio::test]
async fn map_outcome_skips_on_failure() {
    let calls = AtomicU32::new(0);
    let outcome = async { Outcome::<i32>::failure("down") }
        .map_outcome(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            x + 1
        })
        .await;

    assert_eq!(outcome.errors(), ["down"]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn bind_outcome_short_circuits() {
    let calls = AtomicU32::new(0);
    let outcome = async { Outcome::success(1) }
        .bind_outcome(|_| Outcome::<i32>::failure("second"))
        .bind_outcome(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            Outcome::success(x)
        })
        .await;

    assert_eq!(outcome.errors(), ["second"]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn map_outcome_error_rewrites_messages() {
    let outcome = async { Outcome::<()>::failure_many(["a", "b"]) }
        .map_outcome_error(|e| e.to_uppercase())
        .await;
    assert_eq!(outcome.errors(), ["A", "B"]);
}

#[tokio::test]
async fn ignore_and_flatten() {
    let ignored = async { Outcome::success(5) }.ignore_outcome().await;
    assert_eq!(ignored, Outcome::unit());

    let flattened = async { Outcome::success(Outcome::<u8>::failure("inner")) }
        .flatten_outcome()
        .await;
    assert_eq!(flattened.errors(), ["inner"]);
}

#[tokio::test]
async fn map_outcome_async_awaits_continuation() {
    let outcome = async { Outcome::success(2) }
        .map_outcome_async(|x| async move {
            tokio::task::yield_now().await;
            x * 10
        })
        .await;
    assert_eq!(outcome, Outcome::success(20));
}

#[tokio::test]
async fn bind_outcome_async_never_builds_continuation_on_failure() {
    let calls = AtomicU32::new(0);
    let outcome = async { Outcome::<i32>::failure("source failed") }
        .bind_outcome_async(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Outcome::success(x) }
        })
        .await;

    assert_eq!(outcome.errors(), ["source failed"]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn bind_outcome_async_propagates_continuation_failure() {
    let outcome = async { Outcome::success(3) }
        .bind_outcome_async(|_| async { Outcome::<u8>::failure("continuation failed") })
        .await;
    assert_eq!(outcome.errors(), ["continuation failed"]);
}

#[tokio::test]
async fn sync_outcome_with_async_continuation() {
    let mapped = Outcome::success(4).map_async(|x| async move { x + 1 }).await;
    assert_eq!(mapped, Outcome::success(5));

    let calls = AtomicU32::new(0);
    let bound = Outcome::<i32>::failure("nope")
        .bind_async(|x| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Outcome::success(x) }
        })
        .await;
    assert_eq!(bound.errors(), ["nope"]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn async_chain_matches_sync_chain() {
    let sync = Outcome::success(1).map(|x| x + 1).map(|x| x + 1);
    let asynchronous = async { Outcome::success(1) }
        .map_outcome(|x| x + 1)
        .map_outcome_async(|x| async move { x + 1 })
        .await;
    assert_eq!(sync, asynchronous);
}

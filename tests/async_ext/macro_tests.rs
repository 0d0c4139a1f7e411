use railway::prelude_async::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

async fn delayed(value: u32, millis: u64, done: &AtomicU32) -> Outcome<u32> {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    done.fetch_add(1, Ordering::SeqCst);
    Outcome::success(value)
}

async fn failing(message: &'static str, done: &AtomicU32) -> Outcome<String> {
    done.fetch_add(1, Ordering::SeqCst);
    Outcome::failure(message)
}

#[tokio::test]
async fn combine_async_drives_every_future() {
    let done = AtomicU32::new(0);

    let combined = combine_async!(
        delayed(1, 20, &done),
        failing("profile unavailable", &done),
        delayed(3, 10, &done),
    )
    .await;

    assert_eq!(done.load(Ordering::SeqCst), 3);
    let outcome = combined.map(|a, b, c| format!("{a}{b}{c}"));
    assert_eq!(outcome.errors(), ["profile unavailable"]);
}

#[tokio::test]
async fn combine_async_single_future() {
    let done = AtomicU32::new(0);
    let outcome = combine_async!(delayed(9, 1, &done)).await.map(|x| x + 1);
    assert_eq!(outcome, Outcome::success(10));
}

#[tokio::test]
async fn combine_async_all_successes() {
    let done = AtomicU32::new(0);
    let outcome = combine_async!(delayed(1, 5, &done), delayed(2, 1, &done))
        .await
        .merge();
    assert_eq!(outcome, Outcome::success((1, 2)));
}

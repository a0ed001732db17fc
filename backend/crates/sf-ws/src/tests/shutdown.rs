use crate::ShutdownCoordinator;

use tokio::time::{Duration, timeout};

#[tokio::test]
async fn given_coordinator_when_shutdown_triggered_then_subscribers_notified() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard = coordinator.subscribe_guard();

    // Spawn task to trigger shutdown
    let coord_clone = coordinator.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        coord_clone.shutdown();
    });

    let result = timeout(Duration::from_millis(500), guard.wait()).await;
    assert!(result.is_ok(), "Shutdown signal should be received");
}

#[tokio::test]
async fn given_multiple_subscribers_when_shutdown_then_all_notified() {
    let coordinator = ShutdownCoordinator::new();
    let mut guard1 = coordinator.subscribe_guard();
    let mut guard2 = coordinator.subscribe_guard();

    coordinator.shutdown();

    let result1 = timeout(Duration::from_millis(10), guard1.wait()).await;
    let result2 = timeout(Duration::from_millis(10), guard2.wait()).await;

    assert!(result1.is_ok());
    assert!(result2.is_ok());
}

#[tokio::test]
async fn given_shutdown_already_triggered_when_guard_created_later_then_notified() {
    let coordinator = ShutdownCoordinator::new();
    coordinator.shutdown();

    let mut late = coordinator.subscribe_guard();

    assert!(late.poll_shutdown());
    assert!(timeout(Duration::from_millis(10), late.wait()).await.is_ok());
}

#[test]
fn given_new_coordinator_when_checked_then_not_shutdown() {
    let coordinator = ShutdownCoordinator::new();
    let guard = coordinator.subscribe_guard();

    assert!(!coordinator.is_shutdown());
    assert!(!guard.poll_shutdown());
}

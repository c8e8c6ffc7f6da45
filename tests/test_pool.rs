mod stub;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;

use cumulus_compute::api::instances::DescribeInstancesRequest;
use cumulus_compute::{AsyncComputeClient, Error, TaskPool};

use stub::StubComputeApi;

#[tokio::test]
async fn more_tasks_than_workers_all_complete_with_their_own_results() {
    let stub = StubComputeApi::new();
    stub.set_delay(Duration::from_millis(5));
    let client = AsyncComputeClient::with_pool(stub.clone(), TaskPool::new(4).unwrap());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            client.describe_instances(DescribeInstancesRequest {
                instance_ids: vec![format!("i-{i:04}")],
                ..Default::default()
            })
        })
        .collect();

    for (i, result) in join_all(handles).await.into_iter().enumerate() {
        let response = result.unwrap();
        assert_eq!(response.instances.len(), 1);
        assert_eq!(response.instances[0].instance_id, format!("i-{i:04}"));
    }
    assert_eq!(stub.calls(), 16);
    client.shutdown();
}

#[tokio::test]
async fn cancel_before_start_skips_the_sync_call() {
    let pool = TaskPool::new(1).unwrap();

    // Hold the single worker so the second task stays queued.
    let blocker = pool.submit(|| {
        std::thread::sleep(Duration::from_millis(100));
        Ok(())
    });

    let victim = pool.submit(|| Ok("ran"));
    victim.cancel();
    assert!(victim.is_cancelled());

    assert!(matches!(victim.await, Err(Error::Cancelled)));
    blocker.await.unwrap();
    pool.shutdown();
}

#[tokio::test]
async fn shutdown_abandons_queued_tasks() {
    let pool = TaskPool::new(1).unwrap();
    let ran = Arc::new(AtomicUsize::new(0));

    let blocker = {
        let ran = Arc::clone(&ran);
        pool.submit(move || {
            std::thread::sleep(Duration::from_millis(100));
            ran.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    };

    let queued: Vec<_> = (0..3)
        .map(|_| {
            let ran = Arc::clone(&ran);
            pool.submit(move || {
                ran.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        })
        .collect();

    // Blocks until the in-flight task finishes; queued tasks are dropped.
    pool.shutdown();

    blocker.await.unwrap();
    for handle in queued {
        assert!(matches!(handle.await, Err(Error::Cancelled)));
    }
    assert_eq!(ran.load(Ordering::SeqCst), 1);
    assert!(pool.is_shutdown());
}

#[tokio::test]
async fn join_drains_everything_already_queued() {
    let pool = TaskPool::new(2).unwrap();
    let ran = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ran = Arc::clone(&ran);
            pool.submit(move || {
                std::thread::sleep(Duration::from_millis(2));
                ran.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        })
        .collect();

    pool.clone().join();

    assert_eq!(ran.load(Ordering::SeqCst), 8);
    for handle in handles {
        handle.await.unwrap();
    }
}

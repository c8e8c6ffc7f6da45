mod stub;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use cumulus_compute::api::topology::{DescribeRegionsRequest, DescribeRegionsResponse, Region};
use cumulus_compute::api::volumes::{
    DeleteVolumeRequest, DescribeVolumesRequest, DescribeVolumesResponse,
};
use cumulus_compute::{
    AsyncComputeClient, ClientConfig, Credentials, Error, FnHandler, ServiceFault, StaticProvider,
    TaskPool,
};

use stub::StubComputeApi;

fn three_regions() -> Vec<Region> {
    ["eu-central-1", "us-west-2", "ap-southeast-1"]
        .iter()
        .map(|name| Region {
            region_name: name.to_string(),
            endpoint: format!("https://compute.{name}.cumulus-cloud.com"),
        })
        .collect()
}

fn client(stub: &StubComputeApi, workers: usize) -> AsyncComputeClient<StubComputeApi> {
    AsyncComputeClient::with_pool(stub.clone(), TaskPool::new(workers).unwrap())
}

#[tokio::test]
async fn future_resolves_with_sync_result() {
    let stub = StubComputeApi::with_regions(three_regions());
    let client = client(&stub, 2);

    let response = client
        .describe_regions(DescribeRegionsRequest::default())
        .await
        .unwrap();

    let names: Vec<&str> = response
        .regions
        .iter()
        .map(|r| r.region_name.as_str())
        .collect();
    assert_eq!(names, ["eu-central-1", "us-west-2", "ap-southeast-1"]);
    client.shutdown();
}

#[tokio::test]
async fn error_propagates_to_future_unmodified() {
    let stub = StubComputeApi::new();
    let fault = ServiceFault::new("InvalidVolume.NotFound", "no such volume")
        .with_request_id("req-42");
    stub.fail("describe_volumes", fault.clone());
    let client = client(&stub, 2);

    let result = client
        .describe_volumes(DescribeVolumesRequest::default())
        .await;

    match result {
        Err(Error::Service(observed)) => assert_eq!(observed, fault),
        other => panic!("expected the stub's service fault, got {other:?}"),
    }
    client.shutdown();
}

#[tokio::test]
async fn handler_observes_success_exactly_once_before_resolution() {
    let stub = StubComputeApi::with_regions(three_regions());
    let client = client(&stub, 2);

    let successes = Arc::new(AtomicUsize::new(0));
    let errors = Arc::new(AtomicUsize::new(0));
    let seen: Arc<Mutex<Option<DescribeRegionsResponse>>> = Arc::new(Mutex::new(None));

    let handler = {
        let successes = Arc::clone(&successes);
        let errors = Arc::clone(&errors);
        let seen = Arc::clone(&seen);
        Arc::new(FnHandler::new(
            move |_request: &DescribeRegionsRequest, response: &DescribeRegionsResponse| {
                successes.fetch_add(1, Ordering::SeqCst);
                *seen.lock().unwrap() = Some(response.clone());
            },
            move |_error: &Error| {
                errors.fetch_add(1, Ordering::SeqCst);
            },
        ))
    };

    let response = client
        .describe_regions_with_handler(DescribeRegionsRequest::default(), handler)
        .await
        .unwrap();

    // The handler runs before the oneshot send, so once the future has
    // resolved the callback must already have fired.
    assert_eq!(successes.load(Ordering::SeqCst), 1);
    assert_eq!(errors.load(Ordering::SeqCst), 0);
    assert_eq!(seen.lock().unwrap().as_ref(), Some(&response));
    client.shutdown();
}

#[tokio::test]
async fn handler_observes_failure_and_future_still_fails() {
    let stub = StubComputeApi::new();
    stub.fail(
        "describe_volumes",
        ServiceFault::new("Throttling", "Rate exceeded"),
    );
    let client = client(&stub, 2);

    let errors = Arc::new(AtomicUsize::new(0));
    let codes: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let handler = {
        let errors = Arc::clone(&errors);
        let codes = Arc::clone(&codes);
        Arc::new(FnHandler::new(
            move |_request: &DescribeVolumesRequest, _response: &DescribeVolumesResponse| {
                panic!("success callback must not fire for a failing call");
            },
            move |error: &Error| {
                errors.fetch_add(1, Ordering::SeqCst);
                if let Error::Service(fault) = error {
                    codes.lock().unwrap().push(fault.code.clone());
                }
            },
        ))
    };

    let result = client
        .describe_volumes_with_handler(DescribeVolumesRequest::default(), handler)
        .await;

    assert!(matches!(result, Err(Error::Service(fault)) if fault.code == "Throttling"));
    assert_eq!(errors.load(Ordering::SeqCst), 1);
    assert_eq!(*codes.lock().unwrap(), vec!["Throttling".to_string()]);
    client.shutdown();
}

#[tokio::test]
async fn void_operation_resolves_to_unit() {
    let stub = StubComputeApi::new();
    let client = client(&stub, 2);

    let request = DeleteVolumeRequest {
        volume_id: "vol-0001".into(),
    };
    client.delete_volume(request).await.unwrap();
    assert_eq!(stub.calls(), 1);
    client.shutdown();
}

#[tokio::test]
async fn shutdown_delegates_then_rejects_new_work() {
    let stub = StubComputeApi::new();
    let client = client(&stub, 2);

    client.shutdown();
    assert_eq!(stub.shutdowns(), 1);

    let result = client
        .describe_regions(DescribeRegionsRequest::default())
        .await;
    assert!(matches!(result, Err(Error::PoolClosed)));
    assert_eq!(stub.calls(), 0);
}

#[test]
fn blocking_wait_outside_a_runtime() {
    let stub = StubComputeApi::with_regions(three_regions());
    let client = client(&stub, 1);

    let response = client
        .describe_regions(DescribeRegionsRequest::default())
        .wait()
        .unwrap();
    assert_eq!(response.regions.len(), 3);
    client.shutdown();
}

#[tokio::test]
async fn from_factory_resolves_credentials_for_the_sync_client() {
    let provider = StaticProvider::new(Credentials::new("AKID", "secret"));
    let config = ClientConfig::new("eu-central-1");

    let seen: Arc<Mutex<Option<(String, String)>>> = Arc::new(Mutex::new(None));
    let captured = Arc::clone(&seen);

    let client = AsyncComputeClient::from_factory(
        config,
        &provider,
        TaskPool::new(1).unwrap(),
        move |config, credentials| {
            *captured.lock().unwrap() =
                Some((config.resolved_endpoint(), credentials.access_key_id));
            Ok(StubComputeApi::with_regions(three_regions()))
        },
    )
    .unwrap();

    assert_eq!(
        seen.lock().unwrap().clone(),
        Some((
            "https://compute.eu-central-1.cumulus-cloud.com".to_string(),
            "AKID".to_string()
        ))
    );

    let response = client
        .describe_regions(DescribeRegionsRequest::default())
        .await
        .unwrap();
    assert_eq!(response.regions.len(), 3);
    client.shutdown();
}

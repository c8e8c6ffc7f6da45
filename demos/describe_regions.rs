//! Lists the regions a canned synchronous client advertises, once through the
//! plain future and once through a completion handler.
//!
//! Run with: `cargo run --example describe_regions`

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cumulus_compute::api::addresses::*;
use cumulus_compute::api::images::*;
use cumulus_compute::api::instances::*;
use cumulus_compute::api::keypairs::*;
use cumulus_compute::api::security::*;
use cumulus_compute::api::snapshots::*;
use cumulus_compute::api::tags::*;
use cumulus_compute::api::topology::*;
use cumulus_compute::api::volumes::*;
use cumulus_compute::api::vpc::*;
use cumulus_compute::{
    AsyncComputeClient, ClientConfig, ComputeApi, Credentials, Error, FnHandler, Result,
    ServiceFault, StaticProvider, TaskPool,
};

/// Offline stand-in for a real transport-backed client: it only knows how to
/// answer `describe_regions`.
struct StaticRegions {
    endpoint: String,
    regions: Vec<Region>,
}

fn unsupported() -> Error {
    Error::Service(ServiceFault::new(
        "UnsupportedOperation",
        "the demo client only implements describe_regions",
    ))
}

impl ComputeApi for StaticRegions {
    fn run_instances(&self, _: &RunInstancesRequest) -> Result<RunInstancesResponse> {
        Err(unsupported())
    }
    fn terminate_instances(
        &self,
        _: &TerminateInstancesRequest,
    ) -> Result<TerminateInstancesResponse> {
        Err(unsupported())
    }
    fn start_instances(&self, _: &StartInstancesRequest) -> Result<StartInstancesResponse> {
        Err(unsupported())
    }
    fn stop_instances(&self, _: &StopInstancesRequest) -> Result<StopInstancesResponse> {
        Err(unsupported())
    }
    fn reboot_instances(&self, _: &RebootInstancesRequest) -> Result<()> {
        Err(unsupported())
    }
    fn describe_instances(&self, _: &DescribeInstancesRequest) -> Result<DescribeInstancesResponse> {
        Err(unsupported())
    }
    fn describe_instance_status(
        &self,
        _: &DescribeInstanceStatusRequest,
    ) -> Result<DescribeInstanceStatusResponse> {
        Err(unsupported())
    }
    fn modify_instance_attribute(&self, _: &ModifyInstanceAttributeRequest) -> Result<()> {
        Err(unsupported())
    }
    fn monitor_instances(&self, _: &MonitorInstancesRequest) -> Result<MonitorInstancesResponse> {
        Err(unsupported())
    }
    fn unmonitor_instances(
        &self,
        _: &UnmonitorInstancesRequest,
    ) -> Result<UnmonitorInstancesResponse> {
        Err(unsupported())
    }
    fn create_image(&self, _: &CreateImageRequest) -> Result<CreateImageResponse> {
        Err(unsupported())
    }
    fn deregister_image(&self, _: &DeregisterImageRequest) -> Result<()> {
        Err(unsupported())
    }
    fn describe_images(&self, _: &DescribeImagesRequest) -> Result<DescribeImagesResponse> {
        Err(unsupported())
    }
    fn copy_image(&self, _: &CopyImageRequest) -> Result<CopyImageResponse> {
        Err(unsupported())
    }
    fn create_volume(&self, _: &CreateVolumeRequest) -> Result<CreateVolumeResponse> {
        Err(unsupported())
    }
    fn delete_volume(&self, _: &DeleteVolumeRequest) -> Result<()> {
        Err(unsupported())
    }
    fn attach_volume(&self, _: &AttachVolumeRequest) -> Result<AttachVolumeResponse> {
        Err(unsupported())
    }
    fn detach_volume(&self, _: &DetachVolumeRequest) -> Result<DetachVolumeResponse> {
        Err(unsupported())
    }
    fn describe_volumes(&self, _: &DescribeVolumesRequest) -> Result<DescribeVolumesResponse> {
        Err(unsupported())
    }
    fn modify_volume(&self, _: &ModifyVolumeRequest) -> Result<ModifyVolumeResponse> {
        Err(unsupported())
    }
    fn create_snapshot(&self, _: &CreateSnapshotRequest) -> Result<CreateSnapshotResponse> {
        Err(unsupported())
    }
    fn delete_snapshot(&self, _: &DeleteSnapshotRequest) -> Result<()> {
        Err(unsupported())
    }
    fn describe_snapshots(&self, _: &DescribeSnapshotsRequest) -> Result<DescribeSnapshotsResponse> {
        Err(unsupported())
    }
    fn copy_snapshot(&self, _: &CopySnapshotRequest) -> Result<CopySnapshotResponse> {
        Err(unsupported())
    }
    fn create_security_group(
        &self,
        _: &CreateSecurityGroupRequest,
    ) -> Result<CreateSecurityGroupResponse> {
        Err(unsupported())
    }
    fn delete_security_group(&self, _: &DeleteSecurityGroupRequest) -> Result<()> {
        Err(unsupported())
    }
    fn describe_security_groups(
        &self,
        _: &DescribeSecurityGroupsRequest,
    ) -> Result<DescribeSecurityGroupsResponse> {
        Err(unsupported())
    }
    fn authorize_security_group_ingress(
        &self,
        _: &AuthorizeSecurityGroupIngressRequest,
    ) -> Result<()> {
        Err(unsupported())
    }
    fn revoke_security_group_ingress(&self, _: &RevokeSecurityGroupIngressRequest) -> Result<()> {
        Err(unsupported())
    }
    fn authorize_security_group_egress(
        &self,
        _: &AuthorizeSecurityGroupEgressRequest,
    ) -> Result<()> {
        Err(unsupported())
    }
    fn create_key_pair(&self, _: &CreateKeyPairRequest) -> Result<CreateKeyPairResponse> {
        Err(unsupported())
    }
    fn import_key_pair(&self, _: &ImportKeyPairRequest) -> Result<ImportKeyPairResponse> {
        Err(unsupported())
    }
    fn delete_key_pair(&self, _: &DeleteKeyPairRequest) -> Result<()> {
        Err(unsupported())
    }
    fn describe_key_pairs(&self, _: &DescribeKeyPairsRequest) -> Result<DescribeKeyPairsResponse> {
        Err(unsupported())
    }
    fn allocate_address(&self, _: &AllocateAddressRequest) -> Result<AllocateAddressResponse> {
        Err(unsupported())
    }
    fn release_address(&self, _: &ReleaseAddressRequest) -> Result<()> {
        Err(unsupported())
    }
    fn associate_address(&self, _: &AssociateAddressRequest) -> Result<AssociateAddressResponse> {
        Err(unsupported())
    }
    fn disassociate_address(&self, _: &DisassociateAddressRequest) -> Result<()> {
        Err(unsupported())
    }
    fn describe_addresses(&self, _: &DescribeAddressesRequest) -> Result<DescribeAddressesResponse> {
        Err(unsupported())
    }
    fn create_tags(&self, _: &CreateTagsRequest) -> Result<()> {
        Err(unsupported())
    }
    fn delete_tags(&self, _: &DeleteTagsRequest) -> Result<()> {
        Err(unsupported())
    }
    fn describe_tags(&self, _: &DescribeTagsRequest) -> Result<DescribeTagsResponse> {
        Err(unsupported())
    }
    fn describe_regions(&self, _: &DescribeRegionsRequest) -> Result<DescribeRegionsResponse> {
        tracing::info!(endpoint = %self.endpoint, "answering describe_regions");
        Ok(DescribeRegionsResponse {
            regions: self.regions.clone(),
        })
    }
    fn describe_availability_zones(
        &self,
        _: &DescribeAvailabilityZonesRequest,
    ) -> Result<DescribeAvailabilityZonesResponse> {
        Err(unsupported())
    }
    fn create_vpc(&self, _: &CreateVpcRequest) -> Result<CreateVpcResponse> {
        Err(unsupported())
    }
    fn delete_vpc(&self, _: &DeleteVpcRequest) -> Result<()> {
        Err(unsupported())
    }
    fn describe_vpcs(&self, _: &DescribeVpcsRequest) -> Result<DescribeVpcsResponse> {
        Err(unsupported())
    }
    fn create_subnet(&self, _: &CreateSubnetRequest) -> Result<CreateSubnetResponse> {
        Err(unsupported())
    }
    fn delete_subnet(&self, _: &DeleteSubnetRequest) -> Result<()> {
        Err(unsupported())
    }
    fn describe_subnets(&self, _: &DescribeSubnetsRequest) -> Result<DescribeSubnetsResponse> {
        Err(unsupported())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cumulus_compute=trace,describe_regions=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let provider = StaticProvider::new(Credentials::new("demo-key", "demo-secret"));
    let config = ClientConfig::new("eu-central-1");

    let client = AsyncComputeClient::from_factory(
        config,
        &provider,
        TaskPool::new(4)?,
        |config, _credentials| {
            Ok(StaticRegions {
                endpoint: config.resolved_endpoint(),
                regions: ["eu-central-1", "us-west-2", "ap-southeast-1"]
                    .iter()
                    .map(|name| Region {
                        region_name: name.to_string(),
                        endpoint: format!("https://compute.{name}.cumulus-cloud.com"),
                    })
                    .collect(),
            })
        },
    )?;

    let response = client
        .describe_regions(DescribeRegionsRequest::default())
        .await?;
    for region in &response.regions {
        println!("{} -> {}", region.region_name, region.endpoint);
    }

    let handler = Arc::new(FnHandler::new(
        |_request: &DescribeRegionsRequest, response: &DescribeRegionsResponse| {
            println!("handler saw {} regions", response.regions.len());
        },
        |error: &Error| {
            eprintln!("handler saw failure: {error}");
        },
    ));
    client
        .describe_regions_with_handler(DescribeRegionsRequest::default(), handler)
        .await?;

    client.shutdown();
    Ok(())
}

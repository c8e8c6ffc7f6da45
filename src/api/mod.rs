//! The synchronous operation surface of the Cumulus compute API.
//!
//! [`ComputeApi`] declares one blocking method per remote operation. An
//! implementor performs the actual signed HTTP call; everything in this crate
//! delegates to it and adds no validation, retries, or interpretation of its
//! results. Request and response types are plain data containers grouped by
//! domain.

pub mod addresses;
pub mod images;
pub mod instances;
pub mod keypairs;
pub mod security;
pub mod snapshots;
pub mod tags;
pub mod topology;
pub mod volumes;
pub mod vpc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use addresses::*;
use images::*;
use instances::*;
use keypairs::*;
use security::*;
use snapshots::*;
use tags::*;
use topology::*;
use volumes::*;
use vpc::*;

/// Name/values predicate accepted by the describe operations.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Filter {
    pub name: String,
    pub values: Vec<String>,
}

impl Filter {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Blocking client for the Cumulus compute API, one method per remote
/// operation.
///
/// Each method either returns the operation's response or fails with
/// [`Error::Transport`](crate::Error::Transport) (local failure) or
/// [`Error::Service`](crate::Error::Service) (structured rejection by the
/// service). Implementations must be safe to call from many threads at once;
/// the async client shares one instance across its whole worker pool.
pub trait ComputeApi: Send + Sync + 'static {
    // instances

    fn run_instances(&self, request: &RunInstancesRequest) -> Result<RunInstancesResponse>;

    fn terminate_instances(
        &self,
        request: &TerminateInstancesRequest,
    ) -> Result<TerminateInstancesResponse>;

    fn start_instances(&self, request: &StartInstancesRequest) -> Result<StartInstancesResponse>;

    fn stop_instances(&self, request: &StopInstancesRequest) -> Result<StopInstancesResponse>;

    fn reboot_instances(&self, request: &RebootInstancesRequest) -> Result<()>;

    fn describe_instances(
        &self,
        request: &DescribeInstancesRequest,
    ) -> Result<DescribeInstancesResponse>;

    fn describe_instance_status(
        &self,
        request: &DescribeInstanceStatusRequest,
    ) -> Result<DescribeInstanceStatusResponse>;

    fn modify_instance_attribute(&self, request: &ModifyInstanceAttributeRequest) -> Result<()>;

    fn monitor_instances(
        &self,
        request: &MonitorInstancesRequest,
    ) -> Result<MonitorInstancesResponse>;

    fn unmonitor_instances(
        &self,
        request: &UnmonitorInstancesRequest,
    ) -> Result<UnmonitorInstancesResponse>;

    // images

    fn create_image(&self, request: &CreateImageRequest) -> Result<CreateImageResponse>;

    fn deregister_image(&self, request: &DeregisterImageRequest) -> Result<()>;

    fn describe_images(&self, request: &DescribeImagesRequest) -> Result<DescribeImagesResponse>;

    fn copy_image(&self, request: &CopyImageRequest) -> Result<CopyImageResponse>;

    // volumes

    fn create_volume(&self, request: &CreateVolumeRequest) -> Result<CreateVolumeResponse>;

    fn delete_volume(&self, request: &DeleteVolumeRequest) -> Result<()>;

    fn attach_volume(&self, request: &AttachVolumeRequest) -> Result<AttachVolumeResponse>;

    fn detach_volume(&self, request: &DetachVolumeRequest) -> Result<DetachVolumeResponse>;

    fn describe_volumes(&self, request: &DescribeVolumesRequest)
        -> Result<DescribeVolumesResponse>;

    fn modify_volume(&self, request: &ModifyVolumeRequest) -> Result<ModifyVolumeResponse>;

    // snapshots

    fn create_snapshot(&self, request: &CreateSnapshotRequest) -> Result<CreateSnapshotResponse>;

    fn delete_snapshot(&self, request: &DeleteSnapshotRequest) -> Result<()>;

    fn describe_snapshots(
        &self,
        request: &DescribeSnapshotsRequest,
    ) -> Result<DescribeSnapshotsResponse>;

    fn copy_snapshot(&self, request: &CopySnapshotRequest) -> Result<CopySnapshotResponse>;

    // security groups

    fn create_security_group(
        &self,
        request: &CreateSecurityGroupRequest,
    ) -> Result<CreateSecurityGroupResponse>;

    fn delete_security_group(&self, request: &DeleteSecurityGroupRequest) -> Result<()>;

    fn describe_security_groups(
        &self,
        request: &DescribeSecurityGroupsRequest,
    ) -> Result<DescribeSecurityGroupsResponse>;

    fn authorize_security_group_ingress(
        &self,
        request: &AuthorizeSecurityGroupIngressRequest,
    ) -> Result<()>;

    fn revoke_security_group_ingress(
        &self,
        request: &RevokeSecurityGroupIngressRequest,
    ) -> Result<()>;

    fn authorize_security_group_egress(
        &self,
        request: &AuthorizeSecurityGroupEgressRequest,
    ) -> Result<()>;

    // key pairs

    fn create_key_pair(&self, request: &CreateKeyPairRequest) -> Result<CreateKeyPairResponse>;

    fn import_key_pair(&self, request: &ImportKeyPairRequest) -> Result<ImportKeyPairResponse>;

    fn delete_key_pair(&self, request: &DeleteKeyPairRequest) -> Result<()>;

    fn describe_key_pairs(
        &self,
        request: &DescribeKeyPairsRequest,
    ) -> Result<DescribeKeyPairsResponse>;

    // addresses

    fn allocate_address(&self, request: &AllocateAddressRequest)
        -> Result<AllocateAddressResponse>;

    fn release_address(&self, request: &ReleaseAddressRequest) -> Result<()>;

    fn associate_address(
        &self,
        request: &AssociateAddressRequest,
    ) -> Result<AssociateAddressResponse>;

    fn disassociate_address(&self, request: &DisassociateAddressRequest) -> Result<()>;

    fn describe_addresses(
        &self,
        request: &DescribeAddressesRequest,
    ) -> Result<DescribeAddressesResponse>;

    // tags

    fn create_tags(&self, request: &CreateTagsRequest) -> Result<()>;

    fn delete_tags(&self, request: &DeleteTagsRequest) -> Result<()>;

    fn describe_tags(&self, request: &DescribeTagsRequest) -> Result<DescribeTagsResponse>;

    // topology

    fn describe_regions(&self, request: &DescribeRegionsRequest)
        -> Result<DescribeRegionsResponse>;

    fn describe_availability_zones(
        &self,
        request: &DescribeAvailabilityZonesRequest,
    ) -> Result<DescribeAvailabilityZonesResponse>;

    // vpc

    fn create_vpc(&self, request: &CreateVpcRequest) -> Result<CreateVpcResponse>;

    fn delete_vpc(&self, request: &DeleteVpcRequest) -> Result<()>;

    fn describe_vpcs(&self, request: &DescribeVpcsRequest) -> Result<DescribeVpcsResponse>;

    fn create_subnet(&self, request: &CreateSubnetRequest) -> Result<CreateSubnetResponse>;

    fn delete_subnet(&self, request: &DeleteSubnetRequest) -> Result<()>;

    fn describe_subnets(&self, request: &DescribeSubnetsRequest)
        -> Result<DescribeSubnetsResponse>;

    /// Release connection resources. Called by
    /// [`AsyncComputeClient::shutdown`](crate::AsyncComputeClient::shutdown)
    /// before the worker pool is stopped.
    fn shutdown(&self) {}
}

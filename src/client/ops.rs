//! Per-operation entry points. Every method enqueues a single task invoking
//! the matching [`ComputeApi`] call; the `_with_handler` variants additionally
//! notify a [`CompletionHandler`] from the worker thread.

use std::sync::Arc;

use crate::api::addresses::*;
use crate::api::images::*;
use crate::api::instances::*;
use crate::api::keypairs::*;
use crate::api::security::*;
use crate::api::snapshots::*;
use crate::api::tags::*;
use crate::api::topology::*;
use crate::api::volumes::*;
use crate::api::vpc::*;
use crate::api::ComputeApi;
use crate::client::{AsyncComputeClient, CompletionHandler};
use crate::pool::TaskHandle;

impl<C: ComputeApi> AsyncComputeClient<C> {
    // instances

    /// Launch instances from an image.
    pub fn run_instances(&self, request: RunInstancesRequest) -> TaskHandle<RunInstancesResponse> {
        self.submit(request, C::run_instances)
    }

    pub fn run_instances_with_handler(
        &self,
        request: RunInstancesRequest,
        handler: Arc<dyn CompletionHandler<RunInstancesRequest, RunInstancesResponse>>,
    ) -> TaskHandle<RunInstancesResponse> {
        self.submit_with_handler(request, C::run_instances, handler)
    }

    /// Terminate instances. Terminated instances cannot be restarted.
    pub fn terminate_instances(
        &self,
        request: TerminateInstancesRequest,
    ) -> TaskHandle<TerminateInstancesResponse> {
        self.submit(request, C::terminate_instances)
    }

    pub fn terminate_instances_with_handler(
        &self,
        request: TerminateInstancesRequest,
        handler: Arc<dyn CompletionHandler<TerminateInstancesRequest, TerminateInstancesResponse>>,
    ) -> TaskHandle<TerminateInstancesResponse> {
        self.submit_with_handler(request, C::terminate_instances, handler)
    }

    /// Start previously stopped instances.
    pub fn start_instances(
        &self,
        request: StartInstancesRequest,
    ) -> TaskHandle<StartInstancesResponse> {
        self.submit(request, C::start_instances)
    }

    pub fn start_instances_with_handler(
        &self,
        request: StartInstancesRequest,
        handler: Arc<dyn CompletionHandler<StartInstancesRequest, StartInstancesResponse>>,
    ) -> TaskHandle<StartInstancesResponse> {
        self.submit_with_handler(request, C::start_instances, handler)
    }

    /// Stop running instances; attached volumes persist.
    pub fn stop_instances(
        &self,
        request: StopInstancesRequest,
    ) -> TaskHandle<StopInstancesResponse> {
        self.submit(request, C::stop_instances)
    }

    pub fn stop_instances_with_handler(
        &self,
        request: StopInstancesRequest,
        handler: Arc<dyn CompletionHandler<StopInstancesRequest, StopInstancesResponse>>,
    ) -> TaskHandle<StopInstancesResponse> {
        self.submit_with_handler(request, C::stop_instances, handler)
    }

    /// Request a reboot. The service queues the reboot; success means the
    /// request was accepted, not that the instances are back up.
    pub fn reboot_instances(&self, request: RebootInstancesRequest) -> TaskHandle<()> {
        self.submit(request, C::reboot_instances)
    }

    pub fn reboot_instances_with_handler(
        &self,
        request: RebootInstancesRequest,
        handler: Arc<dyn CompletionHandler<RebootInstancesRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::reboot_instances, handler)
    }

    /// List instances, optionally filtered.
    pub fn describe_instances(
        &self,
        request: DescribeInstancesRequest,
    ) -> TaskHandle<DescribeInstancesResponse> {
        self.submit(request, C::describe_instances)
    }

    pub fn describe_instances_with_handler(
        &self,
        request: DescribeInstancesRequest,
        handler: Arc<dyn CompletionHandler<DescribeInstancesRequest, DescribeInstancesResponse>>,
    ) -> TaskHandle<DescribeInstancesResponse> {
        self.submit_with_handler(request, C::describe_instances, handler)
    }

    pub fn describe_instance_status(
        &self,
        request: DescribeInstanceStatusRequest,
    ) -> TaskHandle<DescribeInstanceStatusResponse> {
        self.submit(request, C::describe_instance_status)
    }

    pub fn describe_instance_status_with_handler(
        &self,
        request: DescribeInstanceStatusRequest,
        handler: Arc<
            dyn CompletionHandler<DescribeInstanceStatusRequest, DescribeInstanceStatusResponse>,
        >,
    ) -> TaskHandle<DescribeInstanceStatusResponse> {
        self.submit_with_handler(request, C::describe_instance_status, handler)
    }

    pub fn modify_instance_attribute(
        &self,
        request: ModifyInstanceAttributeRequest,
    ) -> TaskHandle<()> {
        self.submit(request, C::modify_instance_attribute)
    }

    pub fn modify_instance_attribute_with_handler(
        &self,
        request: ModifyInstanceAttributeRequest,
        handler: Arc<dyn CompletionHandler<ModifyInstanceAttributeRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::modify_instance_attribute, handler)
    }

    /// Enable detailed monitoring for instances.
    pub fn monitor_instances(
        &self,
        request: MonitorInstancesRequest,
    ) -> TaskHandle<MonitorInstancesResponse> {
        self.submit(request, C::monitor_instances)
    }

    pub fn monitor_instances_with_handler(
        &self,
        request: MonitorInstancesRequest,
        handler: Arc<dyn CompletionHandler<MonitorInstancesRequest, MonitorInstancesResponse>>,
    ) -> TaskHandle<MonitorInstancesResponse> {
        self.submit_with_handler(request, C::monitor_instances, handler)
    }

    pub fn unmonitor_instances(
        &self,
        request: UnmonitorInstancesRequest,
    ) -> TaskHandle<UnmonitorInstancesResponse> {
        self.submit(request, C::unmonitor_instances)
    }

    pub fn unmonitor_instances_with_handler(
        &self,
        request: UnmonitorInstancesRequest,
        handler: Arc<dyn CompletionHandler<UnmonitorInstancesRequest, UnmonitorInstancesResponse>>,
    ) -> TaskHandle<UnmonitorInstancesResponse> {
        self.submit_with_handler(request, C::unmonitor_instances, handler)
    }

    // images

    /// Capture an image from a running or stopped instance.
    pub fn create_image(&self, request: CreateImageRequest) -> TaskHandle<CreateImageResponse> {
        self.submit(request, C::create_image)
    }

    pub fn create_image_with_handler(
        &self,
        request: CreateImageRequest,
        handler: Arc<dyn CompletionHandler<CreateImageRequest, CreateImageResponse>>,
    ) -> TaskHandle<CreateImageResponse> {
        self.submit_with_handler(request, C::create_image, handler)
    }

    pub fn deregister_image(&self, request: DeregisterImageRequest) -> TaskHandle<()> {
        self.submit(request, C::deregister_image)
    }

    pub fn deregister_image_with_handler(
        &self,
        request: DeregisterImageRequest,
        handler: Arc<dyn CompletionHandler<DeregisterImageRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::deregister_image, handler)
    }

    pub fn describe_images(
        &self,
        request: DescribeImagesRequest,
    ) -> TaskHandle<DescribeImagesResponse> {
        self.submit(request, C::describe_images)
    }

    pub fn describe_images_with_handler(
        &self,
        request: DescribeImagesRequest,
        handler: Arc<dyn CompletionHandler<DescribeImagesRequest, DescribeImagesResponse>>,
    ) -> TaskHandle<DescribeImagesResponse> {
        self.submit_with_handler(request, C::describe_images, handler)
    }

    /// Copy an image from another region into the client's region.
    pub fn copy_image(&self, request: CopyImageRequest) -> TaskHandle<CopyImageResponse> {
        self.submit(request, C::copy_image)
    }

    pub fn copy_image_with_handler(
        &self,
        request: CopyImageRequest,
        handler: Arc<dyn CompletionHandler<CopyImageRequest, CopyImageResponse>>,
    ) -> TaskHandle<CopyImageResponse> {
        self.submit_with_handler(request, C::copy_image, handler)
    }

    // volumes

    pub fn create_volume(&self, request: CreateVolumeRequest) -> TaskHandle<CreateVolumeResponse> {
        self.submit(request, C::create_volume)
    }

    pub fn create_volume_with_handler(
        &self,
        request: CreateVolumeRequest,
        handler: Arc<dyn CompletionHandler<CreateVolumeRequest, CreateVolumeResponse>>,
    ) -> TaskHandle<CreateVolumeResponse> {
        self.submit_with_handler(request, C::create_volume, handler)
    }

    pub fn delete_volume(&self, request: DeleteVolumeRequest) -> TaskHandle<()> {
        self.submit(request, C::delete_volume)
    }

    pub fn delete_volume_with_handler(
        &self,
        request: DeleteVolumeRequest,
        handler: Arc<dyn CompletionHandler<DeleteVolumeRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::delete_volume, handler)
    }

    pub fn attach_volume(&self, request: AttachVolumeRequest) -> TaskHandle<AttachVolumeResponse> {
        self.submit(request, C::attach_volume)
    }

    pub fn attach_volume_with_handler(
        &self,
        request: AttachVolumeRequest,
        handler: Arc<dyn CompletionHandler<AttachVolumeRequest, AttachVolumeResponse>>,
    ) -> TaskHandle<AttachVolumeResponse> {
        self.submit_with_handler(request, C::attach_volume, handler)
    }

    pub fn detach_volume(&self, request: DetachVolumeRequest) -> TaskHandle<DetachVolumeResponse> {
        self.submit(request, C::detach_volume)
    }

    pub fn detach_volume_with_handler(
        &self,
        request: DetachVolumeRequest,
        handler: Arc<dyn CompletionHandler<DetachVolumeRequest, DetachVolumeResponse>>,
    ) -> TaskHandle<DetachVolumeResponse> {
        self.submit_with_handler(request, C::detach_volume, handler)
    }

    pub fn describe_volumes(
        &self,
        request: DescribeVolumesRequest,
    ) -> TaskHandle<DescribeVolumesResponse> {
        self.submit(request, C::describe_volumes)
    }

    pub fn describe_volumes_with_handler(
        &self,
        request: DescribeVolumesRequest,
        handler: Arc<dyn CompletionHandler<DescribeVolumesRequest, DescribeVolumesResponse>>,
    ) -> TaskHandle<DescribeVolumesResponse> {
        self.submit_with_handler(request, C::describe_volumes, handler)
    }

    /// Grow a volume or change its type in place.
    pub fn modify_volume(&self, request: ModifyVolumeRequest) -> TaskHandle<ModifyVolumeResponse> {
        self.submit(request, C::modify_volume)
    }

    pub fn modify_volume_with_handler(
        &self,
        request: ModifyVolumeRequest,
        handler: Arc<dyn CompletionHandler<ModifyVolumeRequest, ModifyVolumeResponse>>,
    ) -> TaskHandle<ModifyVolumeResponse> {
        self.submit_with_handler(request, C::modify_volume, handler)
    }

    // snapshots

    pub fn create_snapshot(
        &self,
        request: CreateSnapshotRequest,
    ) -> TaskHandle<CreateSnapshotResponse> {
        self.submit(request, C::create_snapshot)
    }

    pub fn create_snapshot_with_handler(
        &self,
        request: CreateSnapshotRequest,
        handler: Arc<dyn CompletionHandler<CreateSnapshotRequest, CreateSnapshotResponse>>,
    ) -> TaskHandle<CreateSnapshotResponse> {
        self.submit_with_handler(request, C::create_snapshot, handler)
    }

    pub fn delete_snapshot(&self, request: DeleteSnapshotRequest) -> TaskHandle<()> {
        self.submit(request, C::delete_snapshot)
    }

    pub fn delete_snapshot_with_handler(
        &self,
        request: DeleteSnapshotRequest,
        handler: Arc<dyn CompletionHandler<DeleteSnapshotRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::delete_snapshot, handler)
    }

    pub fn describe_snapshots(
        &self,
        request: DescribeSnapshotsRequest,
    ) -> TaskHandle<DescribeSnapshotsResponse> {
        self.submit(request, C::describe_snapshots)
    }

    pub fn describe_snapshots_with_handler(
        &self,
        request: DescribeSnapshotsRequest,
        handler: Arc<dyn CompletionHandler<DescribeSnapshotsRequest, DescribeSnapshotsResponse>>,
    ) -> TaskHandle<DescribeSnapshotsResponse> {
        self.submit_with_handler(request, C::describe_snapshots, handler)
    }

    pub fn copy_snapshot(&self, request: CopySnapshotRequest) -> TaskHandle<CopySnapshotResponse> {
        self.submit(request, C::copy_snapshot)
    }

    pub fn copy_snapshot_with_handler(
        &self,
        request: CopySnapshotRequest,
        handler: Arc<dyn CompletionHandler<CopySnapshotRequest, CopySnapshotResponse>>,
    ) -> TaskHandle<CopySnapshotResponse> {
        self.submit_with_handler(request, C::copy_snapshot, handler)
    }

    // security groups

    pub fn create_security_group(
        &self,
        request: CreateSecurityGroupRequest,
    ) -> TaskHandle<CreateSecurityGroupResponse> {
        self.submit(request, C::create_security_group)
    }

    pub fn create_security_group_with_handler(
        &self,
        request: CreateSecurityGroupRequest,
        handler: Arc<dyn CompletionHandler<CreateSecurityGroupRequest, CreateSecurityGroupResponse>>,
    ) -> TaskHandle<CreateSecurityGroupResponse> {
        self.submit_with_handler(request, C::create_security_group, handler)
    }

    pub fn delete_security_group(&self, request: DeleteSecurityGroupRequest) -> TaskHandle<()> {
        self.submit(request, C::delete_security_group)
    }

    pub fn delete_security_group_with_handler(
        &self,
        request: DeleteSecurityGroupRequest,
        handler: Arc<dyn CompletionHandler<DeleteSecurityGroupRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::delete_security_group, handler)
    }

    pub fn describe_security_groups(
        &self,
        request: DescribeSecurityGroupsRequest,
    ) -> TaskHandle<DescribeSecurityGroupsResponse> {
        self.submit(request, C::describe_security_groups)
    }

    pub fn describe_security_groups_with_handler(
        &self,
        request: DescribeSecurityGroupsRequest,
        handler: Arc<
            dyn CompletionHandler<DescribeSecurityGroupsRequest, DescribeSecurityGroupsResponse>,
        >,
    ) -> TaskHandle<DescribeSecurityGroupsResponse> {
        self.submit_with_handler(request, C::describe_security_groups, handler)
    }

    /// Open inbound rules on a security group.
    pub fn authorize_security_group_ingress(
        &self,
        request: AuthorizeSecurityGroupIngressRequest,
    ) -> TaskHandle<()> {
        self.submit(request, C::authorize_security_group_ingress)
    }

    pub fn authorize_security_group_ingress_with_handler(
        &self,
        request: AuthorizeSecurityGroupIngressRequest,
        handler: Arc<dyn CompletionHandler<AuthorizeSecurityGroupIngressRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::authorize_security_group_ingress, handler)
    }

    pub fn revoke_security_group_ingress(
        &self,
        request: RevokeSecurityGroupIngressRequest,
    ) -> TaskHandle<()> {
        self.submit(request, C::revoke_security_group_ingress)
    }

    pub fn revoke_security_group_ingress_with_handler(
        &self,
        request: RevokeSecurityGroupIngressRequest,
        handler: Arc<dyn CompletionHandler<RevokeSecurityGroupIngressRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::revoke_security_group_ingress, handler)
    }

    pub fn authorize_security_group_egress(
        &self,
        request: AuthorizeSecurityGroupEgressRequest,
    ) -> TaskHandle<()> {
        self.submit(request, C::authorize_security_group_egress)
    }

    pub fn authorize_security_group_egress_with_handler(
        &self,
        request: AuthorizeSecurityGroupEgressRequest,
        handler: Arc<dyn CompletionHandler<AuthorizeSecurityGroupEgressRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::authorize_security_group_egress, handler)
    }

    // key pairs

    pub fn create_key_pair(
        &self,
        request: CreateKeyPairRequest,
    ) -> TaskHandle<CreateKeyPairResponse> {
        self.submit(request, C::create_key_pair)
    }

    pub fn create_key_pair_with_handler(
        &self,
        request: CreateKeyPairRequest,
        handler: Arc<dyn CompletionHandler<CreateKeyPairRequest, CreateKeyPairResponse>>,
    ) -> TaskHandle<CreateKeyPairResponse> {
        self.submit_with_handler(request, C::create_key_pair, handler)
    }

    pub fn import_key_pair(
        &self,
        request: ImportKeyPairRequest,
    ) -> TaskHandle<ImportKeyPairResponse> {
        self.submit(request, C::import_key_pair)
    }

    pub fn import_key_pair_with_handler(
        &self,
        request: ImportKeyPairRequest,
        handler: Arc<dyn CompletionHandler<ImportKeyPairRequest, ImportKeyPairResponse>>,
    ) -> TaskHandle<ImportKeyPairResponse> {
        self.submit_with_handler(request, C::import_key_pair, handler)
    }

    pub fn delete_key_pair(&self, request: DeleteKeyPairRequest) -> TaskHandle<()> {
        self.submit(request, C::delete_key_pair)
    }

    pub fn delete_key_pair_with_handler(
        &self,
        request: DeleteKeyPairRequest,
        handler: Arc<dyn CompletionHandler<DeleteKeyPairRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::delete_key_pair, handler)
    }

    pub fn describe_key_pairs(
        &self,
        request: DescribeKeyPairsRequest,
    ) -> TaskHandle<DescribeKeyPairsResponse> {
        self.submit(request, C::describe_key_pairs)
    }

    pub fn describe_key_pairs_with_handler(
        &self,
        request: DescribeKeyPairsRequest,
        handler: Arc<dyn CompletionHandler<DescribeKeyPairsRequest, DescribeKeyPairsResponse>>,
    ) -> TaskHandle<DescribeKeyPairsResponse> {
        self.submit_with_handler(request, C::describe_key_pairs, handler)
    }

    // addresses

    pub fn allocate_address(
        &self,
        request: AllocateAddressRequest,
    ) -> TaskHandle<AllocateAddressResponse> {
        self.submit(request, C::allocate_address)
    }

    pub fn allocate_address_with_handler(
        &self,
        request: AllocateAddressRequest,
        handler: Arc<dyn CompletionHandler<AllocateAddressRequest, AllocateAddressResponse>>,
    ) -> TaskHandle<AllocateAddressResponse> {
        self.submit_with_handler(request, C::allocate_address, handler)
    }

    pub fn release_address(&self, request: ReleaseAddressRequest) -> TaskHandle<()> {
        self.submit(request, C::release_address)
    }

    pub fn release_address_with_handler(
        &self,
        request: ReleaseAddressRequest,
        handler: Arc<dyn CompletionHandler<ReleaseAddressRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::release_address, handler)
    }

    pub fn associate_address(
        &self,
        request: AssociateAddressRequest,
    ) -> TaskHandle<AssociateAddressResponse> {
        self.submit(request, C::associate_address)
    }

    pub fn associate_address_with_handler(
        &self,
        request: AssociateAddressRequest,
        handler: Arc<dyn CompletionHandler<AssociateAddressRequest, AssociateAddressResponse>>,
    ) -> TaskHandle<AssociateAddressResponse> {
        self.submit_with_handler(request, C::associate_address, handler)
    }

    pub fn disassociate_address(&self, request: DisassociateAddressRequest) -> TaskHandle<()> {
        self.submit(request, C::disassociate_address)
    }

    pub fn disassociate_address_with_handler(
        &self,
        request: DisassociateAddressRequest,
        handler: Arc<dyn CompletionHandler<DisassociateAddressRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::disassociate_address, handler)
    }

    pub fn describe_addresses(
        &self,
        request: DescribeAddressesRequest,
    ) -> TaskHandle<DescribeAddressesResponse> {
        self.submit(request, C::describe_addresses)
    }

    pub fn describe_addresses_with_handler(
        &self,
        request: DescribeAddressesRequest,
        handler: Arc<dyn CompletionHandler<DescribeAddressesRequest, DescribeAddressesResponse>>,
    ) -> TaskHandle<DescribeAddressesResponse> {
        self.submit_with_handler(request, C::describe_addresses, handler)
    }

    // tags

    pub fn create_tags(&self, request: CreateTagsRequest) -> TaskHandle<()> {
        self.submit(request, C::create_tags)
    }

    pub fn create_tags_with_handler(
        &self,
        request: CreateTagsRequest,
        handler: Arc<dyn CompletionHandler<CreateTagsRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::create_tags, handler)
    }

    pub fn delete_tags(&self, request: DeleteTagsRequest) -> TaskHandle<()> {
        self.submit(request, C::delete_tags)
    }

    pub fn delete_tags_with_handler(
        &self,
        request: DeleteTagsRequest,
        handler: Arc<dyn CompletionHandler<DeleteTagsRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::delete_tags, handler)
    }

    pub fn describe_tags(&self, request: DescribeTagsRequest) -> TaskHandle<DescribeTagsResponse> {
        self.submit(request, C::describe_tags)
    }

    pub fn describe_tags_with_handler(
        &self,
        request: DescribeTagsRequest,
        handler: Arc<dyn CompletionHandler<DescribeTagsRequest, DescribeTagsResponse>>,
    ) -> TaskHandle<DescribeTagsResponse> {
        self.submit_with_handler(request, C::describe_tags, handler)
    }

    // topology

    /// List the regions available to the account.
    pub fn describe_regions(
        &self,
        request: DescribeRegionsRequest,
    ) -> TaskHandle<DescribeRegionsResponse> {
        self.submit(request, C::describe_regions)
    }

    pub fn describe_regions_with_handler(
        &self,
        request: DescribeRegionsRequest,
        handler: Arc<dyn CompletionHandler<DescribeRegionsRequest, DescribeRegionsResponse>>,
    ) -> TaskHandle<DescribeRegionsResponse> {
        self.submit_with_handler(request, C::describe_regions, handler)
    }

    pub fn describe_availability_zones(
        &self,
        request: DescribeAvailabilityZonesRequest,
    ) -> TaskHandle<DescribeAvailabilityZonesResponse> {
        self.submit(request, C::describe_availability_zones)
    }

    pub fn describe_availability_zones_with_handler(
        &self,
        request: DescribeAvailabilityZonesRequest,
        handler: Arc<
            dyn CompletionHandler<
                DescribeAvailabilityZonesRequest,
                DescribeAvailabilityZonesResponse,
            >,
        >,
    ) -> TaskHandle<DescribeAvailabilityZonesResponse> {
        self.submit_with_handler(request, C::describe_availability_zones, handler)
    }

    // vpc

    pub fn create_vpc(&self, request: CreateVpcRequest) -> TaskHandle<CreateVpcResponse> {
        self.submit(request, C::create_vpc)
    }

    pub fn create_vpc_with_handler(
        &self,
        request: CreateVpcRequest,
        handler: Arc<dyn CompletionHandler<CreateVpcRequest, CreateVpcResponse>>,
    ) -> TaskHandle<CreateVpcResponse> {
        self.submit_with_handler(request, C::create_vpc, handler)
    }

    pub fn delete_vpc(&self, request: DeleteVpcRequest) -> TaskHandle<()> {
        self.submit(request, C::delete_vpc)
    }

    pub fn delete_vpc_with_handler(
        &self,
        request: DeleteVpcRequest,
        handler: Arc<dyn CompletionHandler<DeleteVpcRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::delete_vpc, handler)
    }

    pub fn describe_vpcs(&self, request: DescribeVpcsRequest) -> TaskHandle<DescribeVpcsResponse> {
        self.submit(request, C::describe_vpcs)
    }

    pub fn describe_vpcs_with_handler(
        &self,
        request: DescribeVpcsRequest,
        handler: Arc<dyn CompletionHandler<DescribeVpcsRequest, DescribeVpcsResponse>>,
    ) -> TaskHandle<DescribeVpcsResponse> {
        self.submit_with_handler(request, C::describe_vpcs, handler)
    }

    pub fn create_subnet(&self, request: CreateSubnetRequest) -> TaskHandle<CreateSubnetResponse> {
        self.submit(request, C::create_subnet)
    }

    pub fn create_subnet_with_handler(
        &self,
        request: CreateSubnetRequest,
        handler: Arc<dyn CompletionHandler<CreateSubnetRequest, CreateSubnetResponse>>,
    ) -> TaskHandle<CreateSubnetResponse> {
        self.submit_with_handler(request, C::create_subnet, handler)
    }

    pub fn delete_subnet(&self, request: DeleteSubnetRequest) -> TaskHandle<()> {
        self.submit(request, C::delete_subnet)
    }

    pub fn delete_subnet_with_handler(
        &self,
        request: DeleteSubnetRequest,
        handler: Arc<dyn CompletionHandler<DeleteSubnetRequest, ()>>,
    ) -> TaskHandle<()> {
        self.submit_with_handler(request, C::delete_subnet, handler)
    }

    pub fn describe_subnets(
        &self,
        request: DescribeSubnetsRequest,
    ) -> TaskHandle<DescribeSubnetsResponse> {
        self.submit(request, C::describe_subnets)
    }

    pub fn describe_subnets_with_handler(
        &self,
        request: DescribeSubnetsRequest,
        handler: Arc<dyn CompletionHandler<DescribeSubnetsRequest, DescribeSubnetsResponse>>,
    ) -> TaskHandle<DescribeSubnetsResponse> {
        self.submit_with_handler(request, C::describe_subnets, handler)
    }
}

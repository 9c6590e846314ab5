// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Task definitions, container definitions and volumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::wire::{self, record_display};
use super::enums::{
    Compatibility, ContainerCondition, DeviceCgroupPermission, EfsAuthorizationConfigIam,
    EfsTransitEncryption, EnvironmentFileType, FirelensConfigurationType, IpcMode, LogDriver,
    NetworkMode, PidMode, ProxyConfigurationType, ResourceType, Scope,
    TaskDefinitionPlacementConstraintType, TaskDefinitionStatus, TransportProtocol, UlimitName,
};
use super::shared::{Attribute, InferenceAccelerator, KeyValuePair};

/// A registered task definition revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    /// Full ARN of the task definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition_arn: Option<String>,
    /// Containers that make up the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_definitions: Option<Vec<ContainerDefinition>>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// IAM role the task's containers assume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_role_arn: Option<String>,
    /// IAM role the agent uses to pull images and publish logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_arn: Option<String>,
    /// Docker networking mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_mode: Option<NetworkMode>,
    /// Revision within the family.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<i32>,
    /// Data volumes available to the containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<Volume>>,
    /// Registration status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskDefinitionStatus>,
    /// Container instance attributes the task requires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_attributes: Option<Vec<Attribute>>,
    /// Placement constraints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_constraints: Option<Vec<TaskDefinitionPlacementConstraint>>,
    /// Launch types the definition validated against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibilities: Option<Vec<Compatibility>>,
    /// Launch types requested at registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_compatibilities: Option<Vec<Compatibility>>,
    /// Task-level CPU units, as a string (`1024` or `1 vcpu`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    /// Task-level memory, as a string (`2048` or `2 GB`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    /// Elastic Inference accelerators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inference_accelerators: Option<Vec<InferenceAccelerator>>,
    /// Process namespace mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid_mode: Option<PidMode>,
    /// IPC namespace mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipc_mode: Option<IpcMode>,
    /// App Mesh proxy configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_configuration: Option<ProxyConfiguration>,
}

impl TaskDefinition {
    /// Create an empty `TaskDefinition`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the task definition ARN.
    pub fn with_task_definition_arn(mut self, task_definition_arn: impl Into<String>) -> Self {
        self.task_definition_arn = Some(task_definition_arn.into());
        self
    }

    /// Append container definitions, keeping any already present.
    pub fn with_container_definitions(
        mut self,
        container_definitions: impl IntoIterator<Item = ContainerDefinition>,
    ) -> Self {
        self.container_definitions
            .get_or_insert_with(Vec::new)
            .extend(container_definitions);
        self
    }

    /// Set the family.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Set the task role ARN.
    pub fn with_task_role_arn(mut self, task_role_arn: impl Into<String>) -> Self {
        self.task_role_arn = Some(task_role_arn.into());
        self
    }

    /// Set the execution role ARN.
    pub fn with_execution_role_arn(mut self, execution_role_arn: impl Into<String>) -> Self {
        self.execution_role_arn = Some(execution_role_arn.into());
        self
    }

    /// Set the network mode.
    pub fn with_network_mode(mut self, network_mode: NetworkMode) -> Self {
        self.network_mode = Some(network_mode);
        self
    }

    /// Set the revision.
    pub fn with_revision(mut self, revision: i32) -> Self {
        self.revision = Some(revision);
        self
    }

    /// Append volumes, keeping any already present.
    pub fn with_volumes(mut self, volumes: impl IntoIterator<Item = Volume>) -> Self {
        self.volumes.get_or_insert_with(Vec::new).extend(volumes);
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: TaskDefinitionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Append requires attributes, keeping any already present.
    pub fn with_requires_attributes(
        mut self,
        requires_attributes: impl IntoIterator<Item = Attribute>,
    ) -> Self {
        self.requires_attributes
            .get_or_insert_with(Vec::new)
            .extend(requires_attributes);
        self
    }

    /// Append placement constraints, keeping any already present.
    pub fn with_placement_constraints(
        mut self,
        placement_constraints: impl IntoIterator<Item = TaskDefinitionPlacementConstraint>,
    ) -> Self {
        self.placement_constraints
            .get_or_insert_with(Vec::new)
            .extend(placement_constraints);
        self
    }

    /// Append compatibilities, keeping any already present.
    pub fn with_compatibilities(
        mut self,
        compatibilities: impl IntoIterator<Item = Compatibility>,
    ) -> Self {
        self.compatibilities
            .get_or_insert_with(Vec::new)
            .extend(compatibilities);
        self
    }

    /// Append requires compatibilities, keeping any already present.
    pub fn with_requires_compatibilities(
        mut self,
        requires_compatibilities: impl IntoIterator<Item = Compatibility>,
    ) -> Self {
        self.requires_compatibilities
            .get_or_insert_with(Vec::new)
            .extend(requires_compatibilities);
        self
    }

    /// Set the CPU.
    pub fn with_cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = Some(cpu.into());
        self
    }

    /// Set the memory.
    pub fn with_memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = Some(memory.into());
        self
    }

    /// Append inference accelerators, keeping any already present.
    pub fn with_inference_accelerators(
        mut self,
        inference_accelerators: impl IntoIterator<Item = InferenceAccelerator>,
    ) -> Self {
        self.inference_accelerators
            .get_or_insert_with(Vec::new)
            .extend(inference_accelerators);
        self
    }

    /// Set the PID mode.
    pub fn with_pid_mode(mut self, pid_mode: PidMode) -> Self {
        self.pid_mode = Some(pid_mode);
        self
    }

    /// Set the IPC mode.
    pub fn with_ipc_mode(mut self, ipc_mode: IpcMode) -> Self {
        self.ipc_mode = Some(ipc_mode);
        self
    }

    /// Set the proxy configuration.
    pub fn with_proxy_configuration(mut self, proxy_configuration: ProxyConfiguration) -> Self {
        self.proxy_configuration = Some(proxy_configuration);
        self
    }
}

/// Definition of one container within a task definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDefinition {
    /// Container name, referenced by links and dependencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Image reference (`repository-url/image:tag`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Private registry credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_credentials: Option<RepositoryCredentials>,
    /// CPU units reserved for the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i32>,
    /// Hard memory limit in MiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<i32>,
    /// Soft memory limit in MiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_reservation: Option<i32>,
    /// Links to other containers (`bridge` mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    /// Port mappings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_mappings: Option<Vec<PortMapping>>,
    /// Whether the task stops when this container stops.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub essential: Option<bool>,
    /// Entry point override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<Vec<String>>,
    /// Command passed to the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    /// Environment variables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Vec<KeyValuePair>>,
    /// Files holding environment variables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_files: Option<Vec<EnvironmentFile>>,
    /// Volume mount points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_points: Option<Vec<MountPoint>>,
    /// Volumes mounted from other containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes_from: Option<Vec<VolumeFrom>>,
    /// Linux-specific settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linux_parameters: Option<LinuxParameters>,
    /// Secrets exposed as environment variables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Vec<Secret>>,
    /// Startup and shutdown dependencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<ContainerDependency>>,
    /// Seconds to wait for dependencies before giving up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timeout: Option<i32>,
    /// Seconds before the container is killed after SIGTERM.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_networking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileged: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly_root_filesystem: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_servers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_search_domains: Option<Vec<String>>,
    /// Entries appended to `/etc/hosts`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_hosts: Option<Vec<HostEntry>>,
    /// SELinux and AppArmor labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_security_options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pseudo_terminal: Option<bool>,
    /// Docker labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_labels: Option<BTreeMap<String, String>>,
    /// Resource limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ulimits: Option<Vec<Ulimit>>,
    /// Log driver settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_configuration: Option<LogConfiguration>,
    /// Container health check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
    /// Namespaced kernel parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_controls: Option<Vec<SystemControl>>,
    /// GPU and accelerator requirements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_requirements: Option<Vec<ResourceRequirement>>,
    /// FireLens log router settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firelens_configuration: Option<FirelensConfiguration>,
}

impl ContainerDefinition {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_repository_credentials(
        mut self,
        repository_credentials: RepositoryCredentials,
    ) -> Self {
        self.repository_credentials = Some(repository_credentials);
        self
    }

    pub fn with_cpu(mut self, cpu: i32) -> Self {
        self.cpu = Some(cpu);
        self
    }

    pub fn with_memory(mut self, memory: i32) -> Self {
        self.memory = Some(memory);
        self
    }

    pub fn with_memory_reservation(mut self, memory_reservation: i32) -> Self {
        self.memory_reservation = Some(memory_reservation);
        self
    }

    pub fn with_links(mut self, links: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.links
            .get_or_insert_with(Vec::new)
            .extend(links.into_iter().map(Into::into));
        self
    }

    pub fn with_port_mappings(
        mut self,
        port_mappings: impl IntoIterator<Item = PortMapping>,
    ) -> Self {
        self.port_mappings
            .get_or_insert_with(Vec::new)
            .extend(port_mappings);
        self
    }

    pub fn with_essential(mut self, essential: bool) -> Self {
        self.essential = Some(essential);
        self
    }

    pub fn with_entry_point(
        mut self,
        entry_point: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.entry_point
            .get_or_insert_with(Vec::new)
            .extend(entry_point.into_iter().map(Into::into));
        self
    }

    pub fn with_command(mut self, command: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.command
            .get_or_insert_with(Vec::new)
            .extend(command.into_iter().map(Into::into));
        self
    }

    pub fn with_environment(mut self, environment: impl IntoIterator<Item = KeyValuePair>) -> Self {
        self.environment
            .get_or_insert_with(Vec::new)
            .extend(environment);
        self
    }

    pub fn with_environment_files(
        mut self,
        environment_files: impl IntoIterator<Item = EnvironmentFile>,
    ) -> Self {
        self.environment_files
            .get_or_insert_with(Vec::new)
            .extend(environment_files);
        self
    }

    pub fn with_mount_points(mut self, mount_points: impl IntoIterator<Item = MountPoint>) -> Self {
        self.mount_points
            .get_or_insert_with(Vec::new)
            .extend(mount_points);
        self
    }

    pub fn with_volumes_from(mut self, volumes_from: impl IntoIterator<Item = VolumeFrom>) -> Self {
        self.volumes_from
            .get_or_insert_with(Vec::new)
            .extend(volumes_from);
        self
    }

    pub fn with_linux_parameters(mut self, linux_parameters: LinuxParameters) -> Self {
        self.linux_parameters = Some(linux_parameters);
        self
    }

    pub fn with_secrets(mut self, secrets: impl IntoIterator<Item = Secret>) -> Self {
        self.secrets.get_or_insert_with(Vec::new).extend(secrets);
        self
    }

    pub fn with_depends_on(
        mut self,
        depends_on: impl IntoIterator<Item = ContainerDependency>,
    ) -> Self {
        self.depends_on
            .get_or_insert_with(Vec::new)
            .extend(depends_on);
        self
    }

    pub fn with_start_timeout(mut self, start_timeout: i32) -> Self {
        self.start_timeout = Some(start_timeout);
        self
    }

    pub fn with_stop_timeout(mut self, stop_timeout: i32) -> Self {
        self.stop_timeout = Some(stop_timeout);
        self
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_working_directory(mut self, working_directory: impl Into<String>) -> Self {
        self.working_directory = Some(working_directory.into());
        self
    }

    pub fn with_disable_networking(mut self, disable_networking: bool) -> Self {
        self.disable_networking = Some(disable_networking);
        self
    }

    pub fn with_privileged(mut self, privileged: bool) -> Self {
        self.privileged = Some(privileged);
        self
    }

    pub fn with_readonly_root_filesystem(mut self, readonly_root_filesystem: bool) -> Self {
        self.readonly_root_filesystem = Some(readonly_root_filesystem);
        self
    }

    pub fn with_dns_servers(
        mut self,
        dns_servers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.dns_servers
            .get_or_insert_with(Vec::new)
            .extend(dns_servers.into_iter().map(Into::into));
        self
    }

    pub fn with_dns_search_domains(
        mut self,
        dns_search_domains: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.dns_search_domains
            .get_or_insert_with(Vec::new)
            .extend(dns_search_domains.into_iter().map(Into::into));
        self
    }

    pub fn with_extra_hosts(mut self, extra_hosts: impl IntoIterator<Item = HostEntry>) -> Self {
        self.extra_hosts
            .get_or_insert_with(Vec::new)
            .extend(extra_hosts);
        self
    }

    pub fn with_docker_security_options(
        mut self,
        docker_security_options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.docker_security_options
            .get_or_insert_with(Vec::new)
            .extend(docker_security_options.into_iter().map(Into::into));
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = Some(interactive);
        self
    }

    pub fn with_pseudo_terminal(mut self, pseudo_terminal: bool) -> Self {
        self.pseudo_terminal = Some(pseudo_terminal);
        self
    }

    /// Replace the docker labels.
    pub fn with_docker_labels(mut self, docker_labels: BTreeMap<String, String>) -> Self {
        self.docker_labels = Some(docker_labels);
        self
    }

    /// Add one docker labels entry.
    ///
    /// Fails with [`ModelError::DuplicateMapKey`](crate::ModelError::DuplicateMapKey)
    /// if `key` is already present; the map is left as it was.
    pub fn add_docker_labels_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        wire::insert_unique(
            self.docker_labels.get_or_insert_with(BTreeMap::new),
            "dockerLabels",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    /// Drop every docker labels entry.
    pub fn clear_docker_labels_entries(&mut self) -> &mut Self {
        self.docker_labels = None;
        self
    }

    pub fn with_ulimits(mut self, ulimits: impl IntoIterator<Item = Ulimit>) -> Self {
        self.ulimits.get_or_insert_with(Vec::new).extend(ulimits);
        self
    }

    pub fn with_log_configuration(mut self, log_configuration: LogConfiguration) -> Self {
        self.log_configuration = Some(log_configuration);
        self
    }

    pub fn with_health_check(mut self, health_check: HealthCheck) -> Self {
        self.health_check = Some(health_check);
        self
    }

    pub fn with_system_controls(
        mut self,
        system_controls: impl IntoIterator<Item = SystemControl>,
    ) -> Self {
        self.system_controls
            .get_or_insert_with(Vec::new)
            .extend(system_controls);
        self
    }

    pub fn with_resource_requirements(
        mut self,
        resource_requirements: impl IntoIterator<Item = ResourceRequirement>,
    ) -> Self {
        self.resource_requirements
            .get_or_insert_with(Vec::new)
            .extend(resource_requirements);
        self
    }

    pub fn with_firelens_configuration(
        mut self,
        firelens_configuration: FirelensConfiguration,
    ) -> Self {
        self.firelens_configuration = Some(firelens_configuration);
        self
    }
}

/// A container port exposed on the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_port: Option<i32>,
    /// Host port; zero or absent picks an ephemeral port in `bridge` mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<TransportProtocol>,
}

impl PortMapping {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container_port(mut self, container_port: i32) -> Self {
        self.container_port = Some(container_port);
        self
    }

    pub fn with_host_port(mut self, host_port: i32) -> Self {
        self.host_port = Some(host_port);
        self
    }

    pub fn with_protocol(mut self, protocol: TransportProtocol) -> Self {
        self.protocol = Some(protocol);
        self
    }
}

/// A volume mounted into a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountPoint {
    /// Name of the task definition volume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_volume: Option<String>,
    /// Mount path inside the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl MountPoint {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_volume(mut self, source_volume: impl Into<String>) -> Self {
        self.source_volume = Some(source_volume.into());
        self
    }

    pub fn with_container_path(mut self, container_path: impl Into<String>) -> Self {
        self.container_path = Some(container_path.into());
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }
}

/// Volumes mounted from another container of the same task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeFrom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl VolumeFrom {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_container(mut self, source_container: impl Into<String>) -> Self {
        self.source_container = Some(source_container.into());
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }
}

/// Linux-specific container settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinuxParameters {
    /// Capabilities added to or dropped from the default set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<KernelCapabilities>,
    /// Host devices exposed to the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<Device>>,
    /// Run an init process that forwards signals and reaps processes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_process_enabled: Option<bool>,
    /// Size of `/dev/shm` in MiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_memory_size: Option<i32>,
    /// Tmpfs mounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmpfs: Option<Vec<Tmpfs>>,
    /// Swap memory in MiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_swap: Option<i32>,
    /// Swappiness (0 to 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swappiness: Option<i32>,
}

impl LinuxParameters {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capabilities(mut self, capabilities: KernelCapabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    pub fn with_devices(mut self, devices: impl IntoIterator<Item = Device>) -> Self {
        self.devices.get_or_insert_with(Vec::new).extend(devices);
        self
    }

    pub fn with_init_process_enabled(mut self, init_process_enabled: bool) -> Self {
        self.init_process_enabled = Some(init_process_enabled);
        self
    }

    pub fn with_shared_memory_size(mut self, shared_memory_size: i32) -> Self {
        self.shared_memory_size = Some(shared_memory_size);
        self
    }

    pub fn with_tmpfs(mut self, tmpfs: impl IntoIterator<Item = Tmpfs>) -> Self {
        self.tmpfs.get_or_insert_with(Vec::new).extend(tmpfs);
        self
    }

    pub fn with_max_swap(mut self, max_swap: i32) -> Self {
        self.max_swap = Some(max_swap);
        self
    }

    pub fn with_swappiness(mut self, swappiness: i32) -> Self {
        self.swappiness = Some(swappiness);
        self
    }
}

/// Linux capabilities added to or dropped from a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KernelCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop: Option<Vec<String>>,
}

impl KernelCapabilities {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_add(mut self, add: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.add
            .get_or_insert_with(Vec::new)
            .extend(add.into_iter().map(Into::into));
        self
    }

    pub fn with_drop(mut self, drop: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.drop
            .get_or_insert_with(Vec::new)
            .extend(drop.into_iter().map(Into::into));
        self
    }
}

/// A host device exposed to a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<DeviceCgroupPermission>>,
}

impl Device {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host_path(mut self, host_path: impl Into<String>) -> Self {
        self.host_path = Some(host_path.into());
        self
    }

    pub fn with_container_path(mut self, container_path: impl Into<String>) -> Self {
        self.container_path = Some(container_path.into());
        self
    }

    pub fn with_permissions(
        mut self,
        permissions: impl IntoIterator<Item = DeviceCgroupPermission>,
    ) -> Self {
        self.permissions
            .get_or_insert_with(Vec::new)
            .extend(permissions);
        self
    }
}

/// A tmpfs mount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tmpfs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_path: Option<String>,
    /// Size in MiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_options: Option<Vec<String>>,
}

impl Tmpfs {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container_path(mut self, container_path: impl Into<String>) -> Self {
        self.container_path = Some(container_path.into());
        self
    }

    pub fn with_size(mut self, size: i32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_mount_options(
        mut self,
        mount_options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.mount_options
            .get_or_insert_with(Vec::new)
            .extend(mount_options.into_iter().map(Into::into));
        self
    }
}

/// A secret exposed to a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    /// Environment variable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ARN of the Secrets Manager secret or SSM parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_from: Option<String>,
}

impl Secret {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value_from(mut self, value_from: impl Into<String>) -> Self {
        self.value_from = Some(value_from.into());
        self
    }
}

/// A dependency on another container of the same task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDependency {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<ContainerCondition>,
}

impl ContainerDependency {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container_name(mut self, container_name: impl Into<String>) -> Self {
        self.container_name = Some(container_name.into());
        self
    }

    pub fn with_condition(mut self, condition: ContainerCondition) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// An `/etc/hosts` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl HostEntry {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }
}

/// A resource limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ulimit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<UlimitName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_limit: Option<i32>,
}

impl Ulimit {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: UlimitName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_soft_limit(mut self, soft_limit: i32) -> Self {
        self.soft_limit = Some(soft_limit);
        self
    }

    pub fn with_hard_limit(mut self, hard_limit: i32) -> Self {
        self.hard_limit = Some(hard_limit);
        self
    }
}

/// Log driver settings of a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfiguration {
    /// Log driver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_driver: Option<LogDriver>,
    /// Driver options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, String>>,
    /// Secrets passed to the driver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_options: Option<Vec<Secret>>,
}

impl LogConfiguration {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_driver(mut self, log_driver: LogDriver) -> Self {
        self.log_driver = Some(log_driver);
        self
    }

    /// Replace the options.
    pub fn with_options(mut self, options: BTreeMap<String, String>) -> Self {
        self.options = Some(options);
        self
    }

    /// Add one options entry.
    ///
    /// Fails with [`ModelError::DuplicateMapKey`](crate::ModelError::DuplicateMapKey)
    /// if `key` is already present; the map is left as it was.
    pub fn add_options_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        wire::insert_unique(
            self.options.get_or_insert_with(BTreeMap::new),
            "options",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    /// Drop every options entry.
    pub fn clear_options_entries(&mut self) -> &mut Self {
        self.options = None;
        self
    }

    pub fn with_secret_options(mut self, secret_options: impl IntoIterator<Item = Secret>) -> Self {
        self.secret_options
            .get_or_insert_with(Vec::new)
            .extend(secret_options);
        self
    }
}

/// A container health check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    /// Command, e.g. `["CMD-SHELL", "curl -f http://localhost/ || exit 1"]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    /// Seconds between checks (5 to 300, default 30).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
    /// Seconds before a check counts as failed (2 to 60, default 5).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,
    /// Failures before the container is unhealthy (1 to 10, default 3).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<i32>,
    /// Grace period in seconds before failures count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_period: Option<i32>,
}

impl HealthCheck {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command(mut self, command: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.command
            .get_or_insert_with(Vec::new)
            .extend(command.into_iter().map(Into::into));
        self
    }

    pub fn with_interval(mut self, interval: i32) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn with_timeout(mut self, timeout: i32) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_retries(mut self, retries: i32) -> Self {
        self.retries = Some(retries);
        self
    }

    pub fn with_start_period(mut self, start_period: i32) -> Self {
        self.start_period = Some(start_period);
        self
    }
}

/// A namespaced kernel parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemControl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SystemControl {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A GPU or accelerator requirement of a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequirement {
    /// Number of GPUs or the accelerator device name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<ResourceType>,
}

impl ResourceRequirement {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = Some(resource_type);
        self
    }
}

/// FireLens log router settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirelensConfiguration {
    /// Log router.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub firelens_type: Option<FirelensConfigurationType>,
    /// Router options, e.g. `enable-ecs-log-metadata`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, String>>,
}

impl FirelensConfiguration {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_firelens_type(mut self, firelens_type: FirelensConfigurationType) -> Self {
        self.firelens_type = Some(firelens_type);
        self
    }

    /// Replace the options.
    pub fn with_options(mut self, options: BTreeMap<String, String>) -> Self {
        self.options = Some(options);
        self
    }

    /// Add one options entry.
    ///
    /// Fails with [`ModelError::DuplicateMapKey`](crate::ModelError::DuplicateMapKey)
    /// if `key` is already present; the map is left as it was.
    pub fn add_options_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        wire::insert_unique(
            self.options.get_or_insert_with(BTreeMap::new),
            "options",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    /// Drop every options entry.
    pub fn clear_options_entries(&mut self) -> &mut Self {
        self.options = None;
        self
    }
}

/// Credentials for a private image registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryCredentials {
    /// ARN of the secret holding the credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials_parameter: Option<String>,
}

impl RepositoryCredentials {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials_parameter(mut self, credentials_parameter: impl Into<String>) -> Self {
        self.credentials_parameter = Some(credentials_parameter.into());
        self
    }
}

/// A file of environment variables stored in S3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentFile {
    /// ARN of the S3 object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<EnvironmentFileType>,
}

impl EnvironmentFile {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_file_type(mut self, file_type: EnvironmentFileType) -> Self {
        self.file_type = Some(file_type);
        self
    }
}

/// A data volume available to a task's containers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// Volume name, referenced by mount points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Bind mount settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<HostVolumeProperties>,
    /// Docker volume settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_volume_configuration: Option<DockerVolumeConfiguration>,
    /// EFS volume settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub efs_volume_configuration: Option<EfsVolumeConfiguration>,
}

impl Volume {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_host(mut self, host: HostVolumeProperties) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_docker_volume_configuration(
        mut self,
        docker_volume_configuration: DockerVolumeConfiguration,
    ) -> Self {
        self.docker_volume_configuration = Some(docker_volume_configuration);
        self
    }

    pub fn with_efs_volume_configuration(
        mut self,
        efs_volume_configuration: EfsVolumeConfiguration,
    ) -> Self {
        self.efs_volume_configuration = Some(efs_volume_configuration);
        self
    }
}

/// Bind mount settings of a volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostVolumeProperties {
    /// Path on the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
}

impl HostVolumeProperties {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_path(mut self, source_path: impl Into<String>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }
}

/// A Docker-managed volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerVolumeConfiguration {
    /// Volume lifetime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    /// Create the volume if it does not exist (`shared` scope only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoprovision: Option<bool>,
    /// Volume driver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    /// Driver-specific options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_opts: Option<BTreeMap<String, String>>,
    /// Custom metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
}

impl DockerVolumeConfiguration {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_autoprovision(mut self, autoprovision: bool) -> Self {
        self.autoprovision = Some(autoprovision);
        self
    }

    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    /// Replace the driver opts.
    pub fn with_driver_opts(mut self, driver_opts: BTreeMap<String, String>) -> Self {
        self.driver_opts = Some(driver_opts);
        self
    }

    /// Add one driver opts entry.
    ///
    /// Fails with [`ModelError::DuplicateMapKey`](crate::ModelError::DuplicateMapKey)
    /// if `key` is already present; the map is left as it was.
    pub fn add_driver_opts_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        wire::insert_unique(
            self.driver_opts.get_or_insert_with(BTreeMap::new),
            "driverOpts",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    /// Drop every driver opts entry.
    pub fn clear_driver_opts_entries(&mut self) -> &mut Self {
        self.driver_opts = None;
        self
    }

    /// Replace the labels.
    pub fn with_labels(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Add one labels entry.
    ///
    /// Fails with [`ModelError::DuplicateMapKey`](crate::ModelError::DuplicateMapKey)
    /// if `key` is already present; the map is left as it was.
    pub fn add_labels_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self> {
        wire::insert_unique(
            self.labels.get_or_insert_with(BTreeMap::new),
            "labels",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    /// Drop every labels entry.
    pub fn clear_labels_entries(&mut self) -> &mut Self {
        self.labels = None;
        self
    }
}

/// An Amazon EFS volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfsVolumeConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_system_id: Option<String>,
    /// Directory mounted as the root of the volume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_encryption: Option<EfsTransitEncryption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_encryption_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_config: Option<EfsAuthorizationConfig>,
}

impl EfsVolumeConfiguration {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_system_id(mut self, file_system_id: impl Into<String>) -> Self {
        self.file_system_id = Some(file_system_id.into());
        self
    }

    pub fn with_root_directory(mut self, root_directory: impl Into<String>) -> Self {
        self.root_directory = Some(root_directory.into());
        self
    }

    pub fn with_transit_encryption(mut self, transit_encryption: EfsTransitEncryption) -> Self {
        self.transit_encryption = Some(transit_encryption);
        self
    }

    pub fn with_transit_encryption_port(mut self, transit_encryption_port: i32) -> Self {
        self.transit_encryption_port = Some(transit_encryption_port);
        self
    }

    pub fn with_authorization_config(
        mut self,
        authorization_config: EfsAuthorizationConfig,
    ) -> Self {
        self.authorization_config = Some(authorization_config);
        self
    }
}

/// Authorization settings of an EFS volume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfsAuthorizationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_point_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam: Option<EfsAuthorizationConfigIam>,
}

impl EfsAuthorizationConfig {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access_point_id(mut self, access_point_id: impl Into<String>) -> Self {
        self.access_point_id = Some(access_point_id.into());
        self
    }

    pub fn with_iam(mut self, iam: EfsAuthorizationConfigIam) -> Self {
        self.iam = Some(iam);
        self
    }
}

/// A placement constraint declared by a task definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinitionPlacementConstraint {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub constraint_type: Option<TaskDefinitionPlacementConstraintType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl TaskDefinitionPlacementConstraint {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constraint_type(
        mut self,
        constraint_type: TaskDefinitionPlacementConstraintType,
    ) -> Self {
        self.constraint_type = Some(constraint_type);
        self
    }

    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }
}

/// App Mesh proxy settings of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyConfiguration {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<ProxyConfigurationType>,
    /// Container acting as the proxy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
    /// Proxy settings such as `IgnoredUID` or `ProxyIngressPort`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<KeyValuePair>>,
}

impl ProxyConfiguration {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proxy_type(mut self, proxy_type: ProxyConfigurationType) -> Self {
        self.proxy_type = Some(proxy_type);
        self
    }

    pub fn with_container_name(mut self, container_name: impl Into<String>) -> Self {
        self.container_name = Some(container_name.into());
        self
    }

    pub fn with_properties(mut self, properties: impl IntoIterator<Item = KeyValuePair>) -> Self {
        self.properties
            .get_or_insert_with(Vec::new)
            .extend(properties);
        self
    }
}

record_display!(
    TaskDefinition,
    ContainerDefinition,
    PortMapping,
    MountPoint,
    VolumeFrom,
    LinuxParameters,
    KernelCapabilities,
    Device,
    Tmpfs,
    Secret,
    ContainerDependency,
    HostEntry,
    Ulimit,
    LogConfiguration,
    HealthCheck,
    SystemControl,
    ResourceRequirement,
    FirelensConfiguration,
    RepositoryCredentials,
    EnvironmentFile,
    Volume,
    HostVolumeProperties,
    DockerVolumeConfiguration,
    EfsVolumeConfiguration,
    EfsAuthorizationConfig,
    TaskDefinitionPlacementConstraint,
    ProxyConfiguration,
);

// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Enum literal lookup and rendering tests for ecs-model.

use std::fmt::Debug;

use ecs_model::{
    AgentUpdateStatus, ClusterField, ClusterSettingName, Compatibility, ContainerCondition,
    ContainerInstanceStatus, DeploymentControllerType, DeviceCgroupPermission,
    EnvironmentFileType, IpcMode, LaunchType, LogDriver, ModelError, NetworkMode,
    PlacementConstraintType, ResourceType, ServiceErrorKind, SettingName, StabilityStatus,
    TargetType, TaskStopCode, UlimitName, WireEnum,
};
use strum::VariantNames;

fn assert_round_trips<E: WireEnum + PartialEq + Debug>() {
    for value in E::values() {
        assert_eq!(E::from_value(value.as_str()).unwrap(), value);
    }
    assert_eq!(E::values().len(), E::VARIANTS.len());
}

#[test]
fn test_from_value_accepts_canonical_literals() {
    assert_eq!(LaunchType::from_value("FARGATE").unwrap(), LaunchType::Fargate);
    assert_eq!(LaunchType::from_value("EC2").unwrap(), LaunchType::Ec2);
    assert_eq!(NetworkMode::from_value("awsvpc").unwrap(), NetworkMode::Awsvpc);
    assert_eq!(
        PlacementConstraintType::from_value("distinctInstance").unwrap(),
        PlacementConstraintType::DistinctInstance
    );
}

#[test]
fn test_from_value_rejects_unknown_literal() {
    let err = LaunchType::from_value("fargate").unwrap_err();

    match err {
        ModelError::InvalidEnumValue { type_name, value } => {
            assert_eq!(type_name, "LaunchType");
            assert_eq!(value, "fargate");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_from_value_rejects_empty_and_padded_input() {
    assert!(LaunchType::from_value("").is_err());
    assert!(LaunchType::from_value(" FARGATE").is_err());
    assert!(LaunchType::from_value("FARGATE ").is_err());
    assert!(NetworkMode::from_value("NONE").is_err());
}

#[test]
fn test_display_and_as_str_return_wire_literal() {
    assert_eq!(LaunchType::Fargate.to_string(), "FARGATE");
    assert_eq!(NetworkMode::NoNetwork.to_string(), "none");
    assert_eq!(IpcMode::NoIpc.as_str(), "none");
    assert_eq!(LogDriver::JsonFile.as_str(), "json-file");
    assert_eq!(UlimitName::Nofile.as_str(), "nofile");
    assert_eq!(TargetType::ContainerInstance.as_str(), "container-instance");
    assert_eq!(ClusterSettingName::ContainerInsights.as_str(), "containerInsights");
    assert_eq!(ResourceType::InferenceAccelerator.as_str(), "InferenceAccelerator");
    assert_eq!(DeploymentControllerType::CodeDeploy.as_str(), "CODE_DEPLOY");
    assert_eq!(DeviceCgroupPermission::Mknod.as_str(), "mknod");
}

#[test]
fn test_values_are_in_declaration_order() {
    assert_eq!(LaunchType::values(), vec![LaunchType::Ec2, LaunchType::Fargate]);
    assert_eq!(
        ContainerCondition::values(),
        vec![
            ContainerCondition::Start,
            ContainerCondition::Complete,
            ContainerCondition::Success,
            ContainerCondition::Healthy
        ]
    );
    assert_eq!(
        ClusterField::VARIANTS,
        &["ATTACHMENTS", "SETTINGS", "STATISTICS", "TAGS"]
    );
}

#[test]
fn test_every_constant_round_trips() {
    assert_round_trips::<AgentUpdateStatus>();
    assert_round_trips::<Compatibility>();
    assert_round_trips::<IpcMode>();
    assert_round_trips::<LogDriver>();
    assert_round_trips::<NetworkMode>();
    assert_round_trips::<TaskStopCode>();
    assert_round_trips::<UlimitName>();
    assert_round_trips::<ServiceErrorKind>();
    assert_round_trips::<ContainerInstanceStatus>();
    assert_round_trips::<SettingName>();
    assert_round_trips::<ResourceType>();
}

#[test]
fn test_serde_and_display_agree() {
    fn assert_agree<E: WireEnum + serde::Serialize + std::fmt::Display>() {
        for value in E::values() {
            assert_eq!(
                serde_json::to_value(value).unwrap(),
                serde_json::Value::String(value.to_string())
            );
            assert_eq!(value.to_string(), value.as_str());
        }
    }

    assert_agree::<AgentUpdateStatus>();
    assert_agree::<ContainerInstanceStatus>();
    assert_agree::<DeploymentControllerType>();
    assert_agree::<EnvironmentFileType>();
    assert_agree::<IpcMode>();
    assert_agree::<LaunchType>();
    assert_agree::<LogDriver>();
    assert_agree::<NetworkMode>();
    assert_agree::<PlacementConstraintType>();
    assert_agree::<ResourceType>();
    assert_agree::<SettingName>();
    assert_agree::<StabilityStatus>();
    assert_agree::<TargetType>();
    assert_agree::<TaskStopCode>();
}

#[test]
fn test_multi_word_and_irregular_literals() {
    assert_eq!(
        ContainerInstanceStatus::RegistrationFailed.as_str(),
        "REGISTRATION_FAILED"
    );
    assert_eq!(StabilityStatus::SteadyState.as_str(), "STEADY_STATE");
    assert_eq!(
        SettingName::ContainerInstanceLongArnFormat.as_str(),
        "containerInstanceLongArnFormat"
    );
    assert_eq!(ResourceType::Gpu.as_str(), "GPU");
    assert_eq!(LaunchType::Ec2.as_str(), "EC2");
    assert_eq!(EnvironmentFileType::S3.as_str(), "s3");
    assert_eq!(
        serde_json::from_str::<ContainerInstanceStatus>(r#""REGISTRATION_FAILED""#).unwrap(),
        ContainerInstanceStatus::RegistrationFailed
    );
    assert!(serde_json::from_str::<ResourceType>(r#""INFERENCE_ACCELERATOR""#).is_err());
}

#[test]
fn test_from_str_matches_from_value() {
    assert_eq!("awslogs".parse::<LogDriver>().unwrap(), LogDriver::Awslogs);
    assert!("AWSLOGS".parse::<LogDriver>().is_err());
}

#[test]
fn test_serde_uses_wire_literal() {
    assert_eq!(
        serde_json::to_string(&TaskStopCode::EssentialContainerExited).unwrap(),
        r#""EssentialContainerExited""#
    );
    assert_eq!(
        serde_json::from_str::<UlimitName>(r#""memlock""#).unwrap(),
        UlimitName::Memlock
    );
    assert!(serde_json::from_str::<LaunchType>(r#""EXTERNAL""#).is_err());
}

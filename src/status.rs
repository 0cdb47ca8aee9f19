//! Deployment status records.
//!
//! A [`ProjectStatus`] is rebuilt from the environment on every request and
//! dropped once the response is written. Nothing here can fail: an unset or
//! empty variable resolves to its documented default.

use serde::Serialize;

use crate::config::{
    EnvSource, DEFAULT_BUILD, DEFAULT_CLUSTER, DEFAULT_DESCRIPTION, DEFAULT_MESSAGE,
    DEFAULT_PROJECT_NAME, DEFAULT_REGION, DEFAULT_REPOSITORY, DEFAULT_SERVICE, DEFAULT_STATUS,
    DEFAULT_TASK_DEFINITION, DEFAULT_VERSION, LOGO_FILE, STATIC_URL_PREFIX,
};

/// A person credited on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contributor {
    pub name: &'static str,
    pub role: &'static str,
    pub contribution: &'static str,
}

/// Fixed contributor list, in display order.
pub const CONTRIBUTORS: &[Contributor] = &[
    Contributor {
        name: "Platform Engineering",
        role: "Pipeline Owner",
        contribution: "CodePipeline stages and CodeBuild buildspec",
    },
    Contributor {
        name: "Cloud Operations",
        role: "Infrastructure",
        contribution: "ECS cluster, service and task definition",
    },
    Contributor {
        name: "Application Team",
        role: "Developer",
        contribution: "Status API and dashboard",
    },
];

/// Deployment metadata served by `/`.
///
/// Field order is the JSON key order, so serialization is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStatus {
    pub project_name: String,
    pub description: String,
    pub cluster: String,
    pub service: String,
    pub task_definition: String,
    pub region: String,
    pub repository: String,
    pub status: String,
    pub message: String,
    pub contributors: Vec<Contributor>,
}

impl ProjectStatus {
    pub fn resolve(env: &dyn EnvSource) -> Self {
        Self {
            project_name: env.var_or("PROJECT_NAME", DEFAULT_PROJECT_NAME),
            description: env.var_or("PROJECT_DESCRIPTION", DEFAULT_DESCRIPTION),
            cluster: env.var_or("CLUSTER_NAME", DEFAULT_CLUSTER),
            service: env.var_or("SERVICE_NAME", DEFAULT_SERVICE),
            task_definition: env.var_or("TASK_DEF", DEFAULT_TASK_DEFINITION),
            region: env.var_or("AWS_REGION", DEFAULT_REGION),
            repository: env.var_or("REPOSITORY", DEFAULT_REPOSITORY),
            status: env.var_or("APP_STATUS", DEFAULT_STATUS),
            message: env.var_or("APP_MESSAGE", DEFAULT_MESSAGE),
            contributors: CONTRIBUTORS.to_vec(),
        }
    }
}

/// Payload for `/version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub version: String,
    pub build: String,
}

impl VersionInfo {
    pub fn resolve(env: &dyn EnvSource) -> Self {
        Self {
            version: env.var_or("APP_VERSION", DEFAULT_VERSION),
            build: env.var_or("CODEBUILD_BUILD_NUMBER", DEFAULT_BUILD),
        }
    }
}

/// Payload for `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub const HEALTHY: Health = Health { status: "healthy" };
}

/// Logo shown on the dashboard.
///
/// `LOGO_URL` wins when set. Otherwise the bundled logo is used if the static
/// directory is mounted, and an empty string (text placeholder) if it is not.
pub fn resolve_logo_url(env: &dyn EnvSource, static_mounted: bool) -> String {
    match env.var("LOGO_URL") {
        Some(url) => url,
        None if static_mounted => format!("{}/{}", STATIC_URL_PREFIX, LOGO_FILE),
        None => String::new(),
    }
}

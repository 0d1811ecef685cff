//! Project and equipment records shown on the admin page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both lists start with two seed entries each time the admin page mounts.
//! Records are immutable once created; there is no edit path.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::store::Entity;

/// A customer deployment project.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub project_name: String,
    pub customer: String,
    pub oem: String,
    pub operator: String,
    pub activity: String,
    pub no_of_sites: u32,
}

/// A piece of field equipment with an optional inline picture.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Equipment {
    pub id: String,
    pub title: String,
    pub description: String,
    /// `data:` URL of the picture; `None` renders a placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Entity for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Equipment {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Projects present when the admin page first renders.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_owned(),
            project_name: "Site Expansion Phase 1".to_owned(),
            customer: "Teleco Lanka".to_owned(),
            oem: "Ericsson".to_owned(),
            operator: "Dialog".to_owned(),
            activity: "Installation".to_owned(),
            no_of_sites: 35,
        },
        Project {
            id: "2".to_owned(),
            project_name: "Fiber Rollout North".to_owned(),
            customer: "ConnectNet".to_owned(),
            oem: "Huawei".to_owned(),
            operator: "SLT".to_owned(),
            activity: "Maintenance".to_owned(),
            no_of_sites: 55,
        },
    ]
}

/// Equipment present when the admin page first renders.
pub fn seed_equipment() -> Vec<Equipment> {
    vec![
        Equipment {
            id: "1".to_owned(),
            title: "Fiber Optic Splicing Unit".to_owned(),
            description: "Precision equipment for seamless fiber connections".to_owned(),
            image: None,
        },
        Equipment {
            id: "2".to_owned(),
            title: "OTDR Testing Equipment".to_owned(),
            description: "Advanced diagnostics for network quality assurance".to_owned(),
            image: None,
        },
    ]
}

//! Admin panel controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns both entity lists, both drafts and the active tab for one visit to
//! the admin page. Every user action maps to one method here; methods return
//! the `Notice` to show (or `None` for silent no-ops) and leave rendering to
//! the page.
//!
//! DESIGN
//! ======
//! Stores are held behind `Repository`, so swapping `MemoryStore` for a
//! durable backend only changes the type parameters below.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use super::catalog::{Equipment, Project, seed_equipment, seed_projects};
use super::draft::{EquipmentDraft, ProjectDraft};
use super::notice::Notice;
use super::store::{MemoryStore, Repository};
use crate::util::id::mint_id;
use crate::util::image::ImageLoadError;

const READ_FAILED_MESSAGE: &str = "Could not read image file";

/// Admin page tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Projects,
    Equipment,
}

impl AdminTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Equipment => "Equipment",
        }
    }
}

/// State for one admin page visit.
#[derive(Clone, Debug)]
pub struct AdminState<P = MemoryStore<Project>, E = MemoryStore<Equipment>> {
    pub projects: P,
    pub equipment: E,
    pub project_draft: ProjectDraft,
    pub equipment_draft: EquipmentDraft,
    pub tab: AdminTab,
}

impl AdminState {
    /// Fresh state with the two seed entries in each list.
    pub fn seeded() -> Self {
        Self::with_stores(
            MemoryStore::with_entries(seed_projects()),
            MemoryStore::with_entries(seed_equipment()),
        )
    }
}

impl<P, E> AdminState<P, E>
where
    P: Repository<Project>,
    E: Repository<Equipment>,
{
    pub fn with_stores(projects: P, equipment: E) -> Self {
        Self {
            projects,
            equipment,
            project_draft: ProjectDraft::default(),
            equipment_draft: EquipmentDraft::default(),
            tab: AdminTab::default(),
        }
    }

    /// Validate the project draft and append it as a new project.
    ///
    /// On failure the list and the draft are left untouched.
    pub fn submit_project(&mut self) -> Notice {
        let valid = match self.project_draft.validate() {
            Ok(valid) => valid,
            Err(e) => return Notice::error(e.to_string()),
        };
        let project = Project {
            id: mint_id(),
            project_name: valid.project_name,
            customer: valid.customer,
            oem: valid.oem,
            operator: valid.operator,
            activity: valid.activity,
            no_of_sites: valid.no_of_sites,
        };
        let id = project.id.clone();
        if let Err(e) = self.projects.insert(project) {
            log::warn!("project insert rejected: {e}");
            return Notice::error("Project could not be added");
        }
        log::info!("project created: {id}");
        self.project_draft.reset();
        Notice::success("Project added successfully")
    }

    /// Validate the equipment draft and append it as new equipment.
    pub fn submit_equipment(&mut self) -> Notice {
        let valid = match self.equipment_draft.validate() {
            Ok(valid) => valid,
            Err(e) => return Notice::error(e.to_string()),
        };
        let item = Equipment {
            id: mint_id(),
            title: valid.title,
            description: valid.description,
            image: valid.image,
        };
        let id = item.id.clone();
        if let Err(e) = self.equipment.insert(item) {
            log::warn!("equipment insert rejected: {e}");
            return Notice::error("Equipment could not be added");
        }
        log::info!("equipment created: {id}");
        self.equipment_draft.reset();
        Notice::success("Equipment added successfully")
    }

    /// Remove the project with `id`. Absent ids are a silent no-op.
    pub fn delete_project(&mut self, id: &str) -> Option<Notice> {
        let removed = self.projects.remove(id)?;
        log::info!("project deleted: {}", removed.id);
        Some(Notice::success("Project deleted"))
    }

    /// Remove the equipment with `id`. Absent ids are a silent no-op.
    pub fn delete_equipment(&mut self, id: &str) -> Option<Notice> {
        let removed = self.equipment.remove(id)?;
        log::info!("equipment deleted: {}", removed.id);
        Some(Notice::success("Equipment deleted"))
    }

    pub fn select_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    /// Register a new image selection; the returned generation goes back
    /// into [`Self::apply_image`] when the read completes.
    pub fn begin_image_read(&mut self) -> u64 {
        self.equipment_draft.begin_image_read()
    }

    /// Completion hook for an image read started from the equipment form.
    ///
    /// Success replaces the draft image; failure keeps whatever was there and
    /// reports the problem. Results from a read that was superseded by a
    /// submit, a removal or a newer selection are discarded without a notice.
    pub fn apply_image(&mut self, generation: u64, result: Result<String, ImageLoadError>) -> Option<Notice> {
        if generation != self.equipment_draft.image_generation() {
            log::debug!("discarding stale image read {generation}");
            return None;
        }
        match result {
            Ok(data_url) => {
                self.equipment_draft.set_image(generation, data_url);
                None
            }
            Err(e) => {
                log::warn!("image load failed: {e}");
                Some(Notice::error(READ_FAILED_MESSAGE))
            }
        }
    }
}

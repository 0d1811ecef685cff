//! Form drafts for pending project and equipment entries.
//!
//! DESIGN
//! ======
//! Drafts buffer raw input exactly as typed. `update` never validates;
//! `validate` runs once at submit time and yields trimmed values ready to be
//! turned into a record.
//!
//! Image reads finish asynchronously, so the equipment draft stamps each
//! read with a generation. Anything that invalidates the pending image
//! (reset, clear, a newer selection) bumps it, and late results carrying an
//! older generation are dropped.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

/// Why a draft could not be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Please fill all fields")]
    MissingFields,
    #[error("Number of sites must be a whole number, got \"{0}\"")]
    InvalidSiteCount(String),
    #[error("Number of sites is too large: {0}")]
    SiteCountTooLarge(String),
}

/// Parse the leading decimal digits of `raw`, ignoring any trailing text.
///
/// `"10abc"` and `"1.5"` read as 10 and 1. A sign other than `+` or no
/// leading digit at all is invalid.
///
/// # Errors
///
/// `InvalidSiteCount` when there are no leading digits, `SiteCountTooLarge`
/// when they overflow `u32`.
pub fn parse_site_count(raw: &str) -> Result<u32, DraftError> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return Err(DraftError::InvalidSiteCount(trimmed.to_owned()));
    }
    digits
        .parse::<u32>()
        .map_err(|_| DraftError::SiteCountTooLarge(digits.to_owned()))
}

/// Editable fields of the project form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectField {
    ProjectName,
    Customer,
    Oem,
    Operator,
    Activity,
    NoOfSites,
}

/// Raw project form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub project_name: String,
    pub customer: String,
    pub oem: String,
    pub operator: String,
    pub activity: String,
    pub no_of_sites: String,
}

/// Validated project fields, minus the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidProject {
    pub project_name: String,
    pub customer: String,
    pub oem: String,
    pub operator: String,
    pub activity: String,
    pub no_of_sites: u32,
}

impl ProjectDraft {
    pub fn get(&self, field: ProjectField) -> &str {
        match field {
            ProjectField::ProjectName => &self.project_name,
            ProjectField::Customer => &self.customer,
            ProjectField::Oem => &self.oem,
            ProjectField::Operator => &self.operator,
            ProjectField::Activity => &self.activity,
            ProjectField::NoOfSites => &self.no_of_sites,
        }
    }

    pub fn update(&mut self, field: ProjectField, value: String) {
        let slot = match field {
            ProjectField::ProjectName => &mut self.project_name,
            ProjectField::Customer => &mut self.customer,
            ProjectField::Oem => &mut self.oem,
            ProjectField::Operator => &mut self.operator,
            ProjectField::Activity => &mut self.activity,
            ProjectField::NoOfSites => &mut self.no_of_sites,
        };
        *slot = value;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check that every field is filled and the site count is a non-negative integer.
    ///
    /// # Errors
    ///
    /// `MissingFields` if any field is blank, otherwise whatever
    /// [`parse_site_count`] reports for `no_of_sites`.
    pub fn validate(&self) -> Result<ValidProject, DraftError> {
        let [project_name, customer, oem, operator, activity, sites] = [
            &self.project_name,
            &self.customer,
            &self.oem,
            &self.operator,
            &self.activity,
            &self.no_of_sites,
        ]
        .map(|v| v.trim());
        if [project_name, customer, oem, operator, activity, sites]
            .iter()
            .any(|v| v.is_empty())
        {
            return Err(DraftError::MissingFields);
        }
        let no_of_sites = parse_site_count(sites)?;
        Ok(ValidProject {
            project_name: project_name.to_owned(),
            customer: customer.to_owned(),
            oem: oem.to_owned(),
            operator: operator.to_owned(),
            activity: activity.to_owned(),
            no_of_sites,
        })
    }
}

/// Editable text fields of the equipment form. The image has its own setters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquipmentField {
    Title,
    Description,
}

/// Raw equipment form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquipmentDraft {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    image_generation: u64,
}

/// Validated equipment fields, minus the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidEquipment {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

impl EquipmentDraft {
    pub fn get(&self, field: EquipmentField) -> &str {
        match field {
            EquipmentField::Title => &self.title,
            EquipmentField::Description => &self.description,
        }
    }

    pub fn update(&mut self, field: EquipmentField, value: String) {
        match field {
            EquipmentField::Title => self.title = value,
            EquipmentField::Description => self.description = value,
        }
    }

    /// Start a new image read and return the generation its result must carry.
    pub fn begin_image_read(&mut self) -> u64 {
        self.image_generation += 1;
        self.image_generation
    }

    /// Generation of the most recent read; older results are stale.
    pub fn image_generation(&self) -> u64 {
        self.image_generation
    }

    /// Store a finished read. Returns `false` and leaves the draft untouched
    /// if `generation` is no longer current.
    pub fn set_image(&mut self, generation: u64, data_url: String) -> bool {
        if generation != self.image_generation {
            return false;
        }
        self.image = Some(data_url);
        true
    }

    pub fn clear_image(&mut self) {
        self.image = None;
        self.image_generation += 1;
    }

    pub fn reset(&mut self) {
        let generation = self.image_generation + 1;
        *self = Self { image_generation: generation, ..Self::default() };
    }

    /// Check that title and description are filled. The image is optional.
    ///
    /// # Errors
    ///
    /// `MissingFields` if title or description is blank.
    pub fn validate(&self) -> Result<ValidEquipment, DraftError> {
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(DraftError::MissingFields);
        }
        Ok(ValidEquipment {
            title: title.to_owned(),
            description: description.to_owned(),
            image: self.image.clone().filter(|url| !url.is_empty()),
        })
    }
}

use projectboard_core::AppConfig;
use serde::Deserialize;
use thiserror::Error;

/// A project as entered by a user or read from a seed file, before the
/// store has seen it. The store trusts its callers, so every draft passes
/// through [`ProjectDraft::validate`] first.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DraftError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Description must be at least {min} characters")]
    DescriptionTooShort { min: usize },

    #[error("People must be between {min} and {max}")]
    PeopleOutOfRange { min: u32, max: u32 },
}

/// The limits a draft is checked against, lifted out of [`AppConfig`] so
/// callers that never load a config file can build them directly.
#[derive(Debug, Clone, Copy)]
pub struct DraftRules {
    pub people_min: u32,
    pub people_max: u32,
    pub description_min_len: usize,
}

impl DraftRules {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            people_min: config.people_min,
            people_max: config.people_max,
            description_min_len: config.description_min_len,
        }
    }
}

impl Default for DraftRules {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl ProjectDraft {
    pub fn validate(&self, rules: &DraftRules) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.description.trim().chars().count() < rules.description_min_len {
            return Err(DraftError::DescriptionTooShort {
                min: rules.description_min_len,
            });
        }
        if self.people < rules.people_min || self.people > rules.people_max {
            return Err(DraftError::PeopleOutOfRange {
                min: rules.people_min,
                max: rules.people_max,
            });
        }
        Ok(())
    }
}

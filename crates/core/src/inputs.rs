//! Validated inputs for Account Directory and Idea Ledger operations.
//!
//! Constructors normalize raw request fields (trim, absent -> empty);
//! validation runs separately through [`crate::validation::check`].

use std::fmt;

use validator::Validate;

use crate::types::DbId;
use crate::validation::normalize;

/// Input to `Register`.
#[derive(Clone, Validate)]
pub struct Registration {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl Registration {
    /// Passwords are taken verbatim; surrounding whitespace is significant.
    pub fn new(
        full_name: Option<String>,
        phone_number: Option<String>,
        password: Option<String>,
    ) -> Self {
        Self {
            full_name: normalize(full_name),
            phone_number: normalize(phone_number),
            password: password.unwrap_or_default(),
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("full_name", &self.full_name)
            .field("phone_number", &self.phone_number)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Input to `Authenticate`.
#[derive(Clone, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl Credentials {
    pub fn new(phone_number: Option<String>, password: Option<String>) -> Self {
        Self {
            phone_number: normalize(phone_number),
            password: password.unwrap_or_default(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("phone_number", &self.phone_number)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Input to `Submit`. All six fields are required.
#[derive(Debug, Clone, Validate)]
pub struct IdeaSubmission {
    #[validate(length(min = 1, message = "Idea text is required"))]
    pub text: String,
    #[validate(length(min = 1, message = "Project is required"))]
    pub project: String,
    #[validate(length(min = 1, message = "Module is required"))]
    pub module: String,
    #[validate(length(min = 1, message = "Section is required"))]
    pub section: String,
    #[validate(length(min = 1, message = "Submitter name is required"))]
    pub submitted_by: String,
    #[validate(range(min = 1, message = "User id is required"))]
    pub owner_id: DbId,
}

impl IdeaSubmission {
    pub fn new(
        text: Option<String>,
        project: Option<String>,
        module: Option<String>,
        section: Option<String>,
        submitted_by: Option<String>,
        owner_id: Option<DbId>,
    ) -> Self {
        Self {
            text: normalize(text),
            project: normalize(project),
            module: normalize(module),
            section: normalize(section),
            submitted_by: normalize(submitted_by),
            owner_id: owner_id.unwrap_or_default(),
        }
    }
}

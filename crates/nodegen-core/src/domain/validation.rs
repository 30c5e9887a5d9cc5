use crate::domain::error::DomainError;

/// Longest package name the npm registry accepts.
pub const MAX_NAME_LEN: usize = 214;

/// Centralized domain validation.
pub struct DomainValidator;

impl DomainValidator {
    /// Check a project name against npm's package naming rules.
    ///
    /// Scoped names (`@scope/name`) are accepted; each part is checked on its own.
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(invalid("name cannot exceed 214 characters"));
        }
        if name.trim() != name {
            return Err(invalid("name cannot have leading or trailing spaces"));
        }

        let bare = match name.strip_prefix('@') {
            Some(scoped) => {
                let (scope, bare) = scoped
                    .split_once('/')
                    .ok_or_else(|| invalid("scoped name must look like @scope/name"))?;
                Self::validate_segment(scope).map_err(|reason| invalid(reason))?;
                bare
            }
            None => name,
        };

        if bare.starts_with('.') || bare.starts_with('_') {
            return Err(invalid("name cannot start with '.' or '_'"));
        }
        Self::validate_segment(bare).map_err(|reason| invalid(reason))
    }

    fn validate_segment(segment: &str) -> Result<(), &'static str> {
        if segment.is_empty() {
            return Err("name segment cannot be empty");
        }
        if segment.chars().any(char::is_uppercase) {
            return Err("name cannot contain uppercase letters");
        }
        if segment.chars().any(char::is_whitespace) {
            return Err("name cannot contain spaces");
        }
        if !segment
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_' | '~'))
        {
            return Err("name can only contain URL-friendly characters");
        }
        Ok(())
    }
}

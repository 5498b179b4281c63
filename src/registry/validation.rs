//! Construction-time checks for the command table.
//!
//! Matching is first-match-wins over lowercase names, so the table itself has
//! to guarantee that every command can be reached.

use crate::error::TableError;

use super::CommandDescriptor;

/// A name must be non-empty, lowercase, trimmed, and use single spaces
/// between words.
pub fn validate_name(name: &str) -> Result<(), TableError> {
    if name.trim().is_empty() {
        return Err(TableError::EmptyName);
    }
    let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    if normalized != name {
        return Err(TableError::NotNormalized {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Validate a full descriptor list in table order.
///
/// Rejects duplicates and any name that is a word-prefix of a later name:
/// `view` ahead of `view logs` would swallow every `view logs ...` input.
pub fn validate_descriptors(descriptors: &[CommandDescriptor]) -> Result<(), TableError> {
    for (i, d) in descriptors.iter().enumerate() {
        validate_name(d.name)?;
        for later in descriptors.iter().skip(i + 1) {
            if later.name == d.name {
                return Err(TableError::Duplicate {
                    name: d.name.to_string(),
                });
            }
            if d.matches(later.name) {
                return Err(TableError::Shadowed {
                    earlier: d.name.to_string(),
                    later: later.name.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::ExternalContext;
    use crate::registry::{CommandCategory, CommandInput, CommandOutput};

    fn noop(_input: &CommandInput<'_>, _ctx: &ExternalContext) -> CommandOutput {
        CommandOutput::text("")
    }

    fn d(name: &'static str) -> CommandDescriptor {
        CommandDescriptor {
            name,
            description: "",
            category: CommandCategory::System,
            action: noop,
        }
    }

    #[test]
    fn rejects_bad_names() {
        assert_eq!(validate_name("  "), Err(TableError::EmptyName));
        assert!(matches!(validate_name("Status"), Err(TableError::NotNormalized { .. })));
        assert!(matches!(validate_name(" status"), Err(TableError::NotNormalized { .. })));
        assert!(matches!(validate_name("view  logs"), Err(TableError::NotNormalized { .. })));
        assert!(validate_name("view logs").is_ok());
    }

    #[test]
    fn rejects_duplicates() {
        let err = validate_descriptors(&[d("alerts"), d("status"), d("alerts")]).unwrap_err();
        assert_eq!(err, TableError::Duplicate { name: "alerts".into() });
    }

    #[test]
    fn rejects_shadowing_prefix() {
        let err = validate_descriptors(&[d("view"), d("view logs")]).unwrap_err();
        assert_eq!(
            err,
            TableError::Shadowed {
                earlier: "view".into(),
                later: "view logs".into()
            }
        );
    }

    #[test]
    fn longer_name_first_is_fine() {
        assert!(validate_descriptors(&[d("view logs"), d("view")]).is_ok());
        // Substrings that are not word-prefixes do not shadow.
        assert!(validate_descriptors(&[d("status"), d("vehicle status")]).is_ok());
    }
}

//! Final name templates
//!
//! Renders `@{token}@` expressions against artifact coordinates to name the
//! classes archive, e.g. `@{artifactId}@-@{version}@.@{extension}@`.

use std::fmt;

use crate::domain::entities::ArtifactCoordinates;
use crate::domain::ports::ArchiveNamer;

/// Template used when none is configured.
pub const DEFAULT_FINAL_NAME: &str = "@{artifactId}@-@{version}@@{dashClassifier?}@.@{extension}@";

/// Extension of the classes archive.
pub const ARCHIVE_EXTENSION: &str = "jar";

/// Errors raised while rendering a final name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// `@{` without a closing `}@`
    Unterminated { template: String },
    /// Expression not known to the renderer
    UnknownToken { token: String },
    /// Expression known but without a value for these coordinates
    MissingValue { token: String },
    /// Rendered name is empty or not a plain file name
    InvalidName { name: String },
}

impl fmt::Display for NamingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingError::Unterminated { template } => {
                write!(f, "unterminated expression in '{}'", template)
            }
            NamingError::UnknownToken { token } => write!(f, "unknown expression '@{{{}}}@'", token),
            NamingError::MissingValue { token } => {
                write!(f, "no value for expression '@{{{}}}@'", token)
            }
            NamingError::InvalidName { name } => write!(f, "invalid archive name '{}'", name),
        }
    }
}

impl std::error::Error for NamingError {}

/// A parsed-on-demand final name template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalNameTemplate {
    template: String,
}

impl Default for FinalNameTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_FINAL_NAME)
    }
}

impl FinalNameTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Render the template for `coordinates`.
    pub fn render(&self, coordinates: &ArtifactCoordinates) -> Result<String, NamingError> {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("@{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after.find("}@").ok_or_else(|| NamingError::Unterminated {
                template: self.template.clone(),
            })?;
            out.push_str(&resolve_token(&after[..end], coordinates)?);
            rest = &after[end + 2..];
        }
        out.push_str(rest);

        if out.is_empty() || out.contains('/') || out.contains('\\') || out == "." || out == ".." {
            return Err(NamingError::InvalidName { name: out });
        }
        Ok(out)
    }
}

impl ArchiveNamer for FinalNameTemplate {
    fn resolve_archive_name(
        &self,
        coordinates: &ArtifactCoordinates,
    ) -> Result<String, NamingError> {
        self.render(coordinates)
    }
}

fn resolve_token(token: &str, coords: &ArtifactCoordinates) -> Result<String, NamingError> {
    let classifier = coords.classifier.as_deref();
    let value = match token.trim() {
        "groupId" => coords.group_id.clone(),
        "artifactId" => coords.artifact_id.clone(),
        "version" | "baseVersion" => coords.version.clone(),
        "extension" | "type" => ARCHIVE_EXTENSION.to_string(),
        "classifier" => classifier.unwrap_or_default().to_string(),
        "dashClassifier" => match classifier {
            Some(c) => format!("-{}", c),
            None => {
                return Err(NamingError::MissingValue {
                    token: token.to_string(),
                })
            }
        },
        "dashClassifier?" => classifier.map(|c| format!("-{}", c)).unwrap_or_default(),
        _ => {
            return Err(NamingError::UnknownToken {
                token: token.to_string(),
            })
        }
    };
    Ok(value)
}

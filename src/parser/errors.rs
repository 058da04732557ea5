//! Error output helpers
// (c) 2024 Ross Younger

use figment::error::{Kind, OneOf};

/// A newtype wrapper giving readable messages for option file errors
#[derive(Debug)]
pub struct ConfigFileError(figment::Error);

impl From<figment::Error> for ConfigFileError {
    fn from(value: figment::Error) -> Self {
        Self(value)
    }
}

impl ConfigFileError {
    fn fmt_kind(kind: &Kind, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match kind {
            Kind::InvalidType(v, exp) => write!(f, "invalid type: found {v}, expected {exp}"),
            Kind::UnknownVariant(v, exp) => {
                write!(f, "unknown variant: found {v}, expected {}", OneOf(*exp))
            }
            _ => std::fmt::Display::fmt(&kind, f),
        }
    }
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let e = &self.0;
        Self::fmt_kind(&e.kind, f)?;
        if !e.path.is_empty() {
            write!(f, " for key `{}`", e.path.join("."))?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

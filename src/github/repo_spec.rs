use crate::Result;
use core::fmt::{Display, Formatter};
use ohno::bail;

/// A repository reference parsed from an `owner/name` configuration entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    owner: Box<str>,
    name: Box<str>,
}

impl RepoSpec {
    pub fn parse(spec: &str) -> Result<Self> {
        let mut segments = spec.split('/');
        let owner = segments.next().unwrap_or_default();
        let name = segments.next().unwrap_or_default();

        if owner.is_empty() || name.is_empty() || segments.next().is_some() {
            bail!("repository spec '{spec}' is not of the form owner/name");
        }

        Ok(Self {
            owner: Box::from(owner),
            name: Box::from(name),
        })
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let spec = RepoSpec::parse("ergoplatform/sigma-rust").unwrap();
        assert_eq!(spec.owner(), "ergoplatform");
        assert_eq!(spec.name(), "sigma-rust");
        assert_eq!(spec.to_string(), "ergoplatform/sigma-rust");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let _ = RepoSpec::parse("just-a-name").unwrap_err();
        let _ = RepoSpec::parse("/missing-owner").unwrap_err();
        let _ = RepoSpec::parse("missing-name/").unwrap_err();
        let _ = RepoSpec::parse("too/many/segments").unwrap_err();
    }
}

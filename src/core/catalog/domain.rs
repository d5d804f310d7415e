/// Text-domain filter applied while building a catalog.
///
/// Matching is exact textual equality against the raw domain token, so a
/// filter of `$test` matches `_e( "Name", $test )` and `TEST` matches
/// `_e( "Name", TEST )`. A call without a domain argument only passes when no
/// filter is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DomainFilter {
    /// No filter: every record is accepted.
    #[default]
    Any,
    /// Only records whose domain token equals this text.
    Exact(String),
}

impl DomainFilter {
    pub fn exact(domain: impl Into<String>) -> Self {
        Self::Exact(domain.into())
    }

    pub fn accepts(&self, domain_token: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(domain) => domain_token == Some(domain.as_str()),
        }
    }
}

impl From<Option<String>> for DomainFilter {
    fn from(domain: Option<String>) -> Self {
        domain.map_or(Self::Any, Self::Exact)
    }
}

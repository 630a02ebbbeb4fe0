use super::super::domain::PathwayKind;

/// Optional collaborator that supplies market context for a recommended pathway.
///
/// Implementations must not block scoring; returning `None` selects the locale placeholder.
pub trait MarketIntelligence: Send + Sync {
    fn lookup(&self, title: &str, description: &str, pathway: PathwayKind) -> Option<String>;
}

/// Default collaborator used when no provider is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableIntelligence;

impl MarketIntelligence for UnavailableIntelligence {
    fn lookup(&self, _title: &str, _description: &str, _pathway: PathwayKind) -> Option<String> {
        None
    }
}

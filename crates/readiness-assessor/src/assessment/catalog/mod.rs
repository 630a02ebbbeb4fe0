//! Versioned, read-only question content for every framework and locale.
//!
//! The catalog is built once at start-up (either the built-in tables or a JSON override) and
//! shared behind an `Arc`. Lookups for a locale that lacks content fall back to the primary
//! locale, so a validated catalog always answers.

mod irl;
mod mrl;
mod tcp;
mod trl;

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{
    Dimension, DimensionKind, Framework, FrameworkKind, Level, Locale, Pathway, PathwayKind,
};

pub const STANDARD_CATALOG_VERSION: &str = "2025.2";

static EMPTY_PATHWAY_CATALOG: PathwayCatalog = PathwayCatalog {
    dimensions: Vec::new(),
    pathways: Vec::new(),
};

/// Dimensions and pathways for the commercialization pathway framework.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayCatalog {
    pub dimensions: Vec<Dimension>,
    pub pathways: Vec<Pathway>,
}

impl PathwayCatalog {
    pub fn dimension(&self, kind: DimensionKind) -> Option<&Dimension> {
        self.dimensions
            .iter()
            .find(|dimension| dimension.kind == kind)
    }

    pub fn pathway(&self, kind: PathwayKind) -> Option<&Pathway> {
        self.pathways.iter().find(|pathway| pathway.kind == kind)
    }

    /// Localized pathway name, or the canonical label when the catalog lacks it.
    pub fn pathway_name(&self, kind: PathwayKind) -> &str {
        self.pathway(kind)
            .map(|pathway| pathway.name.as_str())
            .unwrap_or_else(|| kind.label())
    }
}

/// Content for a single locale. Missing sections fall back to the primary locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleCatalog {
    #[serde(default)]
    pub trl: Vec<Level>,
    #[serde(default)]
    pub irl: Vec<Level>,
    #[serde(default)]
    pub mrl: Vec<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp: Option<PathwayCatalog>,
}

impl LocaleCatalog {
    /// Level table for a maturity framework; empty for the pathway framework.
    pub fn levels(&self, framework: Framework) -> &[Level] {
        match framework {
            Framework::Trl => &self.trl,
            Framework::Irl => &self.irl,
            Framework::Mrl => &self.mrl,
            Framework::Tcp => &[],
        }
    }

    fn provides(&self, framework: Framework) -> bool {
        match framework.kind() {
            FrameworkKind::Maturity => !self.levels(framework).is_empty(),
            FrameworkKind::Pathway => self.tcp.is_some(),
        }
    }
}

/// Catalog content shaped the way the question endpoint returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CatalogView {
    Levels(Vec<Level>),
    Pathway(PathwayCatalog),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalog {
    version: String,
    locales: BTreeMap<Locale, LocaleCatalog>,
}

impl ContentCatalog {
    /// Validate and wrap catalog content.
    pub fn new(
        version: impl Into<String>,
        locales: BTreeMap<Locale, LocaleCatalog>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            version: version.into(),
            locales,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Built-in tables shipped with the crate.
    pub fn standard() -> Self {
        let mut locales = BTreeMap::new();
        locales.insert(
            Locale::English,
            LocaleCatalog {
                trl: trl::english(),
                irl: irl::english(),
                mrl: mrl::english(),
                tcp: Some(tcp::english()),
            },
        );
        locales.insert(
            Locale::Filipino,
            LocaleCatalog {
                trl: trl::filipino(),
                irl: irl::filipino(),
                mrl: Vec::new(),
                tcp: Some(tcp::filipino()),
            },
        );

        Self {
            version: STANDARD_CATALOG_VERSION.to_string(),
            locales,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_reader(reader)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.locales.keys().copied()
    }

    /// Locale whose content actually serves `framework` for a requested locale.
    pub fn serving_locale(&self, framework: Framework, requested: Locale) -> Locale {
        match self.locales.get(&requested) {
            Some(content) if content.provides(framework) => requested,
            _ => Locale::PRIMARY,
        }
    }

    pub fn levels(&self, framework: Framework, locale: Locale) -> &[Level] {
        let serving = self.serving_locale(framework, locale);
        self.locales
            .get(&serving)
            .map(|content| content.levels(framework))
            .unwrap_or(&[])
    }

    pub fn pathway_catalog(&self, locale: Locale) -> &PathwayCatalog {
        let serving = self.serving_locale(Framework::Tcp, locale);
        self.locales
            .get(&serving)
            .and_then(|content| content.tcp.as_ref())
            .unwrap_or(&EMPTY_PATHWAY_CATALOG)
    }

    pub fn view(&self, framework: Framework, locale: Locale) -> CatalogView {
        match framework.kind() {
            FrameworkKind::Maturity => CatalogView::Levels(self.levels(framework, locale).to_vec()),
            FrameworkKind::Pathway => CatalogView::Pathway(self.pathway_catalog(locale).clone()),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let primary = self
            .locales
            .get(&Locale::PRIMARY)
            .ok_or(CatalogError::MissingPrimaryLocale)?;

        for framework in Framework::ordered() {
            if !primary.provides(framework) {
                return Err(CatalogError::MissingFramework {
                    locale: Locale::PRIMARY,
                    framework,
                });
            }
        }

        for (locale, content) in &self.locales {
            for framework in Framework::ordered() {
                validate_levels(*locale, framework, content.levels(framework))?;
            }
            if let Some(pathways) = &content.tcp {
                validate_pathways(*locale, pathways)?;
            }
        }

        Ok(())
    }
}

fn validate_levels(locale: Locale, framework: Framework, levels: &[Level]) -> Result<(), CatalogError> {
    let Some(range) = framework.level_range() else {
        return Ok(());
    };

    let mut previous: Option<u8> = None;
    for level in levels {
        if !range.contains(&level.index) {
            return Err(CatalogError::LevelOutOfRange {
                locale,
                framework,
                index: level.index,
            });
        }
        if previous.is_some_and(|prior| prior >= level.index) {
            return Err(CatalogError::LevelOrder {
                locale,
                framework,
                index: level.index,
            });
        }
        previous = Some(level.index);
    }

    Ok(())
}

fn validate_pathways(locale: Locale, catalog: &PathwayCatalog) -> Result<(), CatalogError> {
    let found: Vec<DimensionKind> = catalog
        .dimensions
        .iter()
        .map(|dimension| dimension.kind)
        .collect();
    if found != DimensionKind::ordered() {
        return Err(CatalogError::DimensionLayout { locale, found });
    }

    for dimension in &catalog.dimensions {
        if dimension.question_count() != dimension.kind.question_count() {
            return Err(CatalogError::QuestionCount {
                locale,
                dimension: dimension.kind,
                expected: dimension.kind.question_count(),
                found: dimension.question_count(),
            });
        }
    }

    let found: Vec<PathwayKind> = catalog.pathways.iter().map(|pathway| pathway.kind).collect();
    if found != PathwayKind::ordered() {
        return Err(CatalogError::PathwayOrder { locale, found });
    }

    Ok(())
}

/// Reasons a catalog is rejected at load time.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no content for the primary locale")]
    MissingPrimaryLocale,
    #[error("primary locale '{}' has no {} content", .locale.tag(), .framework.key())]
    MissingFramework { locale: Locale, framework: Framework },
    #[error("{} level {index} is outside the framework range ({})", .framework.key(), .locale.tag())]
    LevelOutOfRange {
        locale: Locale,
        framework: Framework,
        index: u8,
    },
    #[error("{} levels must be strictly ascending; level {index} is out of order ({})", .framework.key(), .locale.tag())]
    LevelOrder {
        locale: Locale,
        framework: Framework,
        index: u8,
    },
    #[error("pathway dimensions for '{}' must follow the fixed layout, found {found:?}", .locale.tag())]
    DimensionLayout {
        locale: Locale,
        found: Vec<DimensionKind>,
    },
    #[error("dimension {dimension:?} for '{}' needs {expected} questions, found {found}", .locale.tag())]
    QuestionCount {
        locale: Locale,
        dimension: DimensionKind,
        expected: usize,
        found: usize,
    },
    #[error("pathways for '{}' must list the seven candidates in catalog order, found {found:?}", .locale.tag())]
    PathwayOrder {
        locale: Locale,
        found: Vec<PathwayKind>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_passes_validation() {
        let catalog = ContentCatalog::standard();
        catalog.validate().expect("built-in tables are valid");
        assert_eq!(catalog.version(), STANDARD_CATALOG_VERSION);
        assert_eq!(catalog.levels(Framework::Trl, Locale::English).len(), 10);
        assert_eq!(catalog.levels(Framework::Irl, Locale::Filipino).len(), 9);
        assert_eq!(catalog.levels(Framework::Mrl, Locale::English).len(), 9);
    }

    #[test]
    fn missing_locale_content_falls_back_to_primary() {
        let catalog = ContentCatalog::standard();
        assert_eq!(
            catalog.serving_locale(Framework::Mrl, Locale::Filipino),
            Locale::English
        );
        assert_eq!(
            catalog.levels(Framework::Mrl, Locale::Filipino)[0].title,
            "Market Need Identification"
        );
        assert_eq!(
            catalog.serving_locale(Framework::Trl, Locale::Filipino),
            Locale::Filipino
        );
    }

    #[test]
    fn view_matches_framework_shape() {
        let catalog = ContentCatalog::standard();
        match catalog.view(Framework::Tcp, Locale::Filipino) {
            CatalogView::Pathway(content) => {
                assert_eq!(content.dimensions.len(), 6);
                assert_eq!(content.pathways.len(), 7);
                assert_eq!(content.dimensions[0].name, "Technology at Product Readiness");
            }
            other => panic!("expected pathway content, got {other:?}"),
        }
        assert!(matches!(
            catalog.view(Framework::Irl, Locale::English),
            CatalogView::Levels(levels) if levels[0].index == 1
        ));
    }

    #[test]
    fn rejects_descending_levels() {
        let mut locales = BTreeMap::new();
        let mut content = LocaleCatalog {
            trl: trl::english(),
            irl: irl::english(),
            mrl: mrl::english(),
            tcp: Some(tcp::english()),
        };
        content.irl.swap(0, 1);
        locales.insert(Locale::English, content);

        let err = ContentCatalog::new("test", locales).expect_err("order enforced");
        assert!(matches!(
            err,
            CatalogError::LevelOrder {
                framework: Framework::Irl,
                ..
            }
        ));
    }

    #[test]
    fn rejects_wrong_question_count() {
        let mut locales = BTreeMap::new();
        let mut pathways = tcp::english();
        pathways.dimensions[3].questions.pop();
        locales.insert(
            Locale::English,
            LocaleCatalog {
                trl: trl::english(),
                irl: irl::english(),
                mrl: mrl::english(),
                tcp: Some(pathways),
            },
        );

        let err = ContentCatalog::new("test", locales).expect_err("layout enforced");
        assert!(matches!(
            err,
            CatalogError::QuestionCount {
                dimension: DimensionKind::Regulatory,
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn rejects_catalog_without_primary_locale() {
        let mut locales = BTreeMap::new();
        locales.insert(Locale::Filipino, LocaleCatalog::default());
        let err = ContentCatalog::new("test", locales).expect_err("primary required");
        assert!(matches!(err, CatalogError::MissingPrimaryLocale));
    }

    #[test]
    fn json_catalog_round_trips_through_reader() {
        let json = serde_json::to_vec(&ContentCatalog::standard()).expect("serializes");
        let loaded = ContentCatalog::from_reader(json.as_slice()).expect("loads");
        assert_eq!(loaded, ContentCatalog::standard());
    }

    #[test]
    fn json_catalog_requires_pathway_content() {
        let json = r#"{
            "version": "custom-1",
            "locales": {
                "english": {
                    "trl": [{ "level": 0, "title": "Idea", "checks": ["Is there an idea?"] }],
                    "irl": [{ "level": 1, "title": "Opportunity", "checks": ["Is there a market?"] }],
                    "mrl": [{ "level": 1, "title": "Need", "checks": ["Is there a need?"] }]
                }
            }
        }"#;

        let err = ContentCatalog::from_reader(json.as_bytes()).expect_err("tcp content required");
        assert!(matches!(
            err,
            CatalogError::MissingFramework {
                framework: Framework::Tcp,
                ..
            }
        ));
    }
}

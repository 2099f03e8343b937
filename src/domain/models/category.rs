//! Subject categories and the static catalog refreshed by the batch job.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Suffix appended to a category code to form its object key.
pub const DOCUMENT_SUFFIX: &str = ".json";

/// A subject classification code such as `cs.LG` or `cond-mat.stat-mech`.
///
/// Used both as the upstream `cat:` query filter and as the cache partition
/// key. Codes are non-empty and limited to ASCII alphanumerics, `.`, `-` and `_`
/// so they can never escape their object key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn parse(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let valid = !code.is_empty()
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
        if valid {
            Ok(Self(code))
        } else {
            Err(DomainError::InvalidCategory(code))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Object key of the cached document for this category.
    pub fn object_key(&self) -> String {
        format!("{}{}", self.0, DOCUMENT_SUFFIX)
    }

    /// Upstream search query selecting this category.
    pub fn search_query(&self) -> String {
        format!("cat:{}", self.0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

/// Broad research field used to group catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Mathematics")]
    Mathematics,
    #[serde(rename = "Physics")]
    Physics,
    #[serde(rename = "Biology")]
    Biology,
    #[serde(rename = "Finance")]
    Finance,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ComputerScience => "Computer Science",
            Self::Mathematics => "Mathematics",
            Self::Physics => "Physics",
            Self::Biology => "Biology",
            Self::Finance => "Finance",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for one catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub field: Field,
}

impl CategoryInfo {
    const fn new(
        code: &'static str,
        name: &'static str,
        description: &'static str,
        field: Field,
    ) -> Self {
        Self {
            code,
            name,
            description,
            field,
        }
    }

    pub fn category(&self) -> Category {
        Category(self.code.to_string())
    }
}

/// Categories refreshed by the batch job, in refresh order.
#[rustfmt::skip]
pub const CATALOG: &[CategoryInfo] = &[
    CategoryInfo::new("cs.LG", "Machine Learning", "Latest ML research and algorithms", Field::ComputerScience),
    CategoryInfo::new("cs.AI", "Artificial Intelligence", "AI systems and methodologies", Field::ComputerScience),
    CategoryInfo::new("cs.CL", "Natural Language Processing", "Language understanding and generation", Field::ComputerScience),
    CategoryInfo::new("cs.CV", "Computer Vision", "Image and video analysis", Field::ComputerScience),
    CategoryInfo::new("cs.CR", "Cryptography", "Security and cryptographic systems", Field::ComputerScience),
    CategoryInfo::new("cs.RO", "Robotics", "Robotic systems and automation", Field::ComputerScience),
    CategoryInfo::new("cs.SE", "Software Engineering", "Software development methodologies", Field::ComputerScience),
    CategoryInfo::new("cs.DB", "Databases", "Database systems and theory", Field::ComputerScience),
    CategoryInfo::new("cs.OS", "Operating Systems", "Operating system design and implementation", Field::ComputerScience),
    CategoryInfo::new("cs.PL", "Programming Languages", "Programming language theory and design", Field::ComputerScience),
    CategoryInfo::new("math.CO", "Combinatorics", "Discrete mathematics and combinatorics", Field::Mathematics),
    CategoryInfo::new("math.PR", "Probability", "Probability theory and stochastic processes", Field::Mathematics),
    CategoryInfo::new("math.ST", "Statistics", "Statistical theory and methods", Field::Mathematics),
    CategoryInfo::new("math.NT", "Number Theory", "Pure number theory research", Field::Mathematics),
    CategoryInfo::new("math.AG", "Algebraic Geometry", "Geometric algebra and algebraic varieties", Field::Mathematics),
    CategoryInfo::new("math.MG", "Metric Geometry", "Geometric analysis and metric spaces", Field::Mathematics),
    CategoryInfo::new("math.DS", "Dynamical Systems", "Dynamical systems and chaos theory", Field::Mathematics),
    CategoryInfo::new("math.FA", "Functional Analysis", "Functional analysis and operator theory", Field::Mathematics),
    CategoryInfo::new("astro-ph.CO", "Cosmology", "Cosmological models and observations", Field::Physics),
    CategoryInfo::new("astro-ph.HE", "High Energy Astrophysics", "High energy phenomena in space", Field::Physics),
    CategoryInfo::new("astro-ph.GA", "Galaxies", "Galaxy formation and evolution", Field::Physics),
    CategoryInfo::new("cond-mat.mes-hall", "Mesoscale Physics", "Nanoscale and mesoscale systems", Field::Physics),
    CategoryInfo::new("cond-mat.soft", "Soft Condensed Matter", "Soft matter and complex fluids", Field::Physics),
    CategoryInfo::new("cond-mat.stat-mech", "Statistical Mechanics", "Statistical mechanics and thermodynamics", Field::Physics),
    CategoryInfo::new("physics.optics", "Optics", "Optical systems and photonics", Field::Physics),
    CategoryInfo::new("physics.plasm-ph", "Plasma Physics", "Plasma physics and fusion", Field::Physics),
    CategoryInfo::new("physics.bio-ph", "Biological Physics", "Physics of biological systems", Field::Physics),
    CategoryInfo::new("quant-ph", "Quantum Physics", "Quantum mechanics and computing", Field::Physics),
    CategoryInfo::new("q-bio.BM", "Biomolecules", "Molecular biology and biochemistry", Field::Biology),
    CategoryInfo::new("q-bio.NC", "Neurons and Cognition", "Neuroscience and cognitive science", Field::Biology),
    CategoryInfo::new("q-fin.CP", "Computational Finance", "Mathematical finance and economics", Field::Finance),
];

/// All catalog categories as parsed codes.
pub fn catalog_categories() -> Vec<Category> {
    CATALOG.iter().map(CategoryInfo::category).collect()
}

/// Look up display metadata for a code.
pub fn catalog_entry(code: &str) -> Option<&'static CategoryInfo> {
    CATALOG.iter().find(|info| info.code == code)
}

//! Value types flowing in and out of the scorer - behavior lives WITH data

use std::fmt;

use scraper::Html;
use serde::{Deserialize, Serialize};

use crate::extractor::PageExtractor;

// ====== Input ======

/// SEO fields of one page or page section, as edited in the CMS.
///
/// Every field is optional; an empty string and a missing field score the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
}

impl SeoMetadata {
    /// Parse an HTML document and read its SEO tags.
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        PageExtractor::extract_seo(&document)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn keywords(&self) -> &str {
        self.keywords.as_deref().unwrap_or("")
    }

    pub fn og_title(&self) -> &str {
        self.og_title.as_deref().unwrap_or("")
    }

    pub fn og_description(&self) -> &str {
        self.og_description.as_deref().unwrap_or("")
    }

    pub fn og_image(&self) -> &str {
        self.og_image.as_deref().unwrap_or("")
    }

    pub fn canonical_url(&self) -> &str {
        self.canonical_url.as_deref().unwrap_or("")
    }

    /// True when no field carries any text.
    pub fn is_blank(&self) -> bool {
        [
            &self.title,
            &self.description,
            &self.keywords,
            &self.og_title,
            &self.og_description,
            &self.og_image,
            &self.canonical_url,
        ]
        .iter()
        .all(|f| f.as_deref().map_or(true, str::is_empty))
    }
}

// ====== Per-check output ======

/// The seven checks, in the order they appear in every `SeoScore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Title,
    Description,
    Keywords,
    Canonical,
    OgTitle,
    OgDescription,
    OgImage,
}

impl CheckKind {
    pub const ALL: [CheckKind; 7] = [
        CheckKind::Title,
        CheckKind::Description,
        CheckKind::Keywords,
        CheckKind::Canonical,
        CheckKind::OgTitle,
        CheckKind::OgDescription,
        CheckKind::OgImage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::Title => "Title Length (30-65 chars)",
            CheckKind::Description => "Meta Description (120-160 chars)",
            CheckKind::Keywords => "Meta Keywords",
            CheckKind::Canonical => "Canonical URL",
            CheckKind::OgTitle => "Open Graph Title",
            CheckKind::OgDescription => "Open Graph Description",
            CheckKind::OgImage => "Open Graph Image",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    Present,
    Missing,
}

impl Presence {
    pub fn of(present: bool) -> Self {
        if present {
            Presence::Present
        } else {
            Presence::Missing
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Present => "Present",
            Presence::Missing => "Missing",
        }
    }
}

/// What a check measured: a character count or a presence flag.
///
/// Serialized as a bare number or the strings `"Present"` / `"Missing"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckValue {
    Length(usize),
    Presence(Presence),
}

impl fmt::Display for CheckValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckValue::Length(n) => write!(f, "{} chars", n),
            CheckValue::Presence(p) => f.write_str(p.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoCheckResult {
    pub label: String,
    pub value: CheckValue,
    pub score: u8,
    pub pass: bool,
    pub recommendation: String,
}

impl SeoCheckResult {
    pub fn new(kind: CheckKind, value: CheckValue, score: u8, recommendation: &str) -> Self {
        Self {
            label: kind.label().to_string(),
            value,
            score,
            pass: score == 100,
            recommendation: recommendation.to_string(),
        }
    }
}

// ====== Aggregate output ======

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoScore {
    /// Rounded mean of the check scores, 0-100.
    pub total: u8,
    pub checks: Vec<SeoCheckResult>,
}

impl SeoScore {
    pub fn check(&self, kind: CheckKind) -> Option<&SeoCheckResult> {
        self.checks.get(kind.index())
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.pass).count()
    }

    pub fn failing(&self) -> impl Iterator<Item = &SeoCheckResult> {
        self.checks.iter().filter(|c| !c.pass)
    }
}

// ====== Page report ======

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// The check scored nothing.
    Critical,
    /// Partial credit (60 or 70).
    Warning,
}

impl IssueSeverity {
    pub fn for_score(score: u8) -> Self {
        if score == 0 {
            IssueSeverity::Critical
        } else {
            IssueSeverity::Warning
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueSeverity::Critical => "critical",
            IssueSeverity::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoIssue {
    pub section: String,
    pub check: String,
    pub severity: IssueSeverity,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    pub name: String,
    /// Whether any metadata object was supplied for the section.
    pub configured: bool,
    pub score: SeoScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSeoReport {
    pub sections: Vec<SectionScore>,
    /// Page-wide score; sections totalling 0 are left out of the mean.
    pub overall: u8,
    pub issues: Vec<SeoIssue>,
}

impl PageSeoReport {
    /// Mean over sections that were given metadata at all, zero totals included.
    pub fn configured_overall(&self) -> u8 {
        let totals: Vec<u8> = self
            .sections
            .iter()
            .filter(|s| s.configured)
            .map(|s| s.score.total)
            .collect();
        crate::service::scorer::rounded_mean(&totals)
    }

    pub fn section(&self, name: &str) -> Option<&SectionScore> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn critical_count(&self) -> usize {
        self.count(IssueSeverity::Critical)
    }

    pub fn warning_count(&self) -> usize {
        self.count(IssueSeverity::Warning)
    }

    fn count(&self, severity: IssueSeverity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

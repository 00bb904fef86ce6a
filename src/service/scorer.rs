//! SEO completeness scoring.
//!
//! Seven independent checks, each worth 0-100, averaged with equal weight.
//! Both entry points are total: absent metadata and absent fields just score 0.

use crate::domain::models::{CheckKind, CheckValue, Presence, SeoCheckResult, SeoMetadata, SeoScore};

// Length windows (inclusive) and partial-credit floors
const TITLE_MIN: usize = 30;
const TITLE_MAX: usize = 65;
const TITLE_PARTIAL_ABOVE: usize = 10;
const TITLE_PARTIAL_SCORE: u8 = 60;

const DESC_MIN: usize = 120;
const DESC_MAX: usize = 160;
const DESC_PARTIAL_FROM: usize = 80;
const DESC_PARTIAL_SCORE: u8 = 70;

pub const TITLE_TOO_SHORT: &str = "Title is too short. Aim for 30-65 characters including your main keyword.";
pub const TITLE_TOO_LONG: &str = "Title is too long and will be truncated in search results. Keep it under 65 characters.";
pub const TITLE_OK: &str = "Perfect title length.";

pub const DESC_TOO_SHORT: &str = "Meta description is too short. Aim for 120-160 characters.";
pub const DESC_TOO_LONG: &str = "Meta description is too long and will be truncated. Keep it under 160 characters.";
pub const DESC_OK: &str = "Perfect meta description length.";

pub const KEYWORDS_MISSING: &str = "Add a few comma-separated keywords for this page.";
pub const KEYWORDS_OK: &str = "Keywords are set.";

pub const CANONICAL_MISSING: &str = "Add a canonical URL to avoid duplicate content.";
pub const CANONICAL_NOT_ABSOLUTE: &str = "Canonical URL must be an absolute http(s) URL.";
pub const CANONICAL_OK: &str = "Canonical URL is set.";

pub const OG_TITLE_MISSING: &str = "Add an Open Graph title (or a page title) for social previews.";
pub const OG_TITLE_OK: &str = "Open Graph title is available.";

pub const OG_DESC_MISSING: &str = "Add an Open Graph description (or a meta description) for social previews.";
pub const OG_DESC_OK: &str = "Open Graph description is available.";

pub const OG_IMAGE_MISSING: &str = "Add an Open Graph image so links render with a preview.";
pub const OG_IMAGE_OK: &str = "Open Graph image is set.";

/// Score one metadata object. `None` is treated like an empty object.
pub fn compute_seo_score(seo: Option<&SeoMetadata>) -> SeoScore {
    let empty = SeoMetadata::default();
    let seo = seo.unwrap_or(&empty);

    let checks = vec![
        check_title(seo),
        check_description(seo),
        check_keywords(seo),
        check_canonical(seo),
        check_og_title(seo),
        check_og_description(seo),
        check_og_image(seo),
    ];

    let scores: Vec<u8> = checks.iter().map(|c| c.score).collect();
    SeoScore {
        total: rounded_mean(&scores),
        checks,
    }
}

/// Page-wide score over several sections.
///
/// Sections whose total is 0 are dropped before averaging, so a section that
/// was never configured does not drag the page down. A configured section that
/// fails every check is dropped the same way.
pub fn compute_overall_score(sections: &[Option<SeoMetadata>]) -> u8 {
    let totals: Vec<u8> = sections
        .iter()
        .map(|s| compute_seo_score(s.as_ref()).total)
        .collect();
    overall_from_totals(&totals)
}

pub(crate) fn overall_from_totals(totals: &[u8]) -> u8 {
    let scored: Vec<u8> = totals.iter().copied().filter(|&t| t > 0).collect();
    rounded_mean(&scored)
}

/// Mean rounded half-up; 0 for an empty slice.
pub(crate) fn rounded_mean(values: &[u8]) -> u8 {
    if values.is_empty() {
        return 0;
    }
    let sum: u32 = values.iter().map(|&v| u32::from(v)).sum();
    (f64::from(sum) / values.len() as f64).round() as u8
}

/// Length as the CMS editors count it (UTF-16 code units).
fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn check_title(seo: &SeoMetadata) -> SeoCheckResult {
    let len = text_len(seo.title());
    let score = if (TITLE_MIN..=TITLE_MAX).contains(&len) {
        100
    } else if len > TITLE_PARTIAL_ABOVE {
        TITLE_PARTIAL_SCORE
    } else {
        0
    };
    let recommendation = if len < TITLE_MIN {
        TITLE_TOO_SHORT
    } else if len > TITLE_MAX {
        TITLE_TOO_LONG
    } else {
        TITLE_OK
    };
    SeoCheckResult::new(CheckKind::Title, CheckValue::Length(len), score, recommendation)
}

fn check_description(seo: &SeoMetadata) -> SeoCheckResult {
    let len = text_len(seo.description());
    let score = if (DESC_MIN..=DESC_MAX).contains(&len) {
        100
    } else if len >= DESC_PARTIAL_FROM {
        DESC_PARTIAL_SCORE
    } else {
        0
    };
    let recommendation = if len < DESC_MIN {
        DESC_TOO_SHORT
    } else if len > DESC_MAX {
        DESC_TOO_LONG
    } else {
        DESC_OK
    };
    SeoCheckResult::new(
        CheckKind::Description,
        CheckValue::Length(len),
        score,
        recommendation,
    )
}

fn check_keywords(seo: &SeoMetadata) -> SeoCheckResult {
    let present = !seo.keywords().trim().is_empty();
    presence_check(CheckKind::Keywords, present, KEYWORDS_OK, KEYWORDS_MISSING)
}

fn check_canonical(seo: &SeoMetadata) -> SeoCheckResult {
    let url = seo.canonical_url();
    let present = !url.is_empty();
    let (score, recommendation) = if !present {
        (0, CANONICAL_MISSING)
    } else if !url.starts_with("http") {
        (0, CANONICAL_NOT_ABSOLUTE)
    } else {
        (100, CANONICAL_OK)
    };
    SeoCheckResult::new(
        CheckKind::Canonical,
        CheckValue::Presence(Presence::of(present)),
        score,
        recommendation,
    )
}

fn check_og_title(seo: &SeoMetadata) -> SeoCheckResult {
    let present = !seo.og_title().is_empty() || !seo.title().is_empty();
    presence_check(CheckKind::OgTitle, present, OG_TITLE_OK, OG_TITLE_MISSING)
}

fn check_og_description(seo: &SeoMetadata) -> SeoCheckResult {
    let present = !seo.og_description().is_empty() || !seo.description().is_empty();
    presence_check(CheckKind::OgDescription, present, OG_DESC_OK, OG_DESC_MISSING)
}

fn check_og_image(seo: &SeoMetadata) -> SeoCheckResult {
    let present = !seo.og_image().is_empty();
    presence_check(CheckKind::OgImage, present, OG_IMAGE_OK, OG_IMAGE_MISSING)
}

fn presence_check(kind: CheckKind, present: bool, ok: &str, missing: &str) -> SeoCheckResult {
    let (score, recommendation) = if present { (100, ok) } else { (0, missing) };
    SeoCheckResult::new(kind, CheckValue::Presence(Presence::of(present)), score, recommendation)
}

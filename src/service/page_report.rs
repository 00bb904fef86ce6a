//! PageReport - scores a set of named page sections and builds a page-wide report.

use futures::future::join_all;
use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::models::{IssueSeverity, PageSeoReport, SectionScore, SeoIssue, SeoMetadata};
use crate::service::http::fetch_seo;
use crate::service::scorer::{compute_seo_score, overall_from_totals};

/// Collects sections in display order, then scores them in one go.
#[derive(Debug, Default)]
pub struct PageReport {
    sections: Vec<(String, Option<SeoMetadata>)>,
}

impl PageReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section; `None` means the section has no SEO metadata configured.
    pub fn section(mut self, name: impl Into<String>, seo: Option<SeoMetadata>) -> Self {
        self.sections.push((name.into(), seo));
        self
    }

    /// Fetch every URL concurrently and use each one as a section named after it.
    /// A page that cannot be fetched becomes an unconfigured section.
    pub async fn fetch(client: &Client, urls: &[String]) -> Self {
        let fetched = join_all(urls.iter().map(|url| fetch_seo(client, url))).await;
        urls.iter()
            .zip(fetched)
            .map(|(url, result)| {
                let seo = match result {
                    Ok(seo) => {
                        if seo.is_blank() {
                            debug!("No SEO tags found on {}", url);
                        }
                        Some(seo)
                    }
                    Err(e) => {
                        warn!("Skipping {}: {}", url, e);
                        None
                    }
                };
                (url.clone(), seo)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn build(self) -> PageSeoReport {
        let sections: Vec<SectionScore> = self
            .sections
            .into_iter()
            .map(|(name, seo)| SectionScore {
                score: compute_seo_score(seo.as_ref()),
                configured: seo.is_some(),
                name,
            })
            .collect();

        let totals: Vec<u8> = sections.iter().map(|s| s.score.total).collect();
        let overall = overall_from_totals(&totals);
        let issues = collect_issues(&sections);

        debug!(
            sections = sections.len(),
            overall,
            issues = issues.len(),
            "built page SEO report"
        );

        PageSeoReport {
            sections,
            overall,
            issues,
        }
    }
}

impl<S: Into<String>> FromIterator<(S, Option<SeoMetadata>)> for PageReport {
    fn from_iter<I: IntoIterator<Item = (S, Option<SeoMetadata>)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(PageReport::new(), |report, (name, seo)| report.section(name, seo))
    }
}

/// One issue per failing check of every configured section.
fn collect_issues(sections: &[SectionScore]) -> Vec<SeoIssue> {
    sections
        .iter()
        .filter(|s| s.configured)
        .flat_map(|section| {
            section.score.failing().map(move |check| SeoIssue {
                section: section.name.clone(),
                check: check.label.clone(),
                severity: IssueSeverity::for_score(check.score),
                recommendation: check.recommendation.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CheckKind;
    use crate::test_utils::{assertions, fixtures};

    #[test]
    fn keeps_section_order_and_configured_flag() {
        let report = PageReport::new()
            .section("banner", Some(fixtures::complete_metadata()))
            .section("about", None)
            .section("blog", Some(fixtures::partial_metadata()))
            .build();

        let names: Vec<&str> = report.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["banner", "about", "blog"]);
        assert!(report.section("banner").unwrap().configured);
        assert!(!report.section("about").unwrap().configured);
        assert_eq!(report.section("blog").unwrap().score.total, 61);
    }

    #[test]
    fn overall_matches_rollup_rule() {
        let report = PageReport::new()
            .section("banner", Some(fixtures::complete_metadata()))
            .section("about", None)
            .section("blog", Some(fixtures::partial_metadata()))
            .build();
        // (100 + 61) / 2
        assert_eq!(report.overall, 81);
    }

    #[test]
    fn configured_overall_counts_empty_sections() {
        let report = PageReport::new()
            .section("banner", Some(fixtures::complete_metadata()))
            .section("events", Some(SeoMetadata::default()))
            .section("testimonials", None)
            .build();
        assert_eq!(report.overall, 100);
        assert_eq!(report.configured_overall(), 50);
    }

    #[test]
    fn issues_cover_failing_checks_of_configured_sections() {
        let report = PageReport::new()
            .section("banner", Some(fixtures::complete_metadata()))
            .section("about", None)
            .section("blog", Some(fixtures::partial_metadata()))
            .build();

        // unconfigured and fully passing sections raise nothing
        assert!(report.issues.iter().all(|i| i.section == "blog"));
        assert_eq!(report.issues.len(), 4);

        let title = CheckKind::Title.label();
        let canonical = CheckKind::Canonical.label();
        assert_eq!(
            assertions::severity_of(&report.issues, "blog", title),
            Some(IssueSeverity::Warning)
        );
        assert_eq!(
            assertions::severity_of(&report.issues, "blog", canonical),
            Some(IssueSeverity::Critical)
        );
        assert!(!assertions::has_issue(&report.issues, "blog", CheckKind::Keywords.label()));
        assert_eq!(report.critical_count(), 2);
        assert_eq!(report.warning_count(), 2);
    }

    #[test]
    fn empty_report_scores_zero() {
        let report = PageReport::new().build();
        assert!(report.sections.is_empty());
        assert_eq!(report.overall, 0);
        assert_eq!(report.configured_overall(), 0);
    }

    #[tokio::test]
    async fn fetch_keeps_url_order_and_skips_failures() {
        let mut server = mockito::Server::new_async().await;
        let _ok = server
            .mock("GET", "/courses")
            .with_body(fixtures::page_html())
            .create_async()
            .await;
        let _gone = server
            .mock("GET", "/gone")
            .with_status(500)
            .create_async()
            .await;

        let urls = vec![
            format!("{}/gone", server.url()),
            format!("{}/courses", server.url()),
        ];
        let client = crate::service::create_client(&Default::default()).unwrap();
        let report = PageReport::fetch(&client, &urls).await.build();

        assert_eq!(report.sections[0].name, urls[0]);
        assert!(!report.sections[0].configured);
        assert!(report.sections[1].configured);
        assert_eq!(report.sections[1].score.total, 100);
        assert_eq!(report.overall, 100);
    }

    #[test]
    fn collects_from_iterator() {
        let report: PageReport = vec![("banner", None), ("blog", Some(fixtures::complete_metadata()))]
            .into_iter()
            .collect();
        assert_eq!(report.len(), 2);
        assert_eq!(report.build().overall, 100);
    }
}

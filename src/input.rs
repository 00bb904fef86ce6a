//! Reading metadata from JSON files exported by the CMS.

use std::path::Path;

use indexmap::IndexMap;

use crate::domain::models::SeoMetadata;
use crate::error::{AppError, Result};
use crate::service::PageReport;

/// One metadata object, or `null` for an unconfigured section.
pub fn read_metadata(path: &Path) -> Result<Option<SeoMetadata>> {
    let content = std::fs::read_to_string(path)?;
    parse_metadata(&content)
}

pub fn parse_metadata(json: &str) -> Result<Option<SeoMetadata>> {
    Ok(serde_json::from_str(json)?)
}

/// An object mapping section name to metadata (or `null`), in file order.
pub fn read_page(path: &Path) -> Result<PageReport> {
    let content = std::fs::read_to_string(path)?;
    parse_page(&content)
}

pub fn parse_page(json: &str) -> Result<PageReport> {
    let sections: IndexMap<String, Option<SeoMetadata>> = serde_json::from_str(json)
        .map_err(|e| AppError::parse(format!("expected an object of sections: {}", e)))?;
    Ok(sections.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn null_is_unconfigured() {
        assert_eq!(parse_metadata("null").unwrap(), None);
        assert_eq!(parse_metadata("{}").unwrap(), Some(SeoMetadata::default()));
    }

    #[test]
    fn page_sections_keep_file_order() {
        let json = r#"{"testimonials": null, "banner": {"title": "Hi"}, "about": {}}"#;
        let report = parse_page(json).unwrap().build();
        let names: Vec<&str> = report.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["testimonials", "banner", "about"]);
        assert!(!report.sections[0].configured);
    }

    #[test]
    fn page_must_be_an_object() {
        let err = parse_page("[1, 2]").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn reads_metadata_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"ogImage": "https://x/i.png"}}"#).unwrap();
        let seo = read_metadata(file.path()).unwrap().unwrap();
        assert_eq!(seo.og_image(), "https://x/i.png");
    }
}

// src/lib.rs

pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod input;
pub mod lifecycle;
pub mod reporter;
pub mod service;

pub use domain::models::{CheckKind, CheckValue, PageSeoReport, SeoCheckResult, SeoMetadata, SeoScore};
pub use service::{compute_overall_score, compute_seo_score, PageReport};

pub mod http;
pub mod page_report;
pub mod scorer;

pub use http::{create_client, fetch_html, fetch_seo};
pub use page_report::PageReport;
pub use scorer::{compute_overall_score, compute_seo_score};

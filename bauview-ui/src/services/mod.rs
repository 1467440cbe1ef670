//! Pipeline services: sources, normalization, lookups, caching

pub mod cache;
pub mod component_info;
pub mod github_source;
pub mod normalizer;
pub mod pipeline;
pub mod plan_image;
pub mod source;

pub use cache::FetchCache;
pub use component_info::ComponentInfoTable;
pub use github_source::GithubSource;
pub use plan_image::PlanImage;
pub use source::{RecordSource, UploadSource};

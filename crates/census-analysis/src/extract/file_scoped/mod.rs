//! File-scoped extractors — operate independently per file, no memory
//! across files.

pub mod dynamic_segment;
pub mod lint_config;
pub mod package_manager;
pub mod router_style;
pub mod runtime_pin;
pub mod tsconfig_strictness;

pub use dynamic_segment::DynamicSegmentExtractor;
pub use lint_config::LintConfigExtractor;
pub use package_manager::PackageManagerExtractor;
pub use router_style::RouterStyleExtractor;
pub use runtime_pin::RuntimePinExtractor;
pub use tsconfig_strictness::TsconfigStrictnessExtractor;

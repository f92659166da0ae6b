//! Repository-scoped extractors — require a view over the whole repository
//! after its file-scoped phase completes.

pub mod collocation;
pub mod locale_layout;

pub use collocation::CollocationExtractor;
pub use locale_layout::LocaleLayoutExtractor;

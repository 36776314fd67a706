pub mod byline;
pub mod context;
pub mod keyword;
pub mod section;

pub use byline::BylineExtractor;
pub use context::ContextExtractor;
pub use keyword::KeywordExtractor;
pub use section::SectionExtractor;

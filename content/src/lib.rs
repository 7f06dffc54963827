pub mod profile;
pub mod section;

pub use section::SectionId;

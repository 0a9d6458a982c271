pub mod document;
pub mod profile;
pub mod report;

pub use document::*;
pub use profile::*;
pub use report::*;

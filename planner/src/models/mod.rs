pub mod checksum;
pub mod course;
pub mod holidays;
pub mod plan;

pub use course::*;
pub use holidays::*;
pub use plan::*;

//! Page components

mod home;
mod section;

pub use home::Home;
pub use section::{NotFound, SectionPage};

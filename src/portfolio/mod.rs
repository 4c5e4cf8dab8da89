//! The portfolio: data model and page layout.
//!
//! [`Portfolio::load`] reads the JSON data file; [`Page::layout`] turns it
//! into styled lines with section anchors and a reserved title row.

mod model;
mod page;

pub use model::{CommunityRole, Experience, Link, PersonalInfo, Portfolio, Project, SkillGroup, Speaking};
pub use page::{Line, Page, Section, Span, Theme};

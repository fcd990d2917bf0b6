//! Form rendering module
//!
//! This module contains UI components for rendering the form:
//! - `field_renderer`: Input and error panel rendering
//! - `section_form`: The input sections
//! - `review`: Read-only summary with the final submit

mod field_renderer;
mod review;
mod section_form;

pub use review::draw_review;
pub use section_form::draw_section;

//! Page rendering stages.
//!
//! A page goes through [`IncludeExpander`], then [`collect_styles`], then
//! asset rewriting (see [`crate::assets`]), and finally [`minify_html`].

pub mod expand;
pub mod minify;
pub mod styles;

pub use expand::{Expanded, IncludeExpander};
pub use minify::minify_html;
pub use styles::collect_styles;

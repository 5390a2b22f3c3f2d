//! Builder style entry points that work on image files.
//!
//! Both builders collect their inputs first and do all the work in
//! `execute`, nothing is read or written before that.

pub mod hide;
pub mod unveil;

mod shared;

pub use shared::Keyword;

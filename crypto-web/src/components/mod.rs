//! Reusable markup fragments

pub mod alert;
pub mod result_card;

pub use alert::{render_alert, AlertKind};
pub use result_card::{render_pending, render_result_card};

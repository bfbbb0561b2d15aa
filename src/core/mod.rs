//! Core library components.

pub mod constants;
pub mod dispatch;
pub mod fetch;
pub mod form;
pub mod listing;
pub mod sink;

pub mod components;
pub mod document;
pub mod homepage;
pub mod layout;
pub mod topic;
pub mod viewer;

// Re-export commonly used functions from layout
pub use layout::{page, render, titled, Chrome};

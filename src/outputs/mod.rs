//! Output generation for scrape results.
//!
//! # Submodules
//!
//! - [`json`]: Writes article records and headline lists to JSON files
//!
//! # Output Structure
//!
//! ```text
//! output/
//! ├── news_scrapped.json   # articles command
//! └── bad_scrapped.json    # headlines command
//! ```
//!
//! Each run overwrites its file.

pub mod json;

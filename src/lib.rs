//! LearnIQ content pipeline
//!
//! Batch tools that turn downloaded topic images into the app's asset tree and
//! card catalog, and keep the two consistent:
//!
//! 1. `process_images` copies downloads into `assets/images` under canonical names
//! 2. `generate_cards` derives `cards.json` from the asset tree
//! 3. `fix_cards_data` reconciles topic counts and fills Ukrainian translations
//! 4. `optimize_images` downscales and recompresses the assets
//! 5. `validate_images` checks every card's image path
//! 6. `fix_withopacity` rewrites a deprecated Flutter API in the app sources

pub mod config;
pub mod constants;
pub mod error;
pub mod fixer;
pub mod formatter;
pub mod generator;
pub mod importer;
pub mod inference;
pub mod logging;
pub mod models;
pub mod normalizer;
pub mod optimizer;
pub mod validator;

pub use config::Config;
pub use error::{PipelineError, Result};

pub mod config;
pub mod content;
pub mod error;
pub mod types;

pub use config::{CampaignConfig, load_config};
pub use content::blog_posts;
pub use error::{Error, Result, ValidationError};
pub use types::*;

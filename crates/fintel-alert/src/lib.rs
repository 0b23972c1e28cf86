//! Alert rendering and Mattermost dispatch.

pub mod error;
pub mod message;
pub mod webhook;

pub use error::AlertError;
pub use message::{render_alert, MAX_RENDERED_FINDINGS};
pub use webhook::MattermostClient;

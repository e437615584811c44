//! Generates 1200x630 Open Graph social cards for blog posts: a procedural
//! green gradient background with a crosshatch grid overlay, and the post's
//! hero image scaled and centered on top.

#![forbid(unsafe_code)]

pub mod blur;
pub mod composite;
pub mod error;
pub mod gradient;
pub mod grid;
pub mod hero;
pub mod output;
pub mod pipeline;
pub mod surface;
pub mod theme;

pub use error::{CardError, CardResult};
pub use output::{card_path, card_url, validate_slug};
pub use pipeline::generate_card;
pub use surface::CardSurface;
pub use theme::{CARD_HEIGHT, CARD_WIDTH};

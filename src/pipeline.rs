use std::path::{Path, PathBuf};

use crate::{
    error::{CardError, CardResult},
    gradient, grid, hero, output,
    theme::{CARD_HEIGHT, CARD_WIDTH},
};

/// Generate the card for `slug` from `hero_path` and write it under
/// `root/assets/social/`. Returns the written path.
///
/// The stages run strictly forward: validate inputs, synthesize the
/// gradient, overlay the grid, composite the hero, write the PNG. Any
/// failure aborts before the output file appears.
#[tracing::instrument]
pub fn generate_card(hero_path: &Path, slug: &str, root: &Path) -> CardResult<PathBuf> {
    output::validate_slug(slug)?;
    if !hero_path.exists() {
        return Err(CardError::validation(format!(
            "hero image not found: {}",
            hero_path.display()
        )));
    }

    let mut canvas = gradient::synthesize(CARD_WIDTH, CARD_HEIGHT)?;
    grid::overlay_grid(&mut canvas)?;

    let hero = hero::load_hero(hero_path)?;
    hero::composite_hero(&mut canvas, &hero)?;

    let path = output::card_path(root, slug);
    output::write_card(&canvas, &path)?;
    tracing::debug!(path = %path.display(), "card written");
    Ok(path)
}

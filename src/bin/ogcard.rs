use std::path::{Path, PathBuf};

use clap::{Parser, error::ErrorKind};

/// Generate a 1200x630 Open Graph social card for a blog post.
///
/// Places the hero image centered on an amorphous green gradient with the
/// site's crosshatch line grid, and saves it to assets/social/og-<slug>.png.
///
/// Example: ogcard assets/blog/my-post/hero.png my-post
#[derive(Parser, Debug)]
#[command(name = "ogcard", version)]
struct Cli {
    /// Hero image to center on the card (any format the image crate decodes).
    hero: PathBuf,

    /// Post slug; the card is written to assets/social/og-<slug>.png.
    slug: String,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => {
            // Wrong arity prints usage on stdout and exits 1.
            println!("{err}");
            std::process::exit(1);
        }
    };

    let out_path = ogcard::card_path(Path::new("."), &cli.slug);
    println!("Generating {} ...", out_path.display());

    ogcard::generate_card(&cli.hero, &cli.slug, Path::new("."))?;

    println!("Done! Update your post's OG tags to point to:");
    println!("  {}", ogcard::card_url(&cli.slug));
    Ok(())
}

use super::{json_pretty, load, progress, revalidate, EXIT_SUCCESS};
use patchwork_swatch::{make_rng, SwatchGenerator};
use std::path::{Path, PathBuf};

/// Command-line values that replace the `[swatches]` section.
#[derive(Debug, Default)]
pub struct Overrides {
    pub out: Option<PathBuf>,
    pub seed: Option<u64>,
    pub size: Option<u32>,
}

pub fn run(config_path: Option<&Path>, overrides: Overrides, json: bool) -> Result<u8, String> {
    let mut config = load(config_path)?;
    let section = &mut config.swatches;
    if let Some(out) = overrides.out {
        section.out_dir = out;
    }
    if let Some(size) = overrides.size {
        section.size = size;
    }
    if overrides.seed.is_some() {
        section.seed = overrides.seed;
    }
    revalidate(&config)?;

    let section = &config.swatches;
    let generator = SwatchGenerator::new(&section.out_dir, section.size, section.quality);
    generator.prepare().map_err(|e| e.to_string())?;
    let mut rng = make_rng(section.seed);

    let pb = (!json).then(|| progress(section.styles.len() as u64));
    let mut written = Vec::with_capacity(section.styles.len());
    for style in &section.styles {
        if let Some(pb) = &pb {
            pb.set_message(style.name.clone());
        }
        let path = generator
            .generate_one(style, &mut rng)
            .map_err(|e| e.to_string())?;
        written.push(path);
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    if json {
        let payload = serde_json::json!({
            "out_dir": generator.out_dir(),
            "size": section.size,
            "seed": section.seed,
            "files": written,
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        for path in &written {
            println!("created {}", path.display());
        }
        println!(
            "{} sample image(s) written to {}",
            written.len(),
            generator.out_dir().display()
        );
    }
    Ok(EXIT_SUCCESS)
}

use image_effect::{
    Effect, ImageEffect, PngConfig,
    codec::{decode_file, write_png},
};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    let img_path = Path::new("data/test.png");

    let mut buffer = decode_file(img_path)?.buffer;
    ImageEffect::Complement.apply(&mut buffer)?;

    let size = write_png(&buffer, output_dir.join("complement_effect.png"), &PngConfig::new())?;

    println!("✓ Complement effect applied successfully!");
    println!("  Effect:   tmp/complement_effect.png ({size} bytes)");

    Ok(())
}

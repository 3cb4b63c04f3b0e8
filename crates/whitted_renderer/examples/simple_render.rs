//! Simple Whitted render example.
//!
//! Renders the built-in demo scene and saves it to PPM format.
//!
//! ```text
//! RUST_LOG=info cargo run --release --example simple_render
//! ```

use whitted_renderer::{render, save_image, RenderConfig, Scene};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let scene = Scene::demo();
    let config = RenderConfig::default().with_resolution(800, 450);

    let start = std::time::Instant::now();
    let image = render(&scene, &config)?;
    println!("Rendered {}x{} in {:?}", image.width, image.height, start.elapsed());

    let filename = std::path::Path::new("output.ppm");
    save_image(filename, &image)?;
    println!("Saved to {}", filename.display());

    Ok(())
}

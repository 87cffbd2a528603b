/// Native demo: renders tiled floor patterns and lists a texture library.
///
/// Usage: `texviz-demo [OUT_DIR] [TEXTURE_DIR]`
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use texviz::LogLevel;
    use texviz::logging::init_logging;

    init_logging(LogLevel::Info);

    let mut args = std::env::args().skip(1);
    let out_dir = std::path::PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    let texture_dir = args.next().map(std::path::PathBuf::from);

    if let Err(e) = demo::run(&out_dir, texture_dir.as_deref()) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::path::Path;

    use ndarray::{Array2, array};
    use texviz::Result;
    use texviz::library::TextureLibrary;
    use texviz::tiling::{apply_tiled_texture_to_floor, array_to_gray, fill_rect, tile_texture};

    /// Tile configurations written by the demo: (repeats, name).
    const TILE_SIZES: &[(usize, &str)] = &[(2, "small"), (5, "medium"), (10, "large")];

    pub fn run(out_dir: &Path, texture_dir: Option<&Path>) -> Result<()> {
        std::fs::create_dir_all(out_dir)?;

        let base: Array2<u8> = array![
            [255, 128, 255, 128],
            [128, 255, 128, 255],
            [255, 128, 255, 128],
            [128, 255, 128, 255]
        ];
        for &(reps, name) in TILE_SIZES {
            let tiled = tile_texture(base.view(), (reps, reps))?;
            let path = out_dir.join(format!("tiles_{}.png", name));
            array_to_gray(tiled.view()).save(&path)?;
            log::info!(
                "{} tiles ({}x{}): {:?} saved to {}",
                name,
                reps,
                reps,
                tiled.dim(),
                path.display()
            );
        }

        let mut floor = Array2::<u8>::zeros((400, 600));
        fill_rect(&mut floor, 200..350, 100..500, 128);
        let pattern: Array2<u8> = array![
            [200, 150, 200, 150],
            [150, 200, 150, 200],
            [200, 150, 200, 150],
            [150, 200, 150, 200]
        ];
        let blended = apply_tiled_texture_to_floor(floor.view(), pattern.view(), (100, 150))?;
        let path = out_dir.join("floor_with_tiles.png");
        array_to_gray(blended.view()).save(&path)?;
        log::info!("Tiled floor saved to {}", path.display());

        if let Some(dir) = texture_dir {
            let library = TextureLibrary::scan(dir)?;
            for name in library.names() {
                log::info!("  {} -> {}", name, texviz::library::texture_url(name));
            }
        }
        Ok(())
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}

use std::path::{Path, PathBuf};

use argh::FromArgs;

use linviz::image::Image;
use linviz::svd::{self, SvdDemoState};

#[derive(FromArgs, Debug)]
/// Decompose a synthetic image into color-space directions with the SVD.
struct Args {
    /// number of palette colors
    #[argh(option, short = 'c', default = "3")]
    colors: usize,

    /// number of painted shapes
    #[argh(option, short = 's', default = "3")]
    shapes: usize,

    /// rank of the approximation
    #[argh(option, short = 'r', default = "3")]
    rank: usize,

    /// seed of the shape layout
    #[argh(option, default = "0")]
    seed: u64,

    /// directory to write the png images to
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,
}

fn save_rgb(path: &Path, img: &Image<u8, 3>) -> Result<(), Box<dyn std::error::Error>> {
    image::save_buffer(
        path,
        img.as_slice(),
        img.width() as u32,
        img.height() as u32,
        image::ExtendedColorType::Rgb8,
    )?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn save_gray(path: &Path, img: &Image<u8, 1>) -> Result<(), Box<dyn std::error::Error>> {
    image::save_buffer(
        path,
        img.as_slice(),
        img.width() as u32,
        img.height() as u32,
        image::ExtendedColorType::L8,
    )?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let mut state = SvdDemoState::new(args.seed)?;
    state.set_complexity(args.colors, args.shapes)?;
    state.set_rank(args.rank);
    if state.current_rank() != args.rank {
        log::warn!(
            "rank {} clamped to {} for {} colors",
            args.rank,
            state.current_rank(),
            state.color_complexity()
        );
    }

    let decomposition = state.svd();
    println!(
        "{} colors, {} shapes, rank {}",
        state.color_complexity(),
        state.shape_complexity(),
        state.current_rank()
    );
    println!("σ = {:?}", decomposition.sigma);
    for (i, row) in decomposition.vt.iter().enumerate() {
        println!("v{} = [{:>7.4} {:>7.4} {:>7.4}]", i + 1, row[0], row[1], row[2]);
    }

    let Some(output) = args.output else {
        return Ok(());
    };
    std::fs::create_dir_all(&output)?;

    let size = state.image().size();
    save_rgb(&output.join("original.png"), state.image())?;
    save_rgb(
        &output.join(format!("rank_{}.png", state.current_rank())),
        &state.displayed_image()?,
    )?;
    save_rgb(
        &output.join(format!("top_channels_{}.png", state.current_rank())),
        &svd::reconstruct_top_channels(state.image(), state.current_rank())?,
    )?;

    for c in 0..svd::decomposition::NUM_COMPONENTS {
        save_rgb(
            &output.join(format!("component_{c}.png")),
            &svd::component_image(decomposition, size, c)?,
        )?;
        save_gray(
            &output.join(format!("u_column_{c}.png")),
            &svd::u_column_grayscale(decomposition, size, c)?,
        )?;
    }

    Ok(())
}

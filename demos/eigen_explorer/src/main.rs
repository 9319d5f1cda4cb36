use argh::FromArgs;

use linviz::explorer::{ExplorerState, Frame};
use linviz::linalg::EigenDecomposition;

#[derive(FromArgs, Debug)]
/// Inspect how a 2x2 matrix transforms the plane.
struct Args {
    /// matrix elements as `a11,a12,a21,a22`
    #[argh(option, short = 'm')]
    matrix: Option<String>,

    /// input vector as `v1,v2`
    #[argh(option, short = 'v')]
    vector: Option<String>,

    /// initial state as a query string, e.g. `matrix=0,-1,1,0&vector=1,0`
    #[argh(option, short = 'q')]
    query: Option<String>,

    /// print the whole frame as json
    #[argh(switch)]
    json: bool,
}

fn print_frame(frame: &Frame) {
    let m = frame.matrix;
    println!("A = [{:>8.3} {:>8.3}]", m.a11, m.a12);
    println!("    [{:>8.3} {:>8.3}]", m.a21, m.a22);
    println!("v = {:?}  Av = {:?}", frame.vector, frame.transformed);

    let t = &frame.transformation;
    println!(
        "basis x {:?} at {:.1}°, basis y {:?} at {:.1}°, det = {:.3}",
        t.basis_x, t.rotation_x, t.basis_y, t.rotation_y, t.determinant
    );

    match &frame.eigen {
        EigenDecomposition::RealDistinct {
            eigenvalue1,
            eigenvalue2,
            eigenvector1,
            eigenvector2,
        } => {
            println!("λ1 = {eigenvalue1:.3}, scaled eigenvector {eigenvector1:?}");
            println!("λ2 = {eigenvalue2:.3}, scaled eigenvector {eigenvector2:?}");
        }
        EigenDecomposition::Defective {
            eigenvalue,
            eigenvector,
        } => {
            println!("λ = {eigenvalue:.3} (defective), scaled eigenvector {eigenvector:?}");
        }
        EigenDecomposition::Complex(pair) => {
            println!(
                "λ = {:.3} ± {:.3}i, |λ| = {:.3}, arg λ = {:.1}°",
                pair.real_value,
                pair.imag_value,
                pair.magnitude(),
                pair.argument().to_degrees()
            );
        }
    }

    if let Some(trajectory) = &frame.trajectory {
        let points = trajectory.points();
        println!(
            "trajectory: {} samples over t ∈ [0, {:.3}], from {:?} to {:?}",
            trajectory.len(),
            trajectory.time_range(),
            points.first(),
            points.last()
        );
    }

    println!("?{}", frame.query);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // later parameters win, so explicit options override the query string
    let mut query = args.query.unwrap_or_default();
    if let Some(matrix) = &args.matrix {
        query.push_str(&format!("&matrix={matrix}"));
    }
    if let Some(vector) = &args.vector {
        query.push_str(&format!("&vector={vector}"));
    }

    let state = ExplorerState::from_query(&query);
    log::debug!("starting from {state:?}");

    let frame = state.frame()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
    } else {
        print_frame(&frame);
    }

    Ok(())
}

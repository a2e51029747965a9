//! Stroke Recall: Draw, Memorize, Damage, Complete
//!
//! Two drawings are stroked onto a headless canvas and memorized. Each is
//! then damaged (half erased with the eraser, or partly wiped at the
//! activation level) and handed back to the memory to complete.
//!
//! Run: cargo run --example stroke_recall --release
//! Trace the dynamics: RUST_LOG=hopfield=trace cargo run --example stroke_recall

use hopfield::{Canvas, Corruptor, Hopfield, MemoryConfig, RecallPolicy, Similarity};
use tracing_subscriber::EnvFilter;

const SIDE: usize = 6;
const BLOCK: f64 = 10.0;

// =============================================================================
// Drawing helpers
// =============================================================================

/// Drag the pointer through the centres of the given (row, col) cells.
fn stroke(canvas: &mut Canvas, path: &[(usize, usize)]) {
    let centre = |(row, col): (usize, usize)| {
        (col as f64 * BLOCK + BLOCK / 2.0, row as f64 * BLOCK + BLOCK / 2.0)
    };
    let Some((&first, rest)) = path.split_first() else {
        return;
    };

    // Start half a cell back along the stroke so the first cell gets a
    // direction too.
    let (x0, y0) = centre(first);
    let (dx, dy) = rest.first().map_or((1.0, 0.0), |&next| {
        let (x1, y1) = centre(next);
        ((x1 - x0) / 2.0, (y1 - y0) / 2.0)
    });
    canvas.pointer_down(x0 - dx, y0 - dy);
    canvas.pointer_move(x0, y0);
    for &cell in rest {
        let (x, y) = centre(cell);
        canvas.pointer_move(x, y);
    }
    canvas.pointer_up();
}

fn draw_cross(canvas: &mut Canvas) {
    stroke(canvas, &(0..SIDE).map(|i| (i, i)).collect::<Vec<_>>());
    stroke(canvas, &(0..SIDE).map(|i| (SIDE - 1 - i, i)).collect::<Vec<_>>());
}

fn draw_frame(canvas: &mut Canvas) {
    let last = SIDE - 1;
    stroke(canvas, &(0..SIDE).map(|c| (0, c)).collect::<Vec<_>>());
    stroke(canvas, &(0..SIDE).map(|c| (last, c)).collect::<Vec<_>>());
    stroke(canvas, &(1..last).map(|r| (r, 0)).collect::<Vec<_>>());
    stroke(canvas, &(1..last).map(|r| (r, last)).collect::<Vec<_>>());
}

fn print_header(title: &str) {
    println!();
    println!("{}", "=".repeat(40));
    println!("  {}", title);
    println!("{}", "=".repeat(40));
}

fn side_by_side(left: &str, right: &str) {
    for (l, r) in left.lines().zip(right.lines()) {
        println!("  {:<width$}   {}", l, r, width = SIDE);
    }
}

// =============================================================================
// Main
// =============================================================================

fn main() -> hopfield::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = MemoryConfig {
        side: SIDE,
        policy: RecallPolicy::new(0.02, 24, 1e-6),
        ..MemoryConfig::default()
    };
    let mut hopfield = Hopfield::from_config(config)?;
    println!(
        "Memory: {}x{} grid, {} channels, {} weights",
        SIDE,
        SIDE,
        hopfield.channels().len(),
        hopfield.memory().weights().len()
    );

    // Draw and memorize
    let mut canvas = hopfield.canvas(BLOCK)?;
    draw_cross(&mut canvas);
    let cross = canvas.symbols().to_vec();

    canvas.clear();
    draw_frame(&mut canvas);
    let frame = canvas.symbols().to_vec();

    hopfield.memorize(&cross)?;
    hopfield.memorize(&frame)?;

    print_header("STORED");
    side_by_side(&hopfield.render(&cross), &hopfield.render(&frame));

    // Damage 1: erase the lower half of the cross with the eraser
    canvas.set_symbols(&cross)?;
    canvas.toggle_eraser();
    for row in SIDE / 2..SIDE {
        let y = row as f64 * BLOCK + BLOCK / 2.0;
        canvas.pointer_down(0.0, y);
        for col in 0..SIDE {
            canvas.pointer_move(col as f64 * BLOCK + BLOCK / 2.0, y);
        }
        canvas.pointer_up();
    }
    let cue = canvas.symbols().to_vec();
    let completion = hopfield.complete(&cue)?;

    print_header("CROSS: HALF ERASED");
    side_by_side(&hopfield.render(&cue), &hopfield.render(&completion.symbols));
    println!(
        "  steps={} converged={} exact={}",
        completion.steps,
        completion.converged,
        completion.symbols == cross
    );

    // Damage 2: wipe a third of the frame's cells to "unknown"
    let target = hopfield.codec().to_activations(&frame)?;
    let mut cue_grid = target.clone();
    Corruptor::with_seed(7).erase_cells(&mut cue_grid, SIDE * SIDE / 3);
    let wiped = hopfield.codec().to_symbols(&cue_grid)?;
    let completion = hopfield.complete_grid(&cue_grid)?;

    print_header("FRAME: CELLS WIPED");
    side_by_side(&hopfield.render(&wiped), &hopfield.render(&completion.symbols));
    println!(
        "  steps={} converged={} cosine-to-stored={:.3}",
        completion.steps,
        completion.converged,
        Similarity::cosine(&completion.grid, &target)
    );

    canvas.set_mode(hopfield::Mode::Recall);
    canvas.set_symbols(&completion.symbols)?;
    print_header("CANVAS");
    println!("{}", canvas.render());

    Ok(())
}

//! gridflow CLI - Run headless fluid grid simulations from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use gridflow::{
    compute::{FlowEngine, Grid, SimulationStats},
    schema::{Seed, SimulationConfig},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [ticks]", args[0]);
        eprintln!();
        eprintln!("Run a fluid grid simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  ticks        Number of simulation ticks (default: 100)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let ticks: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: SimulationConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed: Seed = if seed_path.exists() {
        let seed_str = fs::read_to_string(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error reading seed file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&seed_str).unwrap_or_else(|e| {
            eprintln!("Error parsing seed: {}", e);
            std::process::exit(1);
        })
    } else {
        Seed::default()
    };

    println!("gridflow");
    println!("========");
    println!(
        "Grid: {} rows x {} cols ({}px cells)",
        config.rows, config.cols, config.cell_size
    );
    println!(
        "max_fill_level: {}, dispersion: {:.3}, upward_push: {}",
        config.flow.max_fill_level, config.flow.dispersion, config.flow.upward_push
    );
    println!("Ticks: {}", ticks);
    println!();

    // Initialize
    let mut grid = Grid::from_seed(&seed, &config);
    let initial_stats = SimulationStats::from_grid(&grid);

    println!("Initial state:");
    println!("  Total fill: {:.6}", initial_stats.total_fill);
    println!("  Wet cells: {}", initial_stats.wet_cells);
    println!("  Wall cells: {}", initial_stats.wall_cells);
    println!();

    let mut engine = FlowEngine::new(config);

    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..ticks {
        engine.step(&mut grid);

        // Print progress every 10%
        if (i + 1) % (ticks / 10).max(1) == 0 {
            let stats = SimulationStats::from_grid(&grid);
            let elapsed = start.elapsed().as_secs_f32();
            let ticks_per_sec = (i + 1) as f32 / elapsed;
            println!(
                "  Tick {}/{}: fill={:.6}, wet={}, max={:.3}, {:.1} ticks/s",
                i + 1,
                ticks,
                stats.total_fill,
                stats.wet_cells,
                stats.max_fill,
                ticks_per_sec
            );
        }
    }

    let elapsed = start.elapsed();
    let final_stats = SimulationStats::from_grid(&grid);

    println!();
    println!("Final state:");
    println!("  Total fill: {:.6}", final_stats.total_fill);
    println!("  Wet cells: {}", final_stats.wet_cells);
    println!("  Max fill: {:.6}", final_stats.max_fill);
    println!();
    if initial_stats.total_fill > 0.0 {
        println!(
            "Fill conservation: {:.4}%",
            (1.0 - (final_stats.total_fill - initial_stats.total_fill).abs()
                / initial_stats.total_fill)
                * 100.0
        );
    }
    println!(
        "Time: {:.2}s ({:.1} ticks/s)",
        elapsed.as_secs_f32(),
        ticks as f32 / elapsed.as_secs_f32()
    );
}

fn print_example_config() {
    let config = SimulationConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
    println!();
    println!("Example seed (config.seed.json):");
    println!("{}", serde_json::to_string_pretty(&seed).unwrap());
}

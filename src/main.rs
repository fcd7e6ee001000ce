use std::env;
use std::process;

use meteor_sim::io::{csv, json};
use meteor_sim::scenarios;
use meteor_sim::{Airburst, Bulk, Crater, SimulationInput, SimulationResult, Surface};

fn main() {
    // -----------------------------------------------------------------------
    // Command line: [preset] [--csv PATH] [--json PATH]
    // -----------------------------------------------------------------------
    let mut preset = String::from("stony");
    let mut csv_path: Option<String> = None;
    let mut json_path: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--csv" => csv_path = args.next(),
            "--json" => json_path = args.next(),
            name => preset = name.to_string(),
        }
    }

    let Some(input) = scenarios::by_name(&preset) else {
        eprintln!("unknown preset '{preset}'; available: {}", scenarios::PRESET_NAMES.join(", "));
        process::exit(2);
    };

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let result = match meteor_sim::simulate(&input) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("simulation failed: {err}");
            process::exit(1);
        }
    };

    print_report(&preset, &input, &result);

    // -----------------------------------------------------------------------
    // Optional exports
    // -----------------------------------------------------------------------
    if let Some(path) = csv_path {
        if let Err(err) = csv::write_trajectory_file(&path, &result.trajectory) {
            eprintln!("csv export failed: {err}");
            process::exit(1);
        }
        println!("  Trajectory written to {path}");
    }
    if let Some(path) = json_path {
        if let Err(err) = json::write_report_file(&path, &result) {
            eprintln!("json export failed: {err}");
            process::exit(1);
        }
        println!("  Report written to {path}");
    }
}

fn print_report(preset: &str, input: &SimulationInput, result: &SimulationResult) {
    let first = &result.trajectory[0];
    let last = &result.trajectory[result.trajectory.len() - 1];

    let max_speed = result
        .trajectory
        .iter()
        .map(|p| p.v_ecef.norm())
        .fold(0.0_f64, f64::max);

    println!();
    println!("====================================================================");
    println!("  METEOROID ENTRY SIMULATION: {preset}");
    println!("====================================================================");
    println!();

    println!("  Body Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Diameter:      {:>8.1} m", input.meteoroid.diameter_m);
    match input.meteoroid.bulk {
        Bulk::Mass(kg) => println!("  Bulk mass:     {kg:>8.0} kg"),
        Bulk::Density(rho) => println!("  Bulk density:  {rho:>8.0} kg/m^3"),
    }
    match input.meteoroid.strength_mpa {
        Some(mpa) => println!("  Strength:      {mpa:>8.1} MPa"),
        None => println!("  Strength:       default"),
    }
    let surface = match input.environment.surface {
        Surface::Land => "land",
        Surface::Water => "water",
    };
    println!("  Surface:       {surface:>8}");
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  DISCOVERY  t={:>7.1}s   alt={:>9.0}m   vel={:>8.1}m/s",
        first.t_s,
        first.alt_m,
        first.v_ecef.norm()
    );
    println!(
        "  {:<9}  t={:>7.1}s   alt={:>9.0}m   vel={:>8.1}m/s",
        format!("{:?}", result.termination_reason).to_uppercase(),
        last.t_s,
        last.alt_m,
        last.v_ecef.norm()
    );
    println!();

    println!("  Effects Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Energy:        {:>10.3e} J  ({:.4} Mt TNT)",
        result.energy.joule, result.energy.mt_tnt
    );
    match result.airburst {
        Airburst::Occurred { burst_altitude_m, burst_energy_joule } => println!(
            "  Airburst:      {:>10.0} m altitude, {:.3e} J released",
            burst_altitude_m, burst_energy_joule
        ),
        Airburst::NotOccurred => println!("  Airburst:      none"),
    }
    match result.crater {
        Crater::Formed { final_diameter_m, depth_m, .. } => println!(
            "  Crater:        {:>10.0} m final diameter, {:.0} m deep",
            final_diameter_m, depth_m
        ),
        Crater::NotFormed => println!("  Crater:        none"),
    }
    if result.blast.damage_radii_km.is_empty() {
        println!("  Blast:         none");
    } else {
        for (label, radius) in &result.blast.damage_radii_km {
            println!("  Blast {label:>7}: {radius:>10.2} km");
        }
    }
    println!("  Seismic:       {:>10.2} Mw", result.seismic.moment_magnitude);
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:>10}  {:>9}  {:>10}  {:>8}  {:>9}",
        "t (s)", "alt (m)", "vel (m/s)", "mass (kg)", "lat", "lon"
    );
    println!("  {}", "─".repeat(64));

    let sample_interval = (result.trajectory.len() / 30).max(1);
    for (i, p) in result.trajectory.iter().enumerate() {
        let print = i % sample_interval == 0 || i == result.trajectory.len() - 1;
        if !print {
            continue;
        }
        println!(
            "  {:>8.1}  {:>10.0}  {:>9.1}  {:>10.1}  {:>8.3}  {:>9.3}",
            p.t_s,
            p.alt_m,
            p.v_ecef.norm(),
            p.mass_kg,
            p.lat_deg,
            p.lon_deg
        );
    }

    println!();
    println!(
        "  Simulation: {} samples, peak speed {:.1} m/s",
        result.trajectory.len(),
        max_speed
    );
    println!("====================================================================");
    println!();
}

use clap::{Parser, Subcommand};
use cs_app::{
    AppError, AppResult, CircuitInput, ScheduleReport, load_schedule, load_store, save_schedule,
    save_store, size_circuit, size_schedule,
};
use cs_sizing::{EngineConfig, SizingResult};
use cs_tables::{CableTable, Material, ReferenceTableStore};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "cablesize")]
#[command(about = "Cable sizing and parallel-run cost optimisation", long_about = None)]
struct Cli {
    /// Reference table file (YAML or JSON) to use instead of the built-in tables
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size a single circuit
    Size {
        /// Design load in amps
        #[arg(long)]
        load: f64,
        /// Supply voltage: 230 (single-phase) or 400 (three-phase)
        #[arg(long, default_value_t = 400.0)]
        voltage: f64,
        /// Route length in metres
        #[arg(long)]
        length: f64,
        /// Conductor material (copper, aluminium)
        #[arg(long, default_value = "copper")]
        material: String,
        /// Installation method (ground, ducts, air)
        #[arg(long, default_value = "ducts")]
        method: String,
        /// Derating factor applied to the cable rating, in (0, 1]
        #[arg(long, default_value_t = 1.0)]
        derating: f64,
        /// Circuit type load multiplier (lighting, power, hvac, motor)
        #[arg(long)]
        circuit_type: Option<String>,
        /// Largest number of parallel runs to consider
        #[arg(long)]
        max_parallel: Option<usize>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Size every circuit in a schedule file
    Schedule {
        /// Path to the schedule file (YAML or JSON)
        schedule_path: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a schedule and rewrite it as YAML or JSON
    ConvertSchedule {
        /// Schedule to read (YAML or JSON)
        input: PathBuf,
        /// Output path; `.json` writes JSON, anything else YAML
        output: PathBuf,
    },
    /// Print the reference tables
    Tables {
        /// Only print this material
        #[arg(long)]
        material: Option<String>,
    },
    /// Validate a reference table file and print its fingerprint
    CheckTables {
        /// Path to the table file (YAML or JSON)
        tables_path: PathBuf,
    },
    /// Write the active reference tables to a file
    ExportTables {
        /// Output path; `.json` writes JSON, anything else YAML
        output: PathBuf,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store = load_store(cli.tables.as_deref())?;
    debug!(fingerprint = %store.fingerprint(), "reference tables ready");

    match cli.command {
        Commands::Size {
            load,
            voltage,
            length,
            material,
            method,
            derating,
            circuit_type,
            max_parallel,
            json,
        } => {
            let input = CircuitInput {
                load_a: load,
                voltage_v: voltage,
                length_m: length,
                material,
                installation_method: method,
                derating_factor: derating,
                circuit_type,
            };
            let mut config = EngineConfig::default();
            if let Some(max) = max_parallel {
                config.max_parallel_runs = max;
            }
            cmd_size(&store, &input, config, json)
        }
        Commands::Schedule {
            schedule_path,
            json,
        } => cmd_schedule(&store, &schedule_path, json),
        Commands::ConvertSchedule { input, output } => cmd_convert_schedule(&input, &output),
        Commands::Tables { material } => cmd_tables(&store, material.as_deref()),
        Commands::CheckTables { tables_path } => cmd_check_tables(&tables_path),
        Commands::ExportTables { output } => cmd_export_tables(&store, &output),
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| AppError::Serialization(e.to_string()))?;
    println!("{text}");
    Ok(())
}

fn cmd_size(
    store: &ReferenceTableStore,
    input: &CircuitInput,
    config: EngineConfig,
    json: bool,
) -> AppResult<()> {
    let result = size_circuit(store, input, config)?;
    if json {
        return print_json(&result);
    }
    print_result(&result);
    Ok(())
}

fn print_result(result: &SizingResult) {
    println!(
        "Circuit: {:.1} A, {} V, {:.1} m, {} in {}",
        result.load_a,
        result.voltage_v,
        result.length_m,
        result.material,
        result.installation_method
    );
    if result.derating_factor < 1.0 {
        println!("  Derating factor: {:.2}", result.derating_factor);
    }
    println!(
        "✓ Recommended: {} x {} ({:.1} A per cable)",
        result.cables_in_parallel, result.recommended_size, result.load_per_cable_a
    );
    println!(
        "  Voltage drop: {:.2} % (limit {:.0} %)",
        result.volt_drop_percent, result.drop_limit_percent
    );
    println!(
        "  Cost: {:.2} supply + {:.2} install = {:.2}",
        result.supply_cost, result.install_cost, result.total_cost
    );
    if let Some(saving) = result.savings_vs_single_run.filter(|s| *s > 0.0) {
        println!("  Saves {saving:.2} against a single run");
    }

    println!("Alternatives:");
    for alt in &result.alternatives {
        let marker = if alt.is_recommended { "*" } else { " " };
        println!(
            "  {marker} {} x {:<8} {:>6.2} %  {:>12.2}",
            alt.cables_in_parallel, alt.size, alt.volt_drop_percent, alt.total_cost
        );
    }
    if result.cost_savings > 0.0 {
        println!("  Next alternative costs {:.2} more", result.cost_savings);
    }
}

fn cmd_schedule(store: &ReferenceTableStore, schedule_path: &Path, json: bool) -> AppResult<()> {
    let schedule = load_schedule(schedule_path)?;
    let report = size_schedule(store, &schedule)?;
    if json {
        return print_json(&report);
    }
    print_report(&report);
    Ok(())
}

fn cmd_convert_schedule(input: &Path, output: &Path) -> AppResult<()> {
    let schedule = load_schedule(input)?;
    save_schedule(output, &schedule)?;
    println!(
        "✓ Wrote {} circuits from {} to {}",
        schedule.circuits.len(),
        input.display(),
        output.display()
    );
    Ok(())
}

fn print_report(report: &ScheduleReport) {
    println!("Schedule: {}", report.name);
    for circuit in &report.circuits {
        match (&circuit.sizing, &circuit.error) {
            (Some(sizing), _) => println!(
                "  {:<12} {:>8.1} A  {} x {:<8} {:>5.2} %  {:>12.2}",
                circuit.id,
                circuit.design_load_a,
                sizing.cables_in_parallel,
                sizing.recommended_size,
                sizing.volt_drop_percent,
                sizing.total_cost
            ),
            (None, error) => println!(
                "  {:<12} {:>8.1} A  ✗ {}",
                circuit.id,
                circuit.design_load_a,
                error.as_deref().unwrap_or("not sized")
            ),
        }
    }
    println!(
        "Sized {} of {} circuits, total cost {:.2}",
        report.sized_count,
        report.circuits.len(),
        report.total_cost
    );
}

fn cmd_tables(store: &ReferenceTableStore, material: Option<&str>) -> AppResult<()> {
    match material {
        Some(raw) => {
            let material: Material = raw.parse()?;
            print_table(store.lookup(material)?);
        }
        None => {
            for table in store.tables() {
                print_table(table);
                println!();
            }
        }
    }
    Ok(())
}

fn print_table(table: &CableTable) {
    println!("{} ({} sizes)", table.material(), table.len());
    println!(
        "  {:<9} {:>6} {:>6} {:>6} {:>8} {:>6} {:>6} {:>9}",
        "size", "ground", "ducts", "air", "Ω/km", "3ph", "1ph", "cost/m"
    );
    for spec in table {
        println!(
            "  {:<9} {:>6.0} {:>6.0} {:>6.0} {:>8.4} {:>6.2} {:>6.2} {:>9.2}",
            spec.size_label(),
            spec.ampacity_ground_a,
            spec.ampacity_ducts_a,
            spec.ampacity_air_a,
            spec.ohm_per_km,
            spec.volt_drop_3ph_mv_per_a_m,
            spec.volt_drop_1ph_mv_per_a_m,
            spec.unit_cost_per_m()
        );
    }
}

fn cmd_check_tables(tables_path: &Path) -> AppResult<()> {
    println!("Checking reference tables: {}", tables_path.display());
    let store = load_store(Some(tables_path))?;
    for table in store.tables() {
        println!("  {}: {} sizes", table.material(), table.len());
    }
    println!("✓ Tables are valid");
    println!("  Fingerprint: {}", store.fingerprint());
    Ok(())
}

fn cmd_export_tables(store: &ReferenceTableStore, output: &Path) -> AppResult<()> {
    save_store(output, store)?;
    println!("✓ Wrote reference tables to {}", output.display());
    Ok(())
}

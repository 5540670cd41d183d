use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use mv_app::{
    AppResult, SizingSession, Snapshot, TOOL_VERSION, export_calculation, parse_overrides,
    reset_inputs, resolve_inputs,
};
use mv_project::{DEFAULT_STATE_FILE, FileInputStore, share_url};
use mv_results::{EXPORT_FILE_NAME, build_export, render_text, to_json};
use mv_sizing::{InputField, SizingInputs};

#[derive(Parser)]
#[command(name = "mv-cli")]
#[command(about = "MVWS conveyor sizing - deluge flow, nozzles, LHS cable and valve selection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size the deluge system and print the results
    Calc {
        #[command(flatten)]
        inputs: InputArgs,
        /// Do not remember these inputs for the next run
        #[arg(long)]
        no_save: bool,
        /// Print inputs and full-precision results as JSON
        #[arg(long)]
        json: bool,
        /// Also print the main results in SI units
        #[arg(long)]
        si: bool,
    },
    /// Write inputs and full-precision results to a JSON file
    Export {
        #[command(flatten)]
        inputs: InputArgs,
        /// Output JSON file path
        #[arg(short, long, default_value = EXPORT_FILE_NAME)]
        output: PathBuf,
    },
    /// Print a link that carries the current inputs
    ShareUrl {
        /// Page the link should point at
        #[arg(long)]
        base_url: String,
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Delete the saved inputs file so the next run starts from the defaults
    Reset {
        /// Saved inputs file
        #[arg(long, default_value = DEFAULT_STATE_FILE)]
        state: PathBuf,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Conveyor length (m)
    #[arg(long)]
    length: Option<f64>,
    /// Belt width (m)
    #[arg(long)]
    width: Option<f64>,
    /// Number of parallel belts
    #[arg(long)]
    belts: Option<f64>,
    /// Spacing between nozzle locations (m)
    #[arg(long)]
    spacing: Option<f64>,
    /// Nozzles at each location
    #[arg(long)]
    nozzles_per_location: Option<f64>,
    /// Sides needing an LHS cable run
    #[arg(long)]
    lhs_sides: Option<f64>,
    /// LHS cable from conveyor to control panel (m)
    #[arg(long)]
    lhs_to_panel: Option<f64>,
    /// Working pressure (bar)
    #[arg(long)]
    pressure: Option<f64>,
    /// Set any input by key, e.g. D3_belts=3 or pressure_bar=2.5 (malformed entries are skipped)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
    /// Share link (or bare query string) to read inputs from
    #[arg(long)]
    query: Option<String>,
    /// Saved inputs file
    #[arg(long, default_value = DEFAULT_STATE_FILE)]
    state: PathBuf,
}

impl InputArgs {
    fn overrides(&self) -> Vec<(InputField, f64)> {
        let named = [
            (InputField::Length, self.length),
            (InputField::Width, self.width),
            (InputField::BeltCount, self.belts),
            (InputField::NozzleSpacing, self.spacing),
            (InputField::NozzlesPerLocation, self.nozzles_per_location),
            (InputField::LhsSides, self.lhs_sides),
            (InputField::LhsToPanel, self.lhs_to_panel),
            (InputField::Pressure, self.pressure),
        ];
        let mut overrides: Vec<(InputField, f64)> = named
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)))
            .collect();
        overrides.extend(parse_overrides(&self.set));
        overrides
    }

    fn store(&self) -> FileInputStore {
        FileInputStore::new(self.state.clone())
    }

    fn resolve(&self) -> SizingInputs {
        resolve_inputs(&self.store(), self.query.as_deref(), &self.overrides())
    }
}

fn main() -> AppResult<()> {
    // Logs go to stderr; stdout carries results only
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calc {
            inputs,
            no_save,
            json,
            si,
        } => cmd_calc(&inputs, !no_save, json, si),
        Commands::Export { inputs, output } => cmd_export(&inputs, &output),
        Commands::ShareUrl { base_url, inputs } => cmd_share_url(&base_url, &inputs),
        Commands::Reset { state } => cmd_reset(&state),
    }
}

fn cmd_calc(args: &InputArgs, save: bool, json: bool, si: bool) -> AppResult<()> {
    let inputs = args.resolve();
    let mut session = SizingSession::new(args.store(), inputs);

    let snapshot = if save {
        session.publish()?
    } else {
        session.snapshot()
    };

    if json {
        let doc = build_export(&snapshot.inputs, TOOL_VERSION);
        println!("{}", to_json(&doc)?);
        return Ok(());
    }

    print_inputs(&snapshot.inputs);
    println!("\nResults:");
    print!("{}", render_text(&snapshot.results));
    if si {
        print_si(&snapshot);
    }
    if save {
        println!("\n✓ Inputs saved to {}", args.state.display());
    }
    Ok(())
}

fn cmd_export(args: &InputArgs, output: &Path) -> AppResult<()> {
    let inputs = args.resolve();
    let doc = export_calculation(output, &inputs)?;
    println!("✓ Exported calculation {} to {}", doc.calc_id, output.display());
    Ok(())
}

fn cmd_share_url(base_url: &str, args: &InputArgs) -> AppResult<()> {
    let inputs = args.resolve();
    println!("{}", share_url(base_url, &inputs)?);
    Ok(())
}

fn cmd_reset(state: &Path) -> AppResult<()> {
    let mut store = FileInputStore::new(state.to_path_buf());
    reset_inputs(&mut store)?;
    println!("✓ Saved inputs cleared from {}", state.display());
    Ok(())
}

fn print_inputs(inputs: &SizingInputs) {
    println!("Inputs:");
    let width = InputField::ALL
        .iter()
        .map(|f| f.to_string().chars().count())
        .max()
        .unwrap_or(0);
    for field in InputField::ALL {
        println!(
            "  {:<width$}  {}",
            field.to_string(),
            field.get(inputs),
            width = width
        );
    }
}

fn print_si(snapshot: &Snapshot) {
    use uom::si::area::square_meter;
    use uom::si::length::meter;
    use uom::si::pressure::kilopascal;
    use uom::si::volume_rate::{cubic_meter_per_second, liter_per_second};

    let r = &snapshot.results;
    println!("\nSI units:");
    println!("  Working pressure:  {:.1} kPa", snapshot.inputs.pressure().get::<kilopascal>());
    println!("  Total area:        {:.2} m²", r.area().get::<square_meter>());
    println!(
        "  Theoretical flow:  {:.5} m³/s",
        r.theoretical_flow().get::<cubic_meter_per_second>()
    );
    println!(
        "  Flow per nozzle:   {:.3} L/s",
        r.flow_per_nozzle().get::<liter_per_second>()
    );
    println!(
        "  Actual flow:       {:.5} m³/s",
        r.actual_flow().get::<cubic_meter_per_second>()
    );
    println!("  LHS cable:         {:.1} m", r.lhs_cable().get::<meter>());
}

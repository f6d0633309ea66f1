use clap::{Parser, Subcommand, ValueEnum};
use fp_app::{
    AppResult, CalcRequest, ChartKind, InputRanges, RawInputs, Report, evaluate, list_countries,
    load_factor_table, write_reference_table,
};
use fp_calc::RoundingPolicy;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fp-cli")]
#[command(about = "Footprint CLI - Personal carbon footprint calculator", long_about = None)]
struct Cli {
    /// Factor table file (YAML or JSON); the built-in table is used if omitted
    #[arg(long, global = true)]
    factors: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate annual emissions
    Calculate {
        #[command(flatten)]
        form: FormArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List countries in the factor table
    Countries,
    /// Validate a factor table file
    Validate {
        /// Path to the factor table file
        path: PathBuf,
    },
    /// Export one chart's data series as CSV
    ExportChart {
        #[command(flatten)]
        form: FormArgs,
        /// Chart to export
        #[arg(long, value_enum)]
        chart: ChartArg,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the built-in factor table to a file
    WriteReference {
        /// Destination (.yaml, .yml or .json)
        path: PathBuf,
    },
}

#[derive(clap::Args)]
struct FormArgs {
    /// Country to look up in the factor table
    #[arg(long, default_value = "India")]
    country: String,
    /// Daily commute distance in km
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    distance: f64,
    /// Monthly electricity consumption in kWh
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    electricity: f64,
    /// Waste generated per week in kg
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    waste: f64,
    /// Number of meals per day
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    meals: i64,
    /// Round the unrounded total once instead of summing rounded categories
    #[arg(long)]
    round_total_once: bool,
}

impl FormArgs {
    fn request(&self) -> CalcRequest<'_> {
        CalcRequest {
            country: &self.country,
            raw: RawInputs {
                distance_km_per_day: self.distance,
                electricity_kwh_per_month: self.electricity,
                waste_kg_per_week: self.waste,
                meals_per_day: self.meals,
            },
            policy: if self.round_total_once {
                RoundingPolicy::TotalOnce
            } else {
                RoundingPolicy::PerCategory
            },
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Clone, Copy, ValueEnum)]
enum ChartArg {
    Pie,
    Bar,
    Line,
}

impl From<ChartArg> for ChartKind {
    fn from(arg: ChartArg) -> Self {
        match arg {
            ChartArg::Pie => ChartKind::Pie,
            ChartArg::Bar => ChartKind::Bar,
            ChartArg::Line => ChartKind::Line,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let factors = cli.factors.as_deref();

    match cli.command {
        Commands::Calculate { form, format } => cmd_calculate(factors, &form, format),
        Commands::Countries => cmd_countries(factors),
        Commands::Validate { path } => cmd_validate(&path),
        Commands::ExportChart {
            form,
            chart,
            output,
        } => cmd_export_chart(factors, &form, chart.into(), output.as_deref()),
        Commands::WriteReference { path } => cmd_write_reference(&path),
    }
}

fn run_form(factors: Option<&Path>, form: &FormArgs) -> AppResult<Report> {
    let table = load_factor_table(factors)?;
    tracing::debug!(country = %form.country, "evaluating form");
    evaluate(&table, &InputRanges::default(), &form.request())
}

fn cmd_calculate(factors: Option<&Path>, form: &FormArgs, format: OutputFormat) -> AppResult<()> {
    let report = run_form(factors, form)?;

    match format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Yaml => print!("{}", report.to_yaml()?),
    }
    Ok(())
}

fn cmd_countries(factors: Option<&Path>) -> AppResult<()> {
    let table = load_factor_table(factors)?;
    let countries = list_countries(&table);

    println!("Countries in factor table:");
    for c in countries {
        println!("  {}", c.name);
        for line in c.factor_lines() {
            println!("    {}", line);
        }
        if let Some(avg) = c.national_average_tonnes {
            println!("    national average: {} tonnes/year", avg);
        }
    }
    Ok(())
}

fn cmd_validate(path: &Path) -> AppResult<()> {
    println!("Validating factor table: {}", path.display());
    let table = load_factor_table(Some(path))?;
    println!("✓ Factor table is valid ({} countries)", table.len());
    Ok(())
}

fn cmd_export_chart(
    factors: Option<&Path>,
    form: &FormArgs,
    kind: ChartKind,
    output: Option<&Path>,
) -> AppResult<()> {
    let report = run_form(factors, form)?;
    let csv = report
        .chart(kind)
        .map(|chart| chart.to_csv())
        .unwrap_or_default();

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} chart data to {}", kind.label(), path.display());
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn cmd_write_reference(path: &Path) -> AppResult<()> {
    write_reference_table(path)?;
    println!("✓ Wrote reference factor table to {}", path.display());
    Ok(())
}

use clap::{Parser, Subcommand};
use pudelko::config::Config;
use pudelko::pudelko::{sort_by_capacity, Pudelko, UnitOfMeasure};

#[derive(Parser)]
#[command(name = "pudelko")]
#[command(about = "Build, measure and compare rectangular boxes", long_about = None)]
struct Cli {
    /// Accept ASCII 'x' as well as '×' between edges
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a few sample boxes and compress the smallest one
    Demo,

    /// Print a box with its volume and surface area
    Show {
        /// Box in text form (e.g., "1 m × 2 m × 3 m")
        input: String,

        /// Unit to print in (m, cm or mm)
        #[arg(short, long, default_value = "m")]
        unit: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add two boxes edge by edge
    Add {
        left: String,
        right: String,

        #[arg(short, long, default_value = "m")]
        unit: String,
    },

    /// Print the cube with the same volume as a box
    Compress {
        input: String,

        #[arg(short, long, default_value = "m")]
        unit: String,
    },

    /// Sort the boxes listed in a TOML file by capacity
    Sort {
        /// Box list path
        #[arg(default_value = "demos/boxes.toml")]
        path: String,

        /// Unit to print in (overrides the file's display unit)
        #[arg(short, long)]
        unit: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let lenient = cli.lenient;

    let result = match cli.command {
        Commands::Demo => run_demo(),
        Commands::Show { input, unit, json } => show_box(&input, &unit, json, lenient),
        Commands::Add { left, right, unit } => add_boxes(&left, &right, &unit, lenient),
        Commands::Compress { input, unit } => compress_box(&input, &unit, lenient),
        Commands::Sort { path, unit } => sort_boxes(&path, unit.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn parse_box(input: &str, lenient: bool) -> Result<Pudelko, Box<dyn std::error::Error>> {
    let parsed = if lenient {
        Pudelko::parse_lenient(input)
    } else {
        Pudelko::parse(input)
    };
    Ok(parsed.map_err(|e| format!("Failed to parse '{}': {}", input, e))?)
}

fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut boxes = vec![
        Pudelko::new(1.0, 2.0, 3.0, UnitOfMeasure::Meter)?,
        Pudelko::new(5.0, 5.0, 5.0, UnitOfMeasure::Meter)?,
        Pudelko::new(5.43, 4.32, 1.43, UnitOfMeasure::Meter)?,
    ];

    println!("Boxes:");
    for pudelko in &boxes {
        println!("  {}", pudelko);
    }

    sort_by_capacity(&mut boxes);

    println!("\nSorted by capacity:");
    for pudelko in &boxes {
        println!("  {}", pudelko);
    }

    let smallest = boxes.first().ok_or("No boxes to compress")?;
    let cube = smallest.compress()?;
    println!("\nCompression:");
    println!("  Original box: {}", smallest);
    println!("  Cube with the same volume: {}", cube);

    Ok(())
}

fn show_box(
    input: &str,
    unit: &str,
    json: bool,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pudelko = parse_box(input, lenient)?;

    if json {
        let value = serde_json::json!({
            "box": pudelko,
            "text": pudelko.format(unit)?,
            "volume": pudelko.volume(),
            "surface_area": pudelko.surface_area(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Box: {}", pudelko.format(unit)?);
    println!("Volume: {} m³", pudelko.volume());
    println!("Surface area: {} m²", pudelko.surface_area());

    Ok(())
}

fn add_boxes(
    left: &str,
    right: &str,
    unit: &str,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let sum = (parse_box(left, lenient)? + parse_box(right, lenient)?)?;
    println!("{}", sum.format(unit)?);
    Ok(())
}

fn compress_box(input: &str, unit: &str, lenient: bool) -> Result<(), Box<dyn std::error::Error>> {
    let pudelko = parse_box(input, lenient)?;
    let cube = pudelko.compress()?;
    println!("Original box: {}", pudelko.format(unit)?);
    println!("Cube with the same volume: {}", cube.format(unit)?);
    Ok(())
}

fn sort_boxes(path: &str, unit: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_from_file(path)
        .map_err(|e| format!("Failed to load box list '{}': {}", path, e))?;

    let unit_code = match unit {
        Some(code) => code,
        None => config.display.unit.code(),
    };

    let mut boxes = config.boxes;
    sort_by_capacity(&mut boxes);

    println!("Boxes ({}):", boxes.len());
    for pudelko in &boxes {
        println!(
            "  - {} (volume: {} m³, surface area: {} m²)",
            pudelko.format(unit_code)?,
            pudelko.volume(),
            pudelko.surface_area()
        );
    }

    Ok(())
}

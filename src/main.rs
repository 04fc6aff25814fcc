use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use weddingfolio::booking::{
    BookingRequest, BookingStore, Package, SubmitError, submit_booking,
};
use weddingfolio::{config, generate, hero, output, scan};

#[derive(Parser)]
#[command(name = "weddingfolio")]
#[command(about = "Portfolio site and booking inquiries for a wedding photography studio")]
#[command(long_about = "\
Portfolio site and booking inquiries for a wedding photography studio

Your filesystem is the data source. Each folder under gallery/ becomes a
portfolio category titled after the folder name; the first image in
gallery/weddings/ is the hero shot. Booking inquiries are appended to a CSV
table next to the gallery.

Content structure:

  content/
  ├── config.toml              # Site config (optional, overrides defaults)
  ├── bookings.csv             # Created on the first booking
  └── gallery/
      ├── weddings/            # Category \"Weddings\", also the hero folder
      │   ├── 010-vows.jpg
      │   └── 020-rings.png
      ├── pre-wedding/         # Category \"Pre-Wedding\"
      │   └── beach.jpg
      └── .drafts/             # Category \".Drafts\" (gallery.skip_hidden = true
                               # leaves dot-prefixed names out)

Only jpg, jpeg, png and webp files are listed by default. Folders with no
images are left out.

Run 'weddingfolio gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log scan and storage decisions to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Booking form fields. Required fields default to empty so that a partial
/// submission reports every missing field at once.
#[derive(clap::Args)]
struct BookArgs {
    /// Full name (required)
    #[arg(long, default_value = "")]
    name: String,
    /// Email (required)
    #[arg(long, default_value = "")]
    email: String,
    /// Phone number (required)
    #[arg(long, default_value = "")]
    phone: String,
    /// Wedding location (required)
    #[arg(long, default_value = "")]
    location: String,
    /// Wedding date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Basic, Premium, Deluxe or "Not Decided"
    #[arg(long, default_value = "Basic")]
    package: Package,
    /// Tell us about your events
    #[arg(long, default_value = "")]
    message: String,
}

impl From<BookArgs> for BookingRequest {
    fn from(args: BookArgs) -> Self {
        BookingRequest {
            name: args.name,
            email: args.email,
            phone: args.phone,
            wedding_date: args.date,
            location: args.location,
            package: args.package,
            message: args.message,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List gallery categories and their images
    Scan {
        /// Print the gallery as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Show which image the home page uses as its hero
    Hero,
    /// Record a booking inquiry
    Book(BookArgs),
    /// List recorded booking inquiries
    Bookings,
    /// Render the site into the output directory
    Build,
    /// Validate config and gallery without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(ExitCode::SUCCESS);
    }

    let site_config = config::load_config(&cli.source)?;
    let gallery_root = site_config.gallery_root(&cli.source);

    match cli.command {
        Command::Scan { json } => {
            let gallery = scan::scan_gallery(&gallery_root, &site_config.gallery)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&gallery)?);
            } else {
                output::print_gallery_output(&gallery, &site_config.gallery.dir);
            }
        }
        Command::Hero => {
            let hero = hero::select_hero(&gallery_root, &site_config.gallery)?;
            output::print_hero_output(hero.as_ref());
        }
        Command::Book(args) => {
            let store = BookingStore::from_config(&cli.source, &site_config);
            let now = Local::now().naive_local();
            match submit_booking(&store, args.into(), now) {
                Ok(accepted) => {
                    output::print_booking_saved(&accepted.record, accepted.rows, store.path());
                }
                Err(SubmitError::Invalid(e)) => {
                    eprintln!("{}", e);
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Bookings => {
            let store = BookingStore::from_config(&cli.source, &site_config);
            output::print_bookings_output(&store.load()?);
        }
        Command::Build => {
            println!("==> Building {} \u{2192} {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&cli.source, &site_config, &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", report.index.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let gallery = scan::scan_gallery(&gallery_root, &site_config.gallery)?;
            output::print_gallery_output(&gallery, &site_config.gallery.dir);
            let hero = hero::select_hero(&gallery_root, &site_config.gallery)?;
            output::print_hero_output(hero.as_ref());
            let bookings = BookingStore::from_config(&cli.source, &site_config).load()?;
            println!("Bookings: {}", bookings.len());
            println!("==> Content is valid");
        }
        // Printed before config is loaded.
        Command::GenConfig => {}
    }

    Ok(ExitCode::SUCCESS)
}

/// Log to stderr. `RUST_LOG` wins unless `--verbose` is given; default is `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

use clap::Parser;
use std::path::PathBuf;
use std::process;
use syslinux2menulst::config::{Config, MenuEndPolicy};
use syslinux2menulst::target::Target;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "syslinux2menulst",
    about = "Convert a syslinux/isolinux file to a GRUB menu.lst"
)]
struct Cli {
    /// Input file
    #[arg(value_name = "FILE")]
    infile: PathBuf,

    /// Absolute path in the disk structure, e.g. /menu.lst
    #[arg(value_name = "PATH")]
    path: String,

    /// Output root directory (will be created if not present)
    #[arg(value_name = "DIRECTORY")]
    outdir: PathBuf,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail on a menu end without an open menu
    #[arg(long)]
    strict: bool,

    /// Keep the outer menu even if it only wraps a single submenu
    #[arg(long)]
    no_unwrap: bool,

    /// Print the generated files instead of writing them
    #[arg(long)]
    dry_run: bool,

    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn init_logging(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn load_config(cli: &Cli) -> Config {
    if let Some(ref path) = cli.config {
        return Config::load(path).unwrap_or_else(|e| die(&e.to_string()));
    }
    let defaults = [
        "syslinux2menulst.config.json",
        "config/syslinux2menulst.config.json",
    ];
    for p in &defaults {
        let path = PathBuf::from(p);
        if path.is_file() {
            return Config::load(&path).unwrap_or_else(|e| die(&e.to_string()));
        }
    }
    Config::default()
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let mut config = load_config(&cli);

    // CLI overrides
    if cli.strict {
        config.menu_end_policy = MenuEndPolicy::Error;
    }
    if cli.no_unwrap {
        config.unwrap_single_submenu = false;
    }

    let text = syslinux2menulst::read_input(&cli.infile).unwrap_or_else(|e| die(&e.to_string()));
    let target = Target::resolve(&cli.path).unwrap_or_else(|e| die(&e.to_string()));

    let files = syslinux2menulst::convert(&text, &target, &config)
        .unwrap_or_else(|e| die(&e.to_string()));

    if cli.dry_run {
        for file in &files {
            println!("### {}", file.name);
            println!("{}", file.content);
        }
        return;
    }

    syslinux2menulst::write_files(&cli.outdir, &files).unwrap_or_else(|e| die(&e.to_string()));
}

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use iconswap::commands::check::CheckResult;
use iconswap::commands::replace::Selection;
use iconswap_core::{IconKind, Platform};

#[derive(Parser)]
#[command(name = "iconswap")]
#[command(about = "Replace the application icons of a generated native project")]
#[command(version)]
struct Cli {
    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Print debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace icons for the selected platforms
    Replace {
        /// Root of the built native project (e.g. build/jsb-default)
        project_root: Option<PathBuf>,
        /// JSON request file with project root, platforms and sources
        #[arg(long)]
        request: Option<PathBuf>,
        /// Replace the iOS icons (resized from --png)
        #[arg(long)]
        ios: bool,
        /// Android (not implemented, reported only)
        #[arg(long)]
        android: bool,
        /// Replace the Mac icon (copied from --icns)
        #[arg(long)]
        mac: bool,
        /// Replace the Windows icon (copied from --ico)
        #[arg(long)]
        windows: bool,
        /// Source .png file
        #[arg(long)]
        png: Option<PathBuf>,
        /// Source .icns file
        #[arg(long)]
        icns: Option<PathBuf>,
        /// Source .ico file
        #[arg(long)]
        ico: Option<PathBuf>,
    },
    /// Resize a PNG over an existing icon, keeping the icon's size
    Resize {
        /// Source .png file
        src: PathBuf,
        /// Existing icon to overwrite
        dest: PathBuf,
    },
    /// Check that a file can be used as a source icon
    Check {
        /// File to check
        file: PathBuf,
        /// Expected kind: png, icns or ico
        #[arg(long, value_parser = parse_kind)]
        kind: IconKind,
    },
    /// List the files each platform would replace
    Targets {
        /// Root of the built native project
        project_root: PathBuf,
        /// Platforms to list (default: all)
        #[arg(long = "platform", value_parser = parse_platform)]
        platforms: Vec<Platform>,
    },
}

fn parse_kind(s: &str) -> Result<IconKind, String> {
    IconKind::parse(s).ok_or_else(|| format!("unknown icon kind '{}'", s))
}

fn parse_platform(s: &str) -> Result<Platform, String> {
    Platform::parse(s).ok_or_else(|| format!("unknown platform '{}'", s))
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = iconswap::logger::init_logger(cli.quiet, cli.verbose) {
        eprintln!("Error: failed to initialize logger: {}", e);
    }

    match cli.command {
        Commands::Replace {
            project_root,
            request,
            ios,
            android,
            mac,
            windows,
            png,
            icns,
            ico,
        } => {
            let flags = [
                (Platform::Ios, ios),
                (Platform::Android, android),
                (Platform::Mac, mac),
                (Platform::Windows, windows),
            ];
            let selection = Selection {
                project_root,
                platforms: flags
                    .into_iter()
                    .filter(|(_, enabled)| *enabled)
                    .map(|(p, _)| p)
                    .collect(),
                png,
                icns,
                ico,
            };

            let request =
                match iconswap::commands::replace::build_request(request.as_deref(), selection) {
                    Ok(request) => request,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        process::exit(2);
                    }
                };

            match iconswap::commands::replace::run(&request) {
                Ok(summary) => {
                    for result in &summary.results {
                        if result.succeeded() {
                            println!("{}", result);
                        } else {
                            eprintln!("{}", result);
                        }
                        for warning in &result.warnings {
                            eprintln!("  warning: {}", warning);
                        }
                        for file in result.failed_files() {
                            if let Err(e) = &file.result {
                                eprintln!("  failed: {}", e);
                            }
                        }
                    }
                    if !summary.all_succeeded() {
                        eprintln!(
                            "{} of {} platform(s) failed",
                            summary.failed(),
                            summary.results.len()
                        );
                        process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(2);
                }
            }
        }
        Commands::Resize { src, dest } => match iconswap::commands::resize::run(&src, &dest) {
            Ok(report) => {
                for warning in &report.warnings {
                    eprintln!("warning: {}", warning);
                }
                println!(
                    "Resized {} to {}x{}",
                    dest.display(),
                    report.size,
                    report.size
                );
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        },
        Commands::Check { file, kind } => match iconswap::commands::check::run(&file, kind) {
            CheckResult::Valid => {
                println!("{} is a valid {} source", file.display(), kind);
            }
            CheckResult::Invalid { error } => {
                println!("{}", error);
                process::exit(1);
            }
        },
        Commands::Targets {
            project_root,
            platforms,
        } => {
            for (platform, paths) in iconswap::commands::targets::run(&project_root, &platforms) {
                println!("{}:", platform);
                if paths.is_empty() {
                    println!("  (no existing icons)");
                }
                for path in paths {
                    println!("  {}", path.display());
                }
            }
        }
    }
}

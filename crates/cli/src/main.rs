//! `plugkit` — plugin manager CLI for the Adobe XD host application.

mod output;

use std::{path::PathBuf, process::ExitCode};

use {
    anyhow::bail,
    clap::{Parser, Subcommand},
    tracing::info,
    tracing_subscriber::EnvFilter,
};

use {
    plugkit_host::Channel,
    plugkit_manager::{
        self as manager, InstallOptions, PackageOptions, PluginChanged, PluginWatcher,
    },
};

use crate::output::{BOLD, GREEN, RED, RESET};

#[derive(Parser)]
#[command(name = "plugkit", version, about = "plugkit — XD plugin manager CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit structured JSON on stdout instead of human-readable text.
    #[arg(short, long, global = true, default_value_t = false)]
    json: bool,

    /// Host application instance to target (release, prerelease, dev).
    #[arg(short, long, global = true, default_value = "release")]
    which: String,

    /// Install directory override (skips host folder resolution).
    #[arg(long, global = true, env = "PLUGKIT_INSTALL_DIR")]
    install_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Install plugins in development mode.
    Install {
        /// Plugin directories (defaults to the current directory).
        dirs: Vec<PathBuf>,
        /// Allow overwriting an installed plugin.
        #[arg(short, long)]
        overwrite: bool,
        /// Remove previously installed files first.
        #[arg(short, long)]
        clean: bool,
    },
    /// List installed development plugins.
    Ls {
        /// Keep only plugins matching these folder names or ids.
        filters: Vec<String>,
    },
    /// Package plugins into distributable archives.
    Package {
        dirs: Vec<PathBuf>,
        /// Refuse to package on warnings too, not just fatals.
        #[arg(long)]
        strict: bool,
    },
    /// Validate plugin manifests.
    Validate {
        dirs: Vec<PathBuf>,
        /// Expected plugin id to check the manifest id against.
        #[arg(long)]
        id: Option<String>,
    },
    /// Watch plugin directories and re-install on change.
    Watch {
        dirs: Vec<PathBuf>,
        /// Remove previously installed files on each re-install.
        #[arg(short, long)]
        clean: bool,
    },
    /// Scaffold a new plugin project.
    Init {
        /// Directory to create the plugin in.
        dir: PathBuf,
        /// Plugin name for the generated manifest.
        #[arg(short, long, default_value = "My Plugin")]
        name: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_telemetry(&cli);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{RED}error{RESET}: {e:#}");
            ExitCode::FAILURE
        },
    }
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    if !cli.json {
        eprintln!(
            "{BOLD}plugkit {} — XD plugin manager CLI{RESET}",
            env!("CARGO_PKG_VERSION")
        );
    }

    let channel = Channel::parse(&cli.which)?;

    match &cli.command {
        Commands::Install {
            dirs,
            overwrite,
            clean,
        } => {
            let root = plugkit_host::install_root(channel, cli.install_dir.as_deref())?;
            let reports = manager::install(&default_dirs(dirs), &root, &InstallOptions {
                overwrite: *overwrite,
                clean: *clean,
            });
            output::render_reports(&reports, cli.json)
        },
        Commands::Ls { filters } => {
            let root = plugkit_host::install_root(channel, cli.install_dir.as_deref())?;
            if !cli.json {
                eprintln!("Listing plugins inside {}", root.display());
            }
            let plugins = manager::list(&root, filters)?;
            output::render_list(&plugins, cli.json)
        },
        Commands::Package { dirs, strict } => {
            let reports =
                manager::package(&default_dirs(dirs), &PackageOptions { strict: *strict });
            output::render_reports(&reports, cli.json)
        },
        Commands::Validate { dirs, id } => {
            let reports = manager::validate_dirs(&default_dirs(dirs), id.as_deref());
            output::render_validation(&reports, cli.json)
        },
        Commands::Watch { dirs, clean } => run_watch(cli, channel, &default_dirs(dirs), *clean),
        Commands::Init { dir, name } => {
            let manifest = manager::scaffold(dir, name)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "path": dir,
                        "manifest": manifest,
                    }))?
                );
            } else {
                println!(
                    "[{GREEN}ok{RESET}]  {} scaffolded at {}",
                    manifest.display_label(),
                    dir.display()
                );
            }
            Ok(true)
        },
    }
}

fn run_watch(cli: &Cli, channel: Channel, dirs: &[PathBuf], clean: bool) -> anyhow::Result<bool> {
    if cli.json {
        bail!("can't use JSON output on watch");
    }
    let root = plugkit_host::install_root(channel, cli.install_dir.as_deref())?;

    // Weed out non-plugins up front so the watcher only holds real sources.
    let mut watched = Vec::new();
    for dir in dirs {
        match plugkit_manifest::load_manifest(dir) {
            Ok(manifest) if manifest.id().is_some() => {
                println!(
                    "[{GREEN}ok{RESET}]  Watching {}...",
                    manifest.name().unwrap_or("plugin")
                );
                watched.push(dir.clone());
            },
            Ok(_) => println!(
                "[{RED}err{RESET}] Can't watch a plugin without a plugin ID in the manifest ({})",
                dir.display()
            ),
            Err(_) => println!(
                "[{RED}err{RESET}] Can't watch a plugin that doesn't have a valid manifest.json ({})",
                dir.display()
            ),
        }
    }
    if watched.is_empty() {
        bail!("nothing to watch");
    }

    // Re-installs always overwrite the previously installed copy.
    let opts = InstallOptions {
        overwrite: true,
        clean,
    };
    let (_watcher, rx) = PluginWatcher::start(&watched)?;
    eprintln!("Watching... press CTRL+C to exit.");

    while let Ok(PluginChanged(idx)) = rx.recv() {
        let dir = &watched[idx];
        info!(path = %dir.display(), "plugin changed; reinstalling");
        let reports = manager::install(&[dir.clone()], &root, &opts);
        let _ = output::render_reports(&reports, false);
    }
    Ok(true)
}

fn default_dirs(dirs: &[PathBuf]) -> Vec<PathBuf> {
    if dirs.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        dirs.to_vec()
    }
}

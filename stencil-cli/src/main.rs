mod config;
mod prompt;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use prompt::Prompter;
use std::process::ExitCode;
use stencil_core::adapters::{FsProject, ShellInstaller, TarGzArchive, find_project_root};
use stencil_core::{CreateSettings, run_create, run_list};
use stencil_domain::{is_blueprint_name, validate_package_name};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "stencil",
    version,
    about = "Blueprint-driven package scaffolder for monorepos."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scaffold a new package from a blueprint.
    Create(CreateArgs),
    /// List discoverable blueprint names.
    List(ListArgs),
}

#[derive(Debug, Parser)]
struct CreateArgs {
    /// Blueprint to scaffold from (prompted when omitted).
    blueprint: Option<String>,

    /// Name of the new package, e.g. my-lib or @scope/my-lib (prompted
    /// when omitted).
    package: Option<String>,

    /// Print discovered blueprint names, one per line, and exit without
    /// side effects.
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Project root (default: discovered by walking up from the current
    /// directory to the nearest workspace manifest).
    #[arg(long, env = "STENCIL_PROJECT_ROOT")]
    project_root: Option<Utf8PathBuf>,

    /// Skip dependency installation after registration.
    #[arg(long, default_value_t = false)]
    no_install: bool,
}

#[derive(Debug, Parser)]
struct ListArgs {
    /// Project root (default: discovered from the current directory).
    #[arg(long, env = "STENCIL_PROJECT_ROOT")]
    project_root: Option<Utf8PathBuf>,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => code,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Create(args) => cmd_create(args),
        Command::List(args) => cmd_list(args),
    }
}

fn resolve_project_root(explicit: Option<Utf8PathBuf>) -> anyhow::Result<Utf8PathBuf> {
    if let Some(root) = explicit {
        return Ok(root);
    }
    let cwd = Utf8PathBuf::from_path_buf(std::env::current_dir().context("current dir")?)
        .map_err(|p| anyhow::anyhow!("current dir is not UTF-8: {}", p.display()))?;
    find_project_root(&cwd)
}

fn cmd_create(args: CreateArgs) -> anyhow::Result<ExitCode> {
    let root = resolve_project_root(args.project_root)?;
    let file_config = config::load_or_default(&root).context("load stencil.toml config")?;
    let project = FsProject::open(root, &file_config.packages.root);

    if args.list {
        for name in run_list(&project).context("discover blueprints")? {
            println!("{name}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut prompter = Prompter::stdio();
    let blueprint = match args.blueprint {
        Some(name) => name,
        None => prompter.ask("blueprint name", is_blueprint_name)?,
    };
    let package = match args.package {
        Some(name) => name,
        None => prompter.ask("package name", |s| validate_package_name(s).is_ok())?,
    };

    let settings = CreateSettings {
        packages_root: file_config.packages.root.clone(),
        install: file_config.install.enabled && !args.no_install,
    };
    let installer = ShellInstaller::new(file_config.install.command.clone());

    match run_create(
        &settings,
        &blueprint,
        &package,
        &project,
        &TarGzArchive,
        &installer,
    ) {
        Ok(outcome) => {
            info!(
                package = outcome.request.package_name.as_str(),
                target = outcome.request.target_dir.as_str(),
                installed = outcome.installed,
                "scaffold complete"
            );
            println!(
                "Created {} in {}",
                outcome.request.package_name, outcome.request.target_dir
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let code = err.exit_code();
            let err = anyhow::Error::new(err);
            eprintln!("error: {err:#}");
            Ok(ExitCode::from(code))
        }
    }
}

fn cmd_list(args: ListArgs) -> anyhow::Result<ExitCode> {
    let root = resolve_project_root(args.project_root)?;
    let file_config = config::load_or_default(&root).context("load stencil.toml config")?;
    let project = FsProject::open(root, &file_config.packages.root);

    for name in run_list(&project).context("discover blueprints")? {
        println!("{name}");
    }
    Ok(ExitCode::SUCCESS)
}

use anyhow::Result;
use clap::Parser;
use roicalc::cli::{Cli, Commands};
use roicalc::commands::{ComputeConfig, ProfileOverrides};
use roicalc::formatting::FormattingConfig;
use roicalc::observability::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    if let Err(err) = run(cli.command) {
        let (message, code) = roicalc::commands::describe_failure(&err);
        eprintln!("{message}");
        std::process::exit(code);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        command @ Commands::Compute { .. } => handle_compute_command(command),
        Commands::Plans { format } => roicalc::commands::list_plans(format),
        Commands::Init { force } => roicalc::commands::init_config(force),
    }
}

fn handle_compute_command(command: Commands) -> Result<()> {
    if let Commands::Compute {
        plan,
        technicians,
        jobs_per_technician,
        avg_revenue,
        admin_hours,
        minutes_saved_per_job,
        plan_cost,
        model,
        preset,
        config,
        format,
        output,
        plain,
    } = command
    {
        let overrides = ProfileOverrides {
            technicians,
            jobs_per_technician,
            avg_revenue,
            admin_hours,
            minutes_saved_per_job,
            plan_cost,
        };
        roicalc::commands::handle_compute(ComputeConfig {
            plan,
            overrides,
            model: model.map(Into::into),
            preset: preset.map(Into::into),
            config_path: config,
            format,
            output,
            formatting: create_formatting_config(plain),
        })
    } else {
        Err(anyhow::anyhow!("Invalid command"))
    }
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

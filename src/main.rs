//! tektonop CLI - companion for Tekton delivery pipelines

use clap::Parser;
use log::LevelFilter;

use tektonop::cli::{
    self, Cli, Commands, ConfigCommands, GlobalOptions, PipelineCommands, PropertyCommands,
    RunCommands, TriggerCommands,
};
use tektonop::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` forces debug level; otherwise `RUST_LOG` applies, defaulting to warn.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("tektonop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Config(ConfigCommands::Set { key, value }) => {
            cli::config::set(&opts, key, &value)
        }
        Commands::Config(ConfigCommands::Unset { key }) => cli::config::unset(&opts, key),
        Commands::Pipeline(PipelineCommands::Get { pipeline_id }) => {
            cli::pipeline::get(&opts, pipeline_id.as_deref()).await
        }
        Commands::Run(run_cmd) => match run_cmd {
            RunCommands::List {
                pipeline,
                filters,
                pager,
            } => cli::run::list(&opts, pipeline.as_deref(), &filters, &pager).await,
            RunCommands::Create { pipeline, args } => {
                cli::run::create(&opts, pipeline.as_deref(), &args).await
            }
            RunCommands::Get {
                run_id,
                pipeline,
                includes,
            } => cli::run::get(&opts, pipeline.as_deref(), &run_id, includes.as_deref()).await,
            RunCommands::Cancel {
                run_id,
                pipeline,
                force,
            } => cli::run::cancel(&opts, pipeline.as_deref(), &run_id, force).await,
            RunCommands::Rerun { run_id, pipeline } => {
                cli::run::rerun(&opts, pipeline.as_deref(), &run_id).await
            }
            RunCommands::Delete { run_id, pipeline } => {
                cli::run::delete(&opts, pipeline.as_deref(), &run_id).await
            }
            RunCommands::Logs {
                run_id,
                pipeline,
                step,
            } => cli::run::logs(&opts, pipeline.as_deref(), &run_id, step.as_deref()).await,
        },
        Commands::Property(PropertyCommands::List { pipeline, filters }) => {
            cli::property::list(&opts, pipeline.as_deref(), &filters).await
        }
        Commands::Trigger(TriggerCommands::List { pipeline, filters }) => {
            cli::trigger::list(&opts, pipeline.as_deref(), &filters).await
        }
    }
}

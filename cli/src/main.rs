use clap::{Parser, Subcommand};
use std::io::Write;
use wavecannon_cli::CliContext;
use wavecannon_cli::commands;
use wavecannon_cli::logging;
use wavecannon_cli::readline;

fn main() -> Result<(), String> {
    logging::init();
    let mut ctx = CliContext::new();

    // Optional scenario path on the command line
    if let Some(path) = std::env::args().nth(1) {
        commands::load(&path, None, &mut ctx)?;
    }

    while let Some(line) = readline()? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "wave cannon safe spots")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a scenario file and apply its signals (or only the first N)
    Load {
        #[arg(short, long)]
        path: String,
        #[arg(short, long)]
        steps: Option<usize>,
    },
    /// Apply the next N pending scenario signals
    Step {
        #[arg(default_value_t = 1)]
        count: usize,
    },
    /// Feed a status gain (id or name, e.g. loading_left)
    Status {
        #[arg(short, long)]
        actor: u64,
        #[arg(short, long)]
        id: String,
    },
    /// Feed a cast start (id or name, e.g. wave_cannon_left)
    Cast {
        #[arg(short, long)]
        caster: u64,
        #[arg(short, long)]
        id: String,
    },
    /// Print this frame's safe spots and draw calls
    Spots {
        #[arg(short, long)]
        slot: Option<usize>,
    },
    Party,
    Order,
    Reset,
    Config,
    Exit,
}

fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "wavecannon".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Load { path, steps }) => commands::load(path, *steps, ctx)?,
        Some(Commands::Step { count }) => commands::step(*count, ctx)?,
        Some(Commands::Status { actor, id }) => commands::status(*actor, id, ctx)?,
        Some(Commands::Cast { caster, id }) => commands::cast(*caster, id, ctx)?,
        Some(Commands::Spots { slot }) => commands::spots(*slot, ctx)?,
        Some(Commands::Party) => commands::show_party(ctx)?,
        Some(Commands::Order) => commands::show_order(ctx)?,
        Some(Commands::Reset) => commands::reset(ctx)?,
        Some(Commands::Config) => commands::show_config(ctx),
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}

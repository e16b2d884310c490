mod config;
mod render;
mod shell;

use clap::{Parser, ValueEnum};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{BotType, GameEngine};
use tictactoe_common::{log, logger};

use config::{CONFIG_FILE_NAME, get_config_manager};
use shell::{GameShell, Opponent};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotArg {
    Random,
    Minimax,
    MinimaxWithLength,
}

impl From<BotArg> for BotType {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Random => BotType::Random,
            BotArg::Minimax => BotType::Minimax,
            BotArg::MinimaxWithLength => BotType::MinimaxWithLength,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against the computer")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: String,

    /// Overrides the configured computer strategy.
    #[arg(long, value_enum)]
    bot: Option<BotArg>,

    #[arg(long)]
    seed: Option<u64>,

    /// Both players are human.
    #[arg(long)]
    two_players: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Writes the effective config back to the config file.
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(bot) = args.bot {
        config.bot_type = bot.into();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.two_players {
        config.computer_label = None;
    }
    if args.use_log_prefix {
        config.log.use_prefix = true;
    }
    if args.save_config {
        config_manager.set_config(&config)?;
    }

    let prefix = config.log.use_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix, config.log.level);

    let engine = GameEngine::new(config.players.clone(), config.board_size)?;
    let opponent = config.computer_label.map(|label| Opponent {
        label,
        bot_type: config.bot_type,
        rng: SessionRng::from_optional_seed(config.seed),
    });
    if let Some(ref opponent) = opponent {
        log!(
            "Computer plays {} using {} (seed {})",
            opponent.label,
            opponent.bot_type,
            opponent.rng.seed()
        );
    }

    let mut shell = GameShell::new(engine, opponent, config.reset_restores_first_player);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell.run(stdin.lock(), &mut stdout)?;
    log!("Session ended with {:?}", shell.engine().outcome());

    Ok(())
}

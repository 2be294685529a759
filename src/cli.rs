use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use card24::cards::{Deck, Hand, parse_hand};
use card24::report::{render_elapsed, render_solutions, save_solutions, validate_file_name};
use card24::solver::{Comparison, SolverConfig, SolverSession};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// card24 - Find every way to make 24 from four cards
#[derive(Parser, Debug)]
#[command(name = "card24")]
#[command(
    about = "Find every arithmetic expression that combines four cards into 24",
    long_about = "Without --cards or --random an interactive session is started."
)]
#[command(version)]
pub struct CliArgs {
    /// Four card labels to solve, e.g. "A 10 K 3"
    #[arg(short, long, conflicts_with = "random")]
    pub cards: Option<String>,

    /// Solve four cards drawn at random from a standard deck
    #[arg(short, long)]
    pub random: bool,

    /// Seed for the random draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Save the solutions to this .txt file (with --cards or --random)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Accept values within this distance of 24 instead of requiring exact equality
    #[arg(short, long)]
    pub epsilon: Option<f64>,

    /// Search on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Where the operands come from
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Interactive,
    Cards(Hand),
    Random,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub mode: Mode,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

impl CliConfig {
    fn from_args(args: CliArgs) -> Result<Self> {
        let mode = match (args.cards, args.random) {
            (Some(cards), _) => Mode::Cards(parse_hand(&cards).context("Invalid cards")?),
            (None, true) => Mode::Random,
            (None, false) => Mode::Interactive,
        };

        let output = args
            .output
            .map(|name| validate_file_name(&name))
            .transpose()
            .context("Invalid output file")?;

        if output.is_some() && mode == Mode::Interactive {
            anyhow::bail!("--output requires --cards or --random");
        }

        let comparison = match args.epsilon {
            Some(epsilon) if epsilon.is_finite() && epsilon > 0.0 => Comparison::Tolerance(epsilon),
            Some(epsilon) => anyhow::bail!("Epsilon must be a positive number, got {}", epsilon),
            None => Comparison::Exact,
        };

        Ok(Self {
            mode,
            seed: args.seed,
            output,
            solver: SolverConfig {
                comparison,
                parallel: !args.sequential,
                ..SolverConfig::default()
            },
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = SolverSession::new(config.solver.clone());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    match config.mode {
        Mode::Interactive => console.run(&mut session, &mut rng),
        Mode::Cards(hand) => console.solve_once(&mut session, hand, config.output),
        Mode::Random => {
            let hand = Deck::standard().draw(&mut rng)?;
            writeln!(console.output, "Drawn four cards: {}", hand)?;
            console.solve_once(&mut session, hand, config.output)
        }
    }
}

const BANNER: &str = "\
+------------------------------+
|        24 card solver        |
+------------------------------+
";

/// Line-oriented prompts over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next input line without its terminator, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Asks until a number in `1..=max` is entered
    fn choose(&mut self, menu: &str, max: u32) -> Result<Option<u32>> {
        write!(self.output, "{}", menu)?;
        let range = if max == 2 {
            "1 or 2".to_string()
        } else {
            format!("1-{}", max)
        };

        loop {
            self.prompt(&format!("Enter a number ({}): ", range))?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<u32>() {
                Ok(choice) if (1..=max).contains(&choice) => return Ok(Some(choice)),
                _ => writeln!(self.output, "Invalid input.")?,
            }
        }
    }

    fn read_hand(&mut self) -> Result<Option<Hand>> {
        loop {
            writeln!(
                self.output,
                "Valid cards are A, 2, 3, 4, 5, 6, 7, 8, 9, 10, J, Q, and K"
            )?;
            writeln!(
                self.output,
                "Input your cards separated by a space, e.g. \"A 10 K 3\"."
            )?;
            self.prompt(">>> ")?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_hand(&line) {
                Ok(hand) => return Ok(Some(hand)),
                Err(e) => {
                    debug!("Rejected hand '{}': {}", line, e);
                    writeln!(self.output, "Invalid input.\n")?;
                }
            }
        }
    }

    fn read_file_name(&mut self) -> Result<Option<PathBuf>> {
        writeln!(
            self.output,
            "Input file name (ends with .txt), e.g. \"solutions.txt\"."
        )?;
        loop {
            self.prompt(">>> ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match validate_file_name(&line) {
                Ok(path) => return Ok(Some(path)),
                Err(_) => writeln!(self.output, "Invalid input.")?,
            }
        }
    }

    fn print_result(&mut self, session: &mut SolverSession, hand: Hand) -> Result<()> {
        let ranks = hand.ranks().map(|rank| rank.to_string()).join(" ");
        writeln!(self.output, "Solving {}", ranks)?;

        let result = session.solve(&hand.operands())?;
        write!(self.output, "{}", render_solutions(result))?;
        writeln!(self.output, "{}", render_elapsed(result))?;
        Ok(())
    }

    fn save(&mut self, session: &SolverSession, path: PathBuf) -> Result<()> {
        let Some(result) = session.result() else {
            return Ok(());
        };
        match save_solutions(&path, result) {
            Ok(()) => writeln!(self.output, "Solutions saved to {}.", path.display())?,
            Err(e) => {
                warn!("{}", e);
                writeln!(self.output, "Failed to save solutions: {}", e)?;
            }
        }
        Ok(())
    }

    /// Solves one hand and optionally saves the result
    pub fn solve_once(
        &mut self,
        session: &mut SolverSession,
        hand: Hand,
        output: Option<PathBuf>,
    ) -> Result<()> {
        self.print_result(session, hand)?;
        if let (Some(path), Some(result)) = (output, session.result()) {
            save_solutions(&path, result)?;
            writeln!(self.output, "Solutions saved to {}.", path.display())?;
        }
        Ok(())
    }

    /// The interactive menu loop; returns when the user exits or input ends
    pub fn run<G: Rng + ?Sized>(&mut self, session: &mut SolverSession, rng: &mut G) -> Result<()> {
        write!(self.output, "{}", BANNER)?;

        loop {
            let menu = "Choose an option:\n\
                        1. Input cards manually\n\
                        2. Randomly pick 4 cards from a deck\n\
                        3. Exit\n";
            let hand = match self.choose(menu, 3)? {
                Some(1) => self.read_hand()?,
                Some(2) => {
                    let hand = Deck::standard().draw(rng)?;
                    writeln!(self.output, "Drawn four cards: {}", hand)?;
                    Some(hand)
                }
                _ => None,
            };
            let Some(hand) = hand else {
                break;
            };
            info!("Solving hand {}", hand);

            self.print_result(session, hand)?;

            let save_menu = "Do you want to save the solutions to a text file?\n\
                             1. Yes\n\
                             2. No\n";
            match self.choose(save_menu, 2)? {
                Some(1) => match self.read_file_name()? {
                    Some(path) => self.save(session, path)?,
                    None => break,
                },
                Some(_) => {}
                None => break,
            }

            let again_menu = "Do you wish to solve again?\n\
                              1. Yes\n\
                              2. No\n";
            if self.choose(again_menu, 2)? != Some(1) {
                break;
            }
        }

        writeln!(self.output, "Farewell.")?;
        self.output.flush()?;
        Ok(())
    }
}

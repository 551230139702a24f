//! Multiway equity for community-card poker variants.
//!
//! Given every player's hole cards and a partial board, compute how often
//! each player ends up with the best (or a tied-best) hand. Few missing board
//! cards are enumerated exactly; many missing cards are sampled.
//!
//! ```no_run
//! use poker_equity::*;
//! let hands = vec![Hole::try_from("AsAh").unwrap(), Hole::try_from("KsKh").unwrap()];
//! let board = Board::empty();
//! let result = compute_equity(&hands, &board, Variant::Holdem).unwrap();
//! println!("{:.3} {:.3}", result.equities()[0], result.ties()[0]);
//! ```
pub mod cards;
pub mod equity;
pub mod evaluation;
pub mod session;

pub use cards::*;
pub use equity::*;
pub use evaluation::*;
pub use session::*;

/// Win and tie frequencies.
pub type Probability = f64;

/// Method-chaining for free functions and constructors.
pub trait Pipe: Sized {
    fn pipe<T>(self, f: impl FnOnce(Self) -> T) -> T {
        f(self)
    }
}
impl<T> Pipe for T {}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Fewest players an equity request may contain.
pub const MIN_PLAYERS: usize = 2;
/// Most players an equity request may contain.
pub const MAX_PLAYERS: usize = 6;
/// Community cards on a complete board.
pub const BOARD_SIZE: usize = 5;

// ============================================================================
// ENGINE SELECTION
// Exact enumeration is cheap while at most C(52, 2) = 1326 runouts remain.
// ============================================================================
/// Largest number of missing board cards that is enumerated exactly.
pub const ENUMERATION_THRESHOLD: usize = 2;

// ============================================================================
// MONTE CARLO TRIAL COUNTS
// Fewer trials for variants whose extraction costs more evaluations.
// ============================================================================
/// Hold'em: one 7-card evaluation per player per trial.
pub const TRIALS_HOLDEM: usize = 50_000;
/// Super Hold'em: eight 7-card evaluations per player per trial.
pub const TRIALS_SUPER: usize = 10_000;
/// Omaha: sixty 5-card evaluations per player per trial.
pub const TRIALS_OMAHA: usize = 2_000;
/// Every other variant.
pub const TRIALS_DEFAULT: usize = 5_000;

// ============================================================================
// RUNTIME
// ============================================================================
/// Trials between two checks of the cancellation flag and deadline.
pub const CANCEL_CHECK_INTERVAL: usize = 500;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Terminal gets INFO (DEBUG when verbose). The file under `logs/` always
/// gets DEBUG when `persist` is set.
#[cfg(feature = "cli")]
pub fn log(verbose: bool, persist: bool) -> anyhow::Result<()> {
    use anyhow::Context;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();
    loggers.push(simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ));
    if persist {
        std::fs::create_dir_all("logs").context("create logs directory")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .context("time moves slow")?
            .as_secs();
        let file = std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let unit = s.chars().last()?;
    let value: u64 = s[..s.len() - unit.len_utf8()].parse().ok()?;
    let scale: u64 = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86400,
        _ => return None,
    };
    value.checked_mul(scale).map(std::time::Duration::from_secs)
}

//! Wordle Solver CLI
//!
//! Solve a known target, play along with a real game by typing in the
//! colours, or benchmark the policy over a word list.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use wordle_solver::strategy::Reason;
use wordle_solver::{
    load_dictionary, FeedbackPattern, Policy, RunStats, SolveReport, Strategy, Word, WordleSolver,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list of legal guesses, one word per line.
    #[arg(short, long, default_value = "words.txt")]
    dictionary: PathBuf,

    /// Word list of possible answers. Defaults to the guess dictionary.
    #[arg(short, long)]
    answers: Option<PathBuf>,

    /// JSON file that accumulates win and guess-count statistics.
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Seed for the random picks: the last two possibilities, or every guess
    /// under `--strategy random`.
    #[arg(long)]
    seed: Option<u64>,

    /// Expected remaining count above which a possible answer is never
    /// preferred over a better information word.
    #[arg(long)]
    threshold: Option<f64>,

    /// Fixed first guess.
    #[arg(long)]
    opening: Option<Word>,

    /// How each guess is chosen.
    #[arg(long, value_enum, default_value_t = StrategyArg::Greedy)]
    strategy: StrategyArg,

    /// Worker threads for the dictionary scan. Defaults to one per core.
    #[arg(long)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    /// Minimise expected remaining possibilities.
    Greedy,
    /// Guess any remaining possibility.
    Random,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Greedy => Strategy::Greedy,
            StrategyArg::Random => Strategy::Random,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve for a known target word.
    Solve { target: Word },
    /// Suggest guesses for a real game; type each colour pattern back in.
    Play,
    /// Solve every possible answer and report the guess distribution.
    Bench {
        /// Only solve the first N answers.
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn build_solver(args: &Args) -> Result<WordleSolver> {
    let dictionary = load_dictionary(&args.dictionary)?;
    println!("Loaded {} words.", dictionary.len());

    let possibilities = match &args.answers {
        Some(path) => load_dictionary(path)?,
        None => dictionary.clone(),
    };

    let mut policy = Policy {
        strategy: args.strategy.into(),
        ..Policy::default()
    };
    if let Some(threshold) = args.threshold {
        policy.dilemma_threshold = threshold;
    }
    if let Some(opening) = args.opening {
        policy.opening = opening;
    }

    let solver = WordleSolver::with_possibilities(dictionary, possibilities).with_policy(policy);
    Ok(match args.seed {
        Some(seed) => solver.with_seed(seed),
        None => solver,
    })
}

fn print_report(report: &SolveReport) {
    for (i, (guess, pattern)) in report.guesses.iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, guess.to_string().to_uppercase(), pattern);
    }
    println!();
    if report.success {
        println!("✓ Solved in {} guesses!", report.guess_count());
    } else {
        println!("✗ Failed to solve within {} guesses.", report.guess_count());
    }
    if let Some(target) = report.target {
        println!("Target word: {}", target.to_string().to_uppercase());
    }
    println!("Possibilities left: {}", report.remaining.len());
    if report.remaining.len() <= 20 {
        println!("  {:?}", report.remaining.iter().map(Word::to_string).collect::<Vec<_>>());
    }
    for anomaly in &report.anomalies {
        println!("⚠️  {}", anomaly);
    }
}

fn print_stats(stats: &RunStats) {
    println!("Guess distribution:");
    let games = stats.games.max(1);
    for (guesses, count) in &stats.distribution {
        let pct = *count as f64 / games as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / games).max(1) as usize);
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    if let Some(average) = stats.average_guesses() {
        println!("Average guesses: {:.3}", average);
    }
    println!("Win rate: {:.1}% of {} games", stats.win_rate() * 100.0, stats.games);
    if !stats.failures.is_empty() {
        println!("Not solved: {}", stats.failures.join(", "));
    }
}

fn record_stats(args: &Args, fresh: &RunStats) -> Result<()> {
    if let Some(path) = &args.stats {
        let mut stats = RunStats::load(path)?;
        stats.merge(fresh);
        stats.save(path)?;
        log::info!("stats saved to {}", path.display());
    }
    Ok(())
}

fn run_play(solver: &mut WordleSolver) -> Result<SolveReport> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut guesses = Vec::new();
    let mut success = false;

    println!("Enter the colours for each guess: g=green, y=yellow, b=grey (e.g. gybbb).");
    'rounds: while !solver.is_exhausted() {
        let selection = solver.next_guess();
        let guess = selection.word;
        println!();
        println!(
            "Guess {}: {}  ({} possibilities)",
            solver.round() + 1,
            guess.to_string().to_uppercase(),
            solver.remaining_count()
        );
        if let Some(expected) = selection.expected_remaining {
            println!("  Expected remaining: {:.1} words", expected);
        }
        if let Reason::Dilemma(decision) = selection.reason {
            println!("  Endgame dilemma settled as {:?}", decision);
        }

        let pattern = loop {
            print!("> ");
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => break 'rounds,
            };
            match line.trim() {
                "q" | "quit" | "exit" => break 'rounds,
                text => match FeedbackPattern::parse(text) {
                    Ok(pattern) => break pattern,
                    Err(e) => println!("{}", e),
                },
            }
        };

        guesses.push((guess, pattern));
        solver.apply_feedback(&guess, pattern);
        if pattern.is_win() {
            success = true;
            break;
        }
        if solver.remaining_count() == 0 {
            println!("⚠️  No words match this feedback pattern!");
        }
    }

    Ok(SolveReport {
        target: None,
        guesses,
        success,
        remaining: solver.possible_answers().to_vec(),
        anomalies: solver.anomalies().to_vec(),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(threads) = args.threads {
        if threads == 0 {
            bail!("--threads must be at least 1");
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to build the worker pool")?;
    }

    let mut solver = build_solver(&args)?;

    match &args.command {
        Command::Solve { target } => {
            println!("Solving for: {}", target.to_string().to_uppercase());
            println!();
            let start = Instant::now();
            let report = solver.solve_for_target(target);
            print_report(&report);
            println!("Time: {:.2?}", start.elapsed());

            let mut stats = RunStats::default();
            stats.record(&report);
            record_stats(&args, &stats)?;
        }
        Command::Play => {
            let report = run_play(&mut solver)?;
            println!();
            print_report(&report);
            if report.success || solver.is_exhausted() {
                let mut stats = RunStats::default();
                stats.record(&report);
                record_stats(&args, &stats)?;
            }
        }
        Command::Bench { limit } => {
            let mut targets = solver.possible_answers().to_vec();
            if let Some(limit) = limit {
                targets.truncate(*limit);
            }
            println!("Running benchmark on {} words...", targets.len());
            let start = Instant::now();
            let stats = solver.benchmark_guess_distribution(&targets);
            println!("Time elapsed: {:.2?}", start.elapsed());
            println!();
            print_stats(&stats);
            record_stats(&args, &stats)?;
        }
    }

    Ok(())
}

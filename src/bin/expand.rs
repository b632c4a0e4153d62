//! Range Expansion Binary
//!
//! Expands shorthand range notation into concrete combos.
//! With no arguments, reads one range per line until `quit`.

use clap::Parser;
use colored::Colorize;
use handrange::cards::card::Card;
use handrange::cards::suit::Suit;
use handrange::range::Combo;
use handrange::range::Range;
use std::io::BufRead;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "expand", about = "Expand hold'em range shorthand into combos")]
struct Args {
    /// tokens or comma separated ranges, e.g. `AKs` or `"QQ, AKo, 9xs"`
    ranges: Vec<String>,
    /// print only the number of combos for each range
    #[arg(long, conflicts_with = "json")]
    count: bool,
    /// print one JSON object per range
    #[arg(long)]
    json: bool,
    /// order combos by deck order instead of generation order
    #[arg(long)]
    sorted: bool,
    /// raise terminal log level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// also write a DEBUG log file into this directory
    #[arg(long, env = "HANDRANGE_LOG_DIR")]
    log_dir: Option<std::path::PathBuf>,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    fn combos(&self, range: &Range) -> Vec<Combo> {
        if self.sorted {
            range.sorted()
        } else {
            range.combos().to_vec()
        }
    }

    fn print(&self, range: &Range) -> anyhow::Result<()> {
        let combos = self.combos(range);
        if self.count {
            println!("{}\t{}", range.input().trim(), combos.len());
        } else if self.json {
            let value = serde_json::json!({
                "input": range.input().trim(),
                "hand_types": range
                    .notations()
                    .iter()
                    .map(|n| n.hand_type())
                    .collect::<Vec<_>>(),
                "combos": combos,
            });
            println!("{}", serde_json::to_string(&value)?);
        } else {
            println!("{}", range);
            for row in combos.chunks(13) {
                println!(
                    "  {}",
                    row.iter()
                        .map(|c| paint(c))
                        .collect::<Vec<String>>()
                        .join(" ")
                );
            }
        }
        Ok(())
    }

    fn expand(&self, input: &str) -> anyhow::Result<()> {
        let range = Range::try_from(input)?;
        log::debug!("{} notations, {} combos", range.notations().len(), range.len());
        self.print(&range)
    }

    fn prompt(&self) -> anyhow::Result<()> {
        log::info!("reading ranges from stdin, `quit` to stop");
        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            match line.trim() {
                "quit" | "exit" => break,
                "" => continue,
                input => match self.expand(input) {
                    Err(e) => eprintln!("{}", e),
                    Ok(_) => continue,
                },
            }
        }
        Ok(())
    }
}

fn card(card: Card) -> String {
    let text = card.to_string();
    match card.suit() {
        Suit::Heart => text.red().to_string(),
        Suit::Diamond => text.blue().to_string(),
        Suit::Club | Suit::Spade => text,
    }
}

fn paint(combo: &Combo) -> String {
    format!("{}{}", card(combo.first()), card(combo.second()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    handrange::log(args.level(), args.log_dir.as_deref())?;
    if args.ranges.is_empty() {
        return args.prompt();
    }
    for input in args.ranges.iter() {
        args.expand(input)?;
    }
    Ok(())
}

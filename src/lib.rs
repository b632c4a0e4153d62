//! Shorthand hold'em range notation, expanded into concrete combos.
//!
//! A token like `"AKs"` names a category of starting hands. [`range::classify`]
//! decides which category, [`range::generate`] lists the two-card combos it
//! stands for, and [`range::Range`] does both for a comma separated list.
//!
//! ```
//! use handrange::range::{classify, generate, HandType};
//!
//! let hand_type = classify("Qxo").unwrap();
//! assert_eq!(hand_type, HandType::WildOffsuit);
//! assert_eq!(generate("Qxo", hand_type).unwrap().len(), 144);
//! ```
pub mod cards;
pub mod range;

/// Initialize logging: terminal at `level`, plus a DEBUG file logger
/// writing `<dir>/<unix time>.log` when a directory is given.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();
    loggers.push(term);
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        let file = std::fs::File::create(dir.join(format!("{}.log", time)))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

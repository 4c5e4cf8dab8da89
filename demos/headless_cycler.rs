//! Headless cycler: print the title animation's timeline without a terminal.
//!
//! Replays the cycler on a virtual clock first, then runs it for real on
//! the actor thread until it settles on the last title.

use folio::cycler::{CyclerConfig, TitleCycler, TitleList};
use std::time::Duration;

fn main() -> Result<(), folio::FolioError> {
    let titles = TitleList::parse_separated("Engineer | Speaker");
    let config = CyclerConfig::new(Duration::from_millis(40), Duration::from_millis(600)).with_looping(false);
    let cycler = TitleCycler::new(titles, config)?;

    println!("Folio Title Cycler");
    println!("==================");
    println!();
    println!("Virtual timeline:");
    for entry in cycler.timeline() {
        let phase = format!("{:?}", entry.state.phase);
        println!("  {:>6} ms  {phase:<8}  {:?}", entry.at.as_millis(), entry.text);
    }
    println!();

    println!("Live:");
    folio::app::run_headless(cycler, &mut std::io::stdout().lock())
}

use eggwatch_core::Units;
use eggwatch_egg::EggEvent;
use eggwatch_format::{LocaleTable, MemoryCache};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use time::UtcOffset;

/// Prints one tab-separated summary line per egg: level, gym, time to hatch.
fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args().nth(1);
    let reader: Box<dyn BufRead> = match path {
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let locale = LocaleTable::default();
    let cache = MemoryCache::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let egg = EggEvent::from_json(&line)?.enrich(&cache);
        let dts = egg.flatten(&locale, UtcOffset::UTC, Units::Metric);

        println!(
            "L{}\t{}\t{}",
            egg.egg_lvl(),
            egg.gym_name().known().map_or("<unnamed>", String::as_str),
            dts["hatch_time_left"]
        );
    }

    Ok(())
}

//! Type some text, see how it rates and why.

use std::io::BufRead;
use anyhow::anyhow;
use sentiment_rating::pipeline::Rater;
use sentiment_rating::scoring::WordScore;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let rater = Rater::bundled().ok_or_else(||anyhow!("Bundled word lists missing"))?;
    println!("Type a sentence to rate it. End input to quit.");
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        println!("{}  ({})",rater.rate(&line),rater.rating(&line));
        for scored in rater.explain(&line) {
            match scored.score {
                WordScore::Neutral => {}
                score => println!(" {:+} {}",score.value(),scored.token),
            }
        }
    }
    Ok(())
}

//! Rate each of the bundled sample texts, printing one JSON object per line.

use anyhow::anyhow;
use serde::Serialize;
use sentiment_rating::pipeline::Rater;
use sentiment_rating::samples;
use sentiment_rating::scoring::Rating;

#[derive(Serialize)]
struct SampleReport<'a> {
    name : &'a str,
    rating : Rating,
    glyphs : String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let rater = Rater::bundled().ok_or_else(||anyhow!("Bundled word lists missing"))?;
    for name in samples::names() {
        let text = samples::bundled(name).ok_or_else(||anyhow!("No sample {}",name))?;
        let report = SampleReport{ name, rating: rater.rating(text), glyphs: rater.rate(text) };
        println!("{}",serde_json::to_string(&report)?);
    }
    Ok(())
}

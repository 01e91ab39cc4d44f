use proptest::prelude::*;
use crate::lexicon::{Lexicon, SentimentLexicons};
use crate::pipeline::Rater;
use crate::text::{normalize, tokenize, is_punctuation};

fn small_rater() -> Rater {
    Rater::new(SentimentLexicons::new(Lexicon::from_text("good\njoy"),Lexicon::from_text("bad\ngrim")))
}

// Normalizing twice is the same as normalizing once.
proptest! {
    #[test]
    fn prop_normalize_idempotent(s in "\\PC*") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }
}

// Tokens are never empty and never contain whitespace or punctuation.
proptest! {
    #[test]
    fn prop_tokens_clean(s in "\\PC*") {
        for token in tokenize(&normalize(&s)) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(|c|c.is_whitespace() || is_punctuation(c)));
        }
    }
}

// Same text, same answer.
proptest! {
    #[test]
    fn prop_rate_deterministic(s in "\\PC*") {
        let rater = small_rater();
        prop_assert_eq!(rater.rate(&s), rater.rate(&s));
    }
}

// Equal numbers of positive and negative words give the neutral glyph, whatever the order and filler.
proptest! {
    #[test]
    fn prop_balanced_is_neutral(words in prop::collection::vec(prop::sample::select(vec!["good","joy","table","the"]), 0..20),
                                seed in any::<u64>()) {
        let rater = small_rater();
        let mut text : Vec<&str> = vec![];
        for (i,w) in words.iter().enumerate() {
            text.push(w);
            match *w {
                "good" | "joy" => text.push(if (seed>>(i%64))&1==0 {"bad"} else {"GRIM!"}),
                _ => {}
            }
        }
        prop_assert_eq!(rater.rate(&text.join(" ")), "😐");
    }
}

// The number of glyphs is the size of the rating.
proptest! {
    #[test]
    fn prop_glyph_count(n_good in 0usize..30, n_bad in 0usize..30) {
        let rater = small_rater();
        let text = format!("{} {}", "good ".repeat(n_good), "bad, ".repeat(n_bad));
        let rating = n_good as i64 - n_bad as i64;
        let glyphs = rater.rate(&text);
        let expected = if rating==0 { 1 } else { rating.unsigned_abs() as usize };
        prop_assert_eq!(glyphs.chars().count(), expected);
        prop_assert_eq!(rater.rating(&text).0, rating);
    }
}

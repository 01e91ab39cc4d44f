//! Score tokens against the word lists and add the scores up.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use serde::{Serialize,Deserialize};
use crate::lexicon::SentimentLexicons;

/// The contribution of a single token.
#[derive(Copy, Clone,Debug,Eq, PartialEq,Hash,Serialize,Deserialize)]
pub enum WordScore {
    Positive,
    Negative,
    Neutral,
}

impl WordScore {
    pub fn value(self) -> i64 {
        match self {
            WordScore::Positive => 1,
            WordScore::Negative => -1,
            WordScore::Neutral => 0,
        }
    }
}

/// Sum of the word scores of some text. Positive is happy.
#[derive(Copy, Clone,Debug,Default,Eq, PartialEq,Ord, PartialOrd,Hash,Serialize,Deserialize)]
#[serde(transparent)]
pub struct Rating(pub i64);

impl Rating {
    pub fn is_positive(self) -> bool { self.0>0 }
    pub fn is_negative(self) -> bool { self.0<0 }
    pub fn is_neutral(self) -> bool { self.0==0 }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f,"{}",self.0) }
}

impl Add<WordScore> for Rating {
    type Output = Rating;
    fn add(self, score: WordScore) -> Rating { Rating(self.0+score.value()) }
}

impl Sum<WordScore> for Rating {
    fn sum<I: Iterator<Item=WordScore>>(iter: I) -> Self {
        iter.fold(Rating(0),|rating,score|rating+score)
    }
}

/// A token and what it scored, for explaining a rating.
#[derive(Clone,Debug,Eq, PartialEq,Serialize,Deserialize)]
pub struct ScoredToken {
    pub token : String,
    pub score : WordScore,
}

impl SentimentLexicons {
    /// Positive membership is checked first, so a word on both lists scores as positive.
    pub fn score_word(&self,token:&str) -> WordScore {
        if self.positive.contains(token) { WordScore::Positive }
        else if self.negative.contains(token) { WordScore::Negative }
        else { WordScore::Neutral }
    }

    pub fn aggregate(&self,tokens:&[String]) -> Rating {
        tokens.iter().map(|t|self.score_word(t)).sum()
    }

    pub fn explain(&self,tokens:&[String]) -> Vec<ScoredToken> {
        tokens.iter().map(|t|ScoredToken{ token: t.clone(), score: self.score_word(t) }).collect()
    }
}

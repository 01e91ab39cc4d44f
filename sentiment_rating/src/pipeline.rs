//! Chaining the stages together: normalize, tokenize, score, present.

use std::marker::PhantomData;
use std::path::Path;
use crate::lexicon::SentimentLexicons;
use crate::presenter::Glyphs;
use crate::scoring::{Rating, ScoredToken};
use crate::text::{normalize, tokenize};

/// Functions from A to B applied one after the other, left to right.
pub struct Pipeline<A,B,F> {
    stage : F,
    types : PhantomData<fn(A)->B>,
}

impl <A,B,F:Fn(A)->B> Pipeline<A,B,F> {
    pub fn new(stage:F) -> Self { Pipeline{ stage, types: PhantomData } }

    /// Apply `next` to the output of everything so far.
    pub fn then<C,G:Fn(B)->C>(self,next:G) -> Pipeline<A,C,impl Fn(A)->C> {
        let stage = self.stage;
        Pipeline::new(move |a:A| next(stage(a)))
    }

    pub fn run(&self,input:A) -> B { (self.stage)(input) }
}

/// Everything needed to rate text. Only holds immutable data, so can be shared between threads.
#[derive(Clone,Debug)]
pub struct Rater {
    lexicons : SentimentLexicons,
    glyphs : Glyphs,
}

impl Rater {
    pub fn new(lexicons:SentimentLexicons) -> Self { Rater{ lexicons, glyphs: Glyphs::default() } }

    /// A rater using the word lists compiled into the binary.
    pub fn bundled() -> Option<Self> { SentimentLexicons::bundled().map(Rater::new) }

    pub fn with_glyphs(self,glyphs:Glyphs) -> Self { Rater{ glyphs, ..self } }

    pub fn lexicons(&self) -> &SentimentLexicons { &self.lexicons }

    /// The rating of some text, as emoji.
    pub fn rate(&self,text:&str) -> String {
        Pipeline::new(normalize)
            .then(|normalized:String|tokenize(&normalized))
            .then(|tokens:Vec<String>|self.lexicons.aggregate(&tokens))
            .then(|rating:Rating|self.glyphs.present(rating))
            .run(text)
    }

    /// The rating of some text, as a number.
    pub fn rating(&self,text:&str) -> Rating {
        Pipeline::new(normalize)
            .then(|normalized:String|tokenize(&normalized))
            .then(|tokens:Vec<String>|self.lexicons.aggregate(&tokens))
            .run(text)
    }

    /// What each token of the text scored.
    pub fn explain(&self,text:&str) -> Vec<ScoredToken> {
        self.lexicons.explain(&tokenize(&normalize(text)))
    }

    /// Rate the contents of a file. None if it can't be read as text.
    pub fn rate_file<P:AsRef<Path>>(&self,path:P) -> Option<String> {
        std::fs::read_to_string(path).ok().map(|text|self.rate(&text))
    }
}

//! Word lists saying which words are positive and which are negative.
//!
//! A list is a plain text file, one lowercase word per line. Lines starting with `;` are comments,
//! as in the commonly published opinion lexicons.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::{debug, warn};

#[derive(thiserror::Error, Debug)]
pub enum LexiconError {
    #[error("no word list at {0}")]
    NotFound(PathBuf),
    #[error("word list {0} is not utf-8 text")]
    NotText(PathBuf),
    #[error("could not read word list {path}: {source}")]
    Io { path : PathBuf, #[source] source : std::io::Error },
}

/// Word lists compiled into the binary, by resource name.
const BUNDLED : &[(&str,&str)] = &[
    (Lexicon::POSITIVE, include_str!("../resources/positive-words.txt")),
    (Lexicon::NEGATIVE, include_str!("../resources/negative-words.txt")),
];

/// A set of lowercase words. Never changed after loading.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words : HashSet<String>,
}

impl Lexicon {
    pub const POSITIVE : &'static str = "positive-words.txt";
    pub const NEGATIVE : &'static str = "negative-words.txt";

    /// Parse a word list, one word per line.
    pub fn from_text(text:&str) -> Self {
        let words = text.lines()
            .map(|line|line.trim())
            .filter(|line|!line.is_empty() && !line.starts_with(';'))
            .map(|line|line.to_lowercase())
            .collect();
        Lexicon{words}
    }

    /// Get a word list compiled into the binary. None if there is no resource of that name.
    pub fn bundled(name:&str) -> Option<Self> {
        let (_,text) = BUNDLED.iter().find(|(n,_)|*n==name)?;
        let res = Self::from_text(text);
        debug!("Loaded bundled word list {} with {} words",name,res.len());
        Some(res)
    }

    /// Load a word list from a file.
    pub fn load<P:AsRef<Path>>(path:P) -> Result<Self,LexiconError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LexiconError::NotFound(path.to_path_buf()),
            _ => LexiconError::Io{ path: path.to_path_buf(), source: e },
        })?;
        let text = String::from_utf8(bytes).map_err(|_|LexiconError::NotText(path.to_path_buf()))?;
        let res = Self::from_text(&text);
        debug!("Loaded word list {} with {} words",path.display(),res.len());
        Ok(res)
    }

    pub fn contains(&self,word:&str) -> bool { self.words.contains(word) }
    pub fn len(&self) -> usize { self.words.len() }
    pub fn is_empty(&self) -> bool { self.words.is_empty() }
    pub fn iter(&self) -> impl Iterator<Item=&str> { self.words.iter().map(|w|w.as_str()) }
}

/// The positive and negative lists, loaded once and then only read.
#[derive(Debug, Clone)]
pub struct SentimentLexicons {
    pub positive : Lexicon,
    pub negative : Lexicon,
}

impl SentimentLexicons {
    pub fn new(positive:Lexicon,negative:Lexicon) -> Self {
        let res = SentimentLexicons{positive,negative};
        let overlap = res.overlap();
        if !overlap.is_empty() {
            warn!("{} words are in both the positive and negative lists and will score as positive: {}",overlap.len(),overlap.join(", "));
        }
        res
    }

    /// Both lists compiled into the binary.
    pub fn bundled() -> Option<Self> {
        Some(Self::new(Lexicon::bundled(Lexicon::POSITIVE)?,Lexicon::bundled(Lexicon::NEGATIVE)?))
    }

    /// Load `positive-words.txt` and `negative-words.txt` from a directory.
    pub fn load_dir<P:AsRef<Path>>(dir:P) -> Result<Self,LexiconError> {
        let dir = dir.as_ref();
        let positive = Lexicon::load(dir.join(Lexicon::POSITIVE))?;
        let negative = Lexicon::load(dir.join(Lexicon::NEGATIVE))?;
        Ok(Self::new(positive,negative))
    }

    /// Words present in both lists, sorted. Should be empty for good data.
    pub fn overlap(&self) -> Vec<&str> {
        let mut res : Vec<&str> = self.positive.iter().filter(|w|self.negative.contains(w)).collect();
        res.sort_unstable();
        res
    }
}

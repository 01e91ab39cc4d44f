//! Turning free text into lowercase word tokens.

use icu_properties::props::{GeneralCategory, GeneralCategoryGroup};
use icu_properties::CodePointMapData;

/// True for anything in the Unicode punctuation categories (Pc, Pd, Ps, Pe, Pi, Pf, Po).
/// Symbols such as `$`, `+` or emoji are not punctuation.
pub fn is_punctuation(c:char) -> bool {
    GeneralCategoryGroup::Punctuation.contains(CodePointMapData::<GeneralCategory>::new().get(c))
}

/// Lower case, with punctuation removed. Applying this twice is the same as applying it once.
pub fn normalize(text:&str) -> String {
    text.to_lowercase().chars().filter(|&c|!is_punctuation(c)).collect()
}

/// Split on runs of whitespace. No token is empty.
pub fn tokenize(text:&str) -> Vec<String> {
    text.split_whitespace().map(|s|s.to_string()).collect()
}

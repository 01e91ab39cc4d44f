//! Render a rating as a row of emoji.

use crate::scoring::Rating;

/// The three symbols a rating is drawn with.
#[derive(Clone,Debug,Eq, PartialEq)]
pub struct Glyphs {
    pub happy : &'static str,
    pub distress : &'static str,
    pub neutral : &'static str,
}

impl Glyphs {
    pub const DEFAULT : Glyphs = Glyphs{ happy: "😊", distress: "😢", neutral: "😐" };

    /// `happy` repeated for a positive rating, `distress` repeated for a negative one, and a single `neutral` for zero.
    pub fn present(&self,rating:Rating) -> String {
        let count = rating.0.unsigned_abs() as usize;
        if rating.is_positive() { self.happy.repeat(count) }
        else if rating.is_negative() { self.distress.repeat(count) }
        else { self.neutral.to_string() }
    }
}

impl Default for Glyphs {
    fn default() -> Self { Glyphs::DEFAULT }
}

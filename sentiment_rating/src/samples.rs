//! Some free text to try rating. Not used by the rating itself.

const SAMPLES : &[(&str,&str)] = &[
    ("two_cities", include_str!("../resources/samples/two_cities.txt")),
    ("holiday_postcard", include_str!("../resources/samples/holiday_postcard.txt")),
    ("rainy_monday", include_str!("../resources/samples/rainy_monday.txt")),
    ("product_review", include_str!("../resources/samples/product_review.txt")),
];

pub fn names() -> impl Iterator<Item=&'static str> { SAMPLES.iter().map(|(name,_)|*name) }

/// Get the text of a sample, if there is one by that name.
pub fn bundled(name:&str) -> Option<&'static str> {
    SAMPLES.iter().find(|(n,_)|*n==name).map(|(_,text)|*text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Rater;

    #[test]
    fn every_name_resolves() {
        for name in names() {
            assert!(bundled(name).map_or(false,|text|!text.trim().is_empty()),"{}",name);
        }
        assert_eq!(names().count(),4);
        assert!(bundled("moby_dick").is_none());
    }

    #[test]
    fn samples_rate_as_expected() {
        let rater = Rater::bundled().unwrap();
        let rate = |name| bundled(name).map(|text|rater.rating(text));
        assert!(rate("holiday_postcard").unwrap().is_positive());
        assert!(rate("rainy_monday").unwrap().is_negative());
        assert_eq!(rate("nonexistent"),None);
    }
}

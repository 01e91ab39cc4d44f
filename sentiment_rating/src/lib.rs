pub mod lexicon;
pub mod text;
pub mod scoring;
pub mod presenter;
pub mod pipeline;
pub mod samples;

#[cfg(test)]
mod proptests;

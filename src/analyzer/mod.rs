//! Analysis engine for determining version bumps from pull request labels

pub mod bump_classifier;

pub use bump_classifier::BumpClassifier;

//! Translation domain - Contract for the external translation provider

mod translator;

pub use translator::Translator;

#[cfg(test)]
pub use translator::MockTranslator;

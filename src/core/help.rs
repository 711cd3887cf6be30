//! Help text: the clap-formatted option list followed by the canonical examples.
use std::fmt::Write;

use crate::core::examples::{Example, canonical_examples};
use crate::core::schema;
use crate::types::Platform;

pub fn render_examples(examples: &[Example]) -> String {
    let mut text = String::from("Examples:\n");
    for example in examples {
        // Writing into a String cannot fail.
        let _ = write!(
            text,
            "\n  {}:\n    {}\n",
            example.description,
            example.invocation()
        );
    }
    text
}

pub fn render_help(platform: Platform) -> String {
    let examples = render_examples(&canonical_examples(platform));
    schema::command()
        .after_help(examples)
        .render_help()
        .to_string()
}

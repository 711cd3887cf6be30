//! High-level library API: bind argument tokens to a `BenchmarkOptions`,
//! render help text, and list the canonical usage examples. Prefer these
//! entrypoints over the `core` modules when embedding benchrun.
use crate::core::binder::{Binder, ParseOutcome};
use crate::core::examples::{Example, canonical_examples};
use crate::core::help::render_help;
use crate::core::options::BenchmarkOptions;
use crate::error::Result;
use crate::types::Platform;

/// Bind `tokens` (program name excluded) for the host platform.
pub fn parse<I, S>(tokens: I) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parse_for(tokens, Platform::current())
}

/// Bind `tokens` as if running on `platform`.
pub fn parse_for<I, S>(tokens: I, platform: Platform) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Binder::new(platform).bind(tokens)
}

/// Bind `tokens`, treating every diagnostic as an error. `Ok(None)` means help was requested.
pub fn parse_options<I, S>(tokens: I) -> Result<Option<BenchmarkOptions>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parse(tokens).into_options()
}

/// Help text for the host platform.
pub fn help_text() -> String {
    render_help(Platform::current())
}

/// Canonical examples for the host platform, in display order.
pub fn examples() -> Vec<Example> {
    canonical_examples(Platform::current())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn parse_options_defaults() {
        let options = parse_options(Vec::<String>::new()).unwrap();
        assert_eq!(options, Some(BenchmarkOptions::default()));
    }

    #[test]
    fn parse_options_surfaces_all_errors() {
        let result = parse_options(["--outliers", "Bogus", "--unknownFlag"]);
        match result {
            Err(Error::InvalidArguments(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected InvalidArguments, got {other:?}"),
        }
    }

    #[test]
    fn help_text_matches_host_examples() {
        let text = help_text();
        for example in examples() {
            assert!(text.contains(&example.invocation()));
        }
    }

    #[test]
    fn parse_for_windows_accepts_same_tokens() {
        let tokens = ["-f", "*.ClassA.*", "--join"];
        assert_eq!(
            parse_for(tokens, Platform::Windows),
            parse_for(tokens, Platform::Posix)
        );
    }
}

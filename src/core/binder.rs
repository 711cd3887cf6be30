//! Binds argument tokens to the option schema.
//!
//! Binding is fail-soft: every problem becomes one [`ArgumentError`] and the
//! pass carries on, so a single run reports everything wrong with the command
//! line. A help token at an option position ends the pass with
//! [`ParseOutcome::HelpRequested`] regardless of earlier problems.
use std::collections::HashSet;
use std::path::PathBuf;

use tracing::debug;

use crate::core::help;
use crate::core::options::BenchmarkOptions;
use crate::core::schema::{self, OptionSpec, Scalar, Target};
use crate::error::{ArgumentError, Error, Result};
use crate::types::{OutlierMode, Platform};

/// Result of one binding pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(BenchmarkOptions),
    /// Rendered help text; not an error.
    HelpRequested(String),
    /// Diagnostics in the order they were found. Never empty.
    Failed(Vec<ArgumentError>),
}

impl ParseOutcome {
    /// Collapses the outcome for callers that have no use for help text:
    /// `Ok(None)` when help was requested.
    pub fn into_options(self) -> Result<Option<BenchmarkOptions>> {
        match self {
            ParseOutcome::Parsed(options) => Ok(Some(options)),
            ParseOutcome::HelpRequested(_) => Ok(None),
            ParseOutcome::Failed(errors) => Err(Error::InvalidArguments(errors)),
        }
    }
}

/// Stateless binder; the platform only affects path validation and help rendering.
#[derive(Copy, Clone, Debug, Default)]
pub struct Binder {
    platform: Platform,
}

impl Binder {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn bind<I, S>(&self, tokens: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        Pass::new(&tokens, self.platform).run()
    }
}

struct Pass<'a> {
    tokens: &'a [String],
    position: usize,
    platform: Platform,
    options: BenchmarkOptions,
    errors: Vec<ArgumentError>,
    seen: HashSet<&'static str>,
}

impl<'a> Pass<'a> {
    fn new(tokens: &'a [String], platform: Platform) -> Self {
        Self {
            tokens,
            position: 0,
            platform,
            options: BenchmarkOptions::default(),
            errors: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn run(mut self) -> ParseOutcome {
        while let Some(token) = self.next_token() {
            if schema::is_help(token) {
                debug!("Help requested by {:?}", token);
                return ParseOutcome::HelpRequested(help::render_help(self.platform));
            }
            if let Some(body) = token.strip_prefix("--") {
                self.bind_long(body);
            } else if let Some(body) = token.strip_prefix('-').filter(|body| !body.is_empty()) {
                self.bind_short(token, body);
            } else {
                self.errors.push(ArgumentError::UnknownOption {
                    token: token.to_string(),
                });
            }
        }

        if self.errors.is_empty() {
            ParseOutcome::Parsed(self.options)
        } else {
            debug!("Argument binding failed with {} error(s)", self.errors.len());
            ParseOutcome::Failed(self.errors)
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token.as_str())
    }

    /// Consumes the next token if it is a value rather than another option.
    fn next_value(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.position)?;
        if schema::recognizes(token) {
            return None;
        }
        self.position += 1;
        Some(token.as_str())
    }

    /// `--name` or `--name=value`.
    fn bind_long(&mut self, body: &'a str) {
        let (name, attached) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        match schema::find_long(name) {
            Some(spec) => self.bind(spec, attached),
            None => self.errors.push(ArgumentError::UnknownOption {
                token: format!("--{name}"),
            }),
        }
    }

    /// `-x`, a cluster of flags like `-mdi`, or an attached value like `-jDry`.
    fn bind_short(&mut self, token: &'a str, body: &'a str) {
        let mut rest = body;
        let mut leading = true;
        while let Some(short) = rest.chars().next() {
            rest = &rest[short.len_utf8()..];
            match schema::find_short(short) {
                None if leading => {
                    self.errors.push(ArgumentError::UnknownOption {
                        token: token.to_string(),
                    });
                    return;
                }
                None => self.errors.push(ArgumentError::UnknownOption {
                    token: format!("-{short}"),
                }),
                Some(spec) if spec.is_flag() => self.bind(spec, None),
                Some(spec) => {
                    let attached = (!rest.is_empty()).then_some(rest);
                    self.bind(spec, attached);
                    return;
                }
            }
            leading = false;
        }
    }

    fn bind(&mut self, spec: &'static OptionSpec, attached: Option<&'a str>) {
        let repeated = !spec.is_repeatable() && !self.seen.insert(spec.long);
        match spec.target {
            Target::Switch(switch) => {
                if let Some(value) = attached {
                    self.errors.push(ArgumentError::UnexpectedValue {
                        option: spec.long,
                        value: value.to_string(),
                    });
                } else if repeated {
                    self.errors.push(ArgumentError::Repeated { option: spec.long });
                } else {
                    *self.options.switch_mut(switch) = true;
                    debug!("Bound --{}", spec.long);
                }
            }
            Target::List(field) => {
                let mut values: Vec<String> = attached.map(str::to_string).into_iter().collect();
                while let Some(value) = self.next_value() {
                    values.push(value.to_string());
                }
                if values.is_empty() {
                    self.errors.push(ArgumentError::MissingValue { option: spec.long });
                } else {
                    debug!("Bound --{} to {:?}", spec.long, values);
                    self.options.list_mut(field).extend(values);
                }
            }
            Target::Scalar(scalar) => {
                let Some(value) = attached.or_else(|| self.next_value()) else {
                    self.errors.push(ArgumentError::MissingValue { option: spec.long });
                    return;
                };
                if repeated {
                    self.errors.push(ArgumentError::Repeated { option: spec.long });
                    return;
                }
                match self.assign(scalar, value) {
                    Ok(()) => debug!("Bound --{} to {:?}", spec.long, value),
                    Err(reason) => self.errors.push(ArgumentError::InvalidValue {
                        option: spec.long,
                        value: value.to_string(),
                        reason,
                    }),
                }
            }
        }
    }

    fn assign(&mut self, scalar: Scalar, text: &str) -> std::result::Result<(), String> {
        match scalar {
            Scalar::Text(field) => *self.options.text_mut(field) = text.to_string(),
            Scalar::Outliers => self.options.outliers = coerce_outliers(text)?,
            Scalar::Affinity => self.options.affinity = Some(coerce_integer(text)?),
            Scalar::Path(field) => {
                *self.options.path_mut(field) = Some(coerce_path(text, self.platform)?)
            }
        }
        Ok(())
    }
}

pub(crate) fn coerce_integer(text: &str) -> std::result::Result<i32, String> {
    text.parse::<i32>()
        .map_err(|e| format!("expected an integer: {e}"))
}

pub(crate) fn coerce_outliers(text: &str) -> std::result::Result<OutlierMode, String> {
    OutlierMode::parse(text).ok_or_else(|| "expected one of None, OnlyUpper, OnlyLower, All".to_string())
}

const WINDOWS_INVALID_PATH_CHARS: [char; 6] = ['<', '>', '"', '|', '?', '*'];

pub(crate) fn coerce_path(text: &str, platform: Platform) -> std::result::Result<PathBuf, String> {
    if text.trim().is_empty() {
        return Err("path is empty".to_string());
    }
    if text.contains('\0') {
        return Err("path contains a NUL character".to_string());
    }
    if platform == Platform::Windows {
        if let Some(c) = text.chars().find(|c| WINDOWS_INVALID_PATH_CHARS.contains(c)) {
            return Err(format!("path contains invalid character '{c}'"));
        }
    }
    Ok(PathBuf::from(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind(tokens: &[&str]) -> ParseOutcome {
        Binder::new(Platform::Posix).bind(tokens.iter().copied())
    }

    fn parsed(tokens: &[&str]) -> BenchmarkOptions {
        match bind(tokens) {
            ParseOutcome::Parsed(options) => options,
            other => panic!("expected Parsed for {tokens:?}, got {other:?}"),
        }
    }

    fn failed(tokens: &[&str]) -> Vec<ArgumentError> {
        match bind(tokens) {
            ParseOutcome::Failed(errors) => errors,
            other => panic!("expected Failed for {tokens:?}, got {other:?}"),
        }
    }

    #[test]
    fn attached_long_values() {
        let options = parsed(&["--job=Dry", "--filter=A", "B", "--affinity=7"]);
        assert_eq!(options.base_job, "Dry");
        assert_eq!(options.filters, ["A", "B"]);
        assert_eq!(options.affinity, Some(7));
    }

    #[test]
    fn short_flag_clusters() {
        let options = parsed(&["-mdi"]);
        assert!(options.use_memory_diagnoser);
        assert!(options.use_disassembly_diagnoser);
        assert!(options.run_in_process);
    }

    #[test]
    fn cluster_ending_in_value_option() {
        let options = parsed(&["-mjDry", "-fA", "B"]);
        assert!(options.use_memory_diagnoser);
        assert_eq!(options.base_job, "Dry");
        assert_eq!(options.filters, ["A", "B"]);
    }

    #[test]
    fn unknown_short_token_reported_once() {
        assert_eq!(
            failed(&["-unknown"]),
            [ArgumentError::UnknownOption {
                token: "-unknown".to_string()
            }]
        );
    }

    #[test]
    fn unknown_character_inside_cluster() {
        assert_eq!(
            failed(&["-mx"]),
            [ArgumentError::UnknownOption {
                token: "-x".to_string()
            }]
        );
    }

    #[test]
    fn single_does_not_swallow_next_option() {
        let errors = failed(&["--job", "--memory"]);
        assert_eq!(errors, [ArgumentError::MissingValue { option: "job" }]);
    }

    #[test]
    fn multi_without_values_is_missing_value() {
        assert_eq!(
            failed(&["--runtimes", "--memory"]),
            [ArgumentError::MissingValue { option: "runtimes" }]
        );
        assert_eq!(
            failed(&["-e"]),
            [ArgumentError::MissingValue { option: "exporters" }]
        );
    }

    #[test]
    fn multi_collects_unrecognized_dash_tokens() {
        let options = parsed(&["--filter", "A", "--notAnOption", "-x", "--join"]);
        assert_eq!(options.filters, ["A", "--notAnOption", "-x"]);
        assert!(options.join);
    }

    #[test]
    fn negative_affinity_is_a_value() {
        assert_eq!(parsed(&["--affinity", "-1"]).affinity, Some(-1));
    }

    #[test]
    fn repeated_scalar_options_are_errors() {
        let errors = failed(&["--job", "A", "--job", "B", "-m", "--memory"]);
        assert_eq!(
            errors,
            [
                ArgumentError::Repeated { option: "job" },
                ArgumentError::Repeated { option: "memory" },
            ]
        );
    }

    #[test]
    fn flag_rejects_attached_value() {
        assert_eq!(
            failed(&["--memory=true"]),
            [ArgumentError::UnexpectedValue {
                option: "memory",
                value: "true".to_string()
            }]
        );
    }

    #[test]
    fn bare_token_is_unknown() {
        assert_eq!(
            failed(&["Dry"]),
            [ArgumentError::UnknownOption {
                token: "Dry".to_string()
            }]
        );
    }

    #[test]
    fn unknown_long_with_value_reports_name() {
        assert_eq!(
            failed(&["--bogus=1"]),
            [ArgumentError::UnknownOption {
                token: "--bogus".to_string()
            }]
        );
    }

    #[test]
    fn long_names_are_case_sensitive() {
        assert_eq!(
            failed(&["--Job", "Dry"]),
            [
                ArgumentError::UnknownOption {
                    token: "--Job".to_string()
                },
                ArgumentError::UnknownOption {
                    token: "Dry".to_string()
                },
            ]
        );
    }

    #[test]
    fn help_short_circuits_errors() {
        for token in ["--help", "-h", "-?"] {
            match bind(&["--outliers", "Bogus", token, "--unknown"]) {
                ParseOutcome::HelpRequested(text) => assert!(text.contains("--outliers")),
                other => panic!("expected help, got {other:?}"),
            }
        }
    }

    #[test]
    fn path_checks_depend_on_platform() {
        assert!(coerce_path("out/artifacts", Platform::Posix).is_ok());
        assert!(coerce_path("a*b", Platform::Posix).is_ok());
        assert!(coerce_path("a*b", Platform::Windows).is_err());
        assert!(coerce_path("C:\\bench\\out", Platform::Windows).is_ok());
        assert!(coerce_path("   ", Platform::Posix).is_err());
        assert!(coerce_path("a\0b", Platform::Posix).is_err());
    }

    #[test]
    fn invalid_path_is_coercion_error() {
        let errors = Binder::new(Platform::Windows).bind(["--artifacts", "out|dir"]);
        match errors {
            ParseOutcome::Failed(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].option(), Some("artifacts"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn integer_coercion_rejects_non_numbers() {
        assert_eq!(coerce_integer("42"), Ok(42));
        assert!(coerce_integer("0x0F").is_err());
        assert!(coerce_integer("").is_err());
        assert!(coerce_integer("99999999999").is_err());
    }

    #[test]
    fn into_options_maps_each_outcome() {
        assert!(bind(&[]).into_options().unwrap().is_some());
        assert!(bind(&["-h"]).into_options().unwrap().is_none());
        assert!(matches!(
            bind(&["--nope"]).into_options(),
            Err(Error::InvalidArguments(errors)) if errors.len() == 1
        ));
    }
}

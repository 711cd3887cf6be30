//! The option schema: an ordered, immutable table of option descriptors.
//!
//! Every flag the tool accepts is one [`OptionSpec`] in [`OPTIONS`]. A spec names
//! the option (long form, optional short form), says where its value lands in
//! [`BenchmarkOptions`](crate::BenchmarkOptions) through its [`Target`], and carries
//! the help text shown to users. Arity and value type follow from the target.
//!
//! The same table drives binding ([`crate::core::binder`]), rendering options back
//! to tokens, and the `clap::Command` used to format help output.
use clap::builder::EnumValueParser;
use clap::{Arg, ArgAction, Command};

use crate::types::OutlierMode;

/// Name the tool is invoked as.
pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Tokens that request help instead of binding.
pub const HELP_TOKENS: [&str; 3] = ["--help", "-h", "-?"];

/// How many value tokens an option consumes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Arity {
    /// No value; presence sets the field to true.
    Flag,
    /// Exactly one value.
    Single,
    /// One or more values, collected until the next recognized option.
    Multi,
}

/// Boolean fields toggled by flag options.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Switch {
    MemoryDiagnoser,
    DisassemblyDiagnoser,
    InProcess,
    AllStatistics,
    Join,
    KeepFiles,
}

/// List fields filled by repeatable options.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ListField {
    Runtimes,
    Exporters,
    Filters,
    AllCategories,
    AnyCategories,
    AttributeNames,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TextField {
    BaseJob,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PathField {
    ArtifactsDirectory,
    CliPath,
    CoreRunPath,
}

/// Single-valued fields and the type their text is coerced to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Scalar {
    Text(TextField),
    Outliers,
    Affinity,
    Path(PathField),
}

/// Where an option's value lands in the configuration object.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Target {
    Switch(Switch),
    List(ListField),
    Scalar(Scalar),
}

impl Target {
    pub fn arity(self) -> Arity {
        match self {
            Target::Switch(_) => Arity::Flag,
            Target::List(_) => Arity::Multi,
            Target::Scalar(_) => Arity::Single,
        }
    }

    /// Placeholder shown for the option's value in usage text.
    pub fn value_name(self) -> Option<&'static str> {
        match self {
            Target::Switch(_) => None,
            Target::List(ListField::Filters) => Some("PATTERN"),
            Target::List(ListField::Runtimes) => Some("RUNTIME"),
            Target::List(ListField::Exporters) => Some("EXPORTER"),
            Target::List(ListField::AllCategories | ListField::AnyCategories) => Some("CATEGORY"),
            Target::List(ListField::AttributeNames) => Some("ATTRIBUTE"),
            Target::Scalar(Scalar::Text(TextField::BaseJob)) => Some("JOB"),
            Target::Scalar(Scalar::Outliers) => Some("MODE"),
            Target::Scalar(Scalar::Affinity) => Some("MASK"),
            Target::Scalar(Scalar::Path(PathField::ArtifactsDirectory)) => Some("DIR"),
            Target::Scalar(Scalar::Path(_)) => Some("FILE"),
        }
    }
}

/// Descriptor of one recognized option.
#[derive(Clone, Debug)]
pub struct OptionSpec {
    pub long: &'static str,
    pub short: Option<char>,
    pub target: Target,
    /// Default shown in help; `None` for flags, lists and unset-by-default values.
    pub default: Option<&'static str>,
    pub help: &'static str,
}

impl OptionSpec {
    pub fn arity(&self) -> Arity {
        self.target.arity()
    }

    pub fn is_flag(&self) -> bool {
        self.arity() == Arity::Flag
    }

    /// Flag options and single-valued options may be given at most once.
    pub fn is_repeatable(&self) -> bool {
        self.arity() == Arity::Multi
    }

    /// Token that names this option, preferring the short form when asked.
    pub fn display_name(&self, prefer_short: bool) -> String {
        match self.short {
            Some(short) if prefer_short => format!("-{short}"),
            _ => format!("--{}", self.long),
        }
    }

    fn to_arg(&self) -> Arg {
        let mut arg = Arg::new(self.long).long(self.long).help(self.help);
        if let Some(short) = self.short {
            arg = arg.short(short);
        }
        arg = match self.arity() {
            Arity::Flag => arg.action(ArgAction::SetTrue),
            Arity::Single => arg.action(ArgAction::Set),
            Arity::Multi => arg.action(ArgAction::Append).num_args(1..),
        };
        if let Some(value_name) = self.target.value_name() {
            arg = arg.value_name(value_name);
        }
        if self.target == Target::Scalar(Scalar::Outliers) {
            arg = arg
                .value_parser(EnumValueParser::<OutlierMode>::new())
                .ignore_case(true);
        }
        if let Some(default) = self.default {
            arg = arg.default_value(default);
        }
        arg
    }
}

pub const DEFAULT_JOB: &str = "Default";
pub const DEFAULT_OUTLIERS: &str = "OnlyUpper";

pub static OPTIONS: [OptionSpec; 18] = [
    OptionSpec {
        long: "job",
        short: Some('j'),
        target: Target::Scalar(Scalar::Text(TextField::BaseJob)),
        default: Some(DEFAULT_JOB),
        help: "Dry/Short/Medium/Long or Default",
    },
    OptionSpec {
        long: "runtimes",
        short: Some('r'),
        target: Target::List(ListField::Runtimes),
        default: None,
        help: "Clr/Core/Mono/CoreRt",
    },
    OptionSpec {
        long: "exporters",
        short: Some('e'),
        target: Target::List(ListField::Exporters),
        default: None,
        help: "GitHub/StackOverflow/RPlot/CSV/JSON/HTML/XML",
    },
    OptionSpec {
        long: "memory",
        short: Some('m'),
        target: Target::Switch(Switch::MemoryDiagnoser),
        default: None,
        help: "Prints memory statistics",
    },
    OptionSpec {
        long: "disasm",
        short: Some('d'),
        target: Target::Switch(Switch::DisassemblyDiagnoser),
        default: None,
        help: "Gets disassembly of benchmarked code",
    },
    OptionSpec {
        long: "filter",
        short: Some('f'),
        target: Target::List(ListField::Filters),
        default: None,
        help: "Glob patterns",
    },
    OptionSpec {
        long: "inProcess",
        short: Some('i'),
        target: Target::Switch(Switch::InProcess),
        default: None,
        help: "Run benchmarks in process",
    },
    OptionSpec {
        long: "artifacts",
        short: Some('a'),
        target: Target::Scalar(Scalar::Path(PathField::ArtifactsDirectory)),
        default: None,
        help: "Valid path to accessible directory",
    },
    OptionSpec {
        long: "outliers",
        short: None,
        target: Target::Scalar(Scalar::Outliers),
        default: Some(DEFAULT_OUTLIERS),
        help: "None/OnlyUpper/OnlyLower/All",
    },
    OptionSpec {
        long: "affinity",
        short: None,
        target: Target::Scalar(Scalar::Affinity),
        default: None,
        help: "Affinity mask to set for the benchmark process",
    },
    OptionSpec {
        long: "allStats",
        short: None,
        target: Target::Switch(Switch::AllStatistics),
        default: None,
        help: "Displays all statistics (min, max & more)",
    },
    OptionSpec {
        long: "allCategories",
        short: None,
        target: Target::List(ListField::AllCategories),
        default: None,
        help: "Categories to run. If few are provided, only the benchmarks which belong to all of them are going to be executed",
    },
    OptionSpec {
        long: "anyCategories",
        short: None,
        target: Target::List(ListField::AnyCategories),
        default: None,
        help: "Any Categories to run",
    },
    OptionSpec {
        long: "attribute",
        short: None,
        target: Target::List(ListField::AttributeNames),
        default: None,
        help: "Run all methods with given attribute (applied to class or method)",
    },
    OptionSpec {
        long: "join",
        short: None,
        target: Target::Switch(Switch::Join),
        default: None,
        help: "Prints single table with results for all benchmarks",
    },
    OptionSpec {
        long: "cli",
        short: None,
        target: Target::Scalar(Scalar::Path(PathField::CliPath)),
        default: None,
        help: "Path to dotnet cli (optional)",
    },
    OptionSpec {
        long: "coreRun",
        short: None,
        target: Target::Scalar(Scalar::Path(PathField::CoreRunPath)),
        default: None,
        help: "Path to CoreRun (optional)",
    },
    OptionSpec {
        long: "keepFiles",
        short: None,
        target: Target::Switch(Switch::KeepFiles),
        default: None,
        help: "Determines if all auto-generated files should be kept or removed after running the benchmarks",
    },
];

pub fn find_long(name: &str) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|spec| spec.long == name)
}

pub fn find_short(short: char) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|spec| spec.short == Some(short))
}

pub fn is_help(token: &str) -> bool {
    HELP_TOKENS.contains(&token)
}

/// True if `token` names a declared option (in any accepted spelling) or asks for help.
///
/// Value collection for list options stops at such a token.
pub fn recognizes(token: &str) -> bool {
    if is_help(token) {
        return true;
    }
    if let Some(body) = token.strip_prefix("--") {
        let name = body.split_once('=').map_or(body, |(name, _)| name);
        return find_long(name).is_some();
    }
    token
        .strip_prefix('-')
        .and_then(|body| body.chars().next())
        .is_some_and(|short| find_short(short).is_some())
}

/// `clap` mirror of the schema, used to lay out help text.
pub fn command() -> Command {
    OPTIONS.iter().fold(
        Command::new(PROGRAM_NAME)
            .about("Runs benchmarks selected and configured by the options below")
            .override_usage(format!("{PROGRAM_NAME} [OPTIONS]")),
        |command, spec| command.arg(spec.to_arg()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identities_are_unique() {
        let mut longs = HashSet::new();
        let mut shorts = HashSet::new();
        for spec in &OPTIONS {
            assert!(longs.insert(spec.long), "duplicate long --{}", spec.long);
            if let Some(short) = spec.short {
                assert!(shorts.insert(short), "duplicate short -{short}");
            }
        }
    }

    #[test]
    fn identities_do_not_shadow_help() {
        for token in HELP_TOKENS {
            let body = token.trim_start_matches('-');
            assert!(find_long(body).is_none());
            assert!(body.chars().count() != 1 || find_short(body.chars().next().unwrap()).is_none());
        }
    }

    #[test]
    fn targets_are_unique() {
        let targets: HashSet<_> = OPTIONS.iter().map(|spec| spec.target).collect();
        assert_eq!(targets.len(), OPTIONS.len());
    }

    #[test]
    fn clap_mirror_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn arities_match_declared_table() {
        let arity = |long| find_long(long).map(OptionSpec::arity);
        assert_eq!(arity("job"), Some(Arity::Single));
        assert_eq!(arity("runtimes"), Some(Arity::Multi));
        assert_eq!(arity("memory"), Some(Arity::Flag));
        assert_eq!(arity("outliers"), Some(Arity::Single));
        assert_eq!(arity("affinity"), Some(Arity::Single));
        assert_eq!(arity("attribute"), Some(Arity::Multi));
        assert_eq!(arity("keepFiles"), Some(Arity::Flag));
        assert_eq!(arity("nope"), None);
    }

    #[test]
    fn recognizes_every_spelling() {
        assert!(recognizes("--job"));
        assert!(recognizes("--job=Dry"));
        assert!(recognizes("-j"));
        assert!(recognizes("-jDry"));
        assert!(recognizes("-mdi"));
        assert!(recognizes("--help"));
        assert!(recognizes("-?"));
        assert!(!recognizes("--Job"));
        assert!(!recognizes("--unknownFlag"));
        assert!(!recognizes("-x"));
        assert!(!recognizes("-1"));
        assert!(!recognizes("-"));
        assert!(!recognizes("--"));
        assert!(!recognizes("*.ClassA.*"));
    }

    #[test]
    fn display_name_prefers_short_only_when_available() {
        let job = find_long("job").unwrap();
        let join = find_long("join").unwrap();
        assert_eq!(job.display_name(true), "-j");
        assert_eq!(job.display_name(false), "--job");
        assert_eq!(join.display_name(true), "--join");
    }
}

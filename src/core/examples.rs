//! Canonical usage examples shown under the help text, and the quoting
//! applied to their glob patterns.
use crate::core::options::BenchmarkOptions;
use crate::core::schema::PROGRAM_NAME;
use crate::types::Platform;

/// A described, pre-populated configuration rendered as a sample command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub description: &'static str,
    pub options: BenchmarkOptions,
}

impl Example {
    fn new(description: &'static str, options: BenchmarkOptions) -> Self {
        Self {
            description,
            options,
        }
    }

    /// Arguments that reproduce the snapshot, short names first.
    pub fn command_line(&self) -> String {
        self.options.to_args(true).join(" ")
    }

    /// The full invocation, program name included.
    pub fn invocation(&self) -> String {
        format!("{PROGRAM_NAME} {}", self.command_line())
    }
}

/// Wraps `pattern` in single quotes when a POSIX shell would expand its `*`.
pub fn quote_wildcards(pattern: &str, platform: Platform) -> String {
    if platform.is_posix_shell() && pattern.contains('*') {
        format!("'{pattern}'")
    } else {
        pattern.to_string()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn canonical_examples(platform: Platform) -> Vec<Example> {
    let pattern = |value: &str| quote_wildcards(value, platform);
    vec![
        Example::new(
            "Use Job.ShortRun for running the benchmarks",
            BenchmarkOptions {
                base_job: "short".to_string(),
                ..Default::default()
            },
        ),
        Example::new(
            "Run benchmarks in process",
            BenchmarkOptions {
                run_in_process: true,
                ..Default::default()
            },
        ),
        Example::new(
            "Run benchmarks for Clr, Core and Mono",
            BenchmarkOptions {
                runtimes: strings(&["Clr", "Core", "Mono"]),
                ..Default::default()
            },
        ),
        Example::new(
            "Use MemoryDiagnoser to get GC stats",
            BenchmarkOptions {
                use_memory_diagnoser: true,
                ..Default::default()
            },
        ),
        Example::new(
            "Use DisassemblyDiagnoser to get disassembly",
            BenchmarkOptions {
                use_disassembly_diagnoser: true,
                ..Default::default()
            },
        ),
        Example::new(
            "Run all benchmarks exactly once",
            BenchmarkOptions {
                base_job: "Dry".to_string(),
                filters: vec![pattern("*")],
                ..Default::default()
            },
        ),
        Example::new(
            "Run all benchmarks from System.Memory namespace",
            BenchmarkOptions {
                filters: vec![pattern("System.Memory*")],
                ..Default::default()
            },
        ),
        Example::new(
            "Run all benchmarks from ClassA and ClassB using type names",
            BenchmarkOptions {
                filters: strings(&["ClassA", "ClassB"]),
                ..Default::default()
            },
        ),
        Example::new(
            "Run all benchmarks from ClassA and ClassB using patterns",
            BenchmarkOptions {
                filters: vec![pattern("*.ClassA.*"), pattern("*.ClassB.*")],
                ..Default::default()
            },
        ),
        Example::new(
            "Run all benchmarks called `BenchmarkName` and show the results in single summary",
            BenchmarkOptions {
                join: true,
                filters: vec![pattern("*.BenchmarkName")],
                ..Default::default()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_depends_on_platform_and_wildcard() {
        assert_eq!(quote_wildcards("*.ClassA.*", Platform::Posix), "'*.ClassA.*'");
        assert_eq!(quote_wildcards("*.ClassA.*", Platform::Windows), "*.ClassA.*");
        assert_eq!(quote_wildcards("ClassA", Platform::Posix), "ClassA");
        assert_eq!(quote_wildcards("ClassA", Platform::Windows), "ClassA");
    }

    #[test]
    fn posix_command_lines() {
        let lines: Vec<String> = canonical_examples(Platform::Posix)
            .iter()
            .map(Example::command_line)
            .collect();
        assert_eq!(
            lines,
            [
                "-j short",
                "-i",
                "-r Clr Core Mono",
                "-m",
                "-d",
                "-j Dry -f '*'",
                "-f 'System.Memory*'",
                "-f ClassA ClassB",
                "-f '*.ClassA.*' '*.ClassB.*'",
                "-f '*.BenchmarkName' --join",
            ]
        );
    }

    #[test]
    fn windows_patterns_stay_bare() {
        let examples = canonical_examples(Platform::Windows);
        assert_eq!(examples[8].command_line(), "-f *.ClassA.* *.ClassB.*");
        assert_eq!(examples[9].invocation(), "benchrun -f *.BenchmarkName --join");
    }

    #[test]
    fn every_example_changes_something() {
        for example in canonical_examples(Platform::Posix) {
            assert_ne!(example.options, BenchmarkOptions::default(), "{}", example.description);
        }
    }
}

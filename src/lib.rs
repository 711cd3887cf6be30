#![doc = r#"
benchrun — the command-line configuration surface of a benchmark runner.

This crate declares every option the runner accepts, binds raw argument tokens to a
strongly typed [`BenchmarkOptions`], and renders help text with a fixed set of worked
examples. Running benchmarks, exporting results and resolving jobs are left to the
engine that consumes the bound options.

Binding an argument list
------------------------
```rust
use benchrun::{parse_for, OutlierMode, ParseOutcome, Platform};

let outcome = parse_for(["-j", "Dry", "--filter", "*.ClassA.*", "--outliers", "all"], Platform::Posix);
match outcome {
    ParseOutcome::Parsed(options) => {
        assert_eq!(options.base_job, "Dry");
        assert_eq!(options.filters, ["*.ClassA.*"]);
        assert_eq!(options.outliers, OutlierMode::All);
        assert_eq!(options.affinity, None);
    }
    other => panic!("unexpected outcome: {other:?}"),
}
```

Reporting every problem at once
-------------------------------
Binding never stops at the first bad token; each problem becomes one
[`ArgumentError`], in the order found.

```rust
use benchrun::{parse_for, ArgumentError, ParseOutcome, Platform};

let outcome = parse_for(["--outliers", "Bogus", "--unknownFlag"], Platform::Posix);
let ParseOutcome::Failed(errors) = outcome else { panic!("expected failure") };
assert_eq!(errors.len(), 2);
assert_eq!(errors[0].option(), Some("outliers"));
assert!(matches!(errors[1], ArgumentError::UnknownOption { .. }));
```

Help and examples
-----------------
`--help`, `-h` and `-?` produce [`ParseOutcome::HelpRequested`] carrying the rendered
text. The examples under it are available on their own through [`examples`]:

```rust
use benchrun::{canonical_examples, Platform};

let examples = canonical_examples(Platform::Posix);
assert_eq!(examples[8].command_line(), "-f '*.ClassA.*' '*.ClassB.*'");
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — the option schema, binder, configuration object and help rendering.
- [`types`] — `OutlierMode` and `Platform`.
- [`error`] — crate-level `Error`, `Result` and per-token `ArgumentError`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::binder::{Binder, ParseOutcome};
pub use crate::core::examples::{Example, canonical_examples, quote_wildcards};
pub use crate::core::options::BenchmarkOptions;
pub use crate::core::schema::{Arity, OPTIONS, OptionSpec};
pub use error::{ArgumentError, Error, Result};
pub use types::{OutlierMode, Platform};

// High-level API re-exports
pub use api::{examples, help_text, parse, parse_for, parse_options};

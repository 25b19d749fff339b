//! Schema-driven classification of command-line tokens.
//!
//! A [`Schema`] declares the flags and keyword options a command knows
//! about. [`parse`] walks a flat token list once and sorts every token into
//! positional arguments, matched flags, or keyword values.
//!
//! ```
//! use win_bash_commands::{parse, Schema};
//!
//! let schema = Schema::new().flag("verbose", "v").kwarg("output", "o");
//! let result = parse(&schema, &["build", "-v", "--output", "out.txt"]);
//!
//! assert_eq!(result.args, vec!["build"]);
//! assert!(result.has_flag("verbose"));
//! assert_eq!(result.kwarg("output"), Some("out.txt"));
//! ```

mod schema;
pub use schema::{Field, OptionSpec, Schema};

mod result;
pub use result::ParseResult;

mod parse;
pub use parse::parse;

mod error;
pub use error::Error;

//! Localized command-line option parsing.
//!
//! `argot` is a small data-driven option matcher whose user-facing
//! messages all flow through the [`argot-i18n`](argot_i18n) translation
//! core. Options are declared from conventional flags strings
//! (`-c, --cheese [type]`), matched against arguments in one pass, and
//! every usage failure is rendered in the active locale — or in its
//! English template text when no locale is loaded.
//!
//! # Example
//!
//! ```
//! use argot::{Command, OptionValue, UsageErrorKind};
//!
//! let mut program = Command::new("fondue")
//!     .option("-c, --cheese <type>", "cheese to melt");
//!
//! let parsed = program.parse(["--cheese", "gruyere"])?;
//! assert_eq!(
//!     parsed.get("cheese"),
//!     Some(&OptionValue::Text("gruyere".into())),
//! );
//!
//! let failure = match program.parse(["--wine"]) {
//!     Err(error) => error,
//!     Ok(_) => panic!("--wine is not registered"),
//! };
//! assert_eq!(failure.kind(), UsageErrorKind::UnknownOption);
//! assert_eq!(failure.to_string(), "error: unknown option '--wine'");
//! # Ok::<(), argot::UsageError>(())
//! ```

mod command;
mod error;
mod messages;
mod option;

pub use command::{Command, ParsedOptions};
pub use error::{UsageError, UsageErrorKind};
pub use option::{CliOption, OptionValue, ValueArity};

pub use argot_i18n::{ListStyle, LocaleError, Translator, tr};

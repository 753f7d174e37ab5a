use clap::{Args, Parser, Subcommand};
use txfeed_client::feed::{TimeLocale, TimeZoneSetting};

pub fn parse_locale_arg(value: &str) -> Result<String, String> {
    TimeLocale::parse(value)
        .map(|locale| locale.tag().to_string())
        .map_err(|error| error.message)
}

pub fn parse_timezone_arg(value: &str) -> Result<String, String> {
    TimeZoneSetting::parse(value)
        .map(|_| value.trim().to_string())
        .map_err(|error| error.message)
}

/// Extended help shown after `txfeed show --help`.
pub const SHOW_AFTER_HELP: &str = "\
Feed format:
  One top-level JSON array, most recent transaction first.
  The order is kept exactly as given.

  [
    {
      \"id\": \"<64 hex characters>\",
      \"feePerVByte\": 10.123,
      \"totalFee\": 1245,
      \"size\": 123,
      \"timestamp\": 1704103200000,
      \"feeClassification\": \"CHEAP\",
      \"patternTypes\": [\"RBF\"],
      \"isOutlier\": false,
      \"windowSnapshot\": {
        \"avgFeePerVByte\": 20.2,
        \"medianFeePerVByte\": 20.5,
        \"transactionsCount\": 3,
        \"outliersCount\": 0
      }
    }
  ]

  Required: id, feePerVByte, totalFee, size, timestamp, feeClassification.
  feeClassification must be CHEAP, NORMAL, or EXPENSIVE.
  Fees and size must be non-negative; timestamp is milliseconds since epoch.

Time column:
  --locale picks the clock convention (default: TXFEED_LOCALE, then LC_ALL,
  LC_TIME, LANG, then en-US). --tz picks the zone (default: TXFEED_TZ, then
  local).
";

#[derive(Debug, Parser)]
#[command(
    name = "txfeed",
    version,
    about = "recent transaction feed with fee severity",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a transaction feed from a JSON file or stdin
    #[command(after_long_help = SHOW_AFTER_HELP)]
    Show {
        /// Path to a JSON feed file (use `-` for stdin)
        path: Option<String>,
        #[command(flatten)]
        display: DisplayArgs,
    },
    /// Render the bundled three-transaction sample feed
    Demo {
        #[command(flatten)]
        display: DisplayArgs,
    },
}

impl Commands {
    pub fn display(&self) -> &DisplayArgs {
        match self {
            Self::Show { display, .. } | Self::Demo { display } => display,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Show { .. } => "show",
            Self::Demo { .. } => "demo",
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct DisplayArgs {
    /// Clock convention for the Time column (e.g. en-US, en-GB, ja-JP)
    #[arg(long, value_parser = parse_locale_arg)]
    pub locale: Option<String>,
    /// Timezone for the Time column: local, utc, or a fixed offset like +02:00
    #[arg(long = "tz", value_parser = parse_timezone_arg, allow_hyphen_values = true)]
    pub timezone: Option<String>,
    /// Emit machine-readable JSON output
    #[arg(long, conflicts_with = "markup")]
    pub json: bool,
    /// Emit list markup with per-severity style classes
    #[arg(long)]
    pub markup: bool,
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{Commands, parse_from};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 8] = [
            vec!["txfeed", "show", "feed.json"],
            vec!["txfeed", "show", "-"],
            vec!["txfeed", "show"],
            vec!["txfeed", "show", "feed.json", "--json"],
            vec!["txfeed", "show", "feed.json", "--markup", "--tz", "utc"],
            vec!["txfeed", "demo"],
            vec!["txfeed", "demo", "--locale", "de_DE.UTF-8", "--tz", "-05:00"],
            vec!["txfeed", "demo", "--json"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn locale_flag_is_normalized() {
        let parsed = parse_from(["txfeed", "demo", "--locale", "en_GB.UTF-8"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(cli.command.display().locale.as_deref(), Some("en-GB"));
            assert_eq!(cli.command.name(), "demo");
        }
    }

    #[test]
    fn show_keeps_positional_path() {
        let parsed = parse_from(["txfeed", "show", "recent.json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Show { ref path, .. } if path.as_deref() == Some("recent.json")
            ));
        }
    }

    #[test]
    fn unsupported_locale_is_rejected_at_parse_time() {
        let parsed = parse_from(["txfeed", "demo", "--locale", "xx-YY"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.kind(), ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn json_and_markup_conflict() {
        let parsed = parse_from(["txfeed", "demo", "--json", "--markup"]);
        assert!(parsed.is_err());
        if let Err(error) = parsed {
            assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
        }
    }
}

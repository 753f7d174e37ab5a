use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
    Markup,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let display = command.display();
    if display.json {
        OutputMode::Json
    } else if display.markup {
        OutputMode::Markup
    } else {
        OutputMode::Text
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn mode_follows_output_flags() {
        let cases: [(&[&str], OutputMode); 4] = [
            (&["txfeed", "show", "feed.json"], OutputMode::Text),
            (&["txfeed", "show", "feed.json", "--json"], OutputMode::Json),
            (&["txfeed", "demo", "--markup"], OutputMode::Markup),
            (&["txfeed", "demo"], OutputMode::Text),
        ];

        for (args, expected) in cases {
            let parsed = parse_from(args);
            assert!(parsed.is_ok());
            if let Ok(cli) = parsed {
                assert_eq!(mode_for_command(&cli.command), expected);
            }
        }
    }
}

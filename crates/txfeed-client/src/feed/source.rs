use std::fs;
use std::io::{IsTerminal, Read};

use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SourceKind {
    File,
    Stdin,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Stdin => "stdin",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedSource {
    pub kind: SourceKind,
    pub path: Option<String>,
    pub content: String,
}

/// Picks the feed body: `-` or no path reads stdin, anything else is a file.
pub fn resolve_source(
    path: Option<String>,
    stdin_override: Option<String>,
) -> ClientResult<ResolvedSource> {
    match path {
        Some(path_value) if path_value != "-" => {
            let content = fs::read_to_string(&path_value).map_err(|error| {
                ClientError::invalid_argument_with_recovery(
                    &format!("Could not read feed file `{path_value}`: {error}"),
                    vec![
                        "Verify the path exists and is readable.".to_string(),
                        "Rerun txfeed show <path>.".to_string(),
                    ],
                )
            })?;
            Ok(ResolvedSource {
                kind: SourceKind::File,
                path: Some(path_value),
                content,
            })
        }
        explicit => {
            let explicit_stdin = explicit.is_some();
            match read_stdin(stdin_override)? {
                Some(content) => Ok(ResolvedSource {
                    kind: SourceKind::Stdin,
                    path: None,
                    content,
                }),
                None if explicit_stdin => Err(missing_source_error(
                    "Path `-` means stdin input, but stdin was empty.",
                )),
                None => Err(missing_source_error("No feed source provided.")),
            }
        }
    }
}

fn missing_source_error(message: &str) -> ClientError {
    ClientError::invalid_argument_with_recovery(
        message,
        vec![
            "Pass a JSON file path: txfeed show feed.json".to_string(),
            "Or pipe the feed: cat feed.json | txfeed show -".to_string(),
        ],
    )
}

fn read_stdin(stdin_override: Option<String>) -> ClientResult<Option<String>> {
    if let Some(value) = stdin_override {
        return Ok(non_blank(value));
    }

    if std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|error| {
            ClientError::invalid_argument_with_recovery(
                &format!("Could not read stdin: {error}"),
                vec!["Retry with an explicit file path argument.".to_string()],
            )
        })?;

    Ok(non_blank(buffer))
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{SourceKind, resolve_source};

    #[test]
    fn dash_reads_stdin_override() {
        let resolved = resolve_source(Some("-".to_string()), Some("[]".to_string()));
        assert!(resolved.is_ok());
        if let Ok(source) = resolved {
            assert_eq!(source.kind, SourceKind::Stdin);
            assert_eq!(source.content, "[]");
            assert!(source.path.is_none());
        }
    }

    #[test]
    fn blank_stdin_with_dash_is_an_error() {
        let resolved = resolve_source(Some("-".to_string()), Some("  \n".to_string()));
        assert!(resolved.is_err());
        if let Err(error) = resolved {
            assert_eq!(error.code, "invalid_argument");
            assert!(error.message.contains("stdin was empty"));
        }
    }

    #[test]
    fn missing_file_reports_the_path() {
        let resolved = resolve_source(Some("/nonexistent/feed.json".to_string()), None);
        assert!(resolved.is_err());
        if let Err(error) = resolved {
            assert!(error.message.contains("/nonexistent/feed.json"));
        }
    }
}

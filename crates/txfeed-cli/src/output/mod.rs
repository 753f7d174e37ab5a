mod error_text;
mod feed_markup;
mod feed_text;
mod feed_view;
mod format;
mod json;
mod mode;

use std::io;

use txfeed_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, mode_for_command};

use crate::stdout_io::write_stdout_line;

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
        OutputMode::Markup => render_markup_success(success)?,
    };
    write_stdout_line(&body)
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text | OutputMode::Markup => error_text::render_error(error),
    };
    write_stdout_line(&body)
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "feed" | "demo" => feed_text::render_feed(&success.data),
        _ => Err(unsupported(success, "text")),
    }
}

fn render_markup_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "feed" | "demo" => feed_markup::render_feed_markup(&success.data),
        _ => Err(unsupported(success, "markup")),
    }
}

fn unsupported(success: &SuccessEnvelope, mode: &str) -> io::Error {
    io::Error::other(format!(
        "unsupported {mode} output command `{}`",
        success.command
    ))
}

use txfeed_client::ClientError;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "Could not render the transaction feed.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
        String::new(),
        "What to do next:".to_string(),
    ];

    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use txfeed_client::ClientError;

    use super::render_error;

    #[test]
    fn renders_standard_error_layout() {
        let error = ClientError::invalid_transaction_data(4, "size", "must not be negative.");

        let rendered = render_error(&error);
        assert!(rendered.starts_with("Could not render the transaction feed."));
        assert!(rendered.contains("  Error:    invalid_transaction_data"));
        assert!(rendered.contains("  Details:  Transaction 4 has invalid `size`: must not be negative."));
        assert!(rendered.contains("  1. Validate transaction records upstream before formatting."));
    }

    #[test]
    fn empty_recovery_falls_back_to_retry() {
        let error = ClientError::internal_serialization("boom");
        assert!(render_error(&error).ends_with("  1. Retry the command."));
    }
}

use std::io;

use serde_json::Value;

use super::feed_view::{EMPTY_FEED_PLACEHOLDER, FeedRowView, FeedView};

pub const LIST_CLASS: &str = "transaction-list";
pub const PLACEHOLDER_CLASS: &str = "transaction-list__placeholder";
pub const ITEM_CLASS: &str = "transaction-item";
pub const FEE_CLASS: &str = "transaction-item__fee";

/// Renders the feed as list markup whose class names encode fee severity,
/// e.g. `transaction-item__fee transaction-item__fee--high`.
pub fn render_feed_markup(data: &Value) -> io::Result<String> {
    let view = FeedView::from_data(data)?;
    if view.is_empty() {
        return Ok(format!(
            "<p class=\"{PLACEHOLDER_CLASS}\">{}</p>",
            escape(EMPTY_FEED_PLACEHOLDER)
        ));
    }

    let mut lines = vec![format!("<ul class=\"{LIST_CLASS}\">")];
    for row in &view.rows {
        lines.extend(render_item(row)?);
    }
    lines.push("</ul>".to_string());
    Ok(lines.join("\n"))
}

fn render_item(row: &FeedRowView) -> io::Result<Vec<String>> {
    let severity_class = severity_modifier(&row.fee_severity)?;
    Ok(vec![
        format!("  <li class=\"{ITEM_CLASS}\">"),
        span("transaction-item__id", &row.display_id),
        span("transaction-item__size", &row.display_size),
        span(
            &format!("{FEE_CLASS} {FEE_CLASS}--{severity_class}"),
            &row.display_fee,
        ),
        span("transaction-item__time", &row.display_time),
        "  </li>".to_string(),
    ])
}

fn severity_modifier(severity: &str) -> io::Result<&'static str> {
    match severity {
        "low" => Ok("low"),
        "medium" => Ok("medium"),
        "high" => Ok("high"),
        other => Err(io::Error::other(format!(
            "feed output has unknown fee severity `{other}`"
        ))),
    }
}

fn span(class: &str, text: &str) -> String {
    format!("    <span class=\"{class}\">{}</span>", escape(text))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{escape, render_feed_markup};

    fn feed(rows: Value) -> Value {
        let state = if rows.as_array().is_some_and(|items| items.is_empty()) {
            "empty"
        } else {
            "populated"
        };
        json!({
            "state": state,
            "transaction_count": rows.as_array().map(Vec::len).unwrap_or(0),
            "locale": "en-US",
            "timezone": "UTC",
            "source": {"kind": "sample"},
            "rows": rows
        })
    }

    #[test]
    fn empty_feed_renders_placeholder_without_items() {
        let rendered = render_feed_markup(&feed(json!([])));
        assert!(rendered.is_ok());
        if let Ok(markup) = rendered {
            assert_eq!(
                markup,
                "<p class=\"transaction-list__placeholder\">No transactions yet...</p>"
            );
            assert!(!markup.contains("transaction-item"));
        }
    }

    #[test]
    fn fee_span_carries_severity_class() {
        let rendered = render_feed_markup(&feed(json!([
            {
                "display_id": "222222222222222222222222222222...",
                "display_size": "456 bytes",
                "display_fee": "20.50 sat/byte",
                "fee_severity": "medium",
                "display_time": "11:00:00 AM"
            }
        ])));
        assert!(rendered.is_ok());
        if let Ok(markup) = rendered {
            assert_eq!(markup.matches("<li class=\"transaction-item\">").count(), 1);
            assert!(markup.contains(
                "<span class=\"transaction-item__fee transaction-item__fee--medium\">20.50 sat/byte</span>"
            ));
            assert!(markup.contains("<span class=\"transaction-item__size\">456 bytes</span>"));
            assert!(markup.starts_with("<ul class=\"transaction-list\">"));
            assert!(markup.ends_with("</ul>"));
        }
    }

    #[test]
    fn unknown_severity_is_not_styled() {
        let rendered = render_feed_markup(&feed(json!([
            {
                "display_id": "a...",
                "display_size": "1 bytes",
                "display_fee": "1.00 sat/byte",
                "fee_severity": "extreme",
                "display_time": "1:00:00 AM"
            }
        ])));
        assert!(rendered.is_err());
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
    }
}

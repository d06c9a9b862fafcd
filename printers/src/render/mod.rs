//! HTML table rendering for printer listings.
//!
//! The whole table is built as one string so the caller can assign it to
//! its container in a single write:
//!
//! ```text
//! <table border="1"><tr><td>ip</td>...</tr><tr><td><a href="http://10.0.0.5" target="_blank">10.0.0.5</a></td>...</tr></table>
//! ```
//!
//! # Cell text
//!
//! By default cell text is written verbatim, so a cell holding `<b>x</b>`
//! becomes bold markup. [`CellEscaping::Escaped`] turns markup-significant
//! characters into entities instead; it changes the output for such cells
//! and is opt-in.

use crate::models::{Row, Table};
use crate::parser::split_table;
use crate::validation::is_valid_ip;

/// Scheme prefixed to linked addresses.
pub const LINK_SCHEME: &str = "http://";

/// Element id of the filename label region.
pub const FILENAME_ELEMENT_ID: &str = "filename";

/// Element id of the table container region.
pub const TABLE_ELEMENT_ID: &str = "csvTable";

/// How cell text is written into markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellEscaping {
    /// Cell text is inserted as-is.
    #[default]
    Verbatim,
    /// `& < > " '` are replaced by entities.
    Escaped,
}

/// Options for [`render_table`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub escape: CellEscaping,
}

impl RenderOptions {
    pub fn escaped() -> Self {
        Self {
            escape: CellEscaping::Escaped,
        }
    }

    fn text<'a>(&self, value: &'a str) -> std::borrow::Cow<'a, str> {
        match self.escape {
            CellEscaping::Verbatim => std::borrow::Cow::Borrowed(value),
            CellEscaping::Escaped => std::borrow::Cow::Owned(escape_html(value)),
        }
    }
}

/// Replace markup-significant characters with entities.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render one cell, linking it when it is an IPv4 address.
pub fn render_cell(cell: &str, options: &RenderOptions) -> String {
    let text = options.text(cell);
    if is_valid_ip(cell) {
        format!(
            r#"<td><a href="{scheme}{text}" target="_blank">{text}</a></td>"#,
            scheme = LINK_SCHEME,
            text = text
        )
    } else {
        format!("<td>{}</td>", text)
    }
}

fn render_row(out: &mut String, row: &Row, options: &RenderOptions) {
    out.push_str("<tr>");
    for cell in row.cells() {
        out.push_str(&render_cell(cell, options));
    }
    out.push_str("</tr>");
}

/// Render a whole table as one markup fragment.
pub fn render_table(table: &Table, options: &RenderOptions) -> String {
    let mut out = String::from(r#"<table border="1">"#);
    for row in table.rows() {
        render_row(&mut out, row, options);
    }
    out.push_str("</table>");
    out
}

/// Split listing text and render it in one step.
pub fn render_csv(text: &str, options: &RenderOptions) -> String {
    let table = split_table(text);
    let markup = render_table(&table, options);
    log::debug!("rendered {} rows into {} bytes of markup", table.len(), markup.len());
    markup
}

/// Wrap a label and a table fragment in a standalone HTML document.
///
/// The label is written as text, so it is always escaped. The table markup
/// is inserted unchanged.
pub fn render_page(label: &str, table_markup: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>{label}</title>\n",
            "</head>\n",
            "<body>\n",
            "<h2 id=\"{filename_id}\">{label}</h2>\n",
            "<div id=\"{table_id}\">{table}</div>\n",
            "</body>\n",
            "</html>\n",
        ),
        label = escape_html(label),
        filename_id = FILENAME_ELEMENT_ID,
        table_id = TABLE_ELEMENT_ID,
        table = table_markup,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(markup: &str) -> Vec<&str> {
        markup
            .trim_start_matches(r#"<table border="1">"#)
            .trim_end_matches("</table>")
            .split("</tr>")
            .filter(|s| !s.is_empty())
            .collect()
    }

    #[test]
    fn test_links_ip_cells() {
        let markup = render_csv("a,192.168.1.1\nb,10.0.0.1\n", &RenderOptions::default());

        assert_eq!(
            markup,
            concat!(
                r#"<table border="1">"#,
                r#"<tr><td>a</td><td><a href="http://192.168.1.1" target="_blank">192.168.1.1</a></td></tr>"#,
                r#"<tr><td>b</td><td><a href="http://10.0.0.1" target="_blank">10.0.0.1</a></td></tr>"#,
                r#"<tr><td></td></tr>"#,
                "</table>"
            )
        );
        assert_eq!(rows_of(&markup).len(), 3);
    }

    #[test]
    fn test_row_count_matches_lines() {
        let text = "ip,model\n10.0.0.5,bizhub\n\n10.0.0.6,ecosys";
        let markup = render_csv(text, &RenderOptions::default());
        assert_eq!(markup.matches("<tr>").count(), text.split('\n').count());
    }

    #[test]
    fn test_header_row_is_plain_data() {
        let markup = render_csv("ip,model,serial,hostname", &RenderOptions::default());
        assert_eq!(
            markup,
            r#"<table border="1"><tr><td>ip</td><td>model</td><td>serial</td><td>hostname</td></tr></table>"#
        );
    }

    #[test]
    fn test_markup_passes_through_verbatim() {
        let markup = render_csv("<b>x</b>", &RenderOptions::default());
        assert!(markup.contains("<td><b>x</b></td>"));
    }

    #[test]
    fn test_escaping_is_opt_in() {
        let markup = render_csv("<b>x</b>,a&b", &RenderOptions::escaped());
        assert!(markup.contains("<td>&lt;b&gt;x&lt;/b&gt;</td>"));
        assert!(markup.contains("<td>a&amp;b</td>"));
    }

    #[test]
    fn test_crlf_cell_is_not_linked() {
        let markup = render_csv("x,10.0.0.1\r\n", &RenderOptions::default());
        assert!(markup.contains("<td>10.0.0.1\r</td>"));
        assert!(!markup.contains("href"));
    }

    #[test]
    fn test_render_page_regions() {
        let page = render_page("printers_2024-05.csv", "<table border=\"1\"></table>");
        assert!(page.contains(r#"<h2 id="filename">printers_2024-05.csv</h2>"#));
        assert!(page.contains(r#"<div id="csvTable"><table border="1"></table></div>"#));
    }

    #[test]
    fn test_render_page_escapes_label() {
        let page = render_page("a<b>.csv", "");
        assert!(page.contains("a&lt;b&gt;.csv"));
        assert!(!page.contains("a<b>.csv"));
    }
}

//! Markdown and HTML document wrappers for the extracted text.
//!
//! Both templates put the raw (logical-order) text inside a `dir="rtl"`
//! container and rely on the renderer's own bidi support; the reshaped
//! display text is never used here. The font stack and visual constants are
//! fixed — there is deliberately no theming knob.
//!
//! The title and content are interpolated **without any HTML escaping**: a
//! filename or recognised line containing `<`, `&`, or `"` lands in the
//! output verbatim and, in the HTML case, is parsed as live markup. This is
//! long-standing behaviour; escaping would change the rendered output of
//! every existing document, so it stays until a deliberate compatibility
//! break is warranted.

/// Wrap the raw document text in the RTL Markdown template.
pub fn markdown_document(content: &str, title: &str) -> String {
    format!(
        "<div dir=\"rtl\" style=\"font-family:'Amiri','Noto Naskh Arabic','Arial',sans-serif;font-size:1.1em;line-height:2; white-space:pre-wrap\">\n\
         \n\
         # {title}\n\
         \n\
         {content}\n\
         \n\
         </div>\n"
    )
}

/// Wrap the raw document text in a standalone RTL HTML document.
pub fn html_document(content: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ar" dir="rtl">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <link href="https://fonts.googleapis.com/css2?family=Amiri&family=Noto+Naskh+Arabic&display=swap" rel="stylesheet">
    <style>
        body {{
            direction: rtl;
            font-family: 'Amiri', 'Noto Naskh Arabic', 'Arial', 'Tahoma', sans-serif;
            background: #f5f5f5;
            color: #222;
            margin: 2em auto;
            max-width: 900px;
            line-height: 2;
            font-size: 1.25em;
            padding: 2em;
            border-radius: 10px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.12);
        }}
        .arabic-content {{
            direction: rtl;
            unicode-bidi: plaintext;
            white-space: pre-wrap;
            word-break: break-word;
            text-align: initial;
            background: #fff;
            padding: 1em;
            border-radius: 6px;
            border: 1px solid #ccc;
            font-family: inherit;
            font-variant-numeric: arabic-indic;
            line-height: 2;
        }}
        h1, h2, h3, h4 {{
            font-weight: bold;
        }}
    </style>
</head>
<body>
<h1>{title}</h1>
<div class="arabic-content">
{content}
</div>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_wraps_content_verbatim() {
        let md = markdown_document("بسم الله الرحمن الرحيم", "Report_2024");
        assert!(md.starts_with("<div dir=\"rtl\""));
        assert!(md.contains("# Report_2024"));
        assert!(md.contains("بسم الله الرحمن الرحيم"));
        assert!(md.trim_end().ends_with("</div>"));
    }

    #[test]
    fn html_is_a_complete_rtl_document() {
        let html = html_document("نص تجريبي للاختبار", "Report_2024");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.contains("<title>Report_2024</title>"));
        assert!(html.contains("<h1>Report_2024</h1>"));
        assert!(html.contains("نص تجريبي للاختبار"));
        assert!(html.contains(r#"<div class="arabic-content">"#));
        assert!(html.contains("'Amiri', 'Noto Naskh Arabic'"));
    }

    #[test]
    fn title_appears_in_both_heading_and_title_tag() {
        let html = html_document("x", "كتاب النحو");
        assert_eq!(html.matches("كتاب النحو").count(), 2);
    }

    #[test]
    fn no_escaping_is_applied() {
        // Bug-compatible with the original: markup-significant characters
        // pass through untouched.
        let html = html_document("a < b & c", "<Draft>");
        assert!(html.contains("<title><Draft></title>"));
        assert!(html.contains("a < b & c"));
    }
}

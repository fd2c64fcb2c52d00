//! Static fallback page shown when the listing cannot be produced.

use std::fmt;

use super::assets::ERROR_PAGE_CSS;
use super::html::Escaped;

/// Error page shell around a single user-facing message.
pub struct ErrorPage<'a> {
    pub message: &'a str,
}

impl fmt::Display for ErrorPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en">"#)?;
        writeln!(f, "<head>")?;
        writeln!(f, r#"<meta charset="UTF-8">"#)?;
        writeln!(
            f,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#
        )?;
        writeln!(f, "<title>VendorWize - Error</title>")?;
        writeln!(f, "<style>{ERROR_PAGE_CSS}</style>")?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, r#"<div class="error">"#)?;
        writeln!(f, "<h1>Something went wrong</h1>")?;
        writeln!(f, "<p>{}</p>", Escaped(self.message))?;
        writeln!(f, "</div>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

//! Stylesheet content attached to every generated book.

/// Content stylesheet, linked from every content document.
pub const STYLE_CSS: &str = "h1 {
  line-height: 130%;
  text-align: center;
  font-weight: bold;
  font-size: xx-large;
  margin-top: 3.2em;
  margin-bottom: 3.3em;
}

h2 {
  line-height: 130%;
  text-align: center;
  font-weight: bold;
  font-size: x-large;
  margin-top: 1.2em;
  margin-bottom: 2.3em;
}

div {
  margin: 0;
  padding: 0;
  text-align: justify;
}

p {
  text-indent: 2em;
  display: block;
  line-height: 1.3em;
  margin-top: 0.4em;
  margin-bottom: 0.4em;
}
";

/// TOC stylesheet, linked from the navigation document.
pub const TOC_CSS: &str = "h2 {
  font-size: 2em;
  font-weight: bold;
  margin-bottom: 1em;
  text-align: center;
}
";

/// Appended to [`TOC_CSS`] when the document uses sections: roman numbering
/// for the section list, decimal for the chapters within.
pub const TOC_CSS_SECTIONS: &str = "
ol {
  list-style-type: upper-roman;
}

ol ol {
    list-style-type: decimal;
}
";

/// TOC stylesheet for a document, depending on whether sections are in use.
pub fn toc_css(use_sections: bool) -> String {
    if use_sections {
        format!("{TOC_CSS}{TOC_CSS_SECTIONS}")
    } else {
        TOC_CSS.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toc_css_variants() {
        assert_eq!(toc_css(false), TOC_CSS);
        let sectioned = toc_css(true);
        assert!(sectioned.starts_with(TOC_CSS));
        assert!(sectioned.contains("upper-roman"));
        assert!(sectioned.contains("decimal"));
    }
}

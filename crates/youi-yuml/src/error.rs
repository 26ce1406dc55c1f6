/// A failure to turn YUML source into an [`Element`](crate::Element) tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Malformed markup, as reported by the XML tokenizer.
    #[error("YUML syntax error: {0}")]
    Syntax(#[source] roxmltree::Error),

    /// The input ended before the root element was closed, or had none.
    #[error("incomplete YUML tree: {0}")]
    IncompleteDocument(String),

    #[error("failed to read YUML source: {0}")]
    Io(#[from] std::io::Error),

    #[error("YUML source is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl From<roxmltree::Error> for ParseError {
    fn from(err: roxmltree::Error) -> Self {
        match err {
            roxmltree::Error::NoRootNode => {
                ParseError::IncompleteDocument("no root element".to_string())
            }
            roxmltree::Error::UnclosedRootNode | roxmltree::Error::UnexpectedEndOfStream => {
                ParseError::IncompleteDocument(err.to_string())
            }
            other => ParseError::Syntax(other),
        }
    }
}

use std::fmt;

/// Simplified article body produced by the content extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadableDocument {
    pub title: Option<String>,
    pub paragraphs: Vec<String>,
}

impl ReadableDocument {
    pub fn new(title: Option<String>, paragraphs: Vec<String>) -> Self {
        Self { title, paragraphs }
    }
}

impl fmt::Display for ReadableDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "{}", title)?;
            writeln!(f)?;
        }
        for paragraph in &self.paragraphs {
            writeln!(f, "{}", paragraph)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

use license_notice::prelude::*;
use std::collections::HashMap;

/// Mock LookupSourceLoader serving in-memory documents by reference
#[derive(Default, Clone)]
pub struct MockLookupLoader {
    sources: HashMap<String, String>,
}

impl MockLookupLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, reference: &str, content: &str) -> Self {
        self.sources
            .insert(reference.to_string(), content.to_string());
        self
    }
}

impl LookupSourceLoader for MockLookupLoader {
    fn load(&self, reference: &str) -> Result<RawLookupDocument> {
        match self.sources.get(reference) {
            Some(content) => Ok(RawLookupDocument::new(reference, content.as_str())),
            None => anyhow::bail!("Mock: lookup source not found: {}", reference),
        }
    }
}

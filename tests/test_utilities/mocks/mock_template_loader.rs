use license_notice::prelude::*;

/// Mock TemplateLoader returning a fixed template
pub struct MockTemplateLoader {
    pub template: String,
    pub should_fail: bool,
}

impl MockTemplateLoader {
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            template: String::new(),
            should_fail: true,
        }
    }
}

impl TemplateLoader for MockTemplateLoader {
    fn load(&self, name: &str, _encoding: CharacterEncoding) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock template read failure: {}", name);
        }
        Ok(self.template.clone())
    }
}

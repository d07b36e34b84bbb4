use std::collections::HashMap;

use notice_gen::prelude::*;

/// Mock ResourceFinder serving in-memory resources by location
#[derive(Default)]
pub struct MockResourceFinder {
    resources: HashMap<String, String>,
}

impl MockResourceFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, location: &str, content: &str) -> Self {
        self.resources
            .insert(location.to_string(), content.to_string());
        self
    }
}

impl ResourceFinder for MockResourceFinder {
    fn find(&self, location: &str) -> Result<ResolvedResource> {
        match self.resources.get(location) {
            Some(content) => Ok(ResolvedResource::inline(
                location.to_string(),
                content.clone(),
            )),
            None => Err(NoticeError::ResourceNotFound {
                location: location.to_string(),
            }
            .into()),
        }
    }
}

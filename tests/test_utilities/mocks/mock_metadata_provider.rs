use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use notice_gen::prelude::*;

/// Mock MetadataProvider for testing
pub struct MockMetadataProvider {
    pub metadata: HashMap<String, ArtifactMetadata>,
    pub should_fail: bool,
    call_count: AtomicUsize,
}

impl MockMetadataProvider {
    pub fn new() -> Self {
        Self {
            metadata: HashMap::new(),
            should_fail: false,
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn with_license(mut self, coordinates: &str, name: &str, license: &str) -> Self {
        self.metadata.insert(
            coordinates.to_string(),
            ArtifactMetadata {
                name: Some(name.to_string()),
                licenses: vec![DeclaredLicense {
                    name: license.to_string(),
                    url: None,
                }],
                organization: None,
                inception_year: None,
            },
        );
        self
    }

    pub fn with_metadata(mut self, coordinates: &str, metadata: ArtifactMetadata) -> Self {
        self.metadata.insert(coordinates.to_string(), metadata);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            metadata: HashMap::new(),
            should_fail: true,
            call_count: AtomicUsize::new(0),
        }
    }
}

impl Default for MockMetadataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataProvider for MockMetadataProvider {
    fn load(&self, coordinates: &ArtifactCoordinates) -> Result<Option<ArtifactMetadata>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.should_fail {
            anyhow::bail!("Mock metadata provider failure");
        }

        Ok(self.metadata.get(&coordinates.to_string()).cloned())
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use provcfg::domain::{ConfigDocument, ConfigError, Result};
use provcfg::ports::DocumentSource;
use std::io::Write;

/// A configuration document shaped like a real deployment.
#[allow(dead_code)]
pub const SAMPLE_YAML: &str = r#"
all:
  checkin_interval: 15
  installer_path: "installers:/usr/share/provision/installers"
  microkernel:
    debug_level: info
    kernel_args: "quiet"
  facts:
    blacklist:
      - domain
      - filesystems
      - /^macaddress_.*/
      - /^ipaddress6?_.*/

development:
  checkin_interval: 5
  microkernel:
    debug_level: debug

production:
  checkin_interval: 60
  broker_path: "/etc/provision/brokers:brokers"
  facts:
    blacklist: uptime_seconds
"#;

/// A document source for testing load failures and plain in-memory loads.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct MockDocumentSource {
    name: String,
    document: ConfigDocument,
    should_fail: bool,
}

#[allow(dead_code)]
impl MockDocumentSource {
    /// Creates a mock source that returns `document`.
    pub fn new(name: impl Into<String>, document: ConfigDocument) -> Self {
        Self {
            name: name.into(),
            document,
            should_fail: false,
        }
    }

    /// Sets whether loading should fail.
    pub fn with_failing_load(mut self, should_fail: bool) -> Self {
        self.should_fail = should_fail;
        self
    }
}

impl DocumentSource for MockDocumentSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<ConfigDocument> {
        if self.should_fail {
            Err(ConfigError::SourceError {
                source_name: self.name.clone(),
                message: "Mock load failure".to_string(),
                source: None,
            })
        } else {
            Ok(self.document.clone())
        }
    }
}

/// Creates a temporary YAML file with the given content.
///
/// Returns a NamedTempFile that will be automatically deleted when dropped.
#[allow(dead_code)]
pub fn create_temp_yaml(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

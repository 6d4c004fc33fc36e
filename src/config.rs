use crate::strict_mode::DevCheckMode;

/// Id of the element in `index.html` the app is mounted into.
pub const MOUNT_ID: &str = "root";

#[derive(Debug, Clone, PartialEq)]
pub struct BootConfig {
    pub mount_id: String,
    pub dev_check: DevCheckMode,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            mount_id: MOUNT_ID.to_string(),
            dev_check: DevCheckMode::for_build(),
        }
    }
}

impl BootConfig {
    pub fn with_mount_id(mut self, id: impl Into<String>) -> Self {
        self.mount_id = id.into();
        self
    }

    pub fn with_dev_check(mut self, dev_check: DevCheckMode) -> Self {
        self.dev_check = dev_check;
        self
    }
}

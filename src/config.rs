/// Registry configuration - immutable after construction
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// How many candidate codes to try before giving up on room creation.
    pub max_code_attempts: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_code_attempts: 100,
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Settings for one run of the [`crate::shell::Shell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Start with the Alice and Bob demonstration accounts.
    pub seed_demo_accounts: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            seed_demo_accounts: true,
        }
    }
}

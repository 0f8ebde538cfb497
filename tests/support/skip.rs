/// Skip a test if no GitLab instance is configured.
#[macro_export]
macro_rules! skip_without_gitlab {
    () => {
        for var in ["GITLAB_TOKEN", "GITLAB_VAULT_API", "GITLAB_VAULT_STORE"] {
            if std::env::var(var).is_err() {
                eprintln!("SKIPPED: {} not set", var);
                return;
            }
        }
    };
}

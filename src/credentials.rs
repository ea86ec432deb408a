use std::env;
use std::fs;
use std::path::Path;

/// Where a resolved credential came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    SecretStore,
    Environment,
    Prompt,
}

#[derive(Debug, Clone)]
pub struct Credential {
    pub value: String,
    pub source: CredentialSource,
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Resolve an API key with a fixed precedence: a file in the managed
/// secret store, then the environment, then an interactive prompt.
/// Blank values at any level fall through to the next.
pub fn resolve_credential(
    secrets_dir: &Path,
    secret_name: &str,
    env_key: &str,
    prompt: &mut dyn FnMut(&str) -> Option<String>,
) -> Option<Credential> {
    let secret_path = secrets_dir.join(secret_name);
    if let Ok(contents) = fs::read_to_string(&secret_path) {
        if let Some(value) = non_empty(contents) {
            return Some(Credential {
                value,
                source: CredentialSource::SecretStore,
            });
        }
    }

    if let Ok(value) = env::var(env_key) {
        if let Some(value) = non_empty(value) {
            return Some(Credential {
                value,
                source: CredentialSource::Environment,
            });
        }
    }

    prompt(env_key)
        .and_then(non_empty)
        .map(|value| Credential {
            value,
            source: CredentialSource::Prompt,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_secrets_dir(label: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("scout-creds-{}-{}", label, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn no_prompt(_: &str) -> Option<String> {
        panic!("prompt should not be reached");
    }

    #[test]
    fn secret_store_wins_over_environment() {
        let dir = temp_secrets_dir("store-wins");
        fs::write(dir.join("tavily_api_key"), "tvly-from-file\n").unwrap();
        env::set_var("SCOUT_TEST_STORE_WINS", "tvly-from-env");

        let cred = resolve_credential(
            &dir,
            "tavily_api_key",
            "SCOUT_TEST_STORE_WINS",
            &mut no_prompt,
        )
        .unwrap();

        assert_eq!(cred.value, "tvly-from-file");
        assert_eq!(cred.source, CredentialSource::SecretStore);
    }

    #[test]
    fn environment_used_when_store_misses() {
        let dir = temp_secrets_dir("env-fallback");
        env::set_var("SCOUT_TEST_ENV_FALLBACK", "key-from-env");

        let cred = resolve_credential(
            &dir,
            "missing_secret",
            "SCOUT_TEST_ENV_FALLBACK",
            &mut no_prompt,
        )
        .unwrap();

        assert_eq!(cred.value, "key-from-env");
        assert_eq!(cred.source, CredentialSource::Environment);
    }

    #[test]
    fn blank_secret_file_falls_through() {
        let dir = temp_secrets_dir("blank-file");
        fs::write(dir.join("gemini_api_key"), "   \n").unwrap();
        env::set_var("SCOUT_TEST_BLANK_FILE", "key-from-env");

        let cred = resolve_credential(
            &dir,
            "gemini_api_key",
            "SCOUT_TEST_BLANK_FILE",
            &mut no_prompt,
        )
        .unwrap();

        assert_eq!(cred.source, CredentialSource::Environment);
    }

    #[test]
    fn prompt_is_last_resort() {
        let dir = temp_secrets_dir("prompt-last");
        let mut prompt = |_: &str| Some("typed-in-key".to_string());

        let cred = resolve_credential(
            &dir,
            "missing_secret",
            "SCOUT_TEST_UNSET_VARIABLE",
            &mut prompt,
        )
        .unwrap();

        assert_eq!(cred.value, "typed-in-key");
        assert_eq!(cred.source, CredentialSource::Prompt);
    }

    #[test]
    fn all_levels_missing_resolves_to_none() {
        let dir = temp_secrets_dir("all-miss");
        let mut prompt = |_: &str| Some("  ".to_string());

        let cred = resolve_credential(
            &dir,
            "missing_secret",
            "SCOUT_TEST_ANOTHER_UNSET_VARIABLE",
            &mut prompt,
        );

        assert!(cred.is_none());
    }
}

use regex::{Captures, Regex};
use std::fmt;

/// Redacts credential-shaped substrings from text before it is logged.
#[derive(Clone)]
pub struct SecretScrubber {
    api_key_pattern: Regex,
    google_key_pattern: Regex,
    assignment_pattern: Regex,
    bearer_pattern: Regex,
}

impl SecretScrubber {
    /// Create a new secret scrubber
    pub fn new() -> Self {
        Self {
            // Anthropic, OpenAI and DeepSeek keys: sk-..., sk-ant-api03-..., sk-proj-...
            api_key_pattern: Regex::new(r"sk-[a-zA-Z0-9_\-]{6,}").expect("valid api key regex"),
            // Google API keys
            google_key_pattern: Regex::new(r"AIza[0-9A-Za-z_\-]{20,}")
                .expect("valid google key regex"),
            // KEY=value lines as they appear in .env files and parse errors
            assignment_pattern: Regex::new(
                r"(?i)\b([A-Z0-9_]*(?:API_KEY|APIKEY|TOKEN|SECRET|PASSWORD)[A-Z0-9_]*)\s*=\s*['\x22]?[^\s'\x22,]+",
            )
            .expect("valid assignment regex"),
            bearer_pattern: Regex::new(r"Bearer\s+[a-zA-Z0-9_\-\.]+").expect("valid bearer regex"),
        }
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = self
            .assignment_pattern
            .replace_all(message, |caps: &Captures| format!("{}=[REDACTED]", &caps[1]));
        let scrubbed = self
            .api_key_pattern
            .replace_all(&scrubbed, "[API_KEY_REDACTED]");
        let scrubbed = self
            .google_key_pattern
            .replace_all(&scrubbed, "[API_KEY_REDACTED]");
        self.bearer_pattern
            .replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]")
            .into_owned()
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}

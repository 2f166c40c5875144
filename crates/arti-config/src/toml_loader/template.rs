//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Arti Configuration
# Only override what you want to change -- missing fields use defaults.

[gemini]
# model = "gemini-2.5-flash"
# api_key_env = "GEMINI_API_KEY"   # variable (or secrets.toml key) holding the API key
# timeout_secs = 120               # 1-600
# max_output_tokens = 2048         # 1-65536, unset = model default
# temperature = 0.7                # 0.0-2.0, unset = model default
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"

[chat]
# assistant_name = "Arti AI"
# default_persona = "Default Assistant"

[logging]
# level = "warn"                   # trace, debug, info, warn, error

# Extra personas. A name matching a built-in persona replaces it.
# [[personas]]
# name = "Pirate"
# instruction = "You are a cheerful pirate. Answer every question in pirate speak."
"##
    .to_string()
}

/// Config sections that env vars can address.
const SECTIONS: [&str; 3] = ["PLANNER", "STORAGE", "GENERAL"];

/// Emit warnings for env var keys that figment will not map onto a section.
pub fn warn_misnamed_env() {
    for warning in collect_env_warnings(std::env::vars().map(|(key, _)| key)) {
        tracing::warn!("{warning}");
    }
}

fn collect_env_warnings<I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let keys = keys.into_iter().collect::<Vec<_>>();
    SECTIONS
        .iter()
        .filter(|section| {
            let single = format!("STRIDE_{section}_");
            let double = format!("STRIDE_{section}__");
            keys.iter()
                .any(|key| key.starts_with(&single) && !key.starts_with(&double))
        })
        .map(|section| {
            format!(
                "STRIDE_{section}_* env vars are ignored. Use double underscores (example: STRIDE_{section}__{})",
                example_field(section)
            )
        })
        .collect()
}

fn example_field(section: &str) -> &'static str {
    match section {
        "PLANNER" => "TIMEZONE",
        "STORAGE" => "DIR",
        _ => "DEFAULT_LIMIT",
    }
}

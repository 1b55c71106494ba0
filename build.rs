/// Build script to load the submission endpoint override
/// Allows compile-time injection of the endpoint URL from the environment or a .env file

const ENDPOINT_KEY: &str = "SUBMISSION_ENDPOINT_URL";

fn main() {
    println!("cargo:rerun-if-env-changed={}", ENDPOINT_KEY);

    // An explicit environment variable wins over the .env file
    if let Ok(value) = std::env::var(ENDPOINT_KEY) {
        if !value.trim().is_empty() {
            println!("cargo:rustc-env={}={}", ENDPOINT_KEY, value.trim());
            return;
        }
    }

    let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") else {
        return;
    };

    let env_path = std::path::Path::new(&manifest_dir).join(".env");
    if !env_path.exists() {
        return;
    }
    println!("cargo:rerun-if-changed={}", env_path.display());

    // Read .env file manually (avoid extra dependencies in build script)
    let Ok(contents) = std::fs::read_to_string(&env_path) else {
        return;
    };

    for line in contents.lines() {
        let line = line.trim();

        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if key.trim() == ENDPOINT_KEY && !value.is_empty() {
                println!("cargo:rustc-env={}={}", ENDPOINT_KEY, value);
            }
        }
    }
}

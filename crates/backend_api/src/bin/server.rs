use backend_api::run_server;
use std::{env, path::PathBuf};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment variables with sane defaults
    let static_dir_raw = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    // Resolve the static dir: absolute paths are kept, relative ones are tried
    // against the workspace root first (the page lives at workspace level),
    // then against the current directory.
    let crate_root = env::current_dir()?;
    let workspace_root = find_workspace_root().unwrap_or_else(|| crate_root.clone());
    let static_dir = resolve_with_fallback(&static_dir_raw, &[&workspace_root, &crate_root]);

    println!("Break-Even API Server");
    println!("=====================");
    println!("Workspace root: {}", workspace_root.display());
    println!("Static dir (resolved): {}", static_dir.display());
    println!("Listening on: {}:{}", host, port);
    println!();

    // Pre-flight check
    if !static_dir.exists() {
        eprintln!("[WARN] static directory not found at: {}", static_dir.display());
        eprintln!("       Continuing; the calculator page will 404 until it exists.");
    }

    run_server(static_dir, &host, port).await?;

    Ok(())
}

/// Find the Cargo workspace root by traversing up until a Cargo.toml that contains a [workspace] section.
fn find_workspace_root() -> Option<PathBuf> {
    let mut dir = env::current_dir().ok()?;
    for _ in 0..10 {
        // safety limit
        let candidate = dir.join("Cargo.toml");
        if candidate.exists() {
            if let Ok(content) = std::fs::read_to_string(&candidate) {
                if content.contains("[workspace]") {
                    return Some(dir.clone());
                }
            }
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Resolve a raw path string against a list of base directories, returning the first existing match, or the first constructed path.
fn resolve_with_fallback(raw: &str, bases: &[&PathBuf]) -> PathBuf {
    let input = PathBuf::from(raw);
    if input.is_absolute() {
        return input;
    }
    for base in bases {
        let candidate = base.join(&input);
        if candidate.exists() {
            return candidate;
        }
    }
    // If none exist yet (maybe created later), just use the first base.
    bases
        .first()
        .map(|base| base.join(&input))
        .unwrap_or(input)
}

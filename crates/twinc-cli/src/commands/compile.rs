use super::{json_pretty, status_fail, status_ok, status_warn, EXIT_DOCUMENT_ERROR, EXIT_SUCCESS};
use std::fs;
use std::path::Path;
use tracing::{error, info};
use twinc_core::Compiler;

/// Compile every `.json` interface document in `input_dir` into a `.yaml`
/// manifest pair in `output_dir`.
///
/// A document that fails to compile is logged and skipped; the batch keeps
/// going and the exit code reports the aggregate outcome.
pub fn run(
    compiler: &Compiler,
    input_dir: &Path,
    output_dir: &Path,
    quiet: bool,
    json: bool,
) -> Result<u8, String> {
    let entries = fs::read_dir(input_dir)
        .map_err(|e| format!("failed to read input directory {}: {e}", input_dir.display()))?;

    fs::create_dir_all(output_dir).map_err(|e| {
        format!(
            "failed to create output directory {}: {e}",
            output_dir.display()
        )
    })?;

    let mut compiled: Vec<String> = Vec::new();
    let mut failed: Vec<(String, String)> = Vec::new();
    let mut warned = 0usize;

    let mut paths: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    // Deterministic batch order regardless of directory iteration order.
    paths.sort();

    for path in paths {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        match compiler.compile_file(&path) {
            Ok(output) => {
                let yaml = match output.to_yaml() {
                    Ok(yaml) => yaml,
                    Err(e) => {
                        error!("{file_name}: {e}");
                        if !quiet && !json {
                            status_fail(&format!("{file_name}: {e}"));
                        }
                        failed.push((file_name, e.to_string()));
                        continue;
                    }
                };
                let out_path = output_dir.join(format!("{stem}.yaml"));
                if let Err(e) = fs::write(&out_path, yaml) {
                    error!("{file_name}: write failed: {e}");
                    if !quiet && !json {
                        status_fail(&format!("{file_name}: write failed: {e}"));
                    }
                    failed.push((file_name, e.to_string()));
                    continue;
                }
                info!("compiled {file_name} -> {}", out_path.display());
                if !quiet && !json {
                    status_ok(&format!("{file_name} -> {}", out_path.display()));
                    for warning in &output.warnings {
                        status_warn(&warning.to_string());
                    }
                }
                warned += output.warnings.len();
                compiled.push(file_name);
            }
            Err(e) => {
                error!("{file_name}: {e}");
                if !quiet && !json {
                    status_fail(&format!("{file_name}: {e}"));
                }
                failed.push((file_name, e.to_string()));
            }
        }
    }

    if json {
        let payload = serde_json::json!({
            "compiled": compiled,
            "failed": failed.iter().map(|(file, err)| {
                serde_json::json!({ "file": file, "error": err })
            }).collect::<Vec<_>>(),
            "warnings": warned,
        });
        println!("{}", json_pretty(&payload)?);
    } else if !quiet {
        println!(
            "{} compiled, {} failed, {} warning(s)",
            compiled.len(),
            failed.len(),
            warned
        );
    }

    if failed.is_empty() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_DOCUMENT_ERROR)
    }
}

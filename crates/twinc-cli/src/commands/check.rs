use super::{json_pretty, status_fail, status_ok, status_warn, EXIT_DOCUMENT_ERROR, EXIT_SUCCESS};
use std::fs;
use std::path::{Path, PathBuf};
use twinc_core::Compiler;

/// Parse and normalize one interface file, or every `.json` file in a
/// directory, reporting diagnostics without writing any manifest.
pub fn run(compiler: &Compiler, path: &Path, json: bool) -> Result<u8, String> {
    let paths = collect_paths(path)?;

    let mut ok: Vec<String> = Vec::new();
    let mut failed: Vec<(String, String)> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    for path in paths {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match compiler.compile_file(&path) {
            Ok(output) => {
                if !json {
                    status_ok(&format!(
                        "{file_name}: {} ({} properties, {} relationships)",
                        output.component.spec.id,
                        output.component.spec.properties.len(),
                        output.component.spec.relationships.len()
                    ));
                    for warning in &output.warnings {
                        status_warn(&warning.to_string());
                    }
                }
                warnings.extend(output.warnings.iter().map(ToString::to_string));
                ok.push(file_name);
            }
            Err(e) => {
                if !json {
                    status_fail(&format!("{file_name}: {e}"));
                }
                failed.push((file_name, e.to_string()));
            }
        }
    }

    if json {
        let payload = serde_json::json!({
            "ok": ok,
            "failed": failed.iter().map(|(file, err)| {
                serde_json::json!({ "file": file, "error": err })
            }).collect::<Vec<_>>(),
            "warnings": warnings,
        });
        println!("{}", json_pretty(&payload)?);
    }

    if failed.is_empty() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_DOCUMENT_ERROR)
    }
}

fn collect_paths(path: &Path) -> Result<Vec<PathBuf>, String> {
    if path.is_dir() {
        let entries =
            fs::read_dir(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        let mut paths: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();
        Ok(paths)
    } else if path.is_file() {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(format!("no such file or directory: {}", path.display()))
    }
}

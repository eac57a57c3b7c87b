//! Export orchestrator
//!
//! Drives the three user-facing operations. `list` and `get` are single
//! remote calls reshaped for the terminal; `pull` fans out one
//! fetch-then-write unit of work per template with bounded concurrency
//! and reports per-template failures in aggregate.

use crate::config::PullConfig;
use crate::error::{Error, Result};
use crate::gateway::TemplateStore;
use crate::mapper::map_name_to_path;
use crate::output;
use crate::types::TemplateSummary;
use filetime::FileTime;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};

/// List all remote templates, rendered as a table.
pub async fn list(store: &dyn TemplateStore) -> Result<String> {
    let templates = store.list_templates().await?;
    Ok(output::render_template_table(&templates))
}

/// Fetch one template by name, rendered as pretty JSON.
pub async fn get(store: &dyn TemplateStore, name: &str) -> Result<String> {
    let content = store.get_template(name).await?;
    output::render_content(&content)
}

/// Mirror every remote template into `dir`.
///
/// Each template is fetched, mapped onto a path via the configured
/// separator, and written with its remote creation time applied as the
/// file's access and modification time. Units of work are independent:
/// all of them run to completion, successes stay on disk, and failures
/// are collected and returned as one aggregate error.
pub async fn pull(store: &dyn TemplateStore, config: &PullConfig, dir: &Path) -> Result<()> {
    let templates = store.list_templates().await?;

    tracing::info!(
        "Pulling {} templates into {} (separator {:?}, concurrency {})",
        templates.len(),
        dir.display(),
        config.separator,
        config.concurrency
    );

    let failures: Vec<Error> = stream::iter(templates)
        .map(|summary| async move {
            let name = summary.name.clone();
            export_one(store, config, dir, summary)
                .await
                .map_err(|err| {
                    tracing::error!("Failed to export template '{}': {}", name, err);
                    err
                })
                .err()
        })
        .buffer_unordered(config.concurrency)
        .filter_map(|outcome| async move { outcome })
        .collect()
        .await;

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::Multiple(failures))
    }
}

/// Export a single template: fetch, map, create directories, write,
/// apply timestamps.
async fn export_one(
    store: &dyn TemplateStore,
    config: &PullConfig,
    dir: &Path,
    summary: TemplateSummary,
) -> Result<()> {
    let content = store.get_template(&summary.name).await?;

    let html = content.content.html.ok_or_else(|| {
        Error::gateway(format!("Template '{}' has no HTML content", summary.name))
    })?;

    let plan = map_name_to_path(&summary.name, &config.separator, dir)?;

    // create_dir_all tolerates concurrent creation by sibling units
    // sharing an ancestor.
    let deepest = plan.ancestor_dirs.last().map_or(dir, PathBuf::as_path);
    tokio::fs::create_dir_all(deepest)
        .await
        .map_err(|err| Error::filesystem(deepest, err))?;

    let body = format!("<!--\nname: {}\n-->\n{}", summary.name, html);
    tokio::fs::write(&plan.file_path, body)
        .await
        .map_err(|err| Error::filesystem(&plan.file_path, err))?;

    apply_timestamps(&plan.file_path, &summary)?;

    tracing::debug!(
        "Exported template '{}' to {}",
        summary.name,
        plan.file_path.display()
    );

    Ok(())
}

/// Set the file's access and modification time to the template's remote
/// creation time. Creation time itself is not portably settable and is
/// left as the local write time.
fn apply_timestamps(path: &Path, summary: &TemplateSummary) -> Result<()> {
    let remote_time = FileTime::from_unix_time(
        summary.created_at.timestamp(),
        summary.created_at.timestamp_subsec_nanos(),
    );

    filetime::set_file_times(path, remote_time, remote_time)
        .map_err(|err| Error::filesystem(path, err))
}

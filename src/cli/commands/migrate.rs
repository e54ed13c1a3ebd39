use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{Registry, migrate};
use crate::errors::{AppError, AppResult};
use crate::storage::DataFile;
use crate::ui::messages::{info, step, success, warning};

/// Handle a migration run
///
/// Order matters: the backup is taken before the file is parsed, and the
/// data-file is only rewritten once every step has succeeded.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = cfg.resolve_data_file(cli.path.as_deref());
    let data = DataFile::new(path, &cfg.backup_suffix);

    info(format!("Data-file: {}", data.path().display()));

    if !data.exists() {
        return Err(AppError::DataFileNotFound(data.path().to_path_buf()));
    }

    //
    // 1️⃣ BACKUP
    //
    if cli.dry_run {
        info("Dry run: no backup and no write will be performed.");
    } else {
        let backup = data.backup()?;
        success(format!("Backup created: {}", backup.display()));
    }

    //
    // 2️⃣ LOAD
    //
    let doc = data.load()?;
    if doc.reconciled {
        warning(format!(
            "Found misspelled version field from an earlier migration; using '{}'.",
            doc.version
        ));
    }
    info(format!(
        "Data-file found and read. Current version: {}",
        doc.version
    ));

    //
    // 3️⃣ MIGRATE (in memory)
    //
    let registry = Registry::builtin();
    let outcome = migrate(doc, &registry)?;

    for s in &outcome.applied {
        step(format!("Migrating {} -> {}: {}", s.from, s.to, s.description));
    }

    let final_version = &outcome.document.version;
    if outcome.applied.is_empty() {
        info("No further migration needed.");
    }
    if !registry.knows(final_version) && !outcome.changed() {
        warning(format!(
            "Version '{}' is not recognised by this tool; data left untouched.",
            final_version
        ));
    }

    //
    // 4️⃣ PERSIST
    //
    if !outcome.changed() {
        success("Data-file already up to date.");
        return Ok(());
    }

    if cli.dry_run {
        info(format!(
            "Dry run: data-file would be written at version {}.",
            final_version
        ));
        return Ok(());
    }

    data.persist(&outcome.document, cfg.pretty)?;
    success(format!("Migration done. Current version: {}", final_version));

    Ok(())
}

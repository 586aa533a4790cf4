//! Essential-file verification before packaging.

use std::path::Path;

use hsp_core::responses::{FileCheckEntry, FileCheckReport};

/// Files the deployed application tree must carry, with descriptions.
const ESSENTIAL_FILES: &[(&str, &str)] = &[
    ("app.py", "Main Flask application"),
    ("requirements.txt", "Python dependencies"),
    ("Dockerfile", "Docker configuration"),
    ("railway.json", "Railway configuration"),
    ("README.md", "Documentation"),
    ("effecti_integration.py", "Effecti integration"),
    ("api_analise.py", "Competitor analysis API"),
    ("notifications.py", "Notification system"),
    ("padronizacao.py", "Capture standardization"),
    ("sistema_backup_automatizado.py", "Backup system"),
];

/// Check the application tree under `root` for its essential files.
#[must_use]
pub fn check_essential_files(root: &Path) -> FileCheckReport {
    let entries: Vec<FileCheckEntry> = ESSENTIAL_FILES
        .iter()
        .map(|(file, description)| FileCheckEntry {
            file: (*file).to_string(),
            description: (*description).to_string(),
            present: root.join(file).is_file(),
        })
        .collect();

    let all_present = entries.iter().all(|entry| entry.present);
    if !all_present {
        let missing: Vec<&str> = entries
            .iter()
            .filter(|entry| !entry.present)
            .map(|entry| entry.file.as_str())
            .collect();
        tracing::warn!(?missing, "application tree is missing essential files");
    }

    FileCheckReport {
        entries,
        all_present,
    }
}

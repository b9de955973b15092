use anyhow::Context;
use projectboard_domain::{DraftRules, ProjectDraft, SharedStore};
use std::path::Path;

pub fn load(path: &Path) -> anyhow::Result<Vec<ProjectDraft>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
    let drafts: Vec<ProjectDraft> = serde_json::from_str(&content)
        .with_context(|| format!("Seed file is not a JSON list of projects: {}", path.display()))?;
    Ok(drafts)
}

/// Seed entries pass the same draft rules the form applies; the store
/// never sees unvalidated data.
pub fn apply(
    store: &SharedStore,
    drafts: &[ProjectDraft],
    rules: &DraftRules,
) -> anyhow::Result<()> {
    for (idx, draft) in drafts.iter().enumerate() {
        draft
            .validate(rules)
            .map_err(|err| anyhow::anyhow!("Seed entry {}: {}", idx + 1, err))?;
        store.borrow_mut().create(
            draft.title.clone(),
            draft.description.clone(),
            draft.people,
        );
    }
    tracing::info!("Seeded {} projects", drafts.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use projectboard_domain::{ProjectStatus, ProjectStore};
    use std::io::Write;

    fn seed_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_and_apply() {
        let file = seed_file(
            r#"[
                {"title": "Write spec", "description": "Draft the design doc", "people": 2},
                {"title": "Review", "description": "Read it twice", "people": 1}
            ]"#,
        );
        let drafts = load(file.path()).unwrap();
        assert_eq!(drafts.len(), 2);

        let store = ProjectStore::shared();
        apply(&store, &drafts, &DraftRules::default()).unwrap();

        let snapshot = store.borrow().snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].title, "Write spec");
        assert_eq!(snapshot[0].status, ProjectStatus::Active);
        assert_eq!(snapshot[1].people, 1);
    }

    #[test]
    fn test_invalid_entry_names_its_position() {
        let file = seed_file(
            r#"[
                {"title": "Write spec", "description": "Draft the design doc", "people": 2},
                {"title": "", "description": "Draft the design doc", "people": 2}
            ]"#,
        );
        let drafts = load(file.path()).unwrap();

        let store = ProjectStore::shared();
        let err = apply(&store, &drafts, &DraftRules::default()).unwrap_err();
        assert!(err.to_string().contains("Seed entry 2"));
    }

    #[test]
    fn test_malformed_json_fails_to_load() {
        let file = seed_file("not json");
        assert!(load(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_fails_to_load() {
        let err = load(Path::new("does-not-exist.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read seed file"));
    }
}

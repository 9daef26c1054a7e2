use indexmap::IndexMap;

use super::loader::UploadedFile;

// ---------------------------------------------------------------------------
// Model-name resolution
// ---------------------------------------------------------------------------

/// Map an uploaded file name to a canonical model label.
///
/// Matching is case-insensitive and ordered: Mistral, then DistilBART, then
/// Flan-T5.  Anything else falls back to the text before the first `.`.
pub fn resolve_model_label(filename: &str) -> String {
    let name = filename.to_lowercase();
    if name.contains("mistral") {
        "Mistral".to_string()
    } else if name.contains("distil") {
        "DistilBART".to_string()
    } else if name.contains("flan") || name.contains("t5") {
        "Flan-T5".to_string()
    } else {
        filename.split('.').next().unwrap_or_default().to_string()
    }
}

/// Group uploads by resolved label, keeping the first file per label.
/// Iteration order is first-seen order.
pub fn files_by_model(files: &[UploadedFile]) -> IndexMap<String, &UploadedFile> {
    let mut by_model: IndexMap<String, &UploadedFile> = IndexMap::new();
    for file in files {
        let label = resolve_model_label(&file.name);
        if let Some(kept) = by_model.get(&label) {
            log::warn!(
                "Ignoring {} for {label}: already using {}",
                file.name,
                kept.name
            );
            continue;
        }
        by_model.insert(label, file);
    }
    by_model
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_families_resolve() {
        assert_eq!(resolve_model_label("Mistral_7B_output.json"), "Mistral");
        assert_eq!(resolve_model_label("distilbart_results.json"), "DistilBART");
        assert_eq!(resolve_model_label("flan_t5_eval.json"), "Flan-T5");
        assert_eq!(resolve_model_label("custom_model.json"), "custom_model");
    }

    #[test]
    fn match_order_is_significant() {
        // Contains both "mistral" and "t5": Mistral wins.
        assert_eq!(resolve_model_label("mistral_vs_t5.json"), "Mistral");
        // Contains both "distil" and "flan".
        assert_eq!(resolve_model_label("flan_distil.json"), "DistilBART");
        assert_eq!(resolve_model_label("MyT5Run.json"), "Flan-T5");
    }

    #[test]
    fn fallback_keeps_case_and_cuts_at_first_dot() {
        assert_eq!(resolve_model_label("Llama.v2.json"), "Llama");
        assert_eq!(resolve_model_label("noext"), "noext");
        assert_eq!(resolve_model_label(""), "");
    }

    #[test]
    fn first_file_per_label_wins() {
        let files = vec![
            UploadedFile::new("flan_a.json", vec![]),
            UploadedFile::new("mistral_1.json", vec![]),
            UploadedFile::new("t5_b.json", vec![]),
            UploadedFile::new("other.json", vec![]),
        ];
        let grouped = files_by_model(&files);
        let labels: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["Flan-T5", "Mistral", "other"]);
        assert_eq!(grouped["Flan-T5"].name, "flan_a.json");
    }
}

//! Helpers for form-field normalization shared across the engine.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::EngineError;

/// Trims a form field; empty becomes `None` so it is omitted from the
/// request body instead of being sent as an empty string.
pub fn texte_optionnel(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trims a required form field, rejecting blank input.
pub fn texte_obligatoire(value: &str, libelle: &str) -> Result<String, EngineError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::ChampManquant(libelle.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Splits a comma-separated list of beneficiary names into unique trimmed
/// names. Order of first appearance is kept; duplicates are dropped since
/// the wire contract treats the list as a set.
pub fn decouper_noms(value: &str) -> Vec<String> {
    let mut noms: Vec<String> = Vec::new();
    for brut in value.split(',') {
        let nom = brut.trim();
        if nom.is_empty() {
            continue;
        }
        if !noms.iter().any(|existant| existant == nom) {
            noms.push(nom.to_string());
        }
    }
    noms
}

/// Accent- and case-insensitive key for a reference name.
///
/// Reference names are accented French labels ("Déplacements"); cache keys
/// and lookups compare them through this normalization so "deplacements"
/// and "Déplacements" address the same entry.
pub fn cle_reference(value: &str) -> String {
    let mut out = String::new();
    let mut prev_space = false;
    for ch in value.trim().nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            prev_space = false;
        } else if !out.is_empty() && !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decouper_noms_trim_et_dedoublonne() {
        assert_eq!(
            decouper_noms(" Alice , Bob ,, Alice ,"),
            vec!["Alice".to_string(), "Bob".to_string()]
        );
        assert!(decouper_noms("  ").is_empty());
    }

    #[test]
    fn cle_reference_ignore_accents_et_casse() {
        assert_eq!(cle_reference("Déplacements"), "deplacements");
        assert_eq!(cle_reference("  Frais  Généraux "), "frais generaux");
        assert_eq!(cle_reference("Loisirs"), cle_reference("LOISIRS"));
    }
}

//! Rule-based stem derivation, one named transformation per class.
//!
//! These run only when the lexicon has no stem override for the word.

use kielo_protocol::{NounClass, VerbClass};

use crate::harmony::harmonize;
use crate::text::{
    drop_last, ends_in_consonant, ends_with_any, is_vowel, last_char, penultimate_char,
};

pub fn verb_stem(citation: &str, class: VerbClass) -> String {
    let stem = match class {
        VerbClass::I => verb_i(citation),
        VerbClass::II => verb_ii(citation),
        VerbClass::III => verb_iii(citation),
        VerbClass::IV => verb_iv(citation),
        VerbClass::V => verb_v(citation),
        VerbClass::VI => verb_vi(citation),
    };
    non_empty(stem, citation)
}

pub fn noun_stem(citation: &str, class: NounClass) -> String {
    let stem = match class {
        NounClass::I => citation.to_string(),
        NounClass::II => noun_ii(citation),
        NounClass::III => noun_iii(citation),
        NounClass::IV => noun_iv(citation),
        NounClass::V => noun_v(citation),
        NounClass::VI => noun_vi(citation),
    };
    non_empty(stem, citation)
}

fn non_empty(stem: String, citation: &str) -> String {
    if stem.is_empty() {
        citation.to_string()
    } else {
        stem
    }
}

/// puhua → puhu
fn verb_i(citation: &str) -> String {
    drop_last(citation, 1).to_string()
}

/// juoda → juo, syödä → syö
fn verb_ii(citation: &str) -> String {
    match ends_with_any(citation, &["da", "dä"]) {
        Some(_) => drop_last(citation, 2).to_string(),
        None => drop_last(citation, 1).to_string(),
    }
}

/// tulla → tule, purra → pur, nousta → nouse, haluta → halua
fn verb_iii(citation: &str) -> String {
    if ends_with_any(citation, &["lla", "llä", "nna", "nnä"]).is_some() {
        return format!("{}e", drop_last(citation, 2));
    }
    if ends_with_any(citation, &["rra", "rrä"]).is_some() {
        return drop_last(citation, 2).to_string();
    }
    if ends_with_any(citation, &["sta", "stä"]).is_some() {
        return format!("{}e", drop_last(citation, 2));
    }
    if ends_with_any(citation, &["uta", "ytä"]).is_some() {
        return format!("{}{}", drop_last(citation, 3), harmonize("ua", citation));
    }
    if ends_with_any(citation, &["la", "lä", "na", "nä", "ra", "rä"]).is_some() {
        return format!("{}e", drop_last(citation, 1));
    }
    drop_last(citation, 1).to_string()
}

/// tavata → tav
fn verb_iv(citation: &str) -> String {
    match ends_with_any(citation, &["ata", "ätä", "ota", "ötä"]) {
        Some(_) => drop_last(citation, 3).to_string(),
        None => drop_last(citation, 1).to_string(),
    }
}

/// tarvita → tarvitse
fn verb_v(citation: &str) -> String {
    match ends_with_any(citation, &["ita", "itä"]) {
        Some(_) => format!("{}tse", drop_last(citation, 2)),
        None => drop_last(citation, 1).to_string(),
    }
}

/// vanheta → vanhene
fn verb_vi(citation: &str) -> String {
    match ends_with_any(citation, &["eta", "etä"]) {
        Some(_) => format!("{}ne", drop_last(citation, 2)),
        None => drop_last(citation, 1).to_string(),
    }
}

/// huone → huonee
fn noun_ii(citation: &str) -> String {
    if citation.ends_with('e') {
        format!("{}e", citation)
    } else {
        citation.to_string()
    }
}

/// puhelin → puhelime, vastaus → vastaukse, sydän → sydäme
fn noun_iii(citation: &str) -> String {
    match last_char(citation) {
        Some('n') => format!("{}me", drop_last(citation, 1)),
        Some('s') => format!("{}kse", drop_last(citation, 1)),
        _ if ends_in_consonant(citation) => format!("{}e", citation),
        _ => citation.to_string(),
    }
}

/// nainen → naise
fn noun_iv(citation: &str) -> String {
    match citation.strip_suffix("nen") {
        Some(head) => format!("{}se", head),
        None => citation.to_string(),
    }
}

/// käsi → käte, lapsi → lapse, lahti → lahte
fn noun_v(citation: &str) -> String {
    if let Some(head) = citation.strip_suffix("si") {
        return match last_char(head) {
            Some(c) if !is_vowel(c) => format!("{}se", head),
            _ => format!("{}te", head),
        };
    }
    if citation.ends_with("ti") {
        return format!("{}e", drop_last(citation, 1));
    }
    citation.to_string()
}

/// mies → miehe; vowel-final words (yö, suo) keep the citation form.
fn noun_vi(citation: &str) -> String {
    match citation.strip_suffix('s') {
        Some(head) if penultimate_char(citation).map_or(false, is_vowel) => format!("{}he", head),
        _ => citation.to_string(),
    }
}

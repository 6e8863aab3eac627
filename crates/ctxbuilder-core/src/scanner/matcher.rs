/// Pairing of classified candidates into complete file sets.
///
/// Pure: works on an in-memory candidate list so the pairing rules can be
/// exercised without touching the filesystem.
use crate::model::{ComponentKind, FileSet};
use std::path::PathBuf;

/// A classified file found in the scanned directory.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub kind: ComponentKind,
    /// File stem with original casing.
    pub stem: String,
    pub path: PathBuf,
    /// Lower-cased stem used for comparisons.
    key: String,
}

impl Candidate {
    /// Classify a path. Returns `None` when it is not a component file or
    /// its stem is not valid Unicode.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let kind = ComponentKind::from_path(&path)?;
        let stem = path.file_stem()?.to_str()?.to_owned();
        Some(Self {
            kind,
            key: stem.to_lowercase(),
            stem,
            path,
        })
    }
}

/// Outcome of pairing one directory's candidates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Complete sets, in the order their `.xml` files were enumerated.
    pub sets: Vec<FileSet>,
    pub xml_count: usize,
    pub txt_count: usize,
    pub dat_count: usize,
    /// `.xml` files that found no unclaimed `.txt` or `.dat` partner.
    pub incomplete: usize,
}

/// Pair candidates into file sets.
///
/// Each `.xml` takes the first unclaimed `.txt` and the first unclaimed
/// `.dat` whose stems match ignoring case. A partner claimed by an earlier
/// set is never handed to a later one.
pub fn match_sets(candidates: &[Candidate]) -> MatchResult {
    let of_kind = |kind: ComponentKind| -> Vec<&Candidate> {
        candidates.iter().filter(|c| c.kind == kind).collect()
    };
    let xmls = of_kind(ComponentKind::Xml);
    let txts = of_kind(ComponentKind::Txt);
    let dats = of_kind(ComponentKind::Dat);

    let mut txt_claimed = vec![false; txts.len()];
    let mut dat_claimed = vec![false; dats.len()];
    let mut result = MatchResult {
        xml_count: xmls.len(),
        txt_count: txts.len(),
        dat_count: dats.len(),
        ..Default::default()
    };

    for xml in xmls {
        let txt = first_unclaimed(&txts, &txt_claimed, &xml.key);
        let dat = first_unclaimed(&dats, &dat_claimed, &xml.key);

        match (txt, dat) {
            (Some(t), Some(d)) => {
                txt_claimed[t] = true;
                dat_claimed[d] = true;
                result.sets.push(FileSet {
                    name: xml.stem.clone(),
                    xml: xml.path.clone(),
                    txt: txts[t].path.clone(),
                    dat: dats[d].path.clone(),
                });
            }
            _ => result.incomplete += 1,
        }
    }

    result
}

fn first_unclaimed(pool: &[&Candidate], claimed: &[bool], key: &str) -> Option<usize> {
    (0..pool.len()).find(|&i| !claimed[i] && pool[i].key == key)
}

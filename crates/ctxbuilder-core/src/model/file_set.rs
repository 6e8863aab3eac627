/// File set model: one `.xml`, `.txt`, `.dat` triple that shares a base name.
///
/// CyberTracker expects the three members of a `.ctx` archive under fixed
/// names, so each component kind carries its canonical member name alongside
/// the extension used to recognise it on disk.
use std::path::{Path, PathBuf};

/// The role a loose file plays in a `.ctx` archive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Xml,
    Txt,
    Dat,
}

impl ComponentKind {
    /// All kinds, in archive member order.
    pub const ALL: [ComponentKind; 3] = [Self::Xml, Self::Txt, Self::Dat];

    /// Classify a path by its extension, ignoring case.
    ///
    /// Returns `None` for any other extension, for names without an
    /// extension (including dot-files like `.xml`) and for non-Unicode names.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|kind| ext.eq_ignore_ascii_case(kind.extension()))
    }

    /// Lower-case extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Txt => "txt",
            Self::Dat => "dat",
        }
    }

    /// Name the file must carry inside the cabinet.
    pub fn member_name(self) -> &'static str {
        match self {
            Self::Xml => "Info.xml",
            Self::Txt => "Elements.txt",
            Self::Dat => "Sightings.DAT",
        }
    }
}

/// A complete, matched triple ready to be packed.
///
/// Built by the scanner and never mutated afterwards; a rescan produces
/// fresh values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSet {
    /// Shared base name, with the casing of the `.xml` file's stem.
    pub name: String,
    pub xml: PathBuf,
    pub txt: PathBuf,
    pub dat: PathBuf,
}

impl FileSet {
    /// Source path for the given component.
    pub fn path(&self, kind: ComponentKind) -> &Path {
        match kind {
            ComponentKind::Xml => &self.xml,
            ComponentKind::Txt => &self.txt,
            ComponentKind::Dat => &self.dat,
        }
    }

    /// File name of the archive this set produces, e.g. `Leopard.ctx`.
    pub fn archive_file_name(&self) -> String {
        format!("{}.ctx", self.name)
    }

    /// File name of the intermediate cabinet, e.g. `Leopard.cab`.
    pub fn cabinet_file_name(&self) -> String {
        format!("{}.cab", self.name)
    }

    /// Source file names for display, in member order.
    pub fn source_names(&self) -> [String; 3] {
        ComponentKind::ALL.map(|kind| {
            self.path(kind)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ignores_case() {
        assert_eq!(
            ComponentKind::from_path(Path::new("Leopard.XML")),
            Some(ComponentKind::Xml)
        );
        assert_eq!(
            ComponentKind::from_path(Path::new("leopard.Txt")),
            Some(ComponentKind::Txt)
        );
        assert_eq!(
            ComponentKind::from_path(Path::new("LEOPARD.dat")),
            Some(ComponentKind::Dat)
        );
    }

    #[test]
    fn test_classify_rejects_other_names() {
        assert_eq!(ComponentKind::from_path(Path::new("notes.md")), None);
        assert_eq!(ComponentKind::from_path(Path::new("README")), None);
        assert_eq!(ComponentKind::from_path(Path::new(".xml")), None);
        assert_eq!(ComponentKind::from_path(Path::new("archive.xml.bak")), None);
    }

    #[test]
    fn test_member_names_are_fixed() {
        let names: Vec<_> = ComponentKind::ALL.iter().map(|k| k.member_name()).collect();
        assert_eq!(names, ["Info.xml", "Elements.txt", "Sightings.DAT"]);
    }

    #[test]
    fn test_archive_names() {
        let set = FileSet {
            name: "Leopard".into(),
            xml: PathBuf::from("Leopard.xml"),
            txt: PathBuf::from("leopard.txt"),
            dat: PathBuf::from("LEOPARD.dat"),
        };
        assert_eq!(set.archive_file_name(), "Leopard.ctx");
        assert_eq!(set.cabinet_file_name(), "Leopard.cab");
        assert_eq!(set.source_names(), ["Leopard.xml", "leopard.txt", "LEOPARD.dat"]);
    }
}

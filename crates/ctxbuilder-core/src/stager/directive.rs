/// makecab directive (DDF) generation.
///
/// The directive asks for exactly one compressed cabinet with no disk
/// splitting, holding the three staged members in archive order.
use crate::model::ComponentKind;

/// File name the directive is written under inside the staging area.
pub const DIRECTIVE_FILE: &str = "directive.ddf";

/// Compression scheme written into the directive; what CyberTracker itself
/// writes.
pub const COMPRESSION_TYPE: &str = "MSZIP";

/// A single-cabinet directive for one file set.
#[derive(Clone, Debug)]
pub struct CabDirective {
    /// Cabinet file name, e.g. `Leopard.cab`.
    pub cabinet_name: String,
}

impl CabDirective {
    pub fn new(cabinet_name: impl Into<String>) -> Self {
        Self {
            cabinet_name: cabinet_name.into(),
        }
    }

    /// Render the directive text.
    ///
    /// The zero thresholds and sizes disable makecab's disk splitting so the
    /// output is always one cabinet. An empty `DiskDirectoryTemplate` puts
    /// the cabinet in the working directory.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(512);
        out.push_str(".OPTION EXPLICIT\n");
        out.push_str(&format!(".Set CabinetNameTemplate={}\n", self.cabinet_name));
        out.push_str(".Set DiskDirectoryTemplate=\n");
        out.push_str(&format!(".Set CompressionType={COMPRESSION_TYPE}\n"));
        out.push_str(".Set Cabinet=ON\n");
        out.push_str(".Set Compress=ON\n");
        for key in [
            "CabinetFileCountThreshold",
            "FolderFileCountThreshold",
            "FolderSizeThreshold",
            "MaxCabinetSize",
            "MaxDiskFileCount",
            "MaxDiskSize",
        ] {
            out.push_str(&format!(".Set {key}=0\n"));
        }
        for kind in ComponentKind::ALL {
            out.push_str(&format!("\"{}\"\n", kind.member_name()));
        }
        out
    }
}

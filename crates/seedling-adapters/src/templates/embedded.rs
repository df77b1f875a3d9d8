//! Compile-time embedded template payloads.

use seedling_core::domain::TemplateId;

pub const CPP_MAKEFILE: &str = include_str!("../../templates/cpp/Makefile");
pub const CPP_MAIN: &str = include_str!("../../templates/cpp/main.cpp");
pub const CMAKE_LISTS: &str = include_str!("../../templates/cpp-cmake/CMakeLists.txt");
pub const CMAKE_MAIN: &str = include_str!("../../templates/cpp-cmake/main.cpp");
pub const BAREMETAL_MAKEFILE: &str = include_str!("../../templates/cpp-baremetal-grub/Makefile");
pub const BAREMETAL_LINKER_SCRIPT: &str =
    include_str!("../../templates/cpp-baremetal-grub/linker.ld");
pub const BAREMETAL_GRUB_CFG: &str = include_str!("../../templates/cpp-baremetal-grub/grub.cfg");
pub const BAREMETAL_MULTIBOOT2_HEADER: &str =
    include_str!("../../templates/cpp-baremetal-grub/multiboot2_header.S");
pub const BAREMETAL_ENTRY: &str = include_str!("../../templates/cpp-baremetal-grub/entry.cpp");

/// Resolve a template id to its embedded content.
///
/// Total over `TemplateId` — a new id without a payload is a compile error
/// here, not a runtime `TemplateNotFound`.
pub fn content(id: TemplateId) -> &'static str {
    match id {
        TemplateId::CppMakefile => CPP_MAKEFILE,
        TemplateId::CppMain => CPP_MAIN,
        TemplateId::CmakeLists => CMAKE_LISTS,
        TemplateId::CmakeMain => CMAKE_MAIN,
        TemplateId::BaremetalMakefile => BAREMETAL_MAKEFILE,
        TemplateId::BaremetalLinkerScript => BAREMETAL_LINKER_SCRIPT,
        TemplateId::BaremetalGrubCfg => BAREMETAL_GRUB_CFG,
        TemplateId::BaremetalMultiboot2Header => BAREMETAL_MULTIBOOT2_HEADER,
        TemplateId::BaremetalEntry => BAREMETAL_ENTRY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_id_has_nonempty_content() {
        for id in TemplateId::ALL {
            assert!(!content(id).is_empty(), "empty payload for {id}");
        }
    }

    #[test]
    fn linker_script_places_kernel_at_one_megabyte() {
        assert!(BAREMETAL_LINKER_SCRIPT.contains(". = 1M;"));
    }

    #[test]
    fn multiboot2_header_carries_the_magic() {
        assert!(BAREMETAL_MULTIBOOT2_HEADER.contains("0xe85250d6"));
    }
}

//! Test fixtures for emitter crates.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use canopy_core::NamingConvention;
use canopy_tree::{ConstantDecl, Forest, TreeSession};

/// Declarations mirroring a typical system-properties constant holder.
pub fn system_decls() -> Vec<ConstantDecl> {
    vec![
        ConstantDecl::new(
            "java_io_tmpdir",
            "SystemConstants",
            "com.example",
            "java.io.tmpdir",
        ),
        ConstantDecl::new(
            "java_class__path",
            "SystemConstants",
            "com.example",
            "java.class.path",
        )
        .doc("Path used to find directories and JAR archives containing class files."),
        ConstantDecl::new("java_home", "SystemConstants", "com.example", "java.home")
            .doc("Installation directory of the runtime."),
        ConstantDecl::new("os_name", "SystemConstants", "com.example", "os.name"),
    ]
}

/// Build the fixture forest for the given target-language naming.
pub fn system_forest(naming: NamingConvention) -> Forest {
    let mut session = TreeSession::new(naming);
    session
        .accumulate(system_decls())
        .expect("fixture declarations are valid");
    session.finish().expect("fixture session is unfinished")
}

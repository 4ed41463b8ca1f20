//! Shape tests for TypeScript emission.

use canopy_codegen::testing::system_forest;
use canopy_codegen_typescript::{Generator, TreeEmitter};
use canopy_core::TYPESCRIPT_NAMING;
use canopy_tree::{ConstantDecl, ConstantRef, ConstantValue, Forest, TreeSession};

fn build_forest(decls: impl IntoIterator<Item = ConstantDecl>) -> Forest {
    let mut session = TreeSession::new(TYPESCRIPT_NAMING);
    session.accumulate(decls).expect("declarations are valid");
    session.finish().expect("session is unfinished")
}

#[test]
fn test_system_constants_file() {
    let forest = system_forest(TYPESCRIPT_NAMING);
    let files = Generator::new().preview(&forest);

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "com/example/system-constant.ts");

    let expected = r#"// Generated by Canopy - DO NOT EDIT

export const SystemConstant = {
  java: {
    /** Path used to find directories and JAR archives containing class files. */
    class_path: "java.class.path",
    /** Installation directory of the runtime. */
    home: "java.home",
    io: {
      tmpdir: "java.io.tmpdir",
    },
  },
  os: {
    name: "os.name",
  },
} as const;
"#;
    assert_eq!(files[0].content, expected);
}

#[test]
fn test_value_cases() {
    let forest = build_forest([
        ConstantDecl::new("retries", "NetConstants", "net", 3i64),
        ConstantDecl::new("secure", "NetConstants", "net", true),
        ConstantDecl::new("separator", "NetConstants", "net", '/'),
        ConstantDecl::new(
            "timeout",
            "NetConstants",
            "net",
            ConstantValue::Reference(ConstantRef::new("Duration", "config.net.TIMEOUT")),
        ),
    ]);
    let files = Generator::new().preview(&forest);

    assert_eq!(files[0].path, "net/net-constant.ts");
    let content = &files[0].content;
    assert!(content.contains("retries: 3,"));
    assert!(content.contains("secure: true,"));
    assert!(content.contains("separator: \"/\","));
    // Non-inlinable value: a reference back to the original declaration
    assert!(content.contains("timeout: config.net.TIMEOUT,"));
}

#[test]
fn test_reserved_segments_render_escaped() {
    let forest = build_forest([ConstantDecl::new(
        "new_instance",
        "FactoryConstants",
        "app",
        "factory.new",
    )]);
    let files = Generator::new().preview(&forest);

    assert!(files[0].content.contains("new_: {"));
    assert!(files[0].content.contains("instance: \"factory.new\","));
}

#[test]
fn test_emit_skips_colliding_artifacts() {
    let temp = tempfile::TempDir::new().unwrap();
    let forest = system_forest(TYPESCRIPT_NAMING);
    let generator = Generator::new();

    let first = generator.emit(&forest, temp.path()).unwrap();
    assert_eq!(first.written, ["com/example/system-constant.ts"]);

    let second = generator.emit(&forest, temp.path()).unwrap();
    assert!(second.written.is_empty());
    assert_eq!(second.skipped, ["com/example/system-constant.ts"]);
}

#[test]
fn test_escaped_underscore_stays_in_one_level() {
    let forest = build_forest([ConstantDecl::new(
        "java_class__path",
        "SystemConstants",
        "com.example",
        "java.class.path",
    )]);
    let files = Generator::new().preview(&forest);

    let content = &files[0].content;
    assert!(content.contains("class_path: \"java.class.path\","));
    assert!(!content.contains("class: {"));
}

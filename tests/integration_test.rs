/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use test_utilities::mocks::*;
use license_notice::prelude::*;

const TEMPLATE: &str = "Example Project\nCopyright 2024 Example Corp.\n\nThis product includes:\n#GENERATED_NOTICES#\n-- end --\n";

fn lookup_xml(entries: &[(&str, &str, &str)]) -> String {
    let body: String = entries
        .iter()
        .map(|(group, artifact, license)| {
            format!(
                "<artifact><groupId>{}</groupId><artifactId>{}</artifactId><license>{}</license></artifact>",
                group, artifact, license
            )
        })
        .collect();
    format!("<license-lookup>{}</license-lookup>", body)
}

/// parent -> [core, web]; core and web share `commons-io`
fn multi_module_project() -> Project {
    Project::new("parent", "/work/parent")
        .as_execution_root()
        .with_module(Project::new("core", "/work/parent/core").with_module_path("core"))
        .with_module(Project::new("web", "/work/parent/web").with_module_path("web"))
}

fn multi_module_trees() -> MockGraphProvider {
    MockGraphProvider::new()
        .with_tree("parent", vec![])
        .with_tree(
            "core",
            vec![
                dep("com.google.guava", "guava", "33.0", vec![dep("com.google.guava", "failureaccess", "1.0.2", vec![])]),
                dep("commons-io", "commons-io", "2.15.1", vec![]),
            ],
        )
        .with_tree(
            "web",
            vec![
                dep("commons-io", "commons-io", "2.15.1", vec![]),
                dep("org.slf4j", "slf4j-api", "2.0.9", vec![]),
            ],
        )
}

fn full_lookup() -> String {
    lookup_xml(&[
        ("com.google.guava", "guava", "Apache-2.0"),
        ("com.google.guava", "failureaccess", "Apache-2.0"),
        ("commons-io", "commons-io", "Apache-2.0"),
        ("org.slf4j", "slf4j-api", "MIT"),
    ])
}

fn request() -> NoticeRequest {
    NoticeRequest::builder()
        .project_path("/work/parent")
        .add_license_lookup("licenses.xml")
        .build()
        .unwrap()
}

type TestUseCase = GenerateNoticeUseCase<
    MockGraphProvider,
    MockLookupLoader,
    MockTemplateLoader,
    MockNoticeSink,
    MockMappingWriter,
    MockMetadataSource,
    MockProgressReporter,
>;

fn build_use_case(
    trees: MockGraphProvider,
    lookup: MockLookupLoader,
    sink: MockNoticeSink,
    mapping_writer: MockMappingWriter,
) -> TestUseCase {
    GenerateNoticeUseCase::new(
        trees,
        lookup,
        MockTemplateLoader::new(TEMPLATE),
        sink,
        mapping_writer,
        None,
        MockProgressReporter::new(),
    )
}

#[test]
fn test_generate_notice_happy_path() {
    let sink = MockNoticeSink::new();
    let use_case = build_use_case(
        multi_module_trees(),
        MockLookupLoader::new().with_source("licenses.xml", &full_lookup()),
        sink.clone(),
        MockMappingWriter::new(),
    );

    let response = use_case.execute(&request(), &multi_module_project()).unwrap();

    let expected = concat!(
        "Example Project\nCopyright 2024 Example Corp.\n\nThis product includes:\n",
        "  com.google.guava:guava:33.0 under Apache-2.0\n",
        "  com.google.guava:failureaccess:1.0.2 under Apache-2.0\n",
        "  commons-io:commons-io:2.15.1 under Apache-2.0\n",
        "  org.slf4j:slf4j-api:2.0.9 under MIT\n",
        "\n-- end --\n",
    );
    assert_eq!(response.content.as_deref(), Some(expected));
    assert_eq!(response.resolved_count, 4);
    assert_eq!(response.projects_processed, 3);
    assert_eq!(
        sink.documents(),
        vec![(expected.to_string(), PathBuf::from("/work/parent/NOTICE"))]
    );
}

#[test]
fn test_generate_notice_is_deterministic() {
    let run = || {
        let sink = MockNoticeSink::new();
        let use_case = build_use_case(
            multi_module_trees(),
            MockLookupLoader::new().with_source("licenses.xml", &full_lookup()),
            sink.clone(),
            MockMappingWriter::new(),
        );
        use_case.execute(&request(), &multi_module_project()).unwrap();
        sink.documents()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_every_module_is_traversed_in_declaration_order() {
    let trees = multi_module_trees();
    let use_case = build_use_case(
        trees.clone(),
        MockLookupLoader::new().with_source("licenses.xml", &full_lookup()),
        MockNoticeSink::new(),
        MockMappingWriter::new(),
    );

    use_case.execute(&request(), &multi_module_project()).unwrap();

    assert_eq!(trees.requested_projects(), vec!["parent", "core", "web"]);
}

#[test]
fn test_later_lookup_source_overrides_earlier() {
    let sink = MockNoticeSink::new();
    let lookup = MockLookupLoader::new()
        .with_source("licenses.xml", &full_lookup())
        .with_source(
            "overrides.yml",
            "artifact:\n  - groupId: org.slf4j\n    artifactId: slf4j-api\n    license: MIT License (relicensed)\n",
        );
    let use_case = build_use_case(multi_module_trees(), lookup, sink.clone(), MockMappingWriter::new());
    let request = NoticeRequest::builder()
        .project_path("/work/parent")
        .license_lookup(vec!["licenses.xml".to_string(), "overrides.yml".to_string()])
        .build()
        .unwrap();

    let response = use_case.execute(&request, &multi_module_project()).unwrap();

    let content = response.content.unwrap();
    assert!(content.contains("org.slf4j:slf4j-api:2.0.9 under MIT License (relicensed)\n"));
    assert!(!content.contains("under MIT\n"));
}

#[test]
fn test_version_specific_license_wins_over_base() {
    let lookup = r#"<license-lookup>
  <artifact>
    <groupId>org.hibernate</groupId>
    <artifactId>hibernate-core</artifactId>
    <name>Hibernate ORM</name>
    <license>LGPL-2.1</license>
    <version license="Apache-2.0">7.0.0</version>
    <version type="regex" license="LGPL-2.1-or-later">6\.\d+\..*</version>
  </artifact>
</license-lookup>"#;
    let trees = MockGraphProvider::new()
        .with_tree("parent", vec![])
        .with_tree("core", vec![dep("org.hibernate", "hibernate-core", "7.0.0", vec![])])
        .with_tree("web", vec![dep("org.hibernate", "hibernate-core", "6.4.1.Final", vec![])]);
    let use_case = build_use_case(
        trees,
        MockLookupLoader::new().with_source("licenses.xml", lookup),
        MockNoticeSink::new(),
        MockMappingWriter::new(),
    );

    let response = use_case.execute(&request(), &multi_module_project()).unwrap();

    let content = response.content.unwrap();
    assert!(content.contains("  Hibernate ORM (org.hibernate:hibernate-core:7.0.0) under Apache-2.0\n"));
    assert!(content.contains(
        "  Hibernate ORM (org.hibernate:hibernate-core:6.4.1.Final) under LGPL-2.1-or-later\n"
    ));
}

#[test]
fn test_unresolved_artifact_fails_with_single_stub_entry() {
    let sink = MockNoticeSink::new();
    let mapping_writer = MockMappingWriter::new();
    // commons-io is missing and appears in both modules
    let lookup = lookup_xml(&[
        ("com.google.guava", "guava", "Apache-2.0"),
        ("com.google.guava", "failureaccess", "Apache-2.0"),
        ("org.slf4j", "slf4j-api", "MIT"),
    ]);
    let use_case = build_use_case(
        multi_module_trees(),
        MockLookupLoader::new().with_source("licenses.xml", &lookup),
        sink.clone(),
        mapping_writer.clone(),
    );

    let err = use_case
        .execute(&request(), &multi_module_project())
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<NoticeError>(),
        Some(NoticeError::UnresolvedLicenses { count: 1 })
    ));
    assert!(sink.documents().is_empty());

    let stubs = mapping_writer.documents();
    assert_eq!(stubs.len(), 1);
    let (document, path) = &stubs[0];
    assert_eq!(path, &PathBuf::from("/work/parent/target/license-mappings.xml"));
    assert_eq!(
        document,
        &LicenseLookupDocument::new(vec![ArtifactLicense::new("commons-io", "commons-io", None)
            .with_version(MappedVersion::exact("2.15.1", None))])
    );
}

#[test]
fn test_stub_write_failure_still_fails_the_run() {
    let reporter = MockProgressReporter::new();
    let use_case = GenerateNoticeUseCase::new(
        multi_module_trees(),
        MockLookupLoader::new().with_source("licenses.xml", &lookup_xml(&[])),
        MockTemplateLoader::new(TEMPLATE),
        MockNoticeSink::new(),
        MockMappingWriter::with_failure(),
        None::<MockMetadataSource>,
        reporter.clone(),
    );

    let err = use_case
        .execute(&request(), &multi_module_project())
        .unwrap_err();

    assert!(err.to_string().contains("Failed to find licenses for 4 artifact(s)"));
    assert!(reporter
        .warnings()
        .iter()
        .any(|w| w.contains("Mock stub write failure")));
    assert!(reporter
        .errors()
        .iter()
        .any(|e| e.contains("commons-io:commons-io:2.15.1")));
}

#[test]
fn test_stub_round_trip_resolves_after_filling_in() {
    let mapping_writer = MockMappingWriter::new();
    let use_case = build_use_case(
        multi_module_trees(),
        MockLookupLoader::new().with_source("licenses.xml", &lookup_xml(&[])),
        MockNoticeSink::new(),
        mapping_writer.clone(),
    );
    assert!(use_case.execute(&request(), &multi_module_project()).is_err());

    // The written stub parses back to the same document
    let (mut stub, _) = mapping_writer.documents().remove(0);
    let xml = stub.to_xml().unwrap();
    let reparsed =
        LicenseLookupDocument::parse(&RawLookupDocument::new("license-mappings.xml", xml)).unwrap();
    assert_eq!(reparsed, stub);

    // Filling in the blanks makes the next run succeed
    for entry in &mut stub.artifacts {
        entry.license = Some("Apache-2.0".to_string());
    }
    let filled = stub.to_xml().unwrap();
    let sink = MockNoticeSink::new();
    let use_case = build_use_case(
        multi_module_trees(),
        MockLookupLoader::new().with_source("licenses.xml", &filled),
        sink.clone(),
        MockMappingWriter::new(),
    );

    let response = use_case.execute(&request(), &multi_module_project()).unwrap();

    assert_eq!(response.resolved_count, 4);
    assert_eq!(sink.documents().len(), 1);
}

#[test]
fn test_template_substitution_is_the_only_change() {
    let template = "HEAD $1 \\n {0}\n@@\nTAIL @@";
    let sink = MockNoticeSink::new();
    let use_case = GenerateNoticeUseCase::new(
        MockGraphProvider::new().with_tree("app", vec![dep("org.slf4j", "slf4j-api", "2.0.9", vec![])]),
        MockLookupLoader::new().with_source("licenses.xml", &full_lookup()),
        MockTemplateLoader::new(template),
        sink.clone(),
        MockMappingWriter::new(),
        None::<MockMetadataSource>,
        MockProgressReporter::new(),
    );
    let request = NoticeRequest::builder()
        .project_path("/work/app")
        .add_license_lookup("licenses.xml")
        .placeholder("@@")
        .build()
        .unwrap();

    let response = use_case
        .execute(&request, &Project::new("app", "/work/app").as_execution_root())
        .unwrap();

    let lines = "  org.slf4j:slf4j-api:2.0.9 under MIT\n";
    assert_eq!(
        response.content.unwrap(),
        format!("HEAD $1 \\n {{0}}\n{}\nTAIL {}", lines, lines)
    );
}

#[test]
fn test_non_root_module_is_skipped_when_aggregating() {
    let sink = MockNoticeSink::new();
    let trees = multi_module_trees();
    let use_case = build_use_case(
        trees.clone(),
        MockLookupLoader::new().with_source("licenses.xml", &full_lookup()),
        sink.clone(),
        MockMappingWriter::new(),
    );

    let response = use_case
        .execute(&request(), &Project::new("core", "/work/parent/core").with_module_path("core"))
        .unwrap();

    assert!(response.is_skipped());
    assert!(sink.documents().is_empty());
    assert!(trees.requested_projects().is_empty());
}

#[test]
fn test_excluded_modules_are_not_traversed() {
    let trees = multi_module_trees();
    let reporter = MockProgressReporter::new();
    let use_case = GenerateNoticeUseCase::new(
        trees.clone(),
        MockLookupLoader::new().with_source("licenses.xml", &full_lookup()),
        MockTemplateLoader::new(TEMPLATE),
        MockNoticeSink::new(),
        MockMappingWriter::new(),
        None::<MockMetadataSource>,
        reporter.clone(),
    );
    let request = NoticeRequest::builder()
        .project_path("/work/parent")
        .add_license_lookup("licenses.xml")
        .excluded_module_paths(vec!["we*".to_string(), "samples/*".to_string()])
        .build()
        .unwrap();

    let response = use_case.execute(&request, &multi_module_project()).unwrap();

    assert_eq!(trees.requested_projects(), vec!["parent", "core"]);
    let content = response.content.unwrap();
    assert!(!content.contains("slf4j-api"));
    assert!(reporter.warnings().iter().any(|w| w.contains("'samples/*'")));
}

#[test]
fn test_declared_license_fallback_from_metadata() {
    let sink = MockNoticeSink::new();
    let reporter = MockProgressReporter::new();
    let metadata = MockMetadataSource::new()
        .with_metadata("org.slf4j:slf4j-api:2.0.9", Some("SLF4J API Module"), &["MIT License"])
        .with_metadata(
            "commons-io:commons-io:2.15.1",
            None,
            &["Apache-2.0", "LGPL-2.1"],
        );
    let lookup = lookup_xml(&[
        ("com.google.guava", "guava", "Apache-2.0"),
        ("com.google.guava", "failureaccess", "Apache-2.0"),
    ]);
    let use_case = GenerateNoticeUseCase::new(
        multi_module_trees(),
        MockLookupLoader::new().with_source("licenses.xml", &lookup),
        MockTemplateLoader::new(TEMPLATE),
        sink.clone(),
        MockMappingWriter::new(),
        Some(metadata),
        reporter.clone(),
    );

    let response = use_case.execute(&request(), &multi_module_project()).unwrap();

    let content = response.content.unwrap();
    assert!(content.contains("  SLF4J API Module (org.slf4j:slf4j-api:2.0.9) under MIT License\n"));
    assert!(content.contains("  commons-io:commons-io:2.15.1 under Apache-2.0 OR LGPL-2.1\n"));
    assert!(!reporter.warnings().is_empty());
}

#[test]
fn test_visitor_keeps_resolved_and_unresolved_disjoint() {
    let index = LicenseLookupIndex::build(&[RawLookupDocument::new(
        "licenses.xml",
        lookup_xml(&[("org.slf4j", "slf4j-api", "MIT")]),
    )])
    .unwrap();
    let reporter = MockProgressReporter::new();
    let root = dep(
        "org.example",
        "app",
        "1.0",
        vec![
            dep("org.slf4j", "slf4j-api", "2.0.9", vec![dep("org.unknown", "mystery", "0.1", vec![])]),
            dep("org.unknown", "mystery", "0.1", vec![]),
            dep("org.slf4j", "slf4j-api", "2.0.9", vec![]),
        ],
    );

    let mut visitor = LicenseResolvingVisitor::new(&index, &reporter);
    root.accept_children(&mut visitor);
    let (resolved, unresolved) = visitor.into_results();

    assert_eq!(resolved.len(), 1);
    assert_eq!(unresolved.len(), 1);
    for coordinate in resolved.coordinates() {
        assert!(!unresolved.contains(coordinate));
    }
}

fn resolve_with_repository(
    index: &LicenseLookupIndex,
    root: &DependencyNode,
    repository: &std::path::Path,
) -> Vec<(String, String)> {
    let reporter = MockProgressReporter::new();
    let source = LocalRepositoryPomReader::new(repository);
    let mut visitor = LicenseResolvingVisitor::new(index, &reporter).with_metadata_source(&source);
    root.accept_children(&mut visitor);
    visitor
        .resolved()
        .iter()
        .map(|(key, license)| (key.to_string(), license.to_string()))
        .collect()
}

#[test]
fn test_local_repository_contents_do_not_change_resolved_lines() {
    let index = LicenseLookupIndex::build(&[RawLookupDocument::new(
        "licenses.xml",
        lookup_xml(&[("org.x", "a", "MIT")]),
    )])
    .unwrap();
    let root = dep("org.example", "app", "1.0", vec![dep("org.x", "a", "1.0", vec![])]);

    let empty_repo = tempfile::TempDir::new().unwrap();
    let populated_repo = tempfile::TempDir::new().unwrap();
    let pom_dir = populated_repo.path().join("org/x/a/1.0");
    std::fs::create_dir_all(&pom_dir).unwrap();
    std::fs::write(
        pom_dir.join("a-1.0.pom"),
        "<project><groupId>org.x</groupId><artifactId>a</artifactId><version>1.0</version>\
         <name>Alpha Lib</name></project>",
    )
    .unwrap();

    let from_empty = resolve_with_repository(&index, &root, empty_repo.path());
    let from_populated = resolve_with_repository(&index, &root, populated_repo.path());

    assert_eq!(from_empty, vec![("org.x:a:1.0".to_string(), "MIT".to_string())]);
    assert_eq!(from_populated, from_empty);
}

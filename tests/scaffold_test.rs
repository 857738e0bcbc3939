// tests/scaffold_test.rs
use frontkit::cli;
use frontkit::config::{Config, DEFAULT_COMPONENT_TEMPLATE, DEFAULT_PLACEHOLDER};
use frontkit::scaffold::{scaffold, ScaffoldRequest};
use frontkit::ui::TerminalPrompter;
use std::fs;
use std::io::Cursor;

fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
    TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_scaffold_card_writes_exactly_two_files() {
    let root = tempfile::tempdir().unwrap();
    let target = root.path().join("src/components/Card");
    let stylesheet = root.path().join("src/styles/main.scss");

    let report = scaffold(&ScaffoldRequest {
        name: "Card",
        target_dir: &target,
        main_stylesheet: &stylesheet,
        template: DEFAULT_COMPONENT_TEMPLATE,
        placeholder: DEFAULT_PLACEHOLDER,
    })
    .unwrap();
    assert!(report.is_complete());

    let mut entries: Vec<String> = fs::read_dir(&target)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();
    assert_eq!(entries, vec!["Card.jsx", "Card.module.scss"]);

    let jsx = fs::read_to_string(target.join("Card.jsx")).unwrap();
    assert_eq!(
        jsx,
        DEFAULT_COMPONENT_TEMPLATE.replace(DEFAULT_PLACEHOLDER, "Card")
    );
    assert_eq!(
        fs::read_to_string(target.join("Card.module.scss")).unwrap(),
        "@use \"../../styles/main.scss\";\n"
    );
}

#[test]
fn test_scaffold_overwrites_existing_style_module() {
    let root = tempfile::tempdir().unwrap();
    let target = root.path().join("src/components/Card");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("Card.module.scss"), ".old { color: red; }\n").unwrap();

    let stylesheet = root.path().join("src/styles/main.scss");
    scaffold(&ScaffoldRequest {
        name: "Card",
        target_dir: &target,
        main_stylesheet: &stylesheet,
        template: DEFAULT_COMPONENT_TEMPLATE,
        placeholder: DEFAULT_PLACEHOLDER,
    })
    .unwrap();

    assert_eq!(
        fs::read_to_string(target.join("Card.module.scss")).unwrap(),
        "@use \"../../styles/main.scss\";\n"
    );
}

#[test]
fn test_failed_component_keeps_style_module() {
    let root = tempfile::tempdir().unwrap();
    let target = root.path().join("src/components/Card");
    // A directory in place of Card.jsx makes only the component write fail.
    fs::create_dir_all(target.join("Card.jsx")).unwrap();
    let stylesheet = root.path().join("src/styles/main.scss");

    let report = scaffold(&ScaffoldRequest {
        name: "Card",
        target_dir: &target,
        main_stylesheet: &stylesheet,
        template: DEFAULT_COMPONENT_TEMPLATE,
        placeholder: DEFAULT_PLACEHOLDER,
    })
    .unwrap();

    assert!(!report.is_complete());
    assert!(report
        .component
        .as_ref()
        .unwrap_err()
        .to_string()
        .contains("Error creating file"));
    assert_eq!(
        report.stylesheet.as_ref().unwrap(),
        &target.join("Card.module.scss")
    );
    assert_eq!(
        fs::read_to_string(target.join("Card.module.scss")).unwrap(),
        "@use \"../../styles/main.scss\";\n"
    );
}

#[cfg(unix)]
#[test]
fn test_directory_failure_reports_both_artifacts() {
    let root = tempfile::tempdir().unwrap();
    // A file where the target directory should be makes create_dir_all fail.
    let blocker = root.path().join("src");
    fs::write(&blocker, "not a directory").unwrap();
    let target = blocker.join("components/Card");
    let stylesheet = root.path().join("styles/main.scss");

    let report = scaffold(&ScaffoldRequest {
        name: "Card",
        target_dir: &target,
        main_stylesheet: &stylesheet,
        template: DEFAULT_COMPONENT_TEMPLATE,
        placeholder: DEFAULT_PLACEHOLDER,
    })
    .unwrap();

    assert!(report.component.is_err());
    assert!(report.stylesheet.is_err());
    assert!(report
        .component
        .unwrap_err()
        .to_string()
        .contains("Error creating directory"));
}

#[test]
fn test_component_command_default_position() {
    let root = tempfile::tempdir().unwrap();
    let mut input = prompter("Button\n1\n");

    let report = cli::component::run(&mut input, root.path(), &Config::default())
        .unwrap()
        .expect("component should be scaffolded");

    assert!(report.is_complete());
    let dir = root.path().join("src/components/Button");
    assert!(dir.join("Button.jsx").is_file());
    assert_eq!(
        fs::read_to_string(dir.join("Button.module.scss")).unwrap(),
        "@use \"../../styles/main.scss\";\n"
    );
}

#[test]
fn test_component_command_custom_position() {
    let root = tempfile::tempdir().unwrap();
    let mut input = prompter("Hero\n2\n/pages/home\n");

    cli::component::run(&mut input, root.path(), &Config::default())
        .unwrap()
        .expect("component should be scaffolded");

    let dir = root.path().join("src/pages/home/Hero");
    let jsx = fs::read_to_string(dir.join("Hero.jsx")).unwrap();
    assert!(jsx.contains("export default Hero;"));
    assert_eq!(
        fs::read_to_string(dir.join("Hero.module.scss")).unwrap(),
        "@use \"../../../styles/main.scss\";\n"
    );
}

#[test]
fn test_component_command_custom_template() {
    let root = tempfile::tempdir().unwrap();
    fs::write(
        root.path().join("component.tpl"),
        "export const __NAME__ = () => null;\n",
    )
    .unwrap();

    let mut config = Config::default();
    config.component.template_path = Some("component.tpl".into());
    config.component.placeholder = "__NAME__".to_string();

    let mut input = prompter("Badge\n\n");
    cli::component::run(&mut input, root.path(), &config)
        .unwrap()
        .expect("component should be scaffolded");

    assert_eq!(
        fs::read_to_string(root.path().join("src/components/Badge/Badge.jsx")).unwrap(),
        "export const Badge = () => null;\n"
    );
}

#[test]
fn test_component_command_without_name_does_nothing() {
    let root = tempfile::tempdir().unwrap();
    let mut input = prompter("\n");

    let report = cli::component::run(&mut input, root.path(), &Config::default()).unwrap();

    assert!(report.is_none());
    assert!(!root.path().join("src").exists());
}

mod common;

use common::{Workspace, stderr, stdout};

const ALL_SOURCES: [(&str, &str); 4] = [
    ("terms.txt", "Terms apply.\n"),
    ("privacy.txt", "We respect privacy.\n"),
    ("cookies.txt", "We use cookies.\n"),
    ("parental.txt", "Adults only.\n"),
];

fn workspace_with(skip: Option<&str>) -> Workspace {
    let ws = Workspace::new();
    for (name, content) in ALL_SOURCES {
        if Some(name) != skip {
            ws.source(name, content);
        }
    }
    ws
}

// ============================================================================
// Pipeline scenarios
// ============================================================================

#[test]
fn generates_paragraphs_in_source_order() {
    let ws = Workspace::new();
    ws.source("terms.txt", "Para one.\n\nPara two.\n");

    let output = ws.generate(&[]);
    assert!(output.status.success(), "generate failed: {}", stderr(&output));

    let page = ws.page("terms.tsx");
    let block_start = page.find(r#"<div className="space-y-6 text-foreground">"#).unwrap();
    let block = &page[block_start..];
    let block = &block[..block.find("        </div>").unwrap()];

    assert_eq!(block.matches("<p>").count(), 2, "content block: {block}");
    let one = block.find("<p>Para one.</p>").unwrap();
    let two = block.find("<p>Para two.</p>").unwrap();
    assert!(one < two);
}

#[test]
fn missing_cookies_is_skipped_with_single_warning() {
    let ws = workspace_with(Some("cookies.txt"));

    let output = ws.generate(&[]);
    assert!(
        output.status.success(),
        "missing source must not fail the run: {}",
        stderr(&output)
    );

    let err = stderr(&output);
    let warnings: Vec<&str> = err.lines().filter(|l| l.contains("cookies.txt")).collect();
    assert_eq!(warnings.len(), 1, "stderr: {err}");
    assert!(warnings[0].contains("WARNING"));

    assert!(ws.output().join("terms.tsx").exists());
    assert!(ws.output().join("privacy.tsx").exists());
    assert!(ws.output().join("parental-controls.tsx").exists());
    assert!(!ws.output().join("cookies.tsx").exists());

    let out = stdout(&output);
    assert_eq!(out.lines().filter(|l| l.starts_with("Generated ")).count(), 3);
}

#[test]
fn regeneration_is_byte_identical() {
    let ws = workspace_with(None);

    assert!(ws.generate(&[]).status.success());
    let first: Vec<String> = ["terms.tsx", "privacy.tsx", "cookies.tsx", "parental-controls.tsx"]
        .iter()
        .map(|name| ws.page(name))
        .collect();

    assert!(ws.generate(&[]).status.success());
    for (i, name) in ["terms.tsx", "privacy.tsx", "cookies.tsx", "parental-controls.tsx"]
        .iter()
        .enumerate()
    {
        assert_eq!(ws.page(name), first[i], "{name} changed between runs");
    }
}

#[test]
fn each_page_has_one_heading_and_export() {
    let ws = workspace_with(None);
    assert!(ws.generate(&[]).status.success());

    let expected = [
        ("terms.tsx", "TermsAndConditionsPage", "Terms and Conditions"),
        ("privacy.tsx", "PrivacyPolicyPage", "Privacy Policy"),
        ("cookies.tsx", "CookiePolicyPage", "Cookie Policy"),
        ("parental-controls.tsx", "ParentalControlsPage", "Parental Controls"),
    ];

    for (file, component, title) in expected {
        let page = ws.page(file);
        assert_eq!(page.matches("<h1 ").count(), 1, "{file}");
        assert_eq!(page.matches(&format!(">{title}</h1>")).count(), 1, "{file}");
        assert_eq!(
            page.matches(&format!("export default function {component}(")).count(),
            1,
            "{file}"
        );
        assert!(
            page.contains(&format!(r#"storage.setItem("{component}Agreed", "true");"#)),
            "{file} should key the agreement flag by component"
        );
    }
}

#[test]
fn markup_in_source_is_escaped() {
    let ws = Workspace::new();
    ws.source("terms.txt", "Use <script> & {braces} carefully\n");

    assert!(ws.generate(&[]).status.success());
    let page = ws.page("terms.tsx");
    assert!(page.contains("<p>Use &lt;script&gt; &amp; &#123;braces&#125; carefully</p>"));
    assert!(!page.contains("<script>"));
}

#[test]
fn invalid_utf8_source_fails_with_io_exit_code() {
    let ws = Workspace::new();
    ws.source("terms.txt", "Terms\n");
    std::fs::write(ws.input().join("privacy.txt"), [0xc3, 0x28]).unwrap();

    let output = ws.generate(&[]);
    assert_eq!(output.status.code(), Some(3), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("privacy.txt"));
    assert!(ws.output().join("terms.tsx").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let ws = workspace_with(None);

    let output = ws.generate(&["--dry-run"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Would generate"));
    assert!(!ws.output().exists());
}

#[test]
fn json_report() {
    let ws = workspace_with(Some("privacy.txt"));

    let output = ws.generate(&["--format", "json"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("report should be valid JSON");
    let outcomes = report["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 4);
    assert_eq!(outcomes[1]["status"], "skipped");
    assert_eq!(outcomes[1]["source"], "privacy.txt");
    assert_eq!(outcomes[0]["status"], "generated");
    assert_eq!(outcomes[0]["paragraphs"], 1);
}

#[test]
fn quiet_suppresses_status_lines() {
    let ws = workspace_with(Some("cookies.txt"));

    let output = ws.generate(&["--quiet"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).is_empty());
}

#[test]
fn log_level_env_overrides_verbose_flags() {
    let ws = workspace_with(None);

    let raised = ws.generate_with_env(&[], &[("LEGALPAGES_LOG_LEVEL", "info")]);
    assert!(raised.status.success());
    assert!(stderr(&raised).contains("generation finished"), "{}", stderr(&raised));

    let lowered = ws.generate_with_env(&["-vv"], &[("LEGALPAGES_LOG_LEVEL", "error")]);
    assert!(lowered.status.success());
    assert!(!stderr(&lowered).contains("generation finished"), "{}", stderr(&lowered));
}

#[test]
fn lone_carriage_returns_split_paragraphs() {
    let ws = Workspace::new();
    ws.source("terms.txt", "First paragraph.\rSecond paragraph.\r");

    let output = ws.generate(&[]);
    assert!(output.status.success(), "{}", stderr(&output));

    let page = ws.page("terms.tsx");
    assert!(page.contains("<p>First paragraph.</p>\n          <p>Second paragraph.</p>"));
    assert!(!page.contains('\r'));
}

// ============================================================================
// Configuration files
// ============================================================================

#[test]
fn config_file_drives_mapping_and_routes() {
    let ws = Workspace::new();
    ws.source("eula.txt", "License terms.\n");
    let config = ws.file(
        "legalpages.yaml",
        r"
input_dir: legal
output_dir: generated
routes:
  agree: /signup
pages:
  - source: eula.txt
    output: eula.tsx
    component: EulaPage
    title: End User License Agreement
",
    );

    let output = common::run_in(
        ws.root(),
        &["generate", "--config", config.to_str().unwrap()],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let page = std::fs::read_to_string(ws.root().join("generated/eula.tsx")).unwrap();
    assert!(page.contains("export default function EulaPage("));
    assert!(page.contains(r#"setLocation("/signup");"#));
    assert!(page.contains(">End User License Agreement</h1>"));
}

#[test]
fn cli_output_overrides_config_file() {
    let ws = Workspace::new();
    ws.source("terms.txt", "Terms\n");
    let config = ws.file("legalpages.yaml", "input_dir: legal\noutput_dir: from-config\n");
    let override_dir = ws.root().join("from-flag");

    let output = common::run_in(
        ws.root(),
        &[
            "generate",
            "--config",
            config.to_str().unwrap(),
            "--output",
            override_dir.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(override_dir.join("terms.tsx").exists());
    assert!(!ws.root().join("from-config").exists());
}

#[test]
fn invalid_config_exits_with_config_code() {
    let ws = Workspace::new();
    let config = ws.file(
        "legalpages.yaml",
        r"
pages:
  - source: a.txt
    output: a.tsx
    component: not-an-identifier
    title: A
",
    );

    let output = common::run_in(
        ws.root(),
        &["generate", "--config", config.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("pages[0].component"));
}

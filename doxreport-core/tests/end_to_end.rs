//! Drives the full log-to-report pipeline against files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use doxreport_core::{
    DoxReportError, ScoreDistribution, ScorePainter, SourceLineCounter, StdFileSystem,
    ZeroLinePolicy, analyze_log, read_log, render_average, render_csv_summary,
    render_text_summary,
};

const SAMPLE_LOG: &str = "\
<configuration warning>
a.c:12:warning: missing brief description
a.c:12:warning: missing brief description
a.c:40:warning: missing param doc
error: cannot open file
";

fn unique_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let root = std::env::temp_dir().join(format!("doxreport_e2e_{tag}_{nanos}"));
    fs::create_dir_all(&root).expect("create temp dir");
    root
}

fn write_source(root: &Path, name: &str, lines: usize) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create source dir");
    }
    fs::write(&path, "int x;\n".repeat(lines)).expect("write source");
}

fn plain_painter() -> ScorePainter {
    ScorePainter::new(ScoreDistribution::default(), false)
}

#[test]
fn sample_log_produces_expected_csv() {
    let root = unique_dir("csv");
    write_source(&root, "a.c", 100);
    let log_path = root.join("doxygen.log");
    fs::write(&log_path, SAMPLE_LOG).expect("write log");

    let text = read_log(&StdFileSystem::new(), &log_path).expect("read log");
    let counter = SourceLineCounter::new(StdFileSystem::new(), &root);
    let analysis = analyze_log(&text, &counter, ZeroLinePolicy::Skip).expect("analyze");

    assert_eq!(analysis.report.files.len(), 1);
    assert_eq!(analysis.report.files[0].bad_lines, 2);
    assert_eq!(
        render_csv_summary(&analysis.report, &plain_painter()).expect("csv"),
        "documentation,a.c,100,2,98.00%\n"
    );
    assert_eq!(render_average(&analysis.report, &plain_painter()), "98.00\n");
    assert_eq!(
        render_text_summary(&analysis.report, &plain_painter()),
        "a.c      100        2   98.00%\n"
    );

    fs::remove_dir_all(&root).expect("cleanup");
}

#[test]
fn multiple_files_average_unweighted() {
    let root = unique_dir("avg");
    write_source(&root, "src/big.c", 200);
    write_source(&root, "include/small.h", 10);
    let log = "\
src/big.c:1:warning: undocumented
src/big.c:2:warning: undocumented
include/small.h:3:warning: member f is not documented
include/small.h:3:warning: parameter 'x' of
   f is not documented
";
    let counter = SourceLineCounter::new(StdFileSystem::new(), &root);
    let analysis = analyze_log(log, &counter, ZeroLinePolicy::Skip).expect("analyze");

    let names: Vec<&str> = analysis
        .report
        .files
        .iter()
        .map(|file| file.file_name.as_str())
        .collect();
    assert_eq!(names, vec!["include/small.h", "src/big.c"]);
    assert_eq!(analysis.corpus["include/small.h"].entry_count(), 2);
    assert_eq!(analysis.report.files[0].score, 90.0);
    assert_eq!(analysis.report.files[1].score, 99.0);
    assert_eq!(analysis.report.average, 94.5);

    fs::remove_dir_all(&root).expect("cleanup");
}

#[test]
fn missing_source_file_is_fatal() {
    let root = unique_dir("missing");
    let counter = SourceLineCounter::new(StdFileSystem::new(), &root);

    let result = analyze_log(SAMPLE_LOG, &counter, ZeroLinePolicy::Skip);
    assert!(matches!(
        result,
        Err(DoxReportError::MissingSource { .. })
    ));

    fs::remove_dir_all(&root).expect("cleanup");
}

#[test]
fn empty_source_file_follows_policy() {
    let root = unique_dir("empty");
    write_source(&root, "a.c", 0);
    let counter = SourceLineCounter::new(StdFileSystem::new(), &root);

    let skipped = analyze_log(SAMPLE_LOG, &counter, ZeroLinePolicy::Skip).expect("skip");
    assert!(skipped.report.files.is_empty());
    assert_eq!(skipped.report.average, 100.0);

    let strict = analyze_log(SAMPLE_LOG, &counter, ZeroLinePolicy::Fail);
    assert!(matches!(
        strict,
        Err(DoxReportError::ZeroLineCount { .. })
    ));

    fs::remove_dir_all(&root).expect("cleanup");
}

#[test]
fn log_without_diagnostics_scores_perfect() {
    let root = unique_dir("clean");
    let counter = SourceLineCounter::new(StdFileSystem::new(), &root);

    let analysis = analyze_log("Searching for files...\n<tag>\n", &counter, ZeroLinePolicy::Fail)
        .expect("analyze");
    assert!(analysis.corpus.is_empty());
    assert_eq!(render_average(&analysis.report, &plain_painter()), "100.00\n");

    fs::remove_dir_all(&root).expect("cleanup");
}

#[test]
fn markdown_page_counts_fenced_code_lines() {
    let root = unique_dir("markdown");
    let page = "\
# Widgets

Usage:

```c
widget_t *w = widget_new();
widget_free(w);
```

See also the API page.
";
    fs::write(root.join("README.md"), page).expect("write page");
    let counter = SourceLineCounter::new(StdFileSystem::new(), &root);

    let analysis = analyze_log(
        "README.md:6:warning: unable to resolve reference to 'widget_new'\n",
        &counter,
        ZeroLinePolicy::Fail,
    )
    .expect("analyze");

    assert_eq!(analysis.report.files[0].total_lines, 10);
    assert_eq!(analysis.report.files[0].score, 90.0);

    fs::remove_dir_all(&root).expect("cleanup");
}

//! Integration tests for twig


use harness::{TestTree, entry_lines, run_twig, summary_line};

#[test]
fn test_basic_tree_output() {
    let tree = TestTree::new();
    tree.add_file("docs/readme.md", "# Readme");
    tree.add_file("photo.png", "png");

    let (stdout, _stderr, success) = run_twig(tree.path(), &[]);
    assert!(success, "twig should succeed");
    assert_eq!(
        entry_lines(&stdout),
        vec!["├── docs/", "│   └── readme.md", "└── photo.png"]
    );
    assert!(
        summary_line(&stdout).starts_with("1 directories, 2 files, "),
        "unexpected summary: {}",
        stdout
    );
}

#[test]
fn test_header_is_absolute_root() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &[]);
    assert!(success);
    let root = std::fs::canonicalize(tree.path()).unwrap();
    assert_eq!(stdout.lines().next().unwrap(), root.display().to_string());
}

#[test]
fn test_explicit_path_argument() {
    let tree = TestTree::new();
    tree.add_file("library/song.flac", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["library"]);
    assert!(success);
    assert_eq!(entry_lines(&stdout), vec!["└── song.flac"]);
}

#[test]
fn test_default_depth_is_three() {
    let tree = TestTree::new();
    tree.add_file("l1/l2/l3/l4/deep.txt", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &[]);
    assert!(success);
    let lines = entry_lines(&stdout);
    assert_eq!(lines.len(), 3, "{}", stdout);
    assert!(lines[2].ends_with("l3/"));
    assert!(!stdout.contains("deep.txt"));
}

#[test]
fn test_depth_flag() {
    let tree = TestTree::new();
    tree.add_file("top.txt", "");
    tree.add_file("level1/mid.txt", "");
    tree.add_file("level1/level2/deep.txt", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-d", "1"]);
    assert!(success);
    assert_eq!(entry_lines(&stdout), vec!["├── level1/", "└── top.txt"]);
    // Summary still covers the whole subtree
    assert!(summary_line(&stdout).starts_with("2 directories, 3 files, "));
}

#[test]
fn test_depth_zero_shows_only_root_and_summary() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "");
    tree.add_dir("sub");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["--depth", "0"]);
    assert!(success);
    assert!(entry_lines(&stdout).is_empty(), "{}", stdout);
    assert!(summary_line(&stdout).starts_with("1 directories, 1 files, "));
}

#[test]
fn test_depth_from_environment() {
    let tree = TestTree::new();
    tree.add_file("a/b/c.txt", "");

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_twig"))
        .current_dir(tree.path())
        .env("NO_COLOR", "1")
        .env("TWIG_DEPTH", "1")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(entry_lines(&stdout), vec!["└── a/"]);
}

#[test]
fn test_directories_sort_before_files() {
    let tree = TestTree::new();
    tree.add_file("aaa", "");
    tree.add_dir("zzz");

    let (stdout, _stderr, success) = run_twig(tree.path(), &[]);
    assert!(success);
    assert_eq!(entry_lines(&stdout), vec!["├── zzz/", "└── aaa"]);
}

#[test]
fn test_extension_allow_list() {
    let tree = TestTree::new();
    tree.add_file("movie.mp4", "");
    tree.add_file("show.mkv", "");
    tree.add_file("movie.avi", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["--ext", "mp4,mkv"]);
    assert!(success);
    assert!(stdout.contains("movie.mp4"));
    assert!(stdout.contains("show.mkv"));
    assert!(!stdout.contains("movie.avi"), "{}", stdout);
}

#[test]
fn test_exclude_regex() {
    let tree = TestTree::new();
    tree.add_file("movie.mkv", "");
    tree.add_file("movie.nfo", "");
    tree.add_file("@eaDir/thumb.jpg", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-x", r"^@eaDir$|\.nfo$"]);
    assert!(success);
    assert_eq!(entry_lines(&stdout), vec!["└── movie.mkv"]);
}

#[test]
fn test_hidden_entries_need_all_flag() {
    let tree = TestTree::new();
    tree.add_file(".env", "SECRET=1");
    tree.add_file("compose.yml", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &[]);
    assert!(success);
    assert!(!stdout.contains(".env"), "{}", stdout);

    let (stdout, _stderr, success) = run_twig(tree.path(), &["--all"]);
    assert!(success);
    assert!(stdout.contains(".env"));
}

#[test]
fn test_dirs_only() {
    let tree = TestTree::new();
    tree.add_file("file.txt", "");
    tree.add_file("subdir/nested.txt", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-D"]);
    assert!(success);
    assert_eq!(entry_lines(&stdout), vec!["└── subdir/"]);
}

#[test]
fn test_files_only() {
    let tree = TestTree::new();
    tree.add_file("file.txt", "");
    tree.add_file("subdir/nested.txt", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-F"]);
    assert!(success);
    assert_eq!(entry_lines(&stdout), vec!["└── file.txt"]);
}

#[test]
fn test_metadata_columns() {
    let tree = TestTree::new();
    tree.add_file("data.bin", &"x".repeat(1536));
    tree.add_dir("folder");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-s", "-p", "-t"]);
    assert!(success);
    let lines = entry_lines(&stdout);
    assert!(lines[0].starts_with("├── folder/  [<DIR> d"), "{}", lines[0]);
    assert!(lines[1].starts_with("└── data.bin  [1.5K -"), "{}", lines[1]);
    // size, permissions, then a YYYY-MM-DD HH:MM timestamp
    let suffix = lines[1].split("  [").nth(1).unwrap().trim_end_matches(']');
    let fields: Vec<&str> = suffix.split(' ').collect();
    assert_eq!(fields.len(), 4, "{}", suffix);
    assert_eq!(fields[2].len(), 10);
    assert_eq!(fields[3].len(), 5);
}

#[test]
fn test_count_mode() {
    let tree = TestTree::new();
    tree.add_file("a.txt", "");
    tree.add_file("b.txt", "");
    tree.add_file("c.jpg", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["--count"]);
    assert!(success);
    assert!(stdout.contains("txt: 2"), "{}", stdout);
    assert!(stdout.contains("jpg: 1"), "{}", stdout);
    assert!(summary_line(&stdout).starts_with("0 directories, 3 files, "));
}

#[test]
fn test_count_mode_ignores_depth_and_hides_dotfiles() {
    let tree = TestTree::new();
    tree.add_file("a/b/c/d/e/deep.txt", "");
    tree.add_file(".env", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-c", "-d", "1"]);
    assert!(success);
    assert!(stdout.contains("txt: 1"), "{}", stdout);
    assert!(!stdout.contains("env: "), "{}", stdout);

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-c", "-a"]);
    assert!(success);
    assert!(stdout.contains("env: 1"), "{}", stdout);
}

#[test]
fn test_count_json() {
    let tree = TestTree::new();
    tree.add_file("a.mkv", "");
    tree.add_file("b.MKV", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["--count", "--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["buckets"][0]["extension"], "mkv");
    assert_eq!(value["buckets"][0]["count"], 2);
    assert_eq!(value["totals"]["files"], 2);
}

#[test]
fn test_output_file_is_plain_text() {
    let tree = TestTree::new();
    tree.add_file("docs/readme.md", "");
    tree.add_file("archive.tar.gz", "");
    let out_dir = TestTree::new();
    let out_file = out_dir.path().join("tree.txt");

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_twig"))
        .args(["--color", "always", "-o", out_file.to_str().unwrap()])
        .current_dir(tree.path())
        .env_remove("NO_COLOR")
        .output()
        .unwrap();
    assert!(output.status.success());

    let terminal = String::from_utf8_lossy(&output.stdout).to_string();
    let saved = std::fs::read_to_string(&out_file).unwrap();

    assert!(terminal.contains('\x1b'), "terminal output should be styled");
    assert!(!saved.contains('\x1b'), "saved output must be unstyled");
    assert_eq!(twig::strip_styling(&terminal), saved);
    assert_eq!(
        entry_lines(&saved),
        vec!["├── docs/", "│   └── readme.md", "└── archive.tar.gz"]
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("tree.txt"));
}

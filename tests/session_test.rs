// End-to-end: raw text through parsing, search, display list and HTML.

use wordsearch_wasm::renderers::{build_display_list, render_results_html, RenderConfig};
use wordsearch_wasm::{solve_text, GridPos, InputError, SearchSession};

const PUZZLE: &str = "\
P, Y, T, H, O, N
R, U, S, T, X, J
X, A, V, A, X, A
C, X, X, Q, X, V
S, Q, L, X, X, A";

#[test]
fn test_solve_text_partitions_in_input_order() {
    let (grid, report) = solve_text(PUZZLE, "python\nrust\njava\ngo\nsql\ncobol").unwrap();

    assert_eq!(grid.rows(), 5);
    assert_eq!(grid.cols(), 6);
    assert_eq!(report.found, vec!["PYTHON", "RUST", "JAVA", "SQL"]);
    assert_eq!(report.not_found, vec!["GO", "COBOL"]);
    assert_eq!(report.results.len(), 6);
}

#[test]
fn test_vertical_word_cells() {
    let (_, report) = solve_text(PUZZLE, "java").unwrap();
    let java = report.results[0].placement.as_ref().unwrap();
    let cells: Vec<_> = java.cells.iter().map(|p| (p.row, p.col)).collect();
    assert_eq!(cells, vec![(1, 5), (2, 5), (3, 5), (4, 5)]);
}

#[test]
fn test_display_list_highlights_union() {
    let (grid, report) = solve_text(PUZZLE, "PYTHON\nRUST").unwrap();
    let list = build_display_list(&grid, &report, &RenderConfig::default());

    let highlighted = list.cells.iter().filter(|c| c.is_found()).count();
    // PYTHON (6) + RUST (4), no shared cells
    assert_eq!(highlighted, 10);
    assert_eq!(report.occupied.len(), 10);
    assert!(report.occupied.contains(GridPos::new(1, 3)));
}

#[test]
fn test_html_fragment_lists_words() {
    let (grid, report) = solve_text(PUZZLE, "PYTHON\nGO").unwrap();
    let list = build_display_list(&grid, &report, &RenderConfig::default());
    let html = render_results_html(&list).unwrap();

    assert!(html.contains("<span class=\"word-badge found\">PYTHON</span>"));
    assert!(html.contains("<span class=\"word-badge not-found\">GO</span>"));
    assert!(html.contains("repeat(6, 1.75rem)"));
}

#[test]
fn test_validation_errors_abort_the_batch() {
    assert_eq!(
        solve_text("", "CAT").unwrap_err(),
        InputError::EmptyInput { field: "grid" }
    );
    assert_eq!(
        solve_text("C,A,T", "   ").unwrap_err(),
        InputError::EmptyInput { field: "words" }
    );
    assert!(matches!(
        solve_text("C,A,T\nX,X", "CAT").unwrap_err(),
        InputError::MalformedGrid { row: 1, expected: 3, found: 2 }
    ));
}

#[test]
fn test_blank_words_reported_before_grid_shape() {
    assert_eq!(
        solve_text("C,A,T\nX,X", "").unwrap_err(),
        InputError::EmptyInput { field: "words" }
    );
}

#[test]
fn test_independent_sessions() {
    let mut first = SearchSession::new();
    let mut second = SearchSession::new();

    first.run(PUZZLE, "PYTHON").unwrap();
    second.run(PUZZLE, "SQL").unwrap();

    assert!(first.is_occupied(GridPos::new(0, 0)));
    assert!(!first.is_occupied(GridPos::new(4, 0)));
    assert!(second.is_occupied(GridPos::new(4, 0)));
    assert!(!second.is_occupied(GridPos::new(0, 0)));
}

#[test]
fn test_report_json_export() {
    let (_, report) = solve_text(PUZZLE, "RUST\nGO").unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["found"][0], "RUST");
    assert_eq!(json["notFound"][0], "GO");
    assert_eq!(json["results"][0]["match"]["start"]["row"], 1);
    assert_eq!(json["occupied"].as_array().map(Vec::len), Some(4));
}

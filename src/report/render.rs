use std::fmt::Write;

use crate::solver::SearchResult;

fn header(result: &SearchResult) -> String {
    format!("{} solution(s) found:", result.solution_count())
}

/// Solution count followed by one solution per line, or a single line
/// saying nothing was found
pub fn render_solutions(result: &SearchResult) -> String {
    if result.is_empty() {
        return "No solutions were found.\n".to_string();
    }

    render_file_contents(result)
}

/// `Execution time: 0.0012345 seconds`
pub fn render_elapsed(result: &SearchResult) -> String {
    format!(
        "Execution time: {:.7} seconds",
        result.elapsed().as_secs_f64()
    )
}

/// Header line with the count, then one solution per line. The header is
/// written even when there are no solutions.
pub fn render_file_contents(result: &SearchResult) -> String {
    let mut out = header(result);
    out.push('\n');
    for expression in result.expressions() {
        let _ = writeln!(out, "{}", expression);
    }
    out
}

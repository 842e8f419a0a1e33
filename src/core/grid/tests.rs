//! Tests for the grid table codec

use pretty_assertions::assert_eq;

use super::{from_grid, to_grid, to_grid_with_diagnostics};
use crate::core::cals::{table_helper, ColSpec, TGroup, Table};
use crate::core::options::ConvertOptions;

#[test]
fn test_single_cell() {
    let table = table_helper(&[2], vec![vec!["Yo"]], 0).unwrap();
    assert_eq!(to_grid(&table).unwrap(), "+----+\n| Yo |\n+----+");
}

#[test]
fn test_two_by_two() {
    let table = table_helper(&[2, 5], vec![vec!["Yo", "There"], vec!["Hi", "Matey"]], 0).unwrap();
    let expected = "\
+----+-------+
| Yo | There |
+----+-------+
| Hi | Matey |
+----+-------+";
    assert_eq!(to_grid(&table).unwrap(), expected);
}

#[test]
fn test_padding_to_column_width() {
    let table = table_helper(&[4, 6], vec![vec!["a", "bc"]], 0).unwrap();
    assert_eq!(
        to_grid(&table).unwrap(),
        "+------+--------+\n| a    | bc     |\n+------+--------+"
    );
}

#[test]
fn test_ragged_multiline_cells() {
    let table = table_helper(&[1, 1, 1], vec![vec!["0\n0\n1\n1", "0", "\nx"]], 0).unwrap();
    let expected = "\
+---+---+---+
| 0 | 0 |   |
| 0 |   | x |
| 1 |   |   |
| 1 |   |   |
+---+---+---+";
    let grid = to_grid(&table).unwrap();
    assert_eq!(grid, expected);

    // The leading blank line of the third cell is not trailing, so it survives
    let back = from_grid(&grid).unwrap();
    assert_eq!(back.tgroups[0].tbody.rows[0].entries[2].paracon, "\nx");
    assert_eq!(back, table);
}

#[test]
fn test_truth_table_round_trip() {
    let input = "\
+---+---+-----+
| A | B | Out |
+---+---+-----+
| 0 | 0 | 0   |
| 0 | 0 | 1   |
| 0 | 1 | 0   |
| 0 | 1 | 1   |
| 1 | 0 | 0   |
| 1 | 0 | 1   |
| 1 | 1 | 0   |
| 1 | 1 | 1   |
+---+---+-----+";

    let table = from_grid(input).unwrap();
    let tg = &table.tgroups[0];
    assert_eq!(tg.widths(), vec![1, 1, 3]);
    assert_eq!(tg.body_rows().len(), 2);
    assert_eq!(tg.body_rows()[1].entries[0].paracon, "0\n0\n0\n0\n1\n1\n1\n1");
    assert_eq!(tg.body_rows()[1].entries[2].paracon, "0\n1\n0\n1\n0\n1\n0\n1");

    assert_eq!(to_grid(&table).unwrap(), input);
}

#[test]
fn test_header_detection() {
    let input = "\
+------+-----+
| Name | Qty |
+------+-----+
| unit | pcs |
+======+=====+
| nut  | 4   |
+------+-----+
| bolt | 2   |
+------+-----+";

    let table = from_grid(input).unwrap();
    let tg = &table.tgroups[0];
    assert_eq!(tg.head_rows().len(), 2);
    assert_eq!(tg.head_rows()[1].entries[0].paracon, "unit");
    assert_eq!(tg.body_rows().len(), 2);
    assert_eq!(tg.body_rows()[0].entries[0].paracon, "nut");

    assert_eq!(to_grid(&table).unwrap(), input);
}

#[test]
fn test_no_header_border_means_no_head_block() {
    let table = from_grid("+---+\n| a |\n+---+\n| b |\n+---+").unwrap();
    assert!(table.tgroups[0].thead.is_none());
    assert_eq!(table.tgroups[0].body_rows().len(), 2);
}

#[test]
fn test_header_only_table() {
    let table = table_helper(&[1], vec![vec!["h"]], 1).unwrap();
    let grid = to_grid(&table).unwrap();
    assert_eq!(grid, "+---+\n| h |\n+===+");
    assert_eq!(from_grid(&grid).unwrap(), table);
}

#[test]
fn test_empty_body() {
    let table = table_helper(&[3], Vec::<Vec<&str>>::new(), 0).unwrap();
    let grid = to_grid(&table).unwrap();
    assert_eq!(grid, "+-----+");
    assert_eq!(from_grid(&grid).unwrap(), table);
}

#[test]
fn test_trailing_blank_lines_are_trimmed() {
    let input = "+-----+\n| a   |\n|     |\n|     |\n+-----+";
    let table = from_grid(input).unwrap();
    assert_eq!(table.tgroups[0].body_rows()[0].entries[0].paracon, "a");
}

#[test]
fn test_interior_blank_lines_are_kept() {
    let input = "+-----+\n| a   |\n|     |\n| b   |\n+-----+";
    let table = from_grid(input).unwrap();
    assert_eq!(table.tgroups[0].body_rows()[0].entries[0].paracon, "a\n\nb");
}

#[test]
fn test_trailing_newline_is_ignored() {
    let with_newline = from_grid("+---+\n| a |\n+---+\n").unwrap();
    let without = from_grid("+---+\n| a |\n+---+").unwrap();
    assert_eq!(with_newline, without);
}

#[test]
fn test_crlf_input() {
    let table = from_grid("+---+\r\n| a |\r\n+---+\r\n").unwrap();
    assert_eq!(table.tgroups[0].body_rows()[0].entries[0].paracon, "a");
}

#[test]
fn test_first_line_governs_widths() {
    // The closing border is wider than the top one; it is never consulted
    let table = from_grid("+---+\n| a |\n+-----+").unwrap();
    assert_eq!(table.tgroups[0].widths(), vec![1]);
}

#[test]
fn test_reencoding_is_idempotent() {
    let table = table_helper(
        &[3, 4],
        vec![vec!["x", "long\ntext"], vec!["", "y"], vec!["z\n\nw", ""]],
        1,
    )
    .unwrap();
    let once = to_grid(&table).unwrap();
    let twice = to_grid(&from_grid(&once).unwrap()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_invalid_table_is_rejected() {
    assert!(to_grid(&Table::new(vec![])).is_err());
}

#[test]
fn test_only_first_tgroup_is_rendered() {
    let first = TGroup::new(vec![ColSpec::new(1)], vec![vec!["a"].into_iter().collect()]).unwrap();
    let second = TGroup::new(vec![ColSpec::new(1)], vec![vec!["b"].into_iter().collect()]).unwrap();
    let table = Table::new(vec![first, second]);

    let out = to_grid_with_diagnostics(&table, &ConvertOptions::default()).unwrap();
    assert_eq!(out.content, "+---+\n| a |\n+---+");
    assert_eq!(out.warnings.len(), 1);
    assert!(out.warnings[0].message.contains("2 tgroups"));
}

#[test]
fn test_overflow_is_reported() {
    let table = table_helper(&[2], vec![vec!["toolong"]], 0).unwrap();
    let out = to_grid_with_diagnostics(&table, &ConvertOptions::default()).unwrap();
    assert!(out.has_warnings());
    assert!(out.warnings[0].message.contains("row 1, column 1"));
    assert_eq!(out.warnings[0].line, Some(2));
}

#[test]
fn test_overflow_points_at_output_line() {
    let table = table_helper(
        &[1, 1],
        vec![vec!["h", "i"], vec!["a\nb", "c"], vec!["d", "wide"]],
        1,
    )
    .unwrap();
    let out = to_grid_with_diagnostics(&table, &ConvertOptions::default()).unwrap();
    assert_eq!(out.warnings.len(), 1);
    assert!(out.warnings[0].message.contains("row 3, column 2"));
    // Plate, head row, separator, two lines of row 2, plate, then row 3
    assert_eq!(out.warnings[0].line, Some(7));
}

#[test]
fn test_fit_widths() {
    let table = table_helper(&[2, 1], vec![vec!["toolong", "x"]], 0).unwrap();
    let options = ConvertOptions::default().with_fit_widths(true);
    let out = to_grid_with_diagnostics(&table, &options).unwrap();
    assert!(!out.has_warnings());
    assert_eq!(out.content, "+---------+---+\n| toolong | x |\n+---------+---+");
}

//! Integration tests for restables table conversion

use pretty_assertions::assert_eq;
use restables::{
    convert_auto, convert_table, convert_table_at, decode_table, diagnostics::check_table,
    find_table_range, from_grid, from_list_table, grid_to_list_table, list_table_to_grid,
    table_helper, to_grid, to_list_table, ConversionError, ConvertOptions, Notation,
};

const PARTS_GRID: &str = "\
+--------+-----+----------------+
| Part   | Qty | Notes          |
+========+=====+================+
| nut    | 4   | M6             |
+--------+-----+----------------+
| washer | 8   | stainless,     |
|        |     | not zinc       |
+--------+-----+----------------+
| bolt   | 4   |                |
+--------+-----+----------------+";

const PARTS_LIST: &str = "\
.. list-table::
   :widths: 6 3 14
   :header-rows: 1

    * - Part
      - Qty
      - Notes
    * - nut
      - 4
      - M6
    * - washer
      - 8
      - stainless,
        not zinc
    * - bolt
      - 4
      - ";

// ============================================================================
// Grid ↔ list table
// ============================================================================

mod grid_list {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grid_to_list_table() {
        assert_eq!(grid_to_list_table(PARTS_GRID).unwrap(), PARTS_LIST);
    }

    #[test]
    fn test_list_table_to_grid() {
        assert_eq!(list_table_to_grid(PARTS_LIST).unwrap(), PARTS_GRID);
    }

    #[test]
    fn test_models_agree() {
        assert_eq!(from_grid(PARTS_GRID).unwrap(), from_list_table(PARTS_LIST).unwrap());
    }

    #[test]
    fn test_multiline_cell_lines_survive() {
        let table = from_grid(PARTS_GRID).unwrap();
        let tg = &table.tgroups[0];
        assert_eq!(tg.head_rows().len(), 1);
        assert_eq!(tg.body_rows().len(), 3);
        assert_eq!(tg.body_rows()[1].entries[2].paracon, "stainless,\nnot zinc");
        assert_eq!(tg.body_rows()[2].entries[2].paracon, "");
    }

    #[test]
    fn test_leading_blank_line_in_cell_round_trips() {
        let table = table_helper(&[1, 1, 1], vec![vec!["0\n0\n1\n1", "0", "\nx"]], 0).unwrap();

        let grid = to_grid(&table).unwrap();
        // Plate, four content lines, plate
        assert_eq!(grid.lines().count(), 6);
        assert_eq!(from_grid(&grid).unwrap(), table);

        let list = to_list_table(&table).unwrap();
        assert_eq!(from_list_table(&list).unwrap(), table);
    }

    #[test]
    fn test_two_header_rows_survive_both_notations() {
        let table = table_helper(
            &[3, 3],
            vec![vec!["a", "b"], vec!["c", "d"], vec!["e", "f"]],
            2,
        )
        .unwrap();
        let grid = to_grid(&table).unwrap();
        let list = grid_to_list_table(&grid).unwrap();
        assert!(list.contains(":header-rows: 2"));
        assert_eq!(list_table_to_grid(&list).unwrap(), grid);
    }

    #[test]
    fn test_ragged_grid_is_rejected() {
        let grid = "+---+---+\n| a | b |\n| c |\n+---+---+";
        let err = grid_to_list_table(grid).unwrap_err();
        assert!(matches!(err, ConversionError::ParseError { line: Some(3), .. }));
    }

    #[test]
    fn test_leading_whitespace_in_first_cell_does_not_read_back() {
        let grid = "+-----+---+\n|   1 | a |\n+-----+---+";
        let list = grid_to_list_table(grid).unwrap();
        assert!(list.contains("    * -   1\n      - a"));

        // The cell lead swallows the whitespace, so `- a` no longer matches it
        let err = list_table_to_grid(&list).unwrap_err();
        assert_eq!(err, ConversionError::shape_mismatch(0, 2, 1));

        let out = convert_table(grid, &ConvertOptions::default()).unwrap();
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.warnings[0].line, Some(5));
    }

    #[test]
    fn test_missing_cell_in_list_is_rejected() {
        let list = ".. list-table::\n   :widths: 1 1\n   :header-rows: 0\n\n    * - a";
        let err = list_table_to_grid(list).unwrap_err();
        assert!(matches!(err, ConversionError::ShapeMismatch { .. }));
    }
}

// ============================================================================
// Detection and options
// ============================================================================

mod auto {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_auto_both_ways() {
        let (list, notation) = convert_auto(PARTS_GRID).unwrap();
        assert_eq!(notation, Notation::ListTable);
        let (grid, notation) = convert_auto(&list).unwrap();
        assert_eq!(notation, Notation::Grid);
        assert_eq!(grid, PARTS_GRID);
    }

    #[test]
    fn test_convert_auto_blank_line_inside_cell() {
        let table = table_helper(&[1], vec![vec!["a\n\nb"], vec!["c"]], 0).unwrap();
        let list = to_list_table(&table).unwrap();

        let (grid, notation) = convert_auto(&list).unwrap();
        assert_eq!(notation, Notation::Grid);
        assert_eq!(grid, to_grid(&table).unwrap());

        let (decoded, _) = decode_table(&format!("\n{}\n", list)).unwrap();
        assert_eq!(decoded, table);
    }

    #[test]
    fn test_trailing_newline_accepted() {
        let input = format!("{}\n", PARTS_GRID);
        let (table, notation) = decode_table(&input).unwrap();
        assert_eq!(notation, Notation::Grid);
        assert_eq!(table, from_grid(PARTS_GRID).unwrap());
    }

    #[test]
    fn test_normalize_keeps_notation() {
        let out = convert_table(PARTS_GRID, &ConvertOptions::normalize()).unwrap();
        assert_eq!(out.content, PARTS_GRID);
        assert!(!out.has_warnings());
    }

    #[test]
    fn test_fit_widths_widens_narrow_columns() {
        let list = ".. list-table::\n   :widths: 1 1\n   :header-rows: 0\n\n    * - abc\n      - d";
        let out = convert_table(list, &ConvertOptions::default()).unwrap();
        assert_eq!(out.warnings.len(), 1);

        let out = convert_table(list, &ConvertOptions::to_grid().with_fit_widths(true)).unwrap();
        assert_eq!(out.content, "+-----+---+\n| abc | d |\n+-----+---+");
    }

    #[test]
    fn test_not_a_table() {
        let err = convert_table("Some prose.", &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput { .. }));
    }
}

// ============================================================================
// Tables inside documents
// ============================================================================

mod locate {
    use super::*;
    use pretty_assertions::assert_eq;
    use restables::locate::indent_lines;

    fn document(table: &str) -> String {
        format!(
            "Parts\n=====\n\n.. note:: see below\n\n{}\n\nEnd.\n",
            indent_lines(table, 3)
        )
    }

    #[test]
    fn test_range_of_indented_grid() {
        let doc = document(PARTS_GRID);
        let range = find_table_range(&doc, 8).unwrap();
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 5 + PARTS_GRID.lines().count() - 1);
        assert_eq!(range.indent, 3);
    }

    #[test]
    fn test_convert_in_place_and_back() {
        let doc = document(PARTS_GRID);
        let once = convert_table_at(&doc, 6, &ConvertOptions::default()).unwrap();

        assert_eq!(once.content, document(PARTS_LIST));
        assert!(!once.has_warnings());

        let back = convert_table_at(&once.content, 5, &ConvertOptions::default()).unwrap();
        assert_eq!(back.content, doc);
    }

    #[test]
    fn test_blank_cell_line_survives_in_place_round_trip() {
        let table = table_helper(
            &[4, 5],
            vec![vec!["Key", "Value"], vec!["one\n\ntwo", "x"], vec!["last", "y"]],
            1,
        )
        .unwrap();
        let doc = document(&to_list_table(&table).unwrap());

        let grid_doc = convert_table_at(&doc, 5, &ConvertOptions::default()).unwrap();
        assert_eq!(grid_doc.content, document(&to_grid(&table).unwrap()));

        let back = convert_table_at(&grid_doc.content, 5, &ConvertOptions::default()).unwrap();
        assert_eq!(back.content, doc);
    }

    #[test]
    fn test_no_table_at_line() {
        let doc = document(PARTS_GRID);
        assert!(convert_table_at(&doc, 0, &ConvertOptions::default()).is_err());
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

mod check {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_tables() {
        assert!(check_table(PARTS_GRID).is_empty());
        assert!(check_table(PARTS_LIST).is_empty());
    }

    #[test]
    fn test_list_with_blank_cell_line_is_clean() {
        let table = table_helper(&[1], vec![vec!["a\n\nb"], vec!["c"]], 0).unwrap();
        let list = to_list_table(&table).unwrap();
        assert!(check_table(&list).is_empty());
        assert!(check_table(&restables::locate::indent_lines(&list, 4)).is_empty());

        let (decoded, _) = decode_table(&list).unwrap();
        assert_eq!(decoded.tgroups[0].body_rows().len(), 2);
    }

    #[test]
    fn test_broken_grid() {
        let grid = "\
+-----+-----+
| a   | b   |
+-----+----+
| c  | d    |
| e |
";
        let result = check_table(grid);
        assert!(result.has_errors());
        // Mismatched border, misaligned separator, ragged line, no closing border
        assert_eq!(result.warnings, 2);
        assert_eq!(result.errors, 2);
    }
}

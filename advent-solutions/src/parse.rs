//! Parsing helpers for the recurring puzzle input shapes.
//!
//! Input text arrives already read from disk, so everything here works on
//! `&str`. Failures name the offending line, counted from 1.

use std::str::FromStr;

use advent_solver::ParseError;
use ndarray::Array2;

/// Whitespace-separated integers on a single line.
pub fn parse_digits(line: &str) -> Result<Vec<i64>, ParseError> {
    line.split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| {
                ParseError::InvalidFormat(format!("expected an integer, got {token:?}"))
            })
        })
        .collect()
}

/// Two whitespace-separated columns, one pair per line.
pub fn parse_pair_columns<A, B>(input: &str) -> Result<(Vec<A>, Vec<B>), ParseError>
where
    A: FromStr,
    B: FromStr,
{
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let mut parts = line.split_whitespace();
        let (Some(first), Some(second)) = (parts.next(), parts.next()) else {
            return Err(ParseError::AtLine {
                line: index + 1,
                message: "expected two columns".to_string(),
            });
        };
        left.push(first.parse().map_err(|_| ParseError::AtLine {
            line: index + 1,
            message: format!("bad value in first column: {first:?}"),
        })?);
        right.push(second.parse().map_err(|_| ParseError::AtLine {
            line: index + 1,
            message: format!("bad value in second column: {second:?}"),
        })?);
    }
    Ok((left, right))
}

/// Rectangular character grid, one row per line.
pub fn parse_char_grid(input: &str) -> Result<Array2<char>, ParseError> {
    let lines: Vec<&str> = input.lines().collect();
    if lines.is_empty() {
        return Err(ParseError::MissingData("the input is empty".to_string()));
    }
    let width = lines[0].chars().count();
    let mut cells = Vec::with_capacity(lines.len() * width);
    for (index, line) in lines.iter().enumerate() {
        let before = cells.len();
        cells.extend(line.chars());
        if cells.len() - before != width {
            return Err(ParseError::AtLine {
                line: index + 1,
                message: format!("row has {} cells, expected {width}", cells.len() - before),
            });
        }
    }
    Array2::from_shape_vec((lines.len(), width), cells)
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

/// Rectangular grid of whitespace-separated integers.
pub fn parse_int_grid(input: &str) -> Result<Array2<i64>, ParseError> {
    let mut rows = 0;
    let mut width = None;
    let mut cells = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let row = parse_digits(line).map_err(|e| ParseError::AtLine {
            line: index + 1,
            message: e.to_string(),
        })?;
        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(ParseError::AtLine {
                line: index + 1,
                message: format!("row has {} values, expected {expected}", row.len()),
            });
        }
        cells.extend(row);
        rows += 1;
    }
    let Some(width) = width else {
        return Err(ParseError::MissingData("the input is empty".to_string()));
    };
    Array2::from_shape_vec((rows, width), cells)
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

/// Blank-line-separated groups of lines. Consecutive separators collapse;
/// leading and trailing separators produce no empty groups.
pub fn parse_line_groups(input: &str) -> Vec<Vec<&str>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();
    for line in input.lines() {
        if line.is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_toolkit::grid;

    #[test]
    fn digits_split_on_any_whitespace() {
        assert_eq!(parse_digits("7 6  4\t2 1").unwrap(), vec![7, 6, 4, 2, 1]);
        assert_eq!(parse_digits("").unwrap(), Vec::<i64>::new());
        assert!(parse_digits("1 x 3").is_err());
    }

    #[test]
    fn pair_columns_split_and_report_bad_lines() {
        let (left, right) = parse_pair_columns::<i64, i64>("3   4\n4   3\n2   5").unwrap();
        assert_eq!(left, vec![3, 4, 2]);
        assert_eq!(right, vec![4, 3, 5]);

        let error = parse_pair_columns::<i64, i64>("1 2\nonly_one").unwrap_err();
        assert!(error.to_string().contains("line 2"));
    }

    #[test]
    fn char_grid_round_trips_through_render() {
        let grid = parse_char_grid("ab\ncd\n").unwrap();
        assert_eq!(grid.dim(), (2, 2));
        assert_eq!(grid::render(&grid), "ab\ncd\n");
    }

    #[test]
    fn char_grid_positions_feed_the_grid_search() {
        let grid = parse_char_grid("x..\n.x.\n").unwrap();
        let hits: Vec<grid::Coord> = grid::find_all(&grid, &'x').collect();
        assert_eq!(hits, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn ragged_rows_are_rejected_with_the_line_number() {
        let error = parse_char_grid("abc\nde\n").unwrap_err();
        assert!(error.to_string().contains("line 2"));
    }

    #[test]
    fn int_grid_reads_rectangles() {
        let grid = parse_int_grid("1 2 3\n4 5 6\n").unwrap();
        assert_eq!(grid.dim(), (2, 3));
        assert_eq!(grid[(1, 2)], 6);
        assert!(parse_int_grid("1 2\n3\n").is_err());
        assert!(parse_int_grid("").is_err());
    }

    #[test]
    fn line_groups_split_on_blank_lines() {
        let groups = parse_line_groups("a\nb\n\nc\n\n\nd\ne\n");
        assert_eq!(
            groups,
            vec![vec!["a", "b"], vec!["c"], vec!["d", "e"]]
        );
        assert!(parse_line_groups("").is_empty());
    }
}

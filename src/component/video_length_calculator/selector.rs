//! 影片選取解析
//!
//! 將 "1 2 3-5" 這類輸入轉換成候選清單中的檔名（1 起算）

use crate::error::InputError;
use regex::Regex;
use std::sync::LazyLock;

static REGEX_SELECTION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?([0-9]+)(?:-\+?([0-9]+))?$").expect("Invalid regex"));

/// 依輸入順序回傳選取的檔名，重複的編號不會去重
pub fn parse_selection(input: &str, candidates: &[String]) -> Result<Vec<String>, InputError> {
    let mut selected = Vec::new();

    for token in input.split_whitespace() {
        let (start, end) = parse_token(token)?;
        for index in start..=end {
            selected.push(candidate_at(candidates, index)?.clone());
        }
    }

    Ok(selected)
}

fn parse_token(token: &str) -> Result<(usize, usize), InputError> {
    let invalid = || InputError::InvalidToken(token.to_string());

    let captures = REGEX_SELECTION_TOKEN.captures(token).ok_or_else(invalid)?;
    let start: usize = captures[1].parse().map_err(|_| invalid())?;
    let end: usize = match captures.get(2) {
        Some(end) => end.as_str().parse().map_err(|_| invalid())?,
        None => start,
    };

    if start > end {
        return Err(InputError::DescendingRange { start, end });
    }

    Ok((start, end))
}

fn candidate_at(candidates: &[String], index: usize) -> Result<&String, InputError> {
    index
        .checked_sub(1)
        .and_then(|i| candidates.get(i))
        .ok_or(InputError::OutOfRange {
            index,
            len: candidates.len(),
        })
}

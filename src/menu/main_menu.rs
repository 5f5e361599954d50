use crate::error::InputError;
use anyhow::Result;
use console::style;
use dialoguer::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// 計算資料夾中所有影片
    AllVideos,
    /// 只計算使用者選取的影片
    SelectedVideos,
}

pub fn parse_menu_option(input: &str) -> Result<MenuOption, InputError> {
    match input.trim() {
        "1" => Ok(MenuOption::AllVideos),
        "2" => Ok(MenuOption::SelectedVideos),
        other => Err(InputError::InvalidMenuOption(other.to_string())),
    }
}

/// 顯示選項並重複提示直到輸入 1 或 2
pub fn show_main_menu() -> Result<MenuOption> {
    println!("{}", style("Select an option:").cyan());
    println!("1. Calculate total length of all videos in the folder");
    println!("2. Select specific videos to calculate their total length");

    let choice: String = Input::new()
        .with_prompt("Enter your choice (1/2)")
        .validate_with(|input: &String| -> Result<(), String> {
            parse_menu_option(input)
                .map(|_| ())
                .map_err(|_| "Invalid option. Please try again.".to_string())
        })
        .interact_text()?;

    Ok(parse_menu_option(&choice)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_options() {
        assert_eq!(parse_menu_option("1"), Ok(MenuOption::AllVideos));
        assert_eq!(parse_menu_option(" 2 "), Ok(MenuOption::SelectedVideos));
    }

    #[test]
    fn test_invalid_options() {
        for input in ["", "0", "3", "12", "one", "1 2"] {
            assert_eq!(
                parse_menu_option(input),
                Err(InputError::InvalidMenuOption(input.trim().to_string()))
            );
        }
    }
}

use crate::component::video_length_calculator::parse_selection;
use anyhow::Result;
use console::style;
use dialoguer::Input;

const SELECTION_PROMPT: &str = "Enter the numbers of the videos to include (separated by spaces), or a range (e.g., 1-5), or a combination of both (e.g., 1 2 3-5)";

/// 列出候選影片（1 起算）並重複提示直到輸入有效
pub fn pick_videos(candidates: &[String]) -> Result<Vec<String>> {
    println!("{}", style("Select videos to include in the calculation:").cyan());
    for line in numbered_list(candidates) {
        println!("{line}");
    }

    let input: String = Input::new()
        .with_prompt(SELECTION_PROMPT)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            parse_selection(input, candidates)
                .map(|_| ())
                .map_err(|e| format!("Invalid input. Please try again. ({e})"))
        })
        .interact_text()?;

    Ok(parse_selection(&input, candidates)?)
}

fn numbered_list(candidates: &[String]) -> Vec<String> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {name}", i + 1))
        .collect()
}

//! Integration tests for the interactive session: win path, quit path,
//! skill selection, hints, and fuzzy item search.

mod common;

use common::{full_room_config, run_scripted};
use escaperoom::game::SkillLevel;

#[test]
fn full_win_path_awards_points_and_escapes() {
    let script = [
        "Avery",
        "beginner",
        "Key under the doormat",
        "Locked safe",
        "solve",
        "n",
    ];
    let (summary, output) = run_scripted(full_room_config(), &script, 11);

    assert_eq!(summary.player, "Avery");
    assert_eq!(summary.skill, Some(SkillLevel::Beginner));
    assert_eq!(summary.points, 20);
    assert_eq!(summary.escapes, 1);
    assert_eq!(summary.plays, 1);
    assert!(output.contains("Hello, Avery! Let's begin."));
    assert!(output.contains("Items in the room:"));
    assert!(output.contains("You found: Key under the doormat"));
    assert!(output.contains("You found: Locked safe"));
    assert!(output.contains("You attempt to solve the puzzle..."));
    assert!(output.contains("Congratulations! You've escaped the room."));
}

#[test]
fn premature_solve_fizzles() {
    let script = ["Avery", "beginner", "solve", "quit"];
    let (summary, output) = run_scripted(full_room_config(), &script, 3);

    assert_eq!(summary.escapes, 0);
    assert!(output.contains("You attempt to solve the puzzle..."));
    assert!(!output.contains("escaped the room"));
    assert!(output.contains("Thanks for playing. Goodbye!"));
}

#[test]
fn quit_ends_without_escape() {
    let (summary, output) = run_scripted(full_room_config(), &["Avery", "expert", "quit"], 5);
    assert_eq!(summary.escapes, 0);
    assert_eq!(summary.points, 0);
    assert!(output.contains("Thanks for playing. Goodbye!"));
}

#[test]
fn invalid_skill_reprompts() {
    let script = ["Avery", "wizard", "expert", "quit"];
    let (summary, output) = run_scripted(full_room_config(), &script, 5);

    assert_eq!(summary.skill, Some(SkillLevel::Expert));
    assert!(output.contains(
        "Invalid skill level. Please choose from 'beginner', 'intermediate', or 'expert'."
    ));
}

#[test]
fn eof_before_name_ends_cleanly() {
    let (summary, output) = run_scripted(full_room_config(), &[], 1);
    assert_eq!(summary.player, "");
    assert_eq!(summary.plays, 0);
    assert!(output.contains("Goodbye!"));
}

#[test]
fn blank_and_overlong_names_reprompt() {
    let long_name = "x".repeat(64);
    let script = ["   ", long_name.as_str(), "Sam", "beginner", "quit"];
    let (summary, output) = run_scripted(full_room_config(), &script, 9);

    assert_eq!(summary.player, "Sam");
    assert!(output.contains("That name is a bit long"));
}

#[test]
fn typo_still_finds_the_item() {
    let script = ["Avery", "beginner", "locked saf", "quit"];
    let (summary, output) = run_scripted(full_room_config(), &script, 7);

    assert_eq!(summary.points, 10);
    assert!(output.contains("You found: Locked safe"));
}

#[test]
fn refinding_an_item_awards_nothing() {
    let script = ["Avery", "beginner", "Old map", "Old map", "quit"];
    let (summary, output) = run_scripted(full_room_config(), &script, 7);

    // The second "Old map" no longer matches anything findable.
    assert_eq!(summary.points, 10);
    assert!(output.contains("Sorry, I don't understand that command."));
}

#[test]
fn gibberish_is_not_understood() {
    let script = ["Avery", "beginner", "xyzzy plugh", "quit"];
    let (summary, output) = run_scripted(full_room_config(), &script, 2);

    assert_eq!(summary.points, 0);
    assert!(output.contains("Sorry, I don't understand that command."));
}

#[test]
fn hint_command_offers_a_hint() {
    let script = ["Avery", "beginner", "hint", "quit"];
    let (_, output) = run_scripted(full_room_config(), &script, 4);
    assert!(output.contains("Here's a hint for you - "));
}

#[test]
fn disabled_hints_say_so() {
    let mut config = full_room_config();
    config.hints.enabled = false;
    let script = ["Avery", "beginner", "hint", "quit"];
    let (_, output) = run_scripted(config, &script, 4);
    assert!(output.contains("Hints are disabled for this game."));
    assert!(!output.contains("Here's a hint for you"));
}

#[test]
fn default_skill_skips_the_prompt() {
    let mut config = full_room_config();
    config.game.default_skill = Some(SkillLevel::Expert);
    let script = ["Avery", "quit"];
    let (summary, output) = run_scripted(config, &script, 6);

    assert_eq!(summary.skill, Some(SkillLevel::Expert));
    assert!(!output.contains("Invalid skill level"));
}

#[test]
fn score_command_reports_points_and_badges() {
    let script = ["Avery", "beginner", "Old map", "score", "quit"];
    let (_, output) = run_scripted(full_room_config(), &script, 8);
    assert!(output.contains("Points: 10. No badges earned yet."));
}

#[test]
fn play_again_generates_a_fresh_room_and_keeps_score() {
    let script = [
        "Avery",
        "beginner",
        "Old map",
        "Broken clock",
        "solve",
        "y",
        "Old map",
        "Broken clock",
        "solve",
        "n",
    ];
    let (summary, output) = run_scripted(full_room_config(), &script, 13);

    assert_eq!(summary.plays, 2);
    assert_eq!(summary.escapes, 2);
    assert_eq!(summary.points, 40);
    assert_eq!(
        output.matches("Congratulations! You've escaped the room.").count(),
        2
    );
}

#[test]
fn difficulty_adapts_on_repeat_plays() {
    // First play: four finds (40 points), escape, play again. Second play:
    // the next find crosses 50 points, earning the Beginner badge and the
    // first difficulty escalation.
    let script = [
        "Avery",
        "beginner",
        "Old map",
        "Broken clock",
        "Strange potion",
        "Locked chest",
        "solve",
        "y",
        "Cryptic riddle",
        "quit",
    ];
    let (summary, output) = run_scripted(full_room_config(), &script, 17);

    assert_eq!(summary.points, 50);
    assert!(output.contains("Congratulations! You've earned the Beginner badge."));
    assert!(output.contains("You've become quite skilled at this!"));
    // Difficulty never adapts during the first play.
    let first_escape = output.find("escaped the room").unwrap();
    let adapt = output.find("quite skilled at this").unwrap();
    assert!(adapt > first_escape);
}
